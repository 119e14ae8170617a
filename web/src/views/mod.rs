mod about;
mod admissions;
mod aksara_box;
mod contact;
mod events;
mod home;
mod not_found;

pub use about::AboutPage;
pub use admissions::AdmissionsPage;
pub use aksara_box::AksaraBoxPage;
pub use contact::ContactPage;
pub use events::EventsPage;
pub use home::HomePage;
pub use not_found::NotFound;
