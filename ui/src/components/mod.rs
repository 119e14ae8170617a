mod contact;
mod footer;
pub mod page;

pub use contact::ContactBlock;
pub use footer::Footer;
pub use page::{Page, PageView};
