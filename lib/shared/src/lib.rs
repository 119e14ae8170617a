pub mod background;
pub mod content;
pub mod fetch;
pub mod head;
pub mod site;
