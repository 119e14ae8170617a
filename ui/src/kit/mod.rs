//! Rendering primitives shared by every page: header, text, banner and footer.

mod banner;
mod column;
mod footer;
mod header;
mod text;

pub use banner::{background_style, Banner};
pub use column::Column;
pub use footer::Footer;
pub use header::{Header, HeaderLink};
pub use text::Text;
