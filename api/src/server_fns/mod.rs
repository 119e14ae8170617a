use dioxus::prelude::*;

pub mod content;
pub mod system;

pub use content::*;
pub use system::*;

pub fn server_error<E: std::fmt::Display>(code: u16, e: E) -> ServerFnError {
    ServerFnError::ServerError {
        message: e.to_string(),
        code,
        details: None,
    }
}
