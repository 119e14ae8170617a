//! This crate contains all shared UI for the workspace.

pub mod kit;

mod components;
pub use components::*;
