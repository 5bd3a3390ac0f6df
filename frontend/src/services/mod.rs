//! Backend and browser services.
//!
//! # Services
//!
//! - [`publish`] - Dataset upload and shareable link requests
//! - [`clipboard`] - Clipboard write and user alerts

pub mod publish;
pub mod clipboard;

pub use publish::*;
pub use clipboard::*;
