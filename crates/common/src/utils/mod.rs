//! Common utility macros
//!
//! - **[`macros`]**: declarative macros for string-backed enums

#[macro_use]
pub mod macros;
