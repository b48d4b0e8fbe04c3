//! UI Components
//!
//! - `settings`: Organization settings pages
//! - `common`: Shared/reusable components

pub mod common;
pub mod settings;
