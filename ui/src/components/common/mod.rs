//! Common/Shared UI Components
//!
//! Reusable components used throughout the application.

mod icons;
mod toasts;

pub use icons::*;
pub use toasts::ToastHost;
