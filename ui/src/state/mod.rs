//! Page-level capabilities
//!
//! Pages never touch browser globals for side effects. They receive:
//! - a [`Navigator`] for history replacement and full-page redirects
//! - a [`Notifier`] for global success/error notifications
//!
//! Browser implementations live here; tests supply recording ones.

mod navigation;
mod notifications;

pub use navigation::{BrowserNavigator, Navigator};
pub use notifications::{Notifier, Toast, ToastLevel, Toasts};
