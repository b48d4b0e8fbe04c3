//! Organization Auth Console
//!
//! Browser UI for an organization's single sign-on settings.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`client`]: Auth provider API client (`AuthProviderApi`, `HttpClient`)
//! - [`components`]: UI components (auth settings page, shared widgets)
//! - [`config`]: Console configuration
//! - [`state`]: Navigation and notification capabilities

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod state;

pub use app::App;
