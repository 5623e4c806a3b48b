//! Types and pure logic shared by the integrations UI.
//!
//! Everything here compiles for the host as well as for wasm, so the
//! behavior of the loader widget can be tested without a browser.

pub mod api;
pub mod display;
pub mod models;
pub mod state;

pub use api::{ErrorResponse, LoadError};
pub use display::{format_date, ItemEntry};
pub use models::{Credentials, IntegrationItem, IntegrationType, UnknownIntegration};
pub use state::{load_outcome, ResultAction, ResultSet};
