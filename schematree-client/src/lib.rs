//! Controller REST client for schematree.
//!
//! Logs in with a username and password, keeps the session cookie, and
//! fetches schema documents by normalized path:
//!
//! ```ignore
//! let config = ControllerConfig::new("ctrl.example.net", "admin", "secret");
//! let client = ControllerClient::connect(&config)?;
//! let fetched = client.schema(&SchemaPath::from_dotted("controller.core.switch"))?;
//! ```

mod client;
mod config;
mod error;

pub use client::{ControllerClient, FetchedSchema};
pub use config::{ControllerConfig, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use error::ClientError;
