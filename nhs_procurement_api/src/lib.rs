//! Client library for the NHS procurement search and export API.
//!
//! ```no_run
//! use nhs_procurement_api::{Client, ExportFormat, SearchFilter};
//!
//! # async fn run() -> Result<(), nhs_procurement_api::Error> {
//! let client = Client::new("http://localhost:3000", Some("your-api-key"))?;
//! let results = client
//!     .search(&SearchFilter::default().with_keyword("digital"))
//!     .await?;
//! client
//!     .save_export(&results.items, "nhs_procurements.xlsx", ExportFormat::Excel)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, API_KEY_HEADER, DEFAULT_RECENT_DAYS};
pub use self::config::{ClientConfig, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{ExportRequest, SearchFilter};
pub use self::types::{ExportFormat, ExportPayload, Notice, SearchResult};
