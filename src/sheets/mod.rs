//! Google Sheets integration
//!
//! Service-account authorization and a thin client over the Sheets v4
//! values API.

mod auth;
mod client;

pub use auth::ServiceAccountKey;
pub use client::{SheetsClient, data_range};
