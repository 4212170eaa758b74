//! Stratus Cloud SDK
//!
//! Client SDK for the Stratus Cloud REST APIs: compute instances, log
//! stores, and dedicated network connections. The heart of the crate is a
//! small request/response layer every wrapper funnels through - a fluent
//! builder that assembles, signs, and executes one HTTP call, and a
//! response wrapper that separates transport failures, service-reported
//! failures, and decode failures.
//!
//! # Module Structure
//!
//! - [`client`] - the entry-point [`Client`] and verb methods
//! - [`config`] - endpoint/region configuration
//! - [`auth`] - credentials and the request-signing seam
//! - [`http`] - request builder, response wrapper, query encoding
//! - [`services`] - typed per-resource wrappers
//! - [`error`] - the error taxonomy callers branch on
//!
//! # Example
//!
//! ```ignore
//! use stratus_sdk::{Client, Config, Credentials};
//! use stratus_sdk::services::instance;
//!
//! async fn example() -> stratus_sdk::Result<()> {
//!     let client = Client::new(
//!         Config::from_env(),
//!         Credentials::from_env().expect("credentials"),
//!     )?;
//!
//!     let args = instance::ListInstancesArgs::default();
//!     for vm in instance::list_all_instances(&client, &args).await? {
//!         println!("{} {:?}", vm.id, vm.status);
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod services;

pub use auth::Credentials;
pub use client::{new_client_token, Client};
pub use config::Config;
pub use error::{Error, Result, ServiceError};

/// Crate version, as baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
