//! saleor catalog loader
//!
//! this crate populates a saleor shop (settings, warehouses, shipping zones,
//! attributes, product types, categories, products, variants, images) through
//! the graphql api. start with [`CatalogLoader`] and [`ClientConfig`]; use
//! [`Client`] directly for ad-hoc queries.
//!
//! ## quick start
//!
//! ```no_run
//! use saleor_loader::{CatalogLoader, ClientConfig};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = CatalogLoader::new(ClientConfig::new("token"))?;
//! let warehouse = loader.create_warehouse(json!({"name": "main"}))?;
//! let zone = loader.create_shipping_zone(json!({"name": "Europe", "countries": ["CH", "FR"]}))?;
//! println!("{warehouse} {zone}");
//! # Ok(())
//! # }
//! ```
//!
//! ## overrides
//!
//! create methods merge caller values onto a fixed default input one level
//! deep. a nested default such as a warehouse `address` is replaced as a whole.

mod client;
mod config;
mod error;
mod graphql;
mod loader;
mod merge;
pub mod mutations;
mod operation;
mod shop;
mod upload;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_UPLOAD_TIMEOUT, ENDPOINT_ENV, TOKEN_ENV};
pub use error::{check_errors, Error, Result};
pub use graphql::{GraphQlError, GraphQlLocation, GraphQlResponse, MutationErrorEntry};
pub use loader::CatalogLoader;
pub use merge::{override_defaults, Variables};
pub use operation::Mutation;
pub use shop::{Address, Country, ShopDomain, ShopSettings};
pub use upload::UploadPayload;
