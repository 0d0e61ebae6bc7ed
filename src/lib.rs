//! Recipe browsing core for TheMealDB.
//!
//! Three layers, leaf-first: [`client`] is a typed async client over the
//! service's fixed JSON endpoints, [`browser`] aggregates several independent
//! queries into one deduplicated pool with degraded-mode fallbacks, and
//! [`filter`] turns that pool plus the user's search text and category
//! selection into the displayed set. The browser exposes immutable snapshots
//! for a presentation layer to poll; no layer holds ambient global state.

pub mod browser;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod guess;
pub mod model;
pub mod sample;

pub use browser::{BrowserSnapshot, MealBrowser};
pub use client::{MealDbClient, MealSource};
pub use config::ClientConfig;
pub use error::ApiError;
pub use filter::{apply_filters, infer_category, FilterState};
pub use guess::guess_category;
pub use model::{Category, Meal};

/// Build a browser over the live service, configured from `config.toml` and
/// `KUSINA__`-prefixed environment variables.
pub fn default_browser() -> Result<MealBrowser<MealDbClient>, ApiError> {
    let config = ClientConfig::load()?;
    let client = MealDbClient::new(&config)?;
    Ok(MealBrowser::new(client))
}
