//! Core library for the Weather Wizard app.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The weather lookup client and upstream response classification
//! - The recent-searches store and the connectivity probe
//! - Shared unit-conversion and display-formatting helpers
//!
//! It is used by `wizard-cli`, but can also be reused by other frontends.

pub mod client;
pub mod conditions;
pub mod config;
pub mod error;
pub mod latest;
pub mod model;
pub mod probe;
pub mod recents;
pub mod units;

pub use client::WeatherClient;
pub use conditions::Condition;
pub use config::Config;
pub use error::FetchError;
pub use latest::LatestWins;
pub use model::{RecentEntry, WeatherReading};
pub use probe::{Connectivity, FixedConnectivity, NetworkStatusProbe};
pub use recents::RecentsStore;
pub use units::UnitSystem;
