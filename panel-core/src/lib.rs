//! Core library for the `weatherpanel` terminal widget.
//!
//! This crate defines:
//! - The snapshot model and its display derivations
//! - The WeatherAPI.com client and fetch error taxonomy
//! - Theme classification and the simulated clock
//! - The `PanelView` trait and the controller driving it
//! - Configuration handling
//!
//! It is used by `panel-cli`, but can also be reused by other front-ends.

pub mod client;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod theme;
pub mod view;

pub use client::WeatherClient;
pub use config::Config;
pub use controller::{DEFAULT_LOCATION, PanelController};
pub use error::FetchError;
pub use model::Snapshot;
pub use theme::Theme;
pub use view::PanelView;
