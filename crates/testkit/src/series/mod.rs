//! Synthetic time-series records for tests.

pub mod config;
pub mod generate;
pub mod models;

pub use config::{SeriesConfig, SeriesConfigBuilder};
pub use generate::{generate_series_points, generate_synthetic_series};
pub use models::{SeriesMetadata, SeriesPoint};
