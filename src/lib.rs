pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::QueryInput, CliConfig};

pub use adapters::StaticCatalog;
pub use config::toml_config::{OutputFormat, TomlConfig};
pub use core::engine::QueryEngine;
pub use domain::model::{
    Classification, ConversionResult, MatchCase, NumberFormat, QuantityDomain, ResolutionMode,
};
pub use domain::ports::{ConfigProvider, UnitCatalog};
pub use utils::error::{Result, UnitQueryError};
