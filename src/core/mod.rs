pub mod classifier;
pub mod converter;
pub mod engine;
pub mod query;
pub mod resolver;
pub mod scanner;

pub use crate::domain::model::{Classification, ConversionResult, MatchCase, QueryTokens};
pub use crate::domain::ports::{ConfigProvider, UnitCatalog};
pub use crate::utils::error::Result;
