//! Print pricing and report export for an analysed model.

pub mod config;
pub mod error;
pub mod estimate;
pub mod material;
pub mod report;

pub use config::QuoteConfig;
pub use error::QuoteError;
pub use estimate::{estimate, quick_quote, round_money, LayerHeight, Quote, QuoteRequest};
pub use material::{Material, RateTable};
pub use report::{report_file_name, ModelReport};
