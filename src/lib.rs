//! Downloads the crypto Fear & Greed index history and archives it as a JSON file.

pub mod app;
pub mod models;
pub mod services;
pub mod utils;

pub use app::runner::App;
pub use models::config::Config;
pub use models::fear_greed::IndexRecord;
pub use services::normalizer::NormalizeError;
