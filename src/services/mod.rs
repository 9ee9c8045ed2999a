pub mod api;
pub mod logger;
pub mod normalizer;
pub mod writer;
