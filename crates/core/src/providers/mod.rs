pub mod traits;

// Provider implementations
pub mod sample;
pub mod static_series;
