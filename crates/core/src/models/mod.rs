pub mod analytics;
pub mod chart;
pub mod point;
pub mod range;
pub mod series;
pub mod settings;
