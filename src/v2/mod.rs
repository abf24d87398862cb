pub mod conversions;
pub mod defaults;
pub mod managers;
pub mod models;
