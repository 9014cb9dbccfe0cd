pub mod adf;
pub mod alert;
pub mod config;
pub mod export;
pub mod hedge;
pub mod rolling;
pub mod snapshot;
pub mod spread;
pub mod zscore;
