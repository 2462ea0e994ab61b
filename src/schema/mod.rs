//! Schema module - Data model, configuration and result types.

mod config;
mod partition;
mod result;

pub use config::*;
pub use partition::*;
pub use result::*;
