//! CLI command implementations

pub mod config;
pub mod parse;

pub use config::execute as config;
pub use parse::execute as parse;
