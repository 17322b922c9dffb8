//! cacheopt - Build/launch cache option strings
//!
//! Parses `type=build;format=image;name=myorg/cache:build` style options
//! into a validated [`CacheSpec`] and renders them back in canonical form.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use cache::{CacheFormat, CacheSpec, CacheType};
pub use error::{CacheOptError, CacheOptResult};
