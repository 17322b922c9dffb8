//! Terminal output helpers
//!
//! Uses `cliclack` log lines on interactive terminals and plain prefixed
//! lines when piped or running in CI.

mod context;
mod output;

pub use context::UiContext;
pub use output::{step_ok_detail, step_warn_hint};
