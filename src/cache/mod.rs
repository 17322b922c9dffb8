//! Cache option strings
//!
//! Parses the `--cache` option syntax into a typed [`CacheSpec`] and renders
//! it back in canonical form.
//!
//! # Fields
//!
//! | Key | Values | Default |
//! |-----|--------|---------|
//! | `type` | `build`, `launch` | `build` |
//! | `format` | `image`, `volume` | `volume` when named, else `image` |
//! | `name` | image reference or volume name | required for `image` |

pub mod fields;
pub mod spec;


pub use fields::{tokenize, Field};
pub use spec::{keys, CacheFormat, CacheSpec, CacheType};
