//! Cache specification parsing and canonical serialization
//!
//! A cache spec selects which phase a cache applies to (`type`), how it is
//! stored (`format`) and what it is called (`name`):
//!
//! ```text
//! type=build;format=image;name=myorg/my-cache:build
//! ```
//!
//! Parsing runs in two passes: every field is tokenized first, so syntax
//! errors always win over semantic ones, then the collected fields are
//! resolved against the defaults and validated.

use crate::cache::fields::{self, Field, FIELD_SEPARATOR};
use crate::error::{CacheOptError, CacheOptResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field keys understood by the parser
pub mod keys {
    pub const TYPE: &str = "type";
    pub const FORMAT: &str = "format";
    pub const NAME: &str = "name";
}

/// Build phase a cache applies to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheType {
    /// Cache reused between builds
    #[default]
    Build,
    /// Cache of launch-time layers
    Launch,
}

impl CacheType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Launch => "launch",
        }
    }
}

impl FromStr for CacheType {
    type Err = CacheOptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "build" => Ok(Self::Build),
            "launch" => Ok(Self::Launch),
            _ => Err(CacheOptError::InvalidCacheType(s.to_string())),
        }
    }
}

impl fmt::Display for CacheType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backing a cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheFormat {
    /// Container image in a registry
    Image,
    /// Persistent volume on the container host
    Volume,
}

impl CacheFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Volume => "volume",
        }
    }

    /// Format used when none was given: a named cache defaults to a
    /// volume, an anonymous one to an image (which then needs a name).
    fn default_for(name: Option<&str>) -> Self {
        match name {
            Some(_) => Self::Volume,
            None => Self::Image,
        }
    }
}

impl FromStr for CacheFormat {
    type Err = CacheOptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "volume" => Ok(Self::Volume),
            _ => Err(CacheOptError::InvalidCacheFormat(s.to_string())),
        }
    }
}

impl fmt::Display for CacheFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, fully defaulted cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSpec {
    #[serde(rename = "type")]
    cache_type: CacheType,
    format: CacheFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl CacheSpec {
    /// Image-backed cache; the name is the image reference
    pub fn image(cache_type: CacheType, name: impl Into<String>) -> CacheOptResult<Self> {
        Draft {
            cache_type: Some(cache_type.as_str().to_string()),
            format: Some(CacheFormat::Image.as_str().to_string()),
            name: Some(name.into()),
        }
        .resolve()
    }

    /// Volume-backed cache; without a name the runtime picks one
    pub fn volume(cache_type: CacheType, name: Option<String>) -> Self {
        Self {
            cache_type,
            format: CacheFormat::Volume,
            name: name.filter(|n| !n.is_empty()),
        }
    }

    /// Parse a raw option string such as `type=launch;format=image;name=x`
    pub fn parse(raw: &str) -> CacheOptResult<Self> {
        let fields = fields::tokenize(raw)?;
        Draft::from_fields(fields).resolve()
    }

    pub fn cache_type(&self) -> CacheType {
        self.cache_type
    }

    pub fn format(&self) -> CacheFormat {
        self.format
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_image(&self) -> bool {
        self.format == CacheFormat::Image
    }
}

impl FromStr for CacheSpec {
    type Err = CacheOptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical form: `type=<type>;format=<format>[;name=<name>]`
impl fmt::Display for CacheSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}{sep}{}={}",
            keys::TYPE,
            self.cache_type,
            keys::FORMAT,
            self.format,
            sep = FIELD_SEPARATOR
        )?;
        if let Some(name) = &self.name {
            write!(f, "{}{}", FIELD_SEPARATOR, fields::render_field(keys::NAME, name))?;
        }
        Ok(())
    }
}

/// Raw field values collected before validation
#[derive(Debug, Default)]
struct Draft {
    cache_type: Option<String>,
    format: Option<String>,
    name: Option<String>,
}

impl Draft {
    /// Fold fields in order; repeated keys keep the last value and
    /// unrecognized keys are ignored.
    fn from_fields(fields: Vec<Field>) -> Self {
        let mut draft = Self::default();
        for Field { key, value } in fields {
            match key.to_ascii_lowercase().as_str() {
                keys::TYPE => draft.cache_type = Some(value),
                keys::FORMAT => draft.format = Some(value),
                keys::NAME => draft.name = Some(value),
                _ => {}
            }
        }
        draft
    }

    fn resolve(self) -> CacheOptResult<CacheSpec> {
        let cache_type = match self.cache_type {
            Some(raw) => raw.parse()?,
            None => CacheType::default(),
        };

        let name = self.name.filter(|n| !n.is_empty());
        let format = match self.format {
            Some(raw) => raw.parse()?,
            None => CacheFormat::default_for(name.as_deref()),
        };

        if format == CacheFormat::Image && name.is_none() {
            return Err(CacheOptError::MissingName);
        }

        Ok(CacheSpec {
            cache_type,
            format,
            name,
        })
    }
}
