//! Currency identity and metadata

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A single currency as loaded from the currency table.
///
/// Two values are the same currency when their alphabetic codes match; the
/// remaining fields are descriptive metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    #[serde(rename = "AlphabeticCode")]
    pub alphabetic_code: String,
    #[serde(rename = "NumericCode", default)]
    pub numeric_code: String,
    #[serde(rename = "Currency", default)]
    pub display_name: Option<String>,
    #[serde(rename = "MinorUnit", default)]
    pub minor_unit: Option<String>,
}

impl Currency {
    pub fn new(alphabetic_code: &str, numeric_code: &str) -> Self {
        Self {
            alphabetic_code: alphabetic_code.to_string(),
            numeric_code: numeric_code.to_string(),
            display_name: None,
            minor_unit: None,
        }
    }

    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    pub fn with_minor_unit(mut self, minor_unit: u32) -> Self {
        self.minor_unit = Some(minor_unit.to_string());
        self
    }

    pub fn code(&self) -> &str {
        &self.alphabetic_code
    }

    /// Number of decimal places, if the table gives a numeric minor unit.
    /// Entries such as "N.A." yield `None`.
    pub fn minor_unit_digits(&self) -> Option<u32> {
        self.minor_unit
            .as_deref()
            .and_then(|unit| unit.trim().parse().ok())
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.alphabetic_code == other.alphabetic_code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alphabetic_code.hash(state);
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => write!(f, "{}: {}", self.alphabetic_code, name),
            _ => write!(f, "{}", self.alphabetic_code),
        }
    }
}
