//! Request documents from YAML/JSON.
//!
//! A request document bundles one shared context with the candidate
//! outfits to judge against it. This is the only part of the crate that
//! touches the filesystem; the rules never do.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::classify::temp_to_climate_zone;
use crate::types::{lenient_number, OutfitCandidate, ValidationContext};

/// Errors that can occur when loading a request document.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read request file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Request validation failed: {0}")]
    ValidationError(String),
}

/// Context as written in a request document.
///
/// Adds an optional Fahrenheit temperature on top of [`ValidationContext`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequestContext {
    #[serde(flatten)]
    pub context: ValidationContext,

    /// Used only when `climateZone` is not given explicitly
    #[serde(
        rename = "temperatureF",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature_f: Option<f64>,
}

impl RequestContext {
    /// The context the validator should see.
    ///
    /// An explicit climate zone wins; otherwise it is derived from the temperature.
    pub fn resolve(&self) -> ValidationContext {
        let mut context = self.context.clone();
        if context.climate_zone.is_none() {
            context.climate_zone = temp_to_climate_zone(self.temperature_f);
        }
        context
    }
}

/// A shared context plus the outfits to validate against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequestDocument {
    #[serde(default)]
    pub context: RequestContext,

    #[serde(default)]
    pub outfits: Vec<OutfitCandidate>,
}

impl RequestDocument {
    /// Parse a request from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, InputError> {
        let document: RequestDocument = serde_yaml::from_str(yaml)?;
        document.validate()?;
        Ok(document)
    }

    /// Parse a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let document: RequestDocument = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Parse a request from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a request from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a request file, picking the format by extension (`.json` or YAML).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Self::from_json_file(path)
        } else {
            Self::from_yaml_file(path)
        }
    }

    /// Outfit ids must be present and unique. Empty item lists are allowed.
    fn validate(&self) -> Result<(), InputError> {
        let mut seen = HashSet::new();

        for (index, outfit) in self.outfits.iter().enumerate() {
            if outfit.outfit_id.trim().is_empty() {
                return Err(InputError::ValidationError(format!(
                    "outfits[{}] has an empty outfitId",
                    index
                )));
            }
            if !seen.insert(outfit.outfit_id.as_str()) {
                return Err(InputError::ValidationError(format!(
                    "Duplicate outfitId: {}",
                    outfit.outfit_id
                )));
            }
        }

        Ok(())
    }
}
