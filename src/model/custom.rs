use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::flags::flag_order;

/// A project-wide, runtime-defined flag. Tracked per result independently of
/// the built-in catalogue; never consulted by the verdict rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFlag {
    pub key: String,
    pub label: String,
    pub shortcut: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Flag key must start with 'flag_' and be in lower 'snake_case' format: {0}")]
    InvalidKey(String),
    #[error("Flag key must be at most 25 characters: {0}")]
    KeyTooLong(String),
    #[error("Flag label must be non-empty and at most 50 characters: {0:?}")]
    InvalidLabel(String),
    #[error(
        "Flag shortcut must be 2 uppercase alphanumeric characters, \
         and not start with a number: {0}"
    )]
    InvalidShortcut(String),
    #[error("duplicate flag key: {0}")]
    DuplicateKey(String),
    #[error("flag shortcut already in use: {0}")]
    ShortcutInUse(String),
}

pub fn is_valid_flag_key(key: &str) -> bool {
    let Some(rest) = key.strip_prefix("flag_") else {
        return false;
    };
    !rest.is_empty()
        && rest.split('_').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

pub fn is_valid_shortcut(shortcut: &str) -> bool {
    let bytes = shortcut.as_bytes();
    bytes.len() == 2
        && bytes[0].is_ascii_uppercase()
        && (bytes[1].is_ascii_uppercase() || bytes[1].is_ascii_digit())
}

/// The set of custom flags defined for a project. Passed explicitly to the
/// save pipeline; there is no ambient global registry. Built through
/// `register`/`from_flags` so every entry has passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFlagRegistry {
    flags: Vec<CustomFlag>,
}

impl CustomFlagRegistry {
    pub fn new() -> Self {
        CustomFlagRegistry::default()
    }

    pub fn from_flags(flags: Vec<CustomFlag>) -> Result<Self, RegistryError> {
        let mut registry = CustomFlagRegistry::new();
        for flag in flags {
            registry.register(flag)?;
        }
        Ok(registry)
    }

    pub fn all(&self) -> &[CustomFlag] {
        &self.flags
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.flags.iter().any(|f| f.key == key)
    }

    pub fn register(&mut self, flag: CustomFlag) -> Result<(), RegistryError> {
        if !is_valid_flag_key(&flag.key) {
            return Err(RegistryError::InvalidKey(flag.key));
        }
        if flag.key.len() > 25 {
            return Err(RegistryError::KeyTooLong(flag.key));
        }
        if flag.label.is_empty() || flag.label.len() > 50 {
            return Err(RegistryError::InvalidLabel(flag.label));
        }
        if !is_valid_shortcut(&flag.shortcut) {
            return Err(RegistryError::InvalidShortcut(flag.shortcut));
        }
        if self.contains_key(&flag.key) || flag_order().iter().any(|f| f.name() == flag.key) {
            return Err(RegistryError::DuplicateKey(flag.key));
        }
        let shortcut_taken = self.flags.iter().any(|f| f.shortcut == flag.shortcut)
            || flag_order()
                .iter()
                .any(|f| f.shortcut() == Some(flag.shortcut.as_str()));
        if shortcut_taken {
            return Err(RegistryError::ShortcutInUse(flag.shortcut));
        }
        self.flags.push(flag);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/custom.rs"]
mod tests;
