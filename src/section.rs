//! Section and option representation for parsed INI documents.
//!
//! A section is a `[name]` header together with the `key=value` lines that
//! directly follow it. Each option is owned by exactly one container: either a
//! section or the leading option list of the document.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single `key=value` line.
pub struct IniOption {
    /// Text before the first `=`, trimmed.
    pub key: String,
    /// Text after the first `=`, trimmed. May be empty.
    pub value: String,
}

impl IniOption {
    #[must_use]
    /// Creates an option from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[must_use]
    /// Parses a trimmed line as a `key=value` pair.
    ///
    /// The line is split at the first `=`. Returns `None` when there is no
    /// `=` or the key is empty once trimmed.
    pub fn parse(line: &str) -> Option<Self> {
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key, value.trim()))
    }
}

impl fmt::Display for IniOption {
    /// Renders the option as `key=value` followed by a line terminator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}={}", self.key, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// A `[name]` header and the options it owns, in file order.
pub struct Section {
    /// Header text without the surrounding brackets.
    pub name: String,
    /// Options attached to this section.
    pub options: Vec<IniOption>,
}

impl Section {
    #[must_use]
    /// Creates an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    #[must_use]
    /// Returns the first option whose key matches exactly.
    pub fn find_first_option(&self, key: &str) -> Option<&IniOption> {
        self.options.iter().find(|option| option.key == key)
    }

    /// Mutable counterpart of [`Section::find_first_option`].
    pub fn find_first_option_mut(&mut self, key: &str) -> Option<&mut IniOption> {
        self.options.iter_mut().find(|option| option.key == key)
    }

    /// Appends an option at the end of the section.
    pub fn push_option(&mut self, option: IniOption) {
        self.options.push(option);
    }

    /// Returns the first option with `key`, appending an empty one if absent.
    pub fn find_or_create_option(&mut self, key: &str) -> &mut IniOption {
        let index = match self.options.iter().position(|option| option.key == key) {
            Some(index) => index,
            None => {
                self.options.push(IniOption::new(key, ""));
                self.options.len() - 1
            }
        };
        &mut self.options[index]
    }

    /// Sets the value of the first option with `key`, appending it if absent.
    pub fn set_option(&mut self, key: &str, value: impl Into<String>) {
        self.find_or_create_option(key).value = value.into();
    }
}

impl fmt::Display for Section {
    /// Renders the header line followed by every owned option.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        for option in &self.options {
            write!(f, "{option}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
