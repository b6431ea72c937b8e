//! The document model and the line-by-line parser that builds it.
//!
//! A document is an ordered list of leading options (those before any entry)
//! followed by an ordered list of entries. Writing a document back walks both
//! lists in order, so anything the parser kept is reproduced in place.
//!
//! Option lines only attach to a real section that is the most recent entry.
//! An option that follows a caption, comment or blank line has no owner and
//! is dropped:
//!
//! ```text
//! [A]
//! k=1        <- attached to A
//! ;comment
//! k2=2       <- dropped
//! ```

use crate::entry::{Entry, EntryKind};
use crate::section::{IniOption, Section};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Knobs for [`Document::parse_with`].
pub struct ParseOptions {
    /// Keep empty lines as [`Entry::BlankLine`] instead of skipping them.
    pub keep_blank_lines: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            keep_blank_lines: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// A parsed INI file.
pub struct Document {
    /// Options that appear before the first entry of any kind.
    pub leading_options: Vec<IniOption>,
    /// Sections and pseudo-sections in file order.
    pub entries: Vec<Entry>,
}

impl Document {
    #[must_use]
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Parses a full text body with the default [`ParseOptions`].
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, ParseOptions::default())
    }

    #[must_use]
    /// Parses a full text body, ignoring one leading byte-order mark.
    pub fn parse_with(text: &str, options: ParseOptions) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self::from_lines(text.lines(), options)
    }

    #[must_use]
    /// Builds a document from a sequence of raw lines.
    ///
    /// Each line is trimmed, then classified; lines that are neither
    /// structural nor valid options are dropped without error.
    pub fn from_lines<'a, I>(lines: I, options: ParseOptions) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut doc = Self::new();

        for (index, raw) in lines.into_iter().enumerate() {
            let line = raw.trim();
            let line_number = index + 1;

            if line.is_empty() && !options.keep_blank_lines {
                continue;
            }

            if let Some(entry) = Entry::classify(line) {
                trace!(line_number, kind = ?entry.kind(), "classified line");
                doc.entries.push(entry);
                continue;
            }

            let Some(option) = IniOption::parse(line) else {
                debug!(line_number, line, "dropping malformed line");
                continue;
            };

            match doc.entries.last_mut() {
                None => doc.leading_options.push(option),
                Some(Entry::Section(section)) => section.options.push(option),
                Some(entry) => {
                    debug!(
                        line_number,
                        key = %option.key,
                        after = ?entry.kind(),
                        "dropping option that does not follow a section"
                    );
                }
            }
        }

        doc
    }

    #[must_use]
    /// Renders the document back to text.
    pub fn build(&self) -> String {
        self.to_string()
    }

    /// Appends a leading option.
    ///
    /// Leading options must precede every entry, so the option is handed back
    /// as `Err` once any entry exists.
    ///
    /// # Errors
    ///
    /// Returns the option unchanged if the document already has entries.
    pub fn push_option(&mut self, option: IniOption) -> Result<(), IniOption> {
        if !self.entries.is_empty() {
            return Err(option);
        }
        self.leading_options.push(option);
        Ok(())
    }

    /// Appends an entry of any kind.
    pub fn push_entry(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into());
    }

    /// Appends a new empty section and returns it for filling in.
    pub fn push_section(&mut self, name: impl Into<String>) -> &mut Section {
        let slot = self.entries.len();
        self.entries.push(Entry::Section(Section::new(name)));
        self.entries[slot].section_or_insert()
    }

    /// Iterates over the real sections, skipping pseudo-sections.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter().filter_map(Entry::as_section)
    }

    #[must_use]
    /// Finds the first leading option with a matching key.
    ///
    /// Options nested in sections are not searched.
    pub fn find_first_option(&self, key: &str, case_sensitive: bool) -> Option<&IniOption> {
        self.leading_options
            .iter()
            .find(|option| text_matches(&option.key, key, case_sensitive))
    }

    /// Mutable counterpart of [`Document::find_first_option`].
    pub fn find_first_option_mut(
        &mut self,
        key: &str,
        case_sensitive: bool,
    ) -> Option<&mut IniOption> {
        self.leading_options
            .iter_mut()
            .find(|option| text_matches(&option.key, key, case_sensitive))
    }

    #[must_use]
    /// Finds the first entry whose text matches `name`.
    ///
    /// Every entry kind is compared, so a comment or caption whose text equals
    /// `name` matches if it comes before the section of that name. Use
    /// [`Document::find_section_of_kind`] to restrict the search.
    pub fn find_section(&self, name: &str, case_sensitive: bool) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| text_matches(entry.text(), name, case_sensitive))
    }

    /// Mutable counterpart of [`Document::find_section`].
    pub fn find_section_mut(&mut self, name: &str, case_sensitive: bool) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|entry| text_matches(entry.text(), name, case_sensitive))
    }

    #[must_use]
    /// Finds the first entry of `kind` whose text matches `name`.
    pub fn find_section_of_kind(
        &self,
        name: &str,
        case_sensitive: bool,
        kind: EntryKind,
    ) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.kind() == kind && text_matches(entry.text(), name, case_sensitive))
    }

    /// Returns the real section called `name`, appending one if absent.
    pub fn find_or_create_section(&mut self, name: &str, case_sensitive: bool) -> &mut Section {
        let found = self.entries.iter().position(|entry| {
            entry.kind() == EntryKind::Section && text_matches(entry.text(), name, case_sensitive)
        });
        match found {
            Some(index) => self.entries[index].section_or_insert(),
            None => self.push_section(name),
        }
    }
}

impl fmt::Display for Document {
    /// Writes leading options then every entry, each with its own newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for option in &self.leading_options {
            write!(f, "{option}")?;
        }
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Compares two strings, upper-casing both sides when not case sensitive.
fn text_matches(candidate: &str, wanted: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        candidate == wanted
    } else {
        fold_case(candidate) == fold_case(wanted)
    }
}

fn fold_case(text: &str) -> String {
    text.to_uppercase()
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
