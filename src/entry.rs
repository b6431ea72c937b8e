//! Line classification and the entries that keep document order.
//!
//! Every line that is not a `key=value` option becomes an [`Entry`]. Only
//! [`Entry::Section`] may own options; captions, comments and blank lines are
//! pseudo-sections that exist so the document can be written back in order.

use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// The structural kind of a non-option line.
pub enum EntryKind {
    /// `[name]` header.
    Section,
    /// `{text}` caption line used by hekate menus.
    HekateCaption,
    /// Line starting with `;`.
    SemicolonComment,
    /// Line starting with `#`.
    HashtagComment,
    /// Empty line.
    BlankLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A section or pseudo-section, stored in file order.
pub enum Entry {
    /// A real section owning its options.
    Section(Section),
    /// Caption text without the braces.
    Caption(String),
    /// Comment body after the `;`.
    SemicolonComment(String),
    /// Comment body after the `#`.
    HashtagComment(String),
    /// An empty line.
    BlankLine,
}

impl Entry {
    #[must_use]
    /// Returns the kind tag of this entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Section(_) => EntryKind::Section,
            Self::Caption(_) => EntryKind::HekateCaption,
            Self::SemicolonComment(_) => EntryKind::SemicolonComment,
            Self::HashtagComment(_) => EntryKind::HashtagComment,
            Self::BlankLine => EntryKind::BlankLine,
        }
    }

    #[must_use]
    /// Section name, caption or comment body; empty for a blank line.
    pub fn text(&self) -> &str {
        match self {
            Self::Section(section) => &section.name,
            Self::Caption(text) | Self::SemicolonComment(text) | Self::HashtagComment(text) => {
                text
            }
            Self::BlankLine => "",
        }
    }

    #[must_use]
    /// Returns the section if this entry is a real one.
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Entry::as_section`].
    pub fn as_section_mut(&mut self) -> Option<&mut Section> {
        match self {
            Self::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Returns the section, first replacing a pseudo-section with an empty one.
    pub(crate) fn section_or_insert(&mut self) -> &mut Section {
        match self {
            Self::Section(section) => section,
            other => {
                *other = Self::Section(Section::default());
                other.section_or_insert()
            }
        }
    }

    #[must_use]
    /// Classifies a trimmed line, returning `None` for option candidates.
    ///
    /// Rules are checked in order: empty line, `{caption}`, `;comment`,
    /// `#comment`, `[section]`. A lone `{`, `}`, `[` or `]` has no content
    /// between its delimiters and is rejected rather than read as an empty
    /// caption or section.
    pub fn classify(line: &str) -> Option<Self> {
        if line.is_empty() {
            return Some(Self::BlankLine);
        }
        if let Some(text) = delimited(line, '{', '}') {
            return Some(Self::Caption(text.to_string()));
        }
        if let Some(text) = line.strip_prefix(';') {
            return Some(Self::SemicolonComment(text.to_string()));
        }
        if let Some(text) = line.strip_prefix('#') {
            return Some(Self::HashtagComment(text.to_string()));
        }
        if let Some(name) = delimited(line, '[', ']') {
            return Some(Self::Section(Section::new(name)));
        }
        None
    }
}

/// Strips `open` and `close` from both ends; both must be present as distinct characters.
fn delimited(line: &str, open: char, close: char) -> Option<&str> {
    line.strip_prefix(open)?.strip_suffix(close)
}

impl From<Section> for Entry {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

impl fmt::Display for Entry {
    /// Renders the entry back to its line form, with a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section(section) => write!(f, "{section}"),
            Self::Caption(text) => writeln!(f, "{{{text}}}"),
            Self::SemicolonComment(text) => writeln!(f, ";{text}"),
            Self::HashtagComment(text) => writeln!(f, "#{text}"),
            Self::BlankLine => writeln!(f),
        }
    }
}

#[cfg(test)]
#[path = "tests/entry.rs"]
mod tests;
