use super::{Entry, EntryKind};
use crate::section::Section;
use rstest::rstest;

#[rstest]
#[case("", EntryKind::BlankLine, "")]
#[case("{caption text}", EntryKind::HekateCaption, "caption text")]
#[case("{}", EntryKind::HekateCaption, "")]
#[case("; hello", EntryKind::SemicolonComment, " hello")]
#[case(";", EntryKind::SemicolonComment, "")]
#[case("# world", EntryKind::HashtagComment, " world")]
#[case("#", EntryKind::HashtagComment, "")]
#[case("[General]", EntryKind::Section, "General")]
#[case("[]", EntryKind::Section, "")]
fn test_classify_structural_lines(
    #[case] line: &str,
    #[case] kind: EntryKind,
    #[case] text: &str,
) {
    let entry = Entry::classify(line).expect("line should be structural");
    assert_eq!(entry.kind(), kind);
    assert_eq!(entry.text(), text);
}

#[rstest]
#[case("key=value")]
#[case("{")]
#[case("}")]
#[case("[")]
#[case("]")]
#[case("[unterminated")]
#[case("{unterminated")]
#[case("plain text")]
fn test_classify_rejects(#[case] line: &str) {
    assert_eq!(Entry::classify(line), None);
}

#[test]
fn test_caption_takes_precedence_over_comment_rules() {
    // Braces are checked before the comment prefixes.
    let entry = Entry::classify("{;not a comment}").unwrap();
    assert_eq!(entry, Entry::Caption(";not a comment".to_string()));
}

#[test]
fn test_comment_takes_precedence_over_section() {
    let entry = Entry::classify(";[General]").unwrap();
    assert_eq!(entry.kind(), EntryKind::SemicolonComment);
    assert_eq!(entry.text(), "[General]");

    let entry = Entry::classify("#[General]").unwrap();
    assert_eq!(entry.kind(), EntryKind::HashtagComment);
}

#[test]
fn test_section_with_equals_is_still_a_section() {
    let entry = Entry::classify("[a=b]").unwrap();
    assert_eq!(entry.as_section().map(|s| s.name.as_str()), Some("a=b"));
}

#[test]
fn test_display_reproduces_line() {
    for line in ["{caption text}", "; hello", "# world", "[General]"] {
        let entry = Entry::classify(line).unwrap();
        assert_eq!(entry.to_string(), format!("{line}\n"));
    }
    assert_eq!(Entry::BlankLine.to_string(), "\n");
}

#[test]
fn test_section_entry_renders_options() {
    let mut section = Section::new("config");
    section.set_option("autoboot", "0");
    section.set_option("timeout", "3");
    let entry = Entry::from(section);

    assert_eq!(entry.to_string(), "[config]\nautoboot=0\ntimeout=3\n");
}

#[test]
fn test_pseudo_sections_have_no_section() {
    let mut entry = Entry::HashtagComment("x".to_string());
    assert!(entry.as_section().is_none());
    assert!(entry.as_section_mut().is_none());
}

#[test]
fn test_section_or_insert_keeps_existing_section() {
    let mut entry = Entry::from(Section::new("config"));
    entry.section_or_insert().set_option("autoboot", "0");
    assert_eq!(entry.to_string(), "[config]\nautoboot=0\n");
}

#[test]
fn test_section_or_insert_replaces_pseudo_section() {
    let mut entry = Entry::Caption("menu".to_string());
    let section = entry.section_or_insert();
    assert!(section.name.is_empty());
    assert_eq!(entry.kind(), EntryKind::Section);
}
