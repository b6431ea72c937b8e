use super::{IniOption, Section};

#[test]
fn test_option_parse_trims_key_and_value() {
    let option = IniOption::parse("Name = Test").unwrap();
    assert_eq!(option.key, "Name");
    assert_eq!(option.value, "Test");
}

#[test]
fn test_option_parse_splits_at_first_equals() {
    let option = IniOption::parse("payload=bootloader/payloads/a=b.bin").unwrap();
    assert_eq!(option.key, "payload");
    assert_eq!(option.value, "bootloader/payloads/a=b.bin");
}

#[test]
fn test_option_parse_allows_empty_value() {
    let option = IniOption::parse("icon=").unwrap();
    assert_eq!(option, IniOption::new("icon", ""));
}

#[test]
fn test_option_parse_rejects_missing_key_or_separator() {
    assert_eq!(IniOption::parse("=value"), None);
    assert_eq!(IniOption::parse("  =value"), None);
    assert_eq!(IniOption::parse("no separator"), None);
    assert_eq!(IniOption::parse(""), None);
}

#[test]
fn test_option_display() {
    assert_eq!(IniOption::new("Name", "Test").to_string(), "Name=Test\n");
}

#[test]
fn test_find_first_option_is_case_sensitive() {
    let mut section = Section::new("General");
    section.push_option(IniOption::new("Name", "first"));
    section.push_option(IniOption::new("Name", "second"));

    assert_eq!(
        section.find_first_option("Name").map(|o| o.value.as_str()),
        Some("first")
    );
    assert_eq!(section.find_first_option("NAME"), None);
}

#[test]
fn test_set_option_updates_first_match_or_appends() {
    let mut section = Section::new("config");
    section.push_option(IniOption::new("autoboot", "1"));

    section.set_option("autoboot", "0");
    section.set_option("bootwait", "3");

    assert_eq!(
        section.options,
        vec![
            IniOption::new("autoboot", "0"),
            IniOption::new("bootwait", "3"),
        ]
    );
}

#[test]
fn test_find_first_option_mut_edits_in_place() {
    let mut section = Section::new("config");
    section.push_option(IniOption::new("timeout", "1"));

    if let Some(option) = section.find_first_option_mut("timeout") {
        option.value = "5".to_string();
    }

    assert_eq!(section.to_string(), "[config]\ntimeout=5\n");
}
