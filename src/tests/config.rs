use super::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("hekate-ini.toml"));

    assert_eq!(cfg, Config::default());
    assert!(cfg.case_sensitive);
    assert!(cfg.parse_options().keep_blank_lines);
    assert_eq!(cfg.file_extensions, vec!["ini".to_string()]);
}

#[test]
fn test_file_overrides_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hekate-ini.toml");
    fs::write(
        &path,
        "case_sensitive = false\nkeep_blank_lines = false\nfile_extensions = [\"ini\", \"cfg\"]\ncommit = false\n",
    )
    .unwrap();

    let cfg = Config::load_from(&path);

    assert!(!cfg.case_sensitive);
    assert!(!cfg.parse_options().keep_blank_lines);
    assert_eq!(cfg.file_extensions, vec!["ini".to_string(), "cfg".to_string()]);
    assert!(!cfg.commit);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hekate-ini.toml");
    fs::write(&path, "case_sensitive = \"maybe\"\n").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}
