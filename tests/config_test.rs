//! Configuration loading tests.

use std::io::Write;

use richsoup::{Error, HeadingThresholds, ProcessOptions};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
reading_order_y_tolerance = 8.0
small_text_threshold = 0.5
bold_threshold = 0.2
header_threshold = 0.05
footer_threshold = 0.1
min_text_width = 30
skip_patterns = ["advertisement"]

[heading_thresholds]
h1 = 2.0
h2 = 1.5
"#,
    );

    let options = ProcessOptions::load(file.path()).unwrap();
    assert_eq!(options.reading_order_y_tolerance, 8.0);
    assert_eq!(options.small_text_threshold, 0.5);
    assert_eq!(options.bold_threshold, 0.2);
    assert_eq!(options.header_threshold, 0.05);
    assert_eq!(options.footer_threshold, 0.1);
    assert_eq!(options.min_text_width, 30.0);
    assert_eq!(options.skip_patterns, vec!["advertisement".to_string()]);
    assert_eq!(
        options.heading_thresholds,
        HeadingThresholds::new([(1, 2.0), (2, 1.5)]).unwrap()
    );
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config("bold_threshold = 0.5\n");
    let options = ProcessOptions::load(file.path()).unwrap();

    let defaults = ProcessOptions::default();
    assert_eq!(options.bold_threshold, 0.5);
    assert_eq!(options.small_text_threshold, defaults.small_text_threshold);
    assert_eq!(options.heading_thresholds, defaults.heading_thresholds);
    assert_eq!(options.skip_patterns, defaults.skip_patterns);
}

#[test]
fn test_out_of_range_rejected() {
    let file = write_config("small_text_threshold = 1.2\n");
    assert!(matches!(
        ProcessOptions::load(file.path()),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_config("bold_treshold = 0.3\n");
    assert!(matches!(
        ProcessOptions::load(file.path()),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn test_bad_heading_level_rejected() {
    let file = write_config("[heading_thresholds]\nh7 = 1.1\n");
    assert!(ProcessOptions::load(file.path()).is_err());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ProcessOptions::load(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}
