//! Target Parsing Tests

use pda::store::{display_target, parse_db, parse_key, DEFAULT_DB};
use pda::PdaError;

// =============================================================================
// parse_key Tests
// =============================================================================

#[test]
fn test_parse_key_with_db() {
    let target = parse_key("Token@Work", true).unwrap();
    assert_eq!(target.key, b"token");
    assert_eq!(target.db, "work");
}

#[test]
fn test_parse_key_defaults() {
    assert_eq!(parse_key("token", true).unwrap().db, DEFAULT_DB);
    assert_eq!(parse_key("token", false).unwrap().db, "");
}

#[test]
fn test_parse_key_db_only() {
    let target = parse_key("@work", true).unwrap();
    assert!(target.key.is_empty());
    assert_eq!(target.db, "work");
}

#[test]
fn test_parse_key_too_many_ats() {
    assert!(matches!(parse_key("a@b@c", true), Err(PdaError::BadKeyFormat)));
}

// =============================================================================
// parse_db Tests
// =============================================================================

#[test]
fn test_parse_db_strips_prefix_and_whitespace() {
    assert_eq!(parse_db(" @Notes ", false).unwrap(), "notes");
    assert_eq!(parse_db("notes", false).unwrap(), "notes");
}

#[test]
fn test_parse_db_empty() {
    assert!(matches!(parse_db("@", false), Err(PdaError::BadDbFormat)));
    assert_eq!(parse_db("", true).unwrap(), DEFAULT_DB);
}

#[test]
fn test_db_names_cannot_leave_data_dir() {
    for raw in ["..", "@..", ".", "a/b", "@..\\up", "/etc"] {
        assert!(matches!(parse_db(raw, false), Err(PdaError::BadDbFormat)), "{:?}", raw);
    }
    assert!(matches!(parse_key("k@../x", true), Err(PdaError::BadDbFormat)));
    assert!(matches!(parse_key("k@..", true), Err(PdaError::BadDbFormat)));
    assert_eq!(parse_db("my.notes", false).unwrap(), "my.notes");
}

// =============================================================================
// display_target Tests
// =============================================================================

#[test]
fn test_display_target() {
    assert_eq!(display_target("key").unwrap(), "key@default");
    assert_eq!(display_target("key@work").unwrap(), "key@work");
}
