use super::{check_path_literal, is_remote_path, is_valid_flag_name, PathLiteralError};

#[test]
fn latch_and_local_paths_are_accepted() {
    assert_eq!(check_path_literal("latch:///your_log_dir"), Ok(()));
    assert_eq!(check_path_literal("s3://bucket/genomes"), Ok(()));
    assert_eq!(check_path_literal("/data/genomes"), Ok(()));
    assert_eq!(check_path_literal("relative/db"), Ok(()));
}

#[test]
fn malformed_paths_are_rejected() {
    assert_eq!(check_path_literal(""), Err(PathLiteralError::Empty));
    assert_eq!(
        check_path_literal("a\nb"),
        Err(PathLiteralError::ControlCharacter)
    );
    assert_eq!(
        check_path_literal("Latch Data://x"),
        Err(PathLiteralError::InvalidScheme("Latch Data".to_string()))
    );
    assert_eq!(check_path_literal("-profile"), Err(PathLiteralError::LeadingDash));
    assert_eq!(check_path_literal("--resume"), Err(PathLiteralError::LeadingDash));
    assert_eq!(
        check_path_literal("latch:///"),
        Err(PathLiteralError::MissingLocation("latch".to_string()))
    );
}

#[test]
fn remote_detection_requires_scheme() {
    assert!(is_remote_path("latch:///x"));
    assert!(!is_remote_path("/tmp/x"));
}

#[test]
fn flag_names_follow_identifier_rules() {
    assert!(is_valid_flag_name("input_genomes"));
    assert!(is_valid_flag_name("_private"));
    assert!(!is_valid_flag_name("9lives"));
    assert!(!is_valid_flag_name("pfam-db"));
    assert!(!is_valid_flag_name(""));
}
