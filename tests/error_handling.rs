// tests/error_handling.rs

use std::io::Write;
use tempfile::NamedTempFile;

use gridiron::config::load_and_validate;
use gridiron::errors::GridironError;

#[test]
fn unknown_agent_returns_structured_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[game]
home_team = "New York Jets"
away_team = "Jacksonville Jaguars"
date = "2024-12-15"

[analysis]
enabled = ["performance", "horoscope"]
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(GridironError::ConfigError(msg)) => {
            assert!(msg.contains("unknown agent"));
            assert!(msg.contains("horoscope"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn weights_must_sum_to_one() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[game]
home_team = "New York Jets"
away_team = "Jacksonville Jaguars"
date = "2024-12-15"

[weights]
yards = 0.5
scoring = 0.5
efficiency = 0.5
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(GridironError::ConfigError(msg)) => {
            assert!(msg.contains("sum to 1.0"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn negative_weight_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[game]
home_team = "New York Jets"
away_team = "Jacksonville Jaguars"
date = "2024-12-15"

[weights]
yards = -0.2
scoring = 0.9
efficiency = 0.3
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(GridironError::ConfigError(msg)) => {
            assert!(msg.contains("non-negative"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn identical_teams_are_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[game]
home_team = "New York Jets"
away_team = "new york jets"
date = "2024-12-15"
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(GridironError::ConfigError(msg)) => {
            assert!(msg.contains("must differ"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn malformed_date_is_a_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[game]
home_team = "New York Jets"
away_team = "Jacksonville Jaguars"
date = "12/15/2024"
"#
    )
    .unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(GridironError::TomlError(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_and_validate("no/such/Gridiron.toml"),
        Err(GridironError::IoError(_))
    ));
}

#[test]
fn empty_enabled_list_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[game]
home_team = "New York Jets"
away_team = "Jacksonville Jaguars"
date = "2024-12-15"

[analysis]
enabled = []
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(GridironError::ConfigError(msg)) => {
            assert!(msg.contains("at least one"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}
