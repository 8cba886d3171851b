use std::fs;

use parserelease::{Error, OutputParams, load_params};

#[test]
fn load_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    fs::write(
        &path,
        r#"{"pretty": true, "omit_null": true, "announce_section": true}"#,
    )
    .unwrap();

    let params = load_params(&path).unwrap();
    assert_eq!(
        params,
        OutputParams {
            pretty: true,
            omit_null: true,
            announce_section: true,
        }
    );
}

#[test]
fn empty_object_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    fs::write(&path, "{}").unwrap();
    assert_eq!(load_params(&path).unwrap(), OutputParams::default());
}

#[test]
fn wrong_value_type_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    fs::write(&path, r#"{"pretty": "yes"}"#).unwrap();
    let err = load_params(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("params.json"));
}

#[test]
fn config_merges_with_flags() {
    let file = OutputParams {
        omit_null: true,
        ..OutputParams::default()
    };
    let flags = OutputParams {
        pretty: true,
        ..OutputParams::default()
    };
    let merged = file.merge(flags);
    assert!(merged.pretty && merged.omit_null && !merged.announce_section);
}
