use codehop::settings::Settings;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("codehop.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.db_path.is_none());
    assert_eq!(settings.editor_command, "code");
    assert!(settings.enable_toasts);
}

#[test]
fn db_path_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("codehop.json");
    let mut settings = Settings::default();
    settings.db_path = Some("~/custom/state.vscdb".into());
    settings.save(path.to_str().unwrap()).unwrap();

    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.db_path.as_deref(), Some("~/custom/state.vscdb"));
}

#[test]
fn unknown_fields_are_tolerated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("codehop.json");
    std::fs::write(&path, r#"{"db_path":null,"some_future_knob":3}"#).unwrap();
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.db_path.is_none());
}
