use codehop::settings::Settings;
use codehop::storage::resolve_db_path;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
#[serial_test::serial]
fn override_wins_even_when_file_is_missing() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("codehop.json");
    let mut settings = Settings {
        db_path: Some("/no/such/state.vscdb".into()),
        ..Default::default()
    };
    let resolved = resolve_db_path(&mut settings, settings_path.to_str().unwrap()).unwrap();
    assert_eq!(resolved, Some(PathBuf::from("/no/such/state.vscdb")));
    // Nothing was auto-configured, so nothing was written.
    assert!(!settings_path.exists());
}

#[cfg(target_os = "linux")]
#[test]
#[serial_test::serial]
fn override_tilde_is_expanded() {
    let dir = tempdir().unwrap();
    std::env::set_var("HOME", dir.path());
    let settings_path = dir.path().join("codehop.json");
    let mut settings = Settings {
        db_path: Some("~/state.vscdb".into()),
        ..Default::default()
    };
    let resolved = resolve_db_path(&mut settings, settings_path.to_str().unwrap()).unwrap();
    assert_eq!(resolved, Some(dir.path().join("state.vscdb")));
}

#[cfg(target_os = "linux")]
#[test]
#[serial_test::serial]
fn no_override_and_no_default_is_not_configured() {
    let dir = tempdir().unwrap();
    std::env::set_var("HOME", dir.path());
    let settings_path = dir.path().join("codehop.json");
    let mut settings = Settings::default();
    let resolved = resolve_db_path(&mut settings, settings_path.to_str().unwrap()).unwrap();
    assert_eq!(resolved, None);
    assert!(settings.db_path.is_none());
}

#[cfg(target_os = "linux")]
#[test]
#[serial_test::serial]
fn existing_default_is_auto_configured_and_persisted() {
    let dir = tempdir().unwrap();
    std::env::set_var("HOME", dir.path());
    let default = dir.path().join(".config/Code/User/globalStorage/state.vscdb");
    std::fs::create_dir_all(default.parent().unwrap()).unwrap();
    std::fs::write(&default, []).unwrap();

    let settings_path = dir.path().join("codehop.json");
    let mut settings = Settings::default();
    let resolved = resolve_db_path(&mut settings, settings_path.to_str().unwrap()).unwrap();
    assert_eq!(resolved, Some(default.clone()));
    assert_eq!(settings.db_path.as_deref(), default.to_str());

    // The override is on disk now and a second resolve just re-reads it.
    let mut reloaded = Settings::load(settings_path.to_str().unwrap()).unwrap();
    assert_eq!(reloaded.db_path.as_deref(), default.to_str());
    let resolved_again =
        resolve_db_path(&mut reloaded, settings_path.to_str().unwrap()).unwrap();
    assert_eq!(resolved_again, Some(default));
}
