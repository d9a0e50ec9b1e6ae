//! Environment parsing tests.
//!
//! Env vars are process-global, so every test here runs under
//! `#[serial]` and starts from a clean slate.

use routescope::config::{AppConfig, InspectorConfig};
use serial_test::serial;

const KEYS: &[&str] = &[
    "ROUTESCOPE_ENABLED",
    "ROUTESCOPE_PREFIX",
    "APP_ENV",
    "HOST",
    "PORT",
];

fn clear_env() {
    for key in KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

fn set(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

#[test]
#[serial]
fn test_inspector_disabled_outside_dev_by_default() {
    clear_env();
    let config = InspectorConfig::from_env();
    assert!(!config.enabled);
    assert_eq!(config.prefix, "routescope");
}

#[test]
#[serial]
fn test_inspector_enabled_in_local_env() {
    clear_env();
    set("APP_ENV", "local");
    assert!(InspectorConfig::from_env().enabled);
}

#[test]
#[serial]
fn test_inspector_enabled_in_development_env() {
    clear_env();
    set("APP_ENV", "development");
    assert!(InspectorConfig::from_env().enabled);
}

#[test]
#[serial]
fn test_inspector_stays_off_in_production_env() {
    clear_env();
    set("APP_ENV", "production");
    assert!(!InspectorConfig::from_env().enabled);
}

#[test]
#[serial]
fn test_explicit_flag_overrides_environment() {
    clear_env();
    set("APP_ENV", "local");
    set("ROUTESCOPE_ENABLED", "0");
    assert!(!InspectorConfig::from_env().enabled);

    clear_env();
    set("ROUTESCOPE_ENABLED", "true");
    assert!(InspectorConfig::from_env().enabled);
}

#[test]
#[serial]
fn test_unparsable_flag_falls_back_to_environment_default() {
    clear_env();
    set("ROUTESCOPE_ENABLED", "maybe");
    assert!(!InspectorConfig::from_env().enabled);

    set("APP_ENV", "local");
    assert!(InspectorConfig::from_env().enabled);
}

#[test]
#[serial]
fn test_prefix_override_is_normalized() {
    clear_env();
    set("ROUTESCOPE_PREFIX", "/__routes/");
    assert_eq!(InspectorConfig::from_env().prefix, "__routes");
}

#[test]
#[serial]
fn test_blank_prefix_falls_back_to_default() {
    clear_env();
    set("ROUTESCOPE_PREFIX", "//");
    assert_eq!(InspectorConfig::from_env().prefix, "routescope");
}

#[test]
#[serial]
fn test_default_exclusions_cover_the_inspector() {
    clear_env();
    let config = InspectorConfig::from_env();
    assert!(config.excluded_patterns.contains(&"routescope".to_string()));
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 3000);
    assert_eq!(config.addr(), "127.0.0.1:3000");
}

#[test]
#[serial]
fn test_app_config_reads_host_and_port() {
    clear_env();
    set("HOST", "0.0.0.0");
    set("PORT", "8080");
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.addr(), "0.0.0.0:8080");
}

#[test]
#[serial]
fn test_app_config_rejects_unparsable_port() {
    clear_env();
    set("PORT", "not-a-port");
    assert!(AppConfig::from_env().is_err());
}
