#![cfg(feature = "serde")]

use black76_lib::{default_configs, Black76Pricer, PricingConfig};

const STRICT_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/strict_pricing.toml");

#[test]
fn test_load_config_file_matches_strict_preset() {
    let config = PricingConfig::from_file(STRICT_CONFIG).expect("Failed to load config file");
    let strict = default_configs::strict();

    assert_eq!(config.domain.min_volatility, strict.domain.min_volatility);
    assert!((config.domain.min_time_to_expiry - strict.domain.min_time_to_expiry).abs() < 1e-20);
}

#[test]
fn test_missing_config_file_reports_path() {
    let err = PricingConfig::from_file("tests/data/does_not_exist.toml").unwrap_err();
    assert!(format!("{:#}", err).contains("does_not_exist.toml"));
}

#[test]
fn test_loaded_config_drives_pricer() {
    let config = PricingConfig::from_toml_str("[domain]\nmin_volatility = 0.05\n").unwrap();
    let pricer = Black76Pricer::new(config);

    assert!(pricer.call(100.0, 100.0, 1.0, 0.05, 0.05).unwrap_err().is_domain());
    assert!(pricer.call(100.0, 100.0, 1.0, 0.05, 0.06).is_ok());
}

#[test]
fn test_config_serializes_back_to_toml() {
    let strict = default_configs::strict();
    let text = toml::to_string(&strict).unwrap();
    assert_eq!(PricingConfig::from_toml_str(&text).unwrap(), strict);
}
