//! Tests for layered store configuration.

use figment::providers::{Format, Toml};
use figment::{Figment, Jail};

use crate::config::StoreConfig;
use crate::error::Error;
use crate::graph::Strategy;

#[test]
fn test_default_config() {
    let config = StoreConfig::default();
    assert_eq!(config.strategy, Strategy::Performance);
    assert_eq!(config.initial_capacity, 0);
}

#[test]
fn test_builder() {
    let config = StoreConfig::default()
        .with_strategy(Strategy::Memory)
        .with_initial_capacity(32);
    assert_eq!(config.strategy, Strategy::Memory);
    assert_eq!(config.initial_capacity, 32);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    Jail::expect_with(|_jail| {
        let config = StoreConfig::load("absent.toml").map_err(|e| e.to_string())?;
        assert_eq!(config, StoreConfig::default());
        Ok(())
    });
}

#[test]
fn test_load_from_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "labelgraph.toml",
            r#"
                strategy = "memory"
                initial_capacity = 128
            "#,
        )?;
        let config = StoreConfig::load("labelgraph.toml").map_err(|e| e.to_string())?;
        assert_eq!(config.strategy, Strategy::Memory);
        assert_eq!(config.initial_capacity, 128);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("labelgraph.toml", r#"strategy = "memory""#)?;
        jail.set_env("LABELGRAPH_STRATEGY", "performance");
        jail.set_env("LABELGRAPH_INITIAL_CAPACITY", "16");
        let config = StoreConfig::load("labelgraph.toml").map_err(|e| e.to_string())?;
        assert_eq!(config.strategy, Strategy::Performance);
        assert_eq!(config.initial_capacity, 16);
        Ok(())
    });
}

#[test]
fn test_invalid_strategy_is_config_error() {
    let figment = Figment::new().merge(Toml::string(r#"strategy = "quantum""#));
    let err = StoreConfig::from_figment(&figment).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
