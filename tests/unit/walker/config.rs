use super::*;

#[test]
fn defaults_validate() {
    assert!(WalkerConfig::default().validate().is_ok());
}

#[test]
fn with_resolution_keeps_defaults() {
    let r = Resolution::new(9, 9).unwrap();
    let config = WalkerConfig::with_resolution(r);
    assert_eq!(config.resolution, r);
    assert_eq!(config.walker_count, 16);
    assert!(config.flat);
}

#[test]
fn validation_fails_fast_without_clamping() {
    let mut config = WalkerConfig::default();
    config.resolution.cols = 0;
    assert!(config.validate().is_err());

    let mut config = WalkerConfig::default();
    config.step_size = 0;
    assert!(config.validate().is_err());

    let mut config = WalkerConfig::default();
    config.padding = 0.5;
    assert!(config.validate().is_err());

    let mut config = WalkerConfig::default();
    config.size = 0.0;
    assert!(config.validate().is_err());

    let mut config = WalkerConfig::default();
    config.heading_bias = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn json_defaults_and_explicit_fields() {
    let config: WalkerConfig = serde_json::from_str(r#"{"resolution": [20, 20]}"#).unwrap();
    assert_eq!(config.resolution, Resolution::new(20, 20).unwrap());
    assert_eq!(config.step_size, 64);
    assert_eq!(config.padding, 1.0 / 32.0);
    assert_eq!(config.path_style, crate::render::style::PathStyle::Solid);

    let config: WalkerConfig = serde_json::from_str(
        r#"{"resolution": [4, 4], "walker_count": 2, "flat": false, "path_style": "InfinitePipe"}"#,
    )
    .unwrap();
    assert_eq!(config.walker_count, 2);
    assert!(!config.flat);
}

#[test]
fn json_rejects_unknown_fields_and_negative_counts() {
    assert!(serde_json::from_str::<WalkerConfig>(r#"{"resolution": [4, 4], "wobble": 1}"#).is_err());
    assert!(
        serde_json::from_str::<WalkerConfig>(r#"{"resolution": [4, 4], "walker_count": -3}"#)
            .is_err()
    );
}
