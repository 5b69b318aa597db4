use super::*;

use crate::domain::grid::Resolution;

fn palette() -> Palette {
    Palette::new(vec!["#f2cc8f".into(), "#81b29a".into()]).unwrap()
}

fn config() -> WalkerConfig {
    WalkerConfig::with_resolution(Resolution::new(8, 8).unwrap())
}

#[test]
fn builder_produces_a_valid_spec() {
    let spec = SketchSpecBuilder::new(palette())
        .seed(42)
        .background("#0b0b0e")
        .region(config())
        .build()
        .unwrap();
    assert_eq!(spec.seed, 42);
    assert_eq!(spec.background, "#0b0b0e");
    assert_eq!(spec.regions.len(), 1);
    assert!(spec.validate().is_ok());
}

#[test]
fn builder_defaults_background() {
    let spec = SketchSpecBuilder::new(palette())
        .region(config())
        .build()
        .unwrap();
    assert_eq!(spec.background, "#111111");
}

#[test]
fn empty_background_is_rejected() {
    let spec = SketchSpecBuilder::new(palette())
        .background("  ")
        .region(config())
        .build();
    assert!(spec.is_err());
}

#[test]
fn region_validation_propagates() {
    let mut bad = config();
    bad.padding = 0.9;
    let spec = SketchSpecBuilder::new(palette()).region(bad).build();
    assert!(spec.is_err());
}

#[test]
fn clipped_region_needs_a_real_polygon() {
    let spec = SketchSpecBuilder::new(palette())
        .clipped_region(config(), vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
        .build();
    assert!(spec.is_err());

    let spec = SketchSpecBuilder::new(palette())
        .clipped_region(
            config(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(50.0, 100.0),
            ],
        )
        .build();
    assert!(spec.is_ok());
}

#[test]
fn json_round_trip() {
    let spec = SketchSpecBuilder::new(palette())
        .seed(9)
        .clipped_region(
            config(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(200.0, 0.0),
                Point::new(200.0, 200.0),
            ],
        )
        .build()
        .unwrap();
    let json = spec.to_json().unwrap();
    let back = SketchSpec::from_json(&json).unwrap();
    assert_eq!(back, spec);
}

#[test]
fn from_json_accepts_defaults_and_rejects_garbage() {
    let json = r##"{
        "palette": ["#eee", "#222"],
        "regions": [{"config": {"resolution": [10, 10]}}]
    }"##;
    let spec = SketchSpec::from_json(json).unwrap();
    assert_eq!(spec.seed, 0);
    assert_eq!(spec.regions[0].config.resolution, Resolution::new(10, 10).unwrap());
    assert!(spec.regions[0].clip.is_none());

    assert!(SketchSpec::from_json("{}").is_err());
    assert!(SketchSpec::from_json(r#"{"palette": [], "regions": []}"#).is_err());
}
