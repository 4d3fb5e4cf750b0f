use hexcoord::{HexError, Layout, LayoutConfig, OrientationKind, Parity, Point};
use validator::ValidationErrors;

#[test]
fn test_layout_config_validation() {
    let config = LayoutConfig {
        orientation: OrientationKind::Flat, // valid
        parity: Parity::Odd,                // valid
        size: Point::new(0.0, 10.0),        // invalid (zero width)
        origin: Point::new(f64::NAN, 0.0),  // invalid
    };

    // This is a bit of a lazy check but it works well enough
    let err = Layout::from_config(config).unwrap_err();
    let validation_errors: ValidationErrors = match err {
        HexError::InvalidConfig(errors) => errors,
        other => panic!("expected config error, got {:?}", other),
    };
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["origin", "size"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_layout_config_valid() {
    let config = LayoutConfig {
        orientation: OrientationKind::Flat,
        parity: Parity::Odd,
        size: Point::new(12.0, -8.0),
        origin: Point::new(100.0, 50.0),
    };
    let layout = Layout::from_config(config).unwrap();
    assert_eq!(layout.kind(), OrientationKind::Flat);
    assert_eq!(layout.parity(), Parity::Odd);
    assert_eq!(layout.size(), Point::new(12.0, -8.0));
    assert_eq!(layout.origin(), Point::new(100.0, 50.0));
    assert_eq!(layout.config(), config);
}

#[test]
fn test_layout_config_json() {
    // Missing fields fall back to the defaults
    let config: LayoutConfig = serde_json::from_str(
        r#"{"orientation": "flat", "size": {"x": 4.0, "y": 4.0}}"#,
    )
    .unwrap();
    assert_eq!(
        config,
        LayoutConfig {
            orientation: OrientationKind::Flat,
            parity: Parity::Even,
            size: Point::new(4.0, 4.0),
            origin: Point::ORIGIN,
        }
    );

    let json = serde_json::to_string(&config).unwrap();
    let parsed: LayoutConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_layout_json() {
    let layout: Layout = serde_json::from_str(
        r#"{
            "orientation": "pointy",
            "parity": "odd",
            "size": {"x": 10.0, "y": 10.0},
            "origin": {"x": -5.0, "y": 5.0}
        }"#,
    )
    .unwrap();
    assert_eq!(layout.kind(), OrientationKind::Pointy);
    assert_eq!(layout.parity(), Parity::Odd);

    // Deserializing a layout runs the same validation as from_config
    let result = serde_json::from_str::<Layout>(
        r#"{"orientation": "flat", "size": {"x": 10.0, "y": 0.0}}"#,
    );
    assert!(result.is_err());

    let unknown =
        serde_json::from_str::<Layout>(r#"{"orientation": "sideways"}"#);
    assert!(unknown.is_err());

    let json = serde_json::to_string(&layout).unwrap();
    assert_eq!(serde_json::from_str::<Layout>(&json).unwrap(), layout);
}
