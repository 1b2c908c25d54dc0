use std::path::PathBuf;

use vss2idl_core::{
    Literal, NodeKind, SignalKind, SourceFormat, SpecLoadError, SpecNode, load_spec_tree,
    parse_spec_tree,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn child_names(node: &SpecNode) -> Vec<&str> {
    node.children().iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn json_tree_keeps_document_child_order() {
    let root = load_spec_tree(&fixture_path("vehicle.json"), None).unwrap();
    assert_eq!(root.name, "Vehicle");
    assert_eq!(
        child_names(&root),
        vec!["Speed", "Powertrain", "VehicleIdentification"]
    );
    assert_eq!(root.signal_count(), 5);
}

#[test]
fn yaml_and_json_exports_load_to_the_same_tree() {
    let json = load_spec_tree(&fixture_path("vehicle.json"), None).unwrap();
    let yaml = load_spec_tree(&fixture_path("vehicle.yaml"), None).unwrap();
    assert_eq!(json, yaml);
}

#[test]
fn leaf_metadata_is_presence_tagged() {
    let root = load_spec_tree(&fixture_path("vehicle.json"), None).unwrap();

    let gear = root
        .find("Vehicle.Powertrain.Transmission.SelectedGear")
        .and_then(SpecNode::as_leaf)
        .expect("gear should be a leaf");
    assert_eq!(gear.kind, SignalKind::Actuator);
    assert_eq!(gear.datatype.as_deref(), Some("string"));
    assert_eq!(gear.default, Some(Literal::from("P")));
    assert_eq!(
        gear.allowed,
        Some(vec![
            Literal::from("P"),
            Literal::from("R"),
            Literal::from("N"),
            Literal::from("D"),
        ])
    );
    assert_eq!(gear.unit, None);

    let temperature = root
        .find("Vehicle.Powertrain.Transmission.Temperature")
        .and_then(SpecNode::as_leaf)
        .unwrap();
    assert_eq!(temperature.min, Some(Literal::Int(-40)));
    assert_eq!(temperature.max, Some(Literal::Int(150)));
}

#[test]
fn empty_strings_and_lists_load_as_absent() {
    let root = load_spec_tree(&fixture_path("vehicle.json"), None).unwrap();

    let gear = root
        .find("Vehicle.Powertrain.Transmission.SelectedGear")
        .unwrap();
    assert_eq!(gear.comment, None);
    assert_eq!(gear.description.as_deref(), Some("Selected gear."));

    let wheels = root
        .find("Vehicle.VehicleIdentification.Wheels")
        .and_then(SpecNode::as_leaf)
        .unwrap();
    assert_eq!(wheels.default, None);
}

#[test]
fn find_requires_matching_root_and_existing_children() {
    let root = load_spec_tree(&fixture_path("vehicle.json"), None).unwrap();
    assert!(root.find("Vehicle").is_some());
    assert!(root.find("Vehicle.Speed").is_some());
    assert!(root.find("Car.Speed").is_none());
    assert!(root.find("Vehicle.Speed.Value").is_none());
    assert!(root.find("Vehicle.Missing").is_none());
}

#[test]
fn branch_without_children_is_an_empty_branch() {
    let root = parse_spec_tree(
        r#"{"Vehicle": {"type": "branch", "description": "empty"}}"#,
        SourceFormat::Json,
    )
    .unwrap();
    assert!(matches!(root.kind, NodeKind::Branch { ref children } if children.is_empty()));
    assert_eq!(root.signal_count(), 0);
}

#[test]
fn type_names_are_case_insensitive() {
    let root = parse_spec_tree(
        r#"{"Vehicle": {"type": "Branch", "children": {"Speed": {"type": "SENSOR", "datatype": "float"}}}}"#,
        SourceFormat::Json,
    )
    .unwrap();
    assert_eq!(root.children()[0].kind.type_name(), "sensor");
}

#[test]
fn unknown_node_type_is_reported_with_its_path() {
    let err = parse_spec_tree(
        r#"{"Vehicle": {"type": "branch", "children": {"Speed": {"type": "property"}}}}"#,
        SourceFormat::Json,
    )
    .unwrap_err();
    match err {
        SpecLoadError::UnknownNodeType { path, node_type } => {
            assert_eq!(path, "Vehicle.Speed");
            assert_eq!(node_type, "property");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_type_is_an_error() {
    let err = parse_spec_tree(r#"{"Vehicle": {"children": {}}}"#, SourceFormat::Json).unwrap_err();
    assert!(matches!(err, SpecLoadError::MissingType { ref path } if path == "Vehicle"));
}

#[test]
fn document_must_have_exactly_one_root() {
    let err = parse_spec_tree(
        r#"{"A": {"type": "branch"}, "B": {"type": "branch"}}"#,
        SourceFormat::Json,
    )
    .unwrap_err();
    assert!(matches!(err, SpecLoadError::RootCount { count: 2 }));

    let err = parse_spec_tree("{}", SourceFormat::Json).unwrap_err();
    assert!(matches!(err, SpecLoadError::RootCount { count: 0 }));
}

#[test]
fn unknown_extension_needs_explicit_format() {
    let err = load_spec_tree(&fixture_path("vehicle.vspec"), None).unwrap_err();
    assert!(matches!(err, SpecLoadError::UnknownFormat { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_spec_tree(&fixture_path("missing.json"), None).unwrap_err();
    assert!(matches!(err, SpecLoadError::Io { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_spec_tree("{\"Vehicle\": ", SourceFormat::Json).unwrap_err();
    assert!(matches!(err, SpecLoadError::Json(_)));
}

#[test]
fn uint64_bounds_keep_every_digit() {
    let text = r#"{"Vehicle": {"type": "branch", "children": {
        "Odometer": {"type": "sensor", "datatype": "uint64", "min": 0, "max": 18446744073709551615}
    }}}"#;
    for format in [SourceFormat::Json, SourceFormat::Yaml] {
        let root = parse_spec_tree(text, format).unwrap();
        let odometer = root.find("Vehicle.Odometer").unwrap().as_leaf().unwrap();
        assert_eq!(odometer.min, Some(Literal::Int(0)));
        assert_eq!(odometer.max, Some(Literal::UInt(u64::MAX)));
        assert_eq!(
            odometer.max.as_ref().unwrap().to_string(),
            "18446744073709551615"
        );
    }
}
