
use test_helpers::*;
use vss2idl_core::{LeafSignal, SignalKind, SpecNode};
use vss2idl_ddsidl::{IdlExporter, format_struct_summary};

#[test]
fn summary_lists_every_record_with_its_members() {
    let consolidation = IdlExporter::default().consolidate(&cabin_tree());
    let text = format_struct_summary(&consolidation).unwrap();

    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("P: ")).collect();
    assert_eq!(
        headers,
        vec![
            "P: Vehicle, S: State, V: [], members: 1",
            "P: Vehicle, S: Cabin, V: [], members: 1",
            "P: Vehicle:Cabin, S: Door, V: [Row1:DriverSide, Row1:PassengerSide, \
             Row2:DriverSide, Row2:PassengerSide], members: 3",
            "P: Vehicle:Cabin:Seat, S: Row1, V: [Pos1, Pos2], members: 2",
            "P: Vehicle:Powertrain, S: Transmission, V: [], members: 2",
        ]
    );
}

#[test]
fn summary_members_are_pretty_json_in_tree_order() {
    let consolidation = IdlExporter::default().consolidate(&cabin_tree());
    let text = format_struct_summary(&consolidation).unwrap();

    let expected = r#"P: Vehicle:Powertrain, S: Transmission, V: [], members: 2
{
  "SelectedGear": {
    "vsstype": "actuator",
    "datatype": "string",
    "allowed": [
      "P",
      "R",
      "N",
      "D"
    ],
    "default": "P"
  },
  "Temperature": {
    "vsstype": "sensor",
    "datatype": "int16",
    "unit": "celsius"
  }
}
"#;
    assert!(text.ends_with(expected), "unexpected summary:\n{text}");
}

#[test]
fn summary_of_uint64_bounds_is_exact() {
    let root = SpecNode::branch(
        "Vehicle",
        vec![SpecNode::leaf(
            "Odometer",
            LeafSignal::new(SignalKind::Sensor, "uint64").with_max(u64::MAX),
        )],
    );
    let consolidation = IdlExporter::default().consolidate(&root);
    let text = format_struct_summary(&consolidation).unwrap();
    assert!(text.starts_with("P: Vehicle, S: State, V: [], members: 1\n{\n"));
    assert!(text.contains(r#""max": 18446744073709551615"#));
}

#[test]
fn empty_tree_has_empty_summary() {
    let root = SpecNode::branch("Vehicle", vec![]);
    let consolidation = IdlExporter::default().consolidate(&root);
    assert_eq!(format_struct_summary(&consolidation).unwrap(), "");
}
