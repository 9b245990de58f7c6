use ergo_assist::assessment::{GameType, HandSize};
use ergo_assist::intake::{ImportError, IntakeError, ProfileImporter};

const HEADER: &str = "hand_size,grip_style,session_duration,discomfort_level,keyboard_layout,mouse_weight,space_issue,game_type\n";

#[test]
fn importer_reads_every_row() {
    let csv = format!(
        "{HEADER}\
large,claw,200,wrist and forearm pain,wasd,100,yes,fps\n\
Small, Palm ,45,none,esdf,,no,MMORPG\n\
medium,fingertip,95,\"finger, wrist\",other,don't know,no,rpg\n"
    );

    let profiles = ProfileImporter::from_reader(csv.as_bytes()).expect("import succeeds");

    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].mouse_weight, Some(100));
    assert_eq!(profiles[1].hand_size, HandSize::Small);
    assert_eq!(profiles[1].game_type, GameType::Mmorpg);
    assert_eq!(profiles[1].mouse_weight, None);
    assert_eq!(profiles[2].discomfort_level, "finger, wrist");
    assert_eq!(profiles[2].mouse_weight, None);
}

#[test]
fn importer_reports_failing_row_number() {
    let csv = format!(
        "{HEADER}\
large,claw,200,none,wasd,100,yes,fps\n\
large,claw,200,none,wasd,250,yes,fps\n"
    );

    let err = ProfileImporter::from_reader(csv.as_bytes()).expect_err("row 2 is out of range");

    match &err {
        ImportError::Row {
            row: 2,
            source: IntakeError::OutOfRange { field, .. },
        } => assert_eq!(*field, "mouse_weight"),
        other => panic!("expected row error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("row 2:"));
}

#[test]
fn importer_rejects_missing_columns() {
    let csv = "hand_size,grip_style\nlarge,claw\n";

    let err = ProfileImporter::from_reader(csv.as_bytes()).expect_err("columns missing");

    assert!(matches!(err, ImportError::Csv(_)));
}

#[test]
fn importer_surfaces_missing_file() {
    let err = ProfileImporter::from_path("does/not/exist.csv").expect_err("no such file");

    assert!(matches!(err, ImportError::Io(_)));
}
