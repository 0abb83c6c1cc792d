use linktrade_cli::{draw_codes, read_message, SplitReport};
use linktrade_intake::QueueSettings;
use linktrade_types::{IdentityOverrides, LinkCode};
use pretty_assertions::assert_eq;

#[test]
fn split_report_reads_fenced_set() {
    let report = SplitReport::from_message(
        "```\nPikachu @ Light Ball\nAbility: Static\nSecret Id: 4321\nTrainer: Red\n```",
    );

    assert_eq!(
        report.split.description,
        vec!["Pikachu @ Light Ball", "Ability: Static"]
    );
    assert_eq!(
        report.split.overrides,
        IdentityOverrides {
            secret_id: Some(4321),
            trainer_id: None,
            trainer_name: Some("Red".to_string()),
        }
    );
    assert!(report.is_clean());
}

#[test]
fn read_message_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("set.txt");
    std::fs::write(&path, "Eevee\nTrainer Id: 123456\n").unwrap();

    let message = read_message(&path).unwrap();
    let report = SplitReport::from_message(&message);
    assert_eq!(report.split.overrides.trainer_id, Some(123_456));
}

#[test]
fn read_message_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = read_message(&path).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn draw_codes_uses_configured_range() {
    let settings = QueueSettings {
        trade_code_min: 42,
        trade_code_max: 42,
        ..Default::default()
    };
    let codes = draw_codes(&settings, 3).unwrap();
    assert_eq!(codes, vec!["0000 0042"; 3]);
}

#[test]
fn draw_codes_rejects_invalid_range() {
    let settings = QueueSettings {
        trade_code_min: 0,
        trade_code_max: LinkCode::MAX + 1,
        ..Default::default()
    };
    assert!(draw_codes(&settings, 1).is_err());
}
