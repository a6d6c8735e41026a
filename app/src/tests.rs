use super::*;
use engine::{compute_pinnacle, PinnacleValue, Position};

fn preview() -> NumerologyReport {
    preview_report().unwrap()
}

#[test]
fn test_output_format_names() {
    assert_eq!(OutputFormat::Text.as_str(), "text");
    assert_eq!(OutputFormat::Json.as_str(), "json");
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn test_build_report_groups() {
    let pinnacle = compute_pinnacle("Carlos Carpio", 6, 5, 1982).unwrap();
    let report = build_report("Carlos Carpio", &pinnacle).unwrap();

    let base: Vec<Position> = report.base_numbers.keys().copied().collect();
    assert_eq!(base, vec![Position::A, Position::B, Position::C]);
    assert_eq!(report.positive_numbers.len(), 10);
    assert_eq!(report.negative_numbers.len(), 9);
    assert!(report.negative_numbers.keys().all(|p| Position::NEGATIVE.contains(p)));
    assert_eq!(report.birth_date, "06/05/1982");
}

#[test]
fn test_build_report_rejects_incomplete_table() {
    let mut pinnacle = compute_pinnacle("Carlos Carpio", 6, 5, 1982).unwrap();
    pinnacle.table = engine::PinnacleTable::new();
    let err = build_report("Carlos Carpio", &pinnacle).unwrap_err();
    assert!(err.contains("was not computed"));
}

#[test]
fn test_build_report_rejects_list_in_scalar_slot() {
    let mut pinnacle = compute_pinnacle("Carlos Carpio", 6, 5, 1982).unwrap();
    pinnacle.table.set(Position::B, PinnacleValue::Many(vec![1, 2]));
    let err = build_report("Carlos Carpio", &pinnacle).unwrap_err();
    assert_eq!(err, "position B holds a list");
}

#[test]
fn test_render_text_panels() {
    let text = render_text(&preview());

    assert!(text.starts_with("Mapa numerológico de Carlos Carpio\n"));
    assert!(text.contains("Fecha de nacimiento: 06/05/1982"));
    assert!(text.contains("  A Tarea no aprendida: 5"));
    assert!(text.contains("  D Mi máscara: 22"));
    assert!(text.contains("  S Ser inferior 3: 11"));
    assert!(text.contains("  W Triplicidad: 9"));
    assert!(text.contains("  T Ausentes: 9"));
    assert!(text.contains("  Regalo divino: 1"));
    assert!(text.ends_with("Números maestros: D, E, J, S"));
}

#[test]
fn test_render_text_joins_lists() {
    let mut report = preview();
    report.t = PinnacleValue::Many(vec![3, 6, 9]);
    report.master_numbers.clear();

    let text = render_text(&report);
    assert!(text.contains("  T Ausentes: 3, 6, 9"));
    assert!(text.ends_with("Números maestros: ninguno"));
}

#[test]
fn test_render_json_is_camel_case() {
    let json = render(&preview(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["birthDate"], "06/05/1982");
    assert_eq!(value["summary"]["numeroPersonal"], 4);
    assert_eq!(value["summary"]["regaloDivino"], 1);
    assert_eq!(value["positiveNumbers"]["D"], 22);
    assert_eq!(value["W"], 9);
}

#[test]
fn test_execute_preview() {
    let config = AppConfig {
        preview: true,
        ..AppConfig::default()
    };
    let output = execute(&config).unwrap();
    assert!(output.contains("Carlos Carpio"));
}

#[test]
fn test_execute_reports_validation_message() {
    let config = AppConfig {
        name: Some("Ana".to_string()),
        date: Some("1982/05/06".to_string()),
        ..AppConfig::default()
    };
    assert_eq!(execute(&config).unwrap_err(), MSG_BAD_DATE);

    let config = AppConfig::default();
    assert_eq!(execute(&config).unwrap_err(), MSG_MISSING_INPUT);
}
