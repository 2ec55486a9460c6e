use crate::input::{parse_roster, parse_rubric};
use crate::model::Score;
use crate::report::text::{render_rubric, render_status_table};

use super::*;

fn graded_class() -> Session {
    let mut session = Session::new();
    session.import_roster(parse_roster("Nom\nDupont\nMartin\n"));
    let (rubric, _) = parse_rubric("h\nQ1;2;rien;peu;bien;parfait\nQ2;;a;b;c;d\n");
    session.import_rubric(rubric);
    session
        .set_response("Dupont", "Q1", Score::new(3).unwrap())
        .unwrap();
    session
}

#[test]
fn test_status_rows() {
    let rows = status_rows(&graded_class());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].student, "Dupont");
    assert!(rows[0].evaluated);
    assert_eq!(rows[0].grade.as_deref(), Some("20,00"));
    assert_eq!(rows[0].tier, Some(Tier::VeryGood));
    assert!(!rows[1].evaluated);
    assert_eq!(rows[1].grade, None);
}

#[test]
fn test_status_table() {
    let table = render_status_table(&status_rows(&graded_class()));
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Élève"));
    assert!(lines[0].contains("Note /20"));
    assert!(lines[1].starts_with("Dupont (Évalué)"));
    assert!(lines[1].contains("20,00"));
    assert!(lines[1].ends_with("4 (Très bonne maîtrise)"));
    assert!(lines[2].starts_with("Martin "));
    assert!(lines[2].ends_with("N/A"));
}

#[test]
fn test_rubric_listing() {
    let session = graded_class();
    let text = render_rubric(session.rubric());
    assert!(text.starts_with("Q1 (coef 2)\n  0pt: rien\n"));
    assert!(text.contains("  3pt: parfait\n"));
    assert!(text.contains("Q2 (no coefficient, not weighted)\n"));
}

#[test]
fn test_or_not_available() {
    assert_eq!(or_not_available(None), "N/A");
    assert_eq!(or_not_available(Some("3".to_string())), "3");
}
