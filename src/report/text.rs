use crate::model::Rubric;
use crate::report::{NOT_AVAILABLE, StatusRow};

const EVALUATED_MARK: &str = " (Évalué)";

pub fn render_status_table(rows: &[StatusRow]) -> String {
    let names: Vec<String> = rows
        .iter()
        .map(|r| {
            if r.evaluated {
                format!("{}{}", r.student, EVALUATED_MARK)
            } else {
                r.student.clone()
            }
        })
        .collect();
    let width = names
        .iter()
        .map(|n| n.chars().count())
        .chain(std::iter::once("Élève".chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  {:>8}  Compétence\n", "Élève", "Note /20"));
    for (row, name) in rows.iter().zip(&names) {
        let grade = row.grade.as_deref().unwrap_or(NOT_AVAILABLE);
        let tier = row
            .tier
            .map(|t| format!("{} ({})", t.level(), t.label()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        out.push_str(&format!("{name:<width$}  {grade:>8}  {tier}\n"));
    }
    out
}

pub fn render_rubric(rubric: &Rubric) -> String {
    let mut out = String::new();
    for question in rubric.questions() {
        match rubric.coefficient(question) {
            Some(coef) => out.push_str(&format!("{question} (coef {coef})\n")),
            None => out.push_str(&format!("{question} (no coefficient, not weighted)\n")),
        }
        for line in rubric.descriptor_text(question).lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
