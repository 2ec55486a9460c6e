use crate::input::ParseError;
use crate::input::delimited::parse_auto;
use crate::model::rubric::{Descriptors, Rubric};

const DESCRIPTOR_COLUMN: usize = 2;
const MAX_COEFFICIENT: f64 = 1_000_000.0;

// Exactly one leading row is skipped, whatever it contains.
pub fn parse_rubric(text: &str) -> (Rubric, Vec<ParseError>) {
    let mut rubric = Rubric::new();
    let mut errors = Vec::new();

    for record in parse_auto(text).into_iter().skip(1) {
        let question = record.field(0);
        if question.is_empty() {
            continue;
        }
        rubric.push_question(question);

        let raw_coef = record.field(1);
        if raw_coef.is_empty() {
            continue;
        }
        let coefficient = match parse_coefficient(raw_coef) {
            Ok(v) => v,
            Err(reason) => {
                let err = ParseError {
                    line: record.line,
                    reason: format!("question {question}: {reason}"),
                };
                tracing::debug!("skipping rubric row: {err}");
                errors.push(err);
                continue;
            }
        };

        let descriptors: Descriptors =
            std::array::from_fn(|level| record.field(DESCRIPTOR_COLUMN + level).to_string());
        if !rubric.define(question, coefficient, descriptors) {
            tracing::warn!(
                "duplicate question in rubric; keeping first (line {}, question {})",
                record.line,
                question
            );
        }
    }

    tracing::info!(
        questions = rubric.questions().len(),
        skipped = errors.len(),
        "rubric parsed"
    );
    (rubric, errors)
}

pub fn parse_coefficient(raw: &str) -> Result<f64, String> {
    let normalized = if raw.contains(',') && !raw.contains('.') {
        raw.replacen(',', ".", 1)
    } else {
        raw.to_string()
    };
    let value: f64 = normalized
        .trim()
        .parse()
        .map_err(|_| format!("coefficient {raw:?} is not a number"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("coefficient {raw:?} must be a positive number"));
    }
    if value > MAX_COEFFICIENT {
        return Err(format!("coefficient {raw:?} is larger than {MAX_COEFFICIENT}"));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/rubric.rs"]
mod tests;
