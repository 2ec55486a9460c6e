use std::collections::{BTreeMap, HashMap};

use crate::model::{Score, Tier, TierProfile};

pub const MAX_GRADE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeResult {
    pub grade: f64,
    pub tier: Tier,
}

impl GradeResult {
    pub fn display_grade(&self) -> String {
        format_grade(self.grade)
    }
}

pub fn compute_grade(
    questions: &[String],
    coefficients: &HashMap<String, f64>,
    responses: &BTreeMap<String, Score>,
) -> GradeResult {
    let mut total_points = 0.0f64;
    let mut total_coef = 0.0f64;

    for question in questions {
        let (Some(score), Some(&coef)) = (responses.get(question), coefficients.get(question))
        else {
            continue;
        };
        total_points += score.points() * coef;
        total_coef += coef;
    }

    let max_points = total_coef * f64::from(Score::MAX);
    let grade = if max_points > 0.0 && max_points.is_finite() && total_points.is_finite() {
        ((total_points / max_points) * MAX_GRADE).clamp(0.0, MAX_GRADE)
    } else {
        0.0
    };

    GradeResult {
        grade,
        tier: TierProfile::default_v1().classify(grade),
    }
}

// Ties round up: 3.125 is 3,13.
pub fn format_grade(grade: f64) -> String {
    let rounded = (grade * 100.0).round() / 100.0;
    format!("{rounded:.2}").replace('.', ",")
}

pub fn parse_grade(text: &str) -> Option<f64> {
    let value: f64 = text.trim().replace(',', ".").parse().ok()?;
    if !(0.0..=MAX_GRADE).contains(&value) {
        return None;
    }
    Some(value)
}

#[cfg(test)]
#[path = "../tests/src_inline/grading.rs"]
mod tests;
