pub mod csv;
pub mod lists;
pub mod text;

use crate::model::Tier;
use crate::session::Session;

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    pub student: String,
    pub evaluated: bool,
    pub grade: Option<String>,
    pub tier: Option<Tier>,
}

pub fn status_rows(session: &Session) -> Vec<StatusRow> {
    session
        .roster()
        .iter()
        .map(|student| {
            let result = session.result_for(student);
            StatusRow {
                student: student.clone(),
                evaluated: session.is_evaluated(student),
                grade: result.map(|r| r.display_grade()),
                tier: result.map(|r| r.tier),
            }
        })
        .collect()
}

pub fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
