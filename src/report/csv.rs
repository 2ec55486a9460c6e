use std::fmt::Write;

use crate::report::{NOT_AVAILABLE, or_not_available};
use crate::session::Session;

pub const EVALUATION_HEADER: &str = "Élève;Question;Note;Compétence\n";

// Fields are written verbatim, without quoting.
pub fn render_evaluation_csv(session: &Session) -> String {
    let mut out = String::from(EVALUATION_HEADER);
    for student in session.roster() {
        let answers = session.responses_for(student);
        let tier = or_not_available(session.result_for(student).map(|r| r.tier.to_string()));
        for question in session.rubric().questions() {
            let score = answers
                .and_then(|a| a.get(question))
                .map(|s| s.to_string());
            let _ = writeln!(
                out,
                "{};{};{};{}",
                student,
                question,
                score.as_deref().unwrap_or(NOT_AVAILABLE),
                tier
            );
        }
    }
    out
}
