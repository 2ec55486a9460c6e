use crate::model::{Rubric, Score};
use crate::session::snapshot::Snapshot;
use crate::session::{Session, SessionError};

#[derive(Debug, Clone)]
pub enum SessionEvent {
    RosterImported(Vec<String>),
    RubricImported(Rubric),
    ResponseSet {
        student: String,
        question: String,
        score: Score,
    },
    StudentReset(String),
    SnapshotLoaded(Snapshot),
}

pub fn reduce(state: &Session, event: SessionEvent) -> Result<Session, SessionError> {
    let mut next = state.clone();
    match event {
        SessionEvent::RosterImported(names) => next.import_roster(names),
        SessionEvent::RubricImported(rubric) => next.import_rubric(rubric),
        SessionEvent::ResponseSet {
            student,
            question,
            score,
        } => {
            next.set_response(&student, &question, score)?;
        }
        SessionEvent::StudentReset(student) => {
            next.reset_student(&student)?;
        }
        SessionEvent::SnapshotLoaded(snapshot) => next.load_snapshot(snapshot)?,
    }
    Ok(next)
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/event.rs"]
mod tests;
