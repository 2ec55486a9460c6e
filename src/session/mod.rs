use std::collections::BTreeMap;

use thiserror::Error;

use crate::grading::{GradeResult, compute_grade};
use crate::model::{Rubric, Score};
use crate::report;

pub mod event;
pub mod snapshot;

pub use event::{SessionEvent, reduce};
use snapshot::{LoadError, SNAPSHOT_VERSION, Snapshot};

pub type Responses = BTreeMap<String, Score>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown student: {0}")]
    UnknownStudent(String),
    #[error("unknown question: {0}")]
    UnknownQuestion(String),
    #[error(transparent)]
    Load(#[from] LoadError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    roster: Vec<String>,
    rubric: Rubric,
    responses: BTreeMap<String, Responses>,
    results: BTreeMap<String, GradeResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn responses_for(&self, student: &str) -> Option<&Responses> {
        self.responses.get(student)
    }

    pub fn result_for(&self, student: &str) -> Option<&GradeResult> {
        self.results.get(student)
    }

    pub fn is_evaluated(&self, student: &str) -> bool {
        self.responses.contains_key(student)
    }

    fn knows_student(&self, student: &str) -> bool {
        self.roster.iter().any(|s| s == student) || self.responses.contains_key(student)
    }

    pub fn import_roster(&mut self, names: Vec<String>) {
        tracing::info!(students = names.len(), "roster imported");
        self.roster = names;
    }

    // Stored grades keep their value until the student's next response.
    pub fn import_rubric(&mut self, rubric: Rubric) {
        tracing::info!(questions = rubric.questions().len(), "rubric imported");
        self.rubric = rubric;
    }

    pub fn set_response(
        &mut self,
        student: &str,
        question: &str,
        score: Score,
    ) -> Result<GradeResult, SessionError> {
        if !self.roster.iter().any(|s| s == student) {
            return Err(SessionError::UnknownStudent(student.to_string()));
        }
        if !self.rubric.contains(question) {
            return Err(SessionError::UnknownQuestion(question.to_string()));
        }

        let answers = self.responses.entry(student.to_string()).or_default();
        answers.insert(question.to_string(), score);

        let result = compute_grade(
            self.rubric.questions(),
            self.rubric.coefficients(),
            answers,
        );
        tracing::debug!(
            student,
            question,
            score = score.value(),
            grade = result.grade,
            tier = result.tier.level(),
            "grade recomputed"
        );
        self.results.insert(student.to_string(), result);
        Ok(result)
    }

    pub fn reset_student(&mut self, student: &str) -> Result<bool, SessionError> {
        if !self.knows_student(student) {
            return Err(SessionError::UnknownStudent(student.to_string()));
        }
        let had_responses = self.responses.remove(student).is_some();
        let had_result = self.results.remove(student).is_some();
        tracing::info!(student, "student reset");
        Ok(had_responses || had_result)
    }

    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            student_names: self.roster.clone(),
            responses: self.responses.clone(),
            notes: self
                .results
                .iter()
                .map(|(student, r)| (student.clone(), r.display_grade()))
                .collect(),
            competences: self
                .results
                .iter()
                .map(|(student, r)| (student.clone(), r.tier))
                .collect(),
        }
    }

    pub fn load_snapshot(&mut self, snapshot: Snapshot) -> Result<(), LoadError> {
        let restored = snapshot.restore()?;
        tracing::info!(
            students = restored.roster.len(),
            graded = restored.results.len(),
            "snapshot loaded"
        );
        self.roster = restored.roster;
        self.responses = restored.responses;
        self.results = restored.results;
        Ok(())
    }

    pub fn export_csv_report(&self) -> String {
        report::csv::render_evaluation_csv(self)
    }

    pub fn grade_list(&self) -> String {
        report::lists::grade_list(self)
    }

    pub fn tier_list(&self) -> String {
        report::lists::tier_list(self)
    }

    pub fn apply(&mut self, event: SessionEvent) -> Result<(), SessionError> {
        *self = reduce(self, event)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/tests.rs"]
mod tests;
