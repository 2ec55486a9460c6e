use std::collections::BTreeMap;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grading::{GradeResult, parse_grade};
use crate::model::{Score, Tier};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {found} (supported: {})", SNAPSHOT_VERSION)]
    UnsupportedVersion { found: u32 },
    #[error("invalid grade {value:?} for {student}")]
    InvalidNote { student: String, value: String },
    #[error("inconsistent snapshot for {student}: {reason}")]
    Inconsistent {
        student: String,
        reason: &'static str,
    },
}

// Files written by the browser version carry no `version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default = "legacy_version")]
    pub version: u32,
    pub student_names: Vec<String>,
    pub responses: BTreeMap<String, BTreeMap<String, Score>>,
    pub notes: BTreeMap<String, String>,
    pub competences: BTreeMap<String, Tier>,
}

fn legacy_version() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestoredState {
    pub roster: Vec<String>,
    pub responses: BTreeMap<String, BTreeMap<String, Score>>,
    pub results: BTreeMap<String, GradeResult>,
}

impl Snapshot {
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let snapshot: Snapshot = serde_json::from_str(text)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(LoadError::UnsupportedVersion {
                found: snapshot.version,
            });
        }
        Ok(snapshot)
    }

    pub fn restore(self) -> Result<RestoredState, LoadError> {
        if self.version > SNAPSHOT_VERSION {
            return Err(LoadError::UnsupportedVersion {
                found: self.version,
            });
        }

        let responses: BTreeMap<String, BTreeMap<String, Score>> = self
            .responses
            .into_iter()
            .filter(|(_, answers)| !answers.is_empty())
            .collect();

        let mut results = BTreeMap::new();
        for (student, note) in &self.notes {
            let grade = parse_grade(note).ok_or_else(|| LoadError::InvalidNote {
                student: student.clone(),
                value: note.clone(),
            })?;
            let tier = *self
                .competences
                .get(student)
                .ok_or_else(|| LoadError::Inconsistent {
                    student: student.clone(),
                    reason: "grade without competence",
                })?;
            if !responses.contains_key(student) {
                return Err(LoadError::Inconsistent {
                    student: student.clone(),
                    reason: "grade without responses",
                });
            }
            results.insert(student.clone(), GradeResult { grade, tier });
        }

        if let Some(student) = self.competences.keys().find(|s| !self.notes.contains_key(*s)) {
            return Err(LoadError::Inconsistent {
                student: student.clone(),
                reason: "competence without grade",
            });
        }
        if let Some(student) = responses.keys().find(|s| !results.contains_key(*s)) {
            return Err(LoadError::Inconsistent {
                student: student.clone(),
                reason: "responses without grade",
            });
        }

        Ok(RestoredState {
            roster: self.student_names,
            responses,
            results,
        })
    }
}

pub fn read_snapshot(path: &Path) -> Result<Snapshot, LoadError> {
    let text = std::fs::read_to_string(path)?;
    Snapshot::from_json(&text)
}

// The previous file stays in place until the new one is fully on disk.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> std::io::Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };
    let tmp = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut w = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut w, snapshot)?;
        w.write_all(b"\n")?;
        w.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/snapshot.rs"]
mod tests;
