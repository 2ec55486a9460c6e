use std::path::PathBuf;

use thiserror::Error;

use crate::input::InputError;
use crate::session::SessionError;
use crate::session::snapshot::LoadError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: InputError,
    },
    #[error("rubric {} defines no questions", .0.display())]
    EmptyRubric(PathBuf),
    #[error("session file {} already exists (use --force to overwrite)", .0.display())]
    SessionExists(PathBuf),
    #[error("cannot load session {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
    #[error("cannot save session {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}
