mod cli;
mod error;
mod grading;
mod input;
mod logging;
mod model;
mod report;
mod session;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::error::AppError;
use crate::input::{parse_roster, parse_rubric, read_text};
use crate::model::Rubric;
use crate::session::snapshot::{read_snapshot, write_snapshot};
use crate::session::{Session, SessionEvent};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("failed to initialise logging: {err}");
    }
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let session_path = cli.session;

    match cli.command {
        Command::Init { roster, force } => {
            if session_path.exists() && !force {
                return Err(AppError::SessionExists(session_path));
            }
            let mut session = Session::new();
            session.apply(SessionEvent::RosterImported(load_roster(&roster)?))?;
            save_session(&session_path, &session)?;
            println!(
                "{} students imported into {}",
                session.roster().len(),
                session_path.display()
            );
        }
        Command::Roster { roster } => {
            let mut session = load_session(&session_path)?;
            session.apply(SessionEvent::RosterImported(load_roster(&roster)?))?;
            save_session(&session_path, &session)?;
            println!("{} students in roster", session.roster().len());
        }
        Command::Rubric { rubric } => {
            let rubric = load_rubric(&rubric)?;
            print!("{}", report::text::render_rubric(&rubric));
        }
        Command::Score {
            rubric,
            student,
            question,
            score,
        } => {
            let mut session = load_session(&session_path)?;
            session.apply(SessionEvent::RubricImported(load_rubric(&rubric)?))?;
            session.apply(SessionEvent::ResponseSet {
                student: student.clone(),
                question,
                score,
            })?;
            save_session(&session_path, &session)?;
            if let Some(result) = session.result_for(&student) {
                println!(
                    "{student}: {}/20, compétence {} ({})",
                    result.display_grade(),
                    result.tier,
                    result.tier.label()
                );
            }
        }
        Command::Reset { student } => {
            let mut session = load_session(&session_path)?;
            session.apply(SessionEvent::StudentReset(student.clone()))?;
            save_session(&session_path, &session)?;
            println!("L'évaluation de {student} a été réinitialisée.");
        }
        Command::Status => {
            let session = load_session(&session_path)?;
            let rows = report::status_rows(&session);
            print!("{}", report::text::render_status_table(&rows));
        }
        Command::Grades { out } => {
            let session = load_session(&session_path)?;
            emit(out.as_deref(), &format!("{}\n", session.grade_list()))?;
        }
        Command::Tiers { out } => {
            let session = load_session(&session_path)?;
            emit(out.as_deref(), &format!("{}\n", session.tier_list()))?;
        }
        Command::Export { rubric, out } => {
            let mut session = load_session(&session_path)?;
            session.apply(SessionEvent::RubricImported(load_rubric(&rubric)?))?;
            emit(out.as_deref(), &session.export_csv_report())?;
        }
    }

    Ok(())
}

fn load_roster(path: &Path) -> Result<Vec<String>, AppError> {
    let text = read_text(path).map_err(|source| AppError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_roster(&text))
}

fn load_rubric(path: &Path) -> Result<Rubric, AppError> {
    let text = read_text(path).map_err(|source| AppError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    let (rubric, errors) = parse_rubric(&text);
    if !errors.is_empty() {
        eprintln!(
            "{} rubric row(s) skipped in {}:",
            errors.len(),
            path.display()
        );
        for err in &errors {
            eprintln!("  {err}");
        }
    }
    if rubric.is_empty() {
        return Err(AppError::EmptyRubric(path.to_path_buf()));
    }
    Ok(rubric)
}

fn load_session(path: &Path) -> Result<Session, AppError> {
    let snapshot = read_snapshot(path).map_err(|source| AppError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let mut session = Session::new();
    session.apply(SessionEvent::SnapshotLoaded(snapshot))?;
    Ok(session)
}

fn save_session(path: &Path, session: &Session) -> Result<(), AppError> {
    write_snapshot(path, &session.export_snapshot()).map_err(|source| AppError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "session saved");
    Ok(())
}

fn emit(out: Option<&Path>, contents: &str) -> Result<(), AppError> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)?;
            eprintln!("written to {}", resolve_display(path).display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn resolve_display(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
