use crate::report::or_not_available;
use crate::session::Session;

pub fn grade_list(session: &Session) -> String {
    column(session, |s, student| {
        s.result_for(student).map(|r| r.display_grade())
    })
}

pub fn tier_list(session: &Session) -> String {
    column(session, |s, student| {
        s.result_for(student).map(|r| r.tier.to_string())
    })
}

fn column(session: &Session, value: impl Fn(&Session, &str) -> Option<String>) -> String {
    session
        .roster()
        .iter()
        .map(|student| or_not_available(value(session, student)))
        .collect::<Vec<_>>()
        .join("\n")
}
