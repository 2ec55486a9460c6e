use crate::input::delimited::parse_auto;

// Blank rows are skipped wherever they appear, so a trailing newline never matters.
pub fn parse_roster(text: &str) -> Vec<String> {
    let mut records = parse_auto(text).into_iter().filter(|r| !r.is_blank());

    let Some(header) = records.next() else {
        tracing::warn!("roster is empty");
        return Vec::new();
    };
    tracing::debug!(header = header.field(0), "roster header discarded");

    let mut names = Vec::new();
    for record in records {
        let name = record.field(0);
        if name.is_empty() {
            tracing::warn!(line = record.line, "roster row has no name; skipping");
            continue;
        }
        names.push(name.to_string());
    }

    if names.is_empty() {
        tracing::warn!("roster has a header but no students");
    }
    names
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/roster.rs"]
mod tests;
