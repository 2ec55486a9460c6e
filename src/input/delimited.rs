pub const CANDIDATE_DELIMITERS: [char; 4] = [',', '\t', '|', ';'];

const DETECT_SAMPLE_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    pub fn field(&self, idx: usize) -> &str {
        self.fields.get(idx).map(|s| s.trim()).unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }
}

pub fn parse_auto(text: &str) -> Vec<Record> {
    let delimiter = detect_delimiter(text);
    parse_records(text, delimiter)
}

pub fn detect_delimiter(text: &str) -> char {
    let mut best: Option<(char, usize, f64)> = None;

    for delimiter in CANDIDATE_DELIMITERS {
        let sample: Vec<usize> = parse_records(text, delimiter)
            .into_iter()
            .filter(|r| !r.is_blank())
            .take(DETECT_SAMPLE_ROWS)
            .map(|r| r.fields.len())
            .collect();
        if sample.is_empty() {
            continue;
        }

        let mut delta = 0usize;
        for pair in sample.windows(2) {
            delta += pair[0].abs_diff(pair[1]);
        }
        let avg = sample.iter().sum::<usize>() as f64 / sample.len() as f64;
        if avg < 1.99 {
            continue;
        }

        let better = match best {
            None => true,
            Some((_, best_delta, best_avg)) => {
                delta < best_delta || (delta == best_delta && avg > best_avg)
            }
        };
        if better {
            best = Some((delimiter, delta, avg));
        }
    }

    best.map(|(d, _, _)| d).unwrap_or(',')
}

pub fn parse_records(text: &str, delimiter: char) -> Vec<Record> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut line = 1usize;
    let mut record_line = 1usize;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                fields.push(std::mem::take(&mut field));
                records.push(Record {
                    line: record_line,
                    fields: std::mem::take(&mut fields),
                });
                line += 1;
                record_line = line;
                at_field_start = true;
            }
            c if c == delimiter => {
                fields.push(std::mem::take(&mut field));
                at_field_start = true;
            }
            _ => {
                field.push(c);
                at_field_start = false;
            }
        }
    }

    if !fields.is_empty() || !field.is_empty() || in_quotes {
        fields.push(field);
        records.push(Record {
            line: record_line,
            fields,
        });
    }

    records
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/delimited.rs"]
mod tests;
