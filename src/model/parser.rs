// File: src/model/parser.rs
//! Tokenizer and line-oriented recursive descent for the enrollment summary.
//!
//! A discipline block starts at a header line
//! (`MCTA028-15 - BANCO DE DADOS A1-Noturno (São Bernardo) - ...`) and runs
//! until the next header. Inside a block, each line may describe one class
//! meeting (`Quarta das 21:00 às 23:00 - Quinzenal (I)`). Text before the
//! first header is ignored; a block with no meeting lines is a valid
//! discipline with zero schedules.

use crate::model::item::{Frequency, ParsedDiscipline, Schedule, Weekday};
use chrono::NaiveTime;
use strum::IntoEnumIterator;

const CODE_LEN: usize = 10;

/// Splits the whole summary into disciplines. An empty result means nothing
/// in the text looked like a discipline header; callers treat that as a
/// user-input problem, not a fault.
pub fn parse_enrollment(text: &str) -> Vec<ParsedDiscipline> {
    let mut disciplines = Vec::new();
    let mut current: Option<ParsedDiscipline> = None;

    for line in text.lines() {
        if let Some(header) = parse_header_line(line) {
            if let Some(done) = current.take() {
                disciplines.push(done);
            }
            current = Some(header);
        } else if let Some(disc) = current.as_mut()
            && let Some(schedule) = parse_schedule_line(line)
        {
            disc.schedules.push(schedule);
        }
    }
    if let Some(done) = current {
        disciplines.push(done);
    }
    disciplines
}

/// Recognizes a discipline header: a `CCCC###-##` code at the start of the
/// line, then " - ", then the combined name field up to the first " (",
/// whose parenthesized part must close with ") -".
pub fn parse_header_line(line: &str) -> Option<ParsedDiscipline> {
    let code = take_code(line)?;
    let rest = line[CODE_LEN..].strip_prefix(" - ")?;
    let open = rest.find(" (")?;
    let tail = &rest[open + 2..];
    tail.find(") -")?;

    let combined = rest[..open].trim();
    let (name, section) = split_section(combined);
    Some(ParsedDiscipline {
        code: code.to_string(),
        name,
        section,
        header_text: combined.to_string(),
        schedules: Vec::new(),
    })
}

/// Matches the leading discipline code: 4 uppercase ASCII letters, 3 digits,
/// a dash, 2 digits.
fn take_code(line: &str) -> Option<&str> {
    let b = line.as_bytes();
    if b.len() < CODE_LEN {
        return None;
    }
    let ok = b[..4].iter().all(u8::is_ascii_uppercase)
        && b[4..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit);
    ok.then(|| &line[..CODE_LEN])
}

/// Splits a trailing `<Letter><digits>-(Noturno|Matutino)` section token off
/// the combined name field. Most summaries carry the section only inside the
/// parentheses, in which case the section here is empty.
fn split_section(combined: &str) -> (String, String) {
    for shift in ["Noturno", "Matutino"] {
        let Some(stem) = combined.strip_suffix(shift) else {
            continue;
        };
        let Some(ident) = stem.strip_suffix('-') else {
            continue;
        };
        let bytes = ident.as_bytes();
        let mut i = bytes.len();
        while i > 0 && bytes[i - 1].is_ascii_digit() {
            i -= 1;
        }
        // Exactly one uppercase letter before the digits.
        if i < bytes.len() && i > 0 && bytes[i - 1].is_ascii_uppercase() {
            let start = i - 1;
            return (
                combined[..start].trim().to_string(),
                combined[start..].to_string(),
            );
        }
    }
    (combined.trim().to_string(), String::new())
}

/// Scans a body line for `<weekday> ... das HH:MM às HH:MM ... - <freq>`.
///
/// Matching is done on a lowercased copy of the line: day names and the
/// "das"/"às" keywords are case-insensitive, and the frequency descriptor is
/// normalized to lowercase anyway. Lines without the full pattern (including
/// any mention of domingo) yield no schedule.
pub fn parse_schedule_line(line: &str) -> Option<Schedule> {
    let lower = line.to_lowercase();

    let (day, at) = Weekday::iter()
        .filter_map(|d| lower.find(d.pt_name()).map(|at| (d, at)))
        .min_by_key(|&(_, at)| at)?;

    let rest = &lower[at + day.pt_name().len()..];
    let (start, end, used) = find_time_range(rest)?;

    let after = &rest[used..];
    let dash = after.find('-')?;
    let frequency = Frequency::parse(after[dash + 1..].trim());

    Some(Schedule {
        day,
        start,
        end,
        frequency,
    })
}

/// Finds the first `das HH:MM às HH:MM` group and returns both times plus
/// the number of bytes consumed up to the end of the second time.
fn find_time_range(text: &str) -> Option<(NaiveTime, NaiveTime, usize)> {
    let mut from = 0;
    while let Some(at) = text[from..].find("das ").map(|i| from + i) {
        if let Some((start, rest)) = take_time(&text[at + 4..])
            && let Some(rest) = rest.strip_prefix(" às ")
            && let Some((end, rest)) = take_time(rest)
        {
            return Some((start, end, text.len() - rest.len()));
        }
        from = at + 4;
    }
    None
}

/// Consumes a literal `HH:MM` from the front of `text`.
fn take_time(text: &str) -> Option<(NaiveTime, &str)> {
    let b = text.as_bytes();
    if b.len() < 5
        || !b[0].is_ascii_digit()
        || !b[1].is_ascii_digit()
        || b[2] != b':'
        || !b[3].is_ascii_digit()
        || !b[4].is_ascii_digit()
    {
        return None;
    }
    let t = NaiveTime::parse_from_str(&text[..5], "%H:%M").ok()?;
    Some((t, &text[5..]))
}
