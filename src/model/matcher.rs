// Fuzzy cross-reference between parsed disciplines and the rooms table.
//
// The join key is the normalized discipline name + section, checked for
// substring containment in each row's normalized class-section field. This
// is a best-effort join: a miss is expected (section renamed, accent
// differences the table spells out, discipline absent) and degrades to
// placeholder values instead of raising.

use crate::model::item::{EnrichedDiscipline, ParsedDiscipline};
use crate::table::{ClassRow, ClassTable};
use std::collections::HashSet;

/// Professor placeholder when the table is empty or has no matching row.
pub const PROFESSOR_NOT_FOUND: &str = "Não encontrado";

/// Instructor cells at or below this many characters are placeholder noise
/// ("--", "X") and are dropped.
const MIN_NAME_CHARS: usize = 2;

/// Strips every character that is not ASCII alphanumeric and lowercases the
/// rest. Accented characters are dropped entirely; both sides of the
/// comparison go through this, which is what makes the containment check
/// robust against the table's inconsistent punctuation and spacing.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetails {
    pub professor: String,
    pub raw_location: String,
}

/// Scans the table in order and returns details from the first row whose
/// normalized class-section contains the discipline's search key. First hit
/// wins; the table is small and section keys are unique in practice, so no
/// attempt is made to rank competing matches.
pub fn find_course_details(
    discipline: &ParsedDiscipline,
    table: &ClassTable,
) -> Option<CourseDetails> {
    let key = normalize(&format!("{}{}", discipline.name, discipline.section));
    table
        .rows
        .iter()
        .find(|row| normalize(&row.class_section).contains(&key))
        .map(course_details)
}

fn course_details(row: &ClassRow) -> CourseDetails {
    let mut seen = HashSet::new();
    let mut teachers = Vec::new();
    for cell in [
        &row.theory_instructor_1,
        &row.theory_instructor_2,
        &row.practice_instructor_1,
    ] {
        let name = cell.trim();
        if name.chars().count() > MIN_NAME_CHARS && seen.insert(name.to_string()) {
            teachers.push(name.to_string());
        }
    }
    CourseDetails {
        professor: teachers.join(", "),
        raw_location: format!("Teoria: {} Prática: {}", row.theory, row.practice),
    }
}

/// Pure enrichment step: combines a parsed discipline with its table match,
/// or with the degraded placeholders when there is none.
pub fn enrich(discipline: ParsedDiscipline, table: &ClassTable) -> EnrichedDiscipline {
    match find_course_details(&discipline, table) {
        Some(details) => EnrichedDiscipline {
            discipline,
            professor: details.professor,
            raw_location: details.raw_location,
        },
        None => {
            log::warn!(
                "No rooms-table match for {} '{}'",
                discipline.code,
                discipline.header_text
            );
            EnrichedDiscipline {
                discipline,
                professor: PROFESSOR_NOT_FOUND.to_string(),
                raw_location: String::new(),
            }
        }
    }
}
