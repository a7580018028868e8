// File: ./src/model/item.rs
use chrono::NaiveTime;
use std::fmt;
use strum::EnumIter;

/// Class-meeting weekday as it appears in the enrollment summary.
///
/// Domingo is deliberately absent: the summary never schedules classes on
/// Sundays, and lines mentioning it must silently yield no schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Weekday {
    Segunda,
    Terca,
    Quarta,
    Quinta,
    Sexta,
    Sabado,
}

impl Weekday {
    /// Lowercase Portuguese name, accents included, matching both the
    /// enrollment text and the rooms table schedule columns.
    pub fn pt_name(&self) -> &'static str {
        match self {
            Weekday::Segunda => "segunda",
            Weekday::Terca => "terça",
            Weekday::Quarta => "quarta",
            Weekday::Quinta => "quinta",
            Weekday::Sexta => "sexta",
            Weekday::Sabado => "sábado",
        }
    }

    /// Monday = 0 .. Saturday = 5.
    pub fn ordinal(&self) -> u32 {
        match self {
            Weekday::Segunda => 0,
            Weekday::Terca => 1,
            Weekday::Quarta => 2,
            Weekday::Quinta => 3,
            Weekday::Sexta => 4,
            Weekday::Sabado => 5,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pt_name())
    }
}

/// Normalized meeting frequency.
///
/// Parity variants only arise from "quinzenal" descriptors carrying an
/// explicit "(I)"/"(II)" (or bare " i"/" ii") marker; a plain "quinzenal"
/// stays unspecified and behaves like parity I (no offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
    Biweekly,
    BiweeklyI,
    BiweeklyII,
}

impl Frequency {
    /// Normalizes a free-text frequency descriptor.
    ///
    /// "(ii)"/" ii" must be checked before "(i)"/" i": " i" is a substring
    /// of " ii", so swapping the order would silently misread every
    /// parity-II descriptor as parity I.
    pub fn parse(raw: &str) -> Self {
        let f = raw.to_lowercase();
        if !f.contains("quinzenal") {
            return Frequency::Weekly;
        }
        if f.contains("(ii)") || f.contains(" ii") {
            Frequency::BiweeklyII
        } else if f.contains("(i)") || f.contains(" i") {
            Frequency::BiweeklyI
        } else {
            Frequency::Biweekly
        }
    }

    /// RRULE interval on a weekly base frequency.
    pub fn interval(&self) -> u32 {
        match self {
            Frequency::Weekly => 1,
            _ => 2,
        }
    }

    /// Days to shift the first occurrence: parity II meets on the second
    /// week of the term.
    pub fn start_offset_days(&self) -> i64 {
        match self {
            Frequency::BiweeklyII => 7,
            _ => 0,
        }
    }

    /// Human-readable label used in the event description.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Semanal",
            Frequency::Biweekly => "Quinzenal",
            Frequency::BiweeklyI => "Quinzenal I",
            Frequency::BiweeklyII => "Quinzenal II",
        }
    }
}

/// One recurring weekly meeting of a discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub frequency: Frequency,
}

/// Parser output: one discipline block from the enrollment summary.
/// Immutable once parsed; enrichment produces a separate type instead of
/// mutating fields in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDiscipline {
    pub code: String,
    pub name: String,
    /// Trailing "A1-Noturno"-style section token when the combined name
    /// field carries one; empty otherwise.
    pub section: String,
    /// The combined name field exactly as it appeared between the code and
    /// the parenthesized part of the header.
    pub header_text: String,
    pub schedules: Vec<Schedule>,
}

/// A parsed discipline plus the best-effort rooms-table enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedDiscipline {
    pub discipline: ParsedDiscipline,
    /// Deduplicated instructor display string, or the "Não encontrado"
    /// sentinel when the table had no match.
    pub professor: String,
    /// Combined "Teoria: ... Prática: ..." location text; empty on no match.
    pub raw_location: String,
}
