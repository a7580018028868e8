// File: ./src/model/recurrence.rs
//! Turns enriched disciplines into recurring calendar events bounded by the
//! academic term.

use crate::model::item::{EnrichedDiscipline, Weekday};
use crate::model::rooms;
use anyhow::{Result, anyhow};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Inclusive civil-date boundaries of the academic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The fixed civil timezone class times are expressed in. Threaded through
/// explicitly instead of living in ambient state so the generator stays pure
/// and testable with arbitrary zones.
#[derive(Debug, Clone)]
pub struct CivilZone {
    pub offset: FixedOffset,
    pub tzid: String,
}

impl CivilZone {
    fn resolve(&self, wall: NaiveDateTime) -> Result<DateTime<FixedOffset>> {
        self.offset
            .from_local_datetime(&wall)
            .single()
            .ok_or_else(|| anyhow!("Wall-clock time {} is ambiguous in {}", wall, self.tzid))
    }
}

/// One recurring event, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEvent {
    pub title: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub location: String,
    pub description: String,
    pub rrule: String,
}

/// First date on or after `term_start` that falls on `day`.
pub fn first_occurrence(term_start: NaiveDate, day: Weekday) -> NaiveDate {
    let ahead =
        (day.ordinal() as i64 - term_start.weekday().num_days_from_monday() as i64).rem_euclid(7);
    term_start + Duration::days(ahead)
}

/// Recurrence cutoff: the term's last day forced to 23:59:59 wall-clock in
/// the civil zone, converted to UTC, in basic RRULE UNTIL format. The same
/// cutoff applies to every interval; the interval alone decides which weeks
/// are included.
pub fn recurrence_until(term_end: NaiveDate, zone: &CivilZone) -> Result<String> {
    let wall = term_end
        .and_hms_opt(23, 59, 59)
        .ok_or_else(|| anyhow!("Invalid end-of-day time for {}", term_end))?;
    let cutoff = zone.resolve(wall)?;
    Ok(cutoff.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ").to_string())
}

/// Emits one recurring event per schedule entry. A discipline with zero
/// schedules contributes zero events.
pub fn build_events(
    disciplines: &[EnrichedDiscipline],
    term: &Term,
    zone: &CivilZone,
) -> Result<Vec<ClassEvent>> {
    let until = recurrence_until(term.end, zone)?;

    let mut events = Vec::new();
    for disc in disciplines {
        for sched in &disc.discipline.schedules {
            let date = first_occurrence(term.start, sched.day)
                + Duration::days(sched.frequency.start_offset_days());

            let professor = if disc.professor.is_empty() {
                "N/A"
            } else {
                disc.professor.as_str()
            };

            events.push(ClassEvent {
                title: disc.discipline.name.clone(),
                start: zone.resolve(date.and_time(sched.start))?,
                end: zone.resolve(date.and_time(sched.end))?,
                location: rooms::extract_room(&disc.raw_location, sched.day.pt_name()),
                description: format!(
                    "Prof: {}\nFrequência: {}",
                    professor,
                    sched.frequency.label()
                ),
                rrule: format!(
                    "FREQ=WEEKLY;INTERVAL={};UNTIL={}",
                    sched.frequency.interval(),
                    until
                ),
            });
        }
    }
    Ok(events)
}
