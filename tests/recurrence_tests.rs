// File: tests/recurrence_tests.rs
use chrono::{Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use quadcal::model::recurrence::{
    CivilZone, Term, build_events, first_occurrence, recurrence_until,
};
use quadcal::model::{
    EnrichedDiscipline, Frequency, ParsedDiscipline, Schedule, Weekday,
};
use rrule::RRuleSet;
use std::str::FromStr;
use strum::IntoEnumIterator;

fn sao_paulo() -> CivilZone {
    CivilZone {
        offset: FixedOffset::west_opt(3 * 3600).unwrap(),
        tzid: "America/Sao_Paulo".to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn enriched(day: Weekday, frequency: Frequency, professor: &str) -> EnrichedDiscipline {
    EnrichedDiscipline {
        discipline: ParsedDiscipline {
            code: "ESTA001-17".to_string(),
            name: "DISPOSITIVOS ELETRÔNICOS".to_string(),
            section: String::new(),
            header_text: "DISPOSITIVOS ELETRÔNICOS".to_string(),
            schedules: vec![Schedule {
                day,
                start: hm(19, 0),
                end: hm(21, 0),
                frequency,
            }],
        },
        professor: professor.to_string(),
        raw_location: String::new(),
    }
}

#[test]
fn test_first_occurrence_on_term_start() {
    // 2026-02-02 is a Monday.
    assert_eq!(
        first_occurrence(date(2026, 2, 2), Weekday::Segunda),
        date(2026, 2, 2)
    );
}

#[test]
fn test_first_occurrence_wraps_forward_only() {
    // 2026-02-04 is a Wednesday: Monday classes start the following week,
    // never the one before the term.
    let start = date(2026, 2, 4);
    assert_eq!(first_occurrence(start, Weekday::Quarta), date(2026, 2, 4));
    assert_eq!(first_occurrence(start, Weekday::Quinta), date(2026, 2, 5));
    assert_eq!(first_occurrence(start, Weekday::Segunda), date(2026, 2, 9));
    assert_eq!(first_occurrence(start, Weekday::Terca), date(2026, 2, 10));
}

#[test]
fn test_first_occurrence_lands_on_requested_weekday() {
    let start = date(2026, 2, 4);
    for day in Weekday::iter() {
        let first = first_occurrence(start, day);
        assert_eq!(first.weekday().num_days_from_monday(), day.ordinal());
        let ahead = (first - start).num_days();
        assert!((0..7).contains(&ahead), "{} days ahead for {}", ahead, day);
    }
}

#[test]
fn test_recurrence_until_converts_to_utc() {
    // 23:59:59 on the last day in São Paulo is 02:59:59 UTC the next day.
    let until = recurrence_until(date(2026, 4, 25), &sao_paulo()).unwrap();
    assert_eq!(until, "20260426T025959Z");

    let utc_zone = CivilZone {
        offset: FixedOffset::east_opt(0).unwrap(),
        tzid: "UTC".to_string(),
    };
    let until = recurrence_until(date(2026, 4, 25), &utc_zone).unwrap();
    assert_eq!(until, "20260425T235959Z");
}

#[test]
fn test_build_events_weekly() {
    let term = Term {
        start: date(2026, 2, 2),
        end: date(2026, 4, 25),
    };
    let discs = vec![enriched(Weekday::Segunda, Frequency::Weekly, "FULANA DOCENTE")];
    let events = build_events(&discs, &term, &sao_paulo()).unwrap();
    assert_eq!(events.len(), 1);

    let ev = &events[0];
    assert_eq!(ev.title, "DISPOSITIVOS ELETRÔNICOS");
    assert_eq!(
        ev.start.naive_local(),
        date(2026, 2, 2).and_time(hm(19, 0))
    );
    assert_eq!(
        ev.start.with_timezone(&Utc).naive_utc(),
        date(2026, 2, 2).and_time(hm(22, 0))
    );
    assert_eq!(ev.end.naive_local(), date(2026, 2, 2).and_time(hm(21, 0)));
    assert_eq!(
        ev.rrule,
        "FREQ=WEEKLY;INTERVAL=1;UNTIL=20260426T025959Z"
    );
    assert_eq!(
        ev.description,
        "Prof: FULANA DOCENTE\nFrequência: Semanal"
    );
    // No raw location at all: the room says to check the source document.
    assert_eq!(ev.location, "Verificar PDF");
}

#[test]
fn test_build_events_empty_professor_becomes_na() {
    let term = Term {
        start: date(2026, 2, 2),
        end: date(2026, 4, 25),
    };
    let discs = vec![enriched(Weekday::Segunda, Frequency::Weekly, "")];
    let events = build_events(&discs, &term, &sao_paulo()).unwrap();
    assert_eq!(events[0].description, "Prof: N/A\nFrequência: Semanal");
}

#[test]
fn test_parity_ii_starts_on_second_week() {
    let term = Term {
        start: date(2026, 2, 4),
        end: date(2026, 4, 25),
    };

    let discs = vec![enriched(Weekday::Quarta, Frequency::BiweeklyII, "X Y")];
    let events = build_events(&discs, &term, &sao_paulo()).unwrap();
    assert_eq!(events[0].start.date_naive(), date(2026, 2, 11));

    let discs = vec![enriched(Weekday::Quarta, Frequency::BiweeklyI, "X Y")];
    let events = build_events(&discs, &term, &sao_paulo()).unwrap();
    assert_eq!(events[0].start.date_naive(), date(2026, 2, 4));
    assert_eq!(
        events[0].rrule,
        "FREQ=WEEKLY;INTERVAL=2;UNTIL=20260426T025959Z"
    );
}

#[test]
fn test_discipline_without_schedules_yields_no_events() {
    let term = Term {
        start: date(2026, 2, 2),
        end: date(2026, 4, 25),
    };
    let mut disc = enriched(Weekday::Segunda, Frequency::Weekly, "");
    disc.discipline.schedules.clear();
    let events = build_events(&[disc], &term, &sao_paulo()).unwrap();
    assert!(events.is_empty());
}

#[test]
fn test_biweekly_rule_expands_every_other_week() {
    // Validate the emitted rule against an actual RRULE evaluator, seeded
    // with the event's UTC start.
    let term = Term {
        start: date(2026, 2, 4),
        end: date(2026, 4, 25),
    };
    let discs = vec![enriched(Weekday::Quarta, Frequency::BiweeklyII, "X Y")];
    let events = build_events(&discs, &term, &sao_paulo()).unwrap();

    let dtstart = events[0]
        .start
        .with_timezone(&Utc)
        .format("%Y%m%dT%H%M%SZ")
        .to_string();
    let rule = format!("DTSTART:{}\nRRULE:{}\n", dtstart, events[0].rrule);
    let rrule_set = RRuleSet::from_str(&rule).unwrap();

    let dates: Vec<_> = rrule_set
        .into_iter()
        .take(20)
        .map(|d| d.to_utc())
        .collect();

    // Feb 11, Feb 25, Mar 11, Mar 25, Apr 8, Apr 22 (local dates).
    assert_eq!(dates.len(), 6);
    assert_eq!(dates[0].date_naive(), date(2026, 2, 11));
    assert_eq!(dates[5].date_naive(), date(2026, 4, 22));
    for pair in dates.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::days(14));
    }
}
