// File: src/model/adapter.rs
use crate::model::recurrence::{CivilZone, ClassEvent};
use chrono::Utc;
use icalendar::{Calendar, CalendarDateTime, Component, Event, EventLike};
use uuid::Uuid;

/// Serializes the generated events into an iCalendar document. Start/end go
/// out TZID-qualified in the civil zone; the RRULE (with its UTC UNTIL) is
/// injected as a raw property, which is how recurrence rules are written on
/// components the builder has no dedicated setter for.
pub fn to_ics(events: &[ClassEvent], zone: &CivilZone) -> String {
    let mut calendar = Calendar::new();
    calendar.name("Minhas Aulas");

    for ev in events {
        let mut event = Event::new();
        event.uid(&Uuid::new_v4().to_string());
        event.summary(&ev.title);
        event.timestamp(Utc::now());
        event.starts(CalendarDateTime::WithTimezone {
            date_time: ev.start.naive_local(),
            tzid: zone.tzid.clone(),
        });
        event.ends(CalendarDateTime::WithTimezone {
            date_time: ev.end.naive_local(),
            tzid: zone.tzid.clone(),
        });
        if !ev.location.is_empty() {
            event.location(&ev.location);
        }
        event.description(&ev.description);
        event.add_property("RRULE", ev.rrule.as_str());
        calendar.push(event);
    }

    calendar.to_string()
}
