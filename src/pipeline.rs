// File: src/pipeline.rs
//! End-to-end orchestration for one submission: load the table, parse the
//! summary, cross-reference, generate events, serialize.
//!
//! Everything runs synchronously on exclusively-owned data; expected
//! ambiguity (no table match, no room found) degrades to placeholders inside
//! the steps, and only structurally unexpected failures come back as errors.

use crate::config::Config;
use crate::model::EnrichedDiscipline;
use crate::model::{adapter, matcher, parser, recurrence};
use crate::table::{ClassTable, Page};
use anyhow::{Error, Result, anyhow};

/// User-facing message for the "nothing parsed" case: an input problem
/// (wrong paste, truncated summary), not a fault.
pub const NO_DISCIPLINES_MSG: &str =
    "Não encontrei nenhuma disciplina no texto colado. Verifique se copiou o resumo inteiro.";

#[derive(Debug)]
pub struct RunReport {
    pub ics: String,
    pub disciplines: usize,
    pub events: usize,
}

pub fn run(enrollment_text: &str, pages: &[Page], config: &Config) -> Result<RunReport> {
    let table = ClassTable::from_pages(pages);
    log::info!("Rooms table loaded: {} rows", table.len());

    let parsed = parser::parse_enrollment(enrollment_text);
    if parsed.is_empty() {
        return Err(anyhow!(NO_DISCIPLINES_MSG));
    }
    log::info!("Parsed {} disciplines from the enrollment summary", parsed.len());

    let enriched: Vec<EnrichedDiscipline> = parsed
        .into_iter()
        .map(|disc| matcher::enrich(disc, &table))
        .collect();

    let zone = config.zone()?;
    let events = recurrence::build_events(&enriched, &config.term(), &zone)?;
    log::info!("Generated {} recurring events", events.len());

    Ok(RunReport {
        disciplines: enriched.len(),
        events: events.len(),
        ics: adapter::to_ics(&events, &zone),
    })
}

/// Detects the recoverable "no disciplines parsed" condition so the binary
/// can show the friendly message instead of the technical-error wrapper.
pub fn is_empty_enrollment_error(err: &Error) -> bool {
    err.to_string().contains("nenhuma disciplina")
}
