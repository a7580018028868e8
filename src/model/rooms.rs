// File: src/model/rooms.rs
//! Room extraction from the raw "Teoria: ... Prática: ..." location text.
//!
//! The table writes rooms inline in the schedule columns, e.g.
//! "Segunda das 19:00 às 21:00, sala S-301-1, semanal". The extractor first
//! looks for a room mentioned after the target weekday; failing that it
//! takes the first room anywhere and flags it as uncertain.

/// Sentinel meaning the source document has to be checked by hand.
pub const CHECK_SOURCE: &str = "Verificar PDF";

/// Extracts the most specific room label for `weekday` (lowercase, no shift
/// suffix) from the combined location text.
pub fn extract_room(raw_location: &str, weekday: &str) -> String {
    if raw_location.trim().is_empty() {
        return CHECK_SOURCE.to_string();
    }
    let clean = raw_location.replace('\n', " ");

    // Day-specific mention first, then any room with an uncertainty marker.
    let candidate = find_ci(&clean, weekday)
        .and_then(|(_, day_end)| find_room_token(&clean[day_end..]))
        .map(str::to_string)
        .or_else(|| find_room_token(&clean).map(|token| format!("{} (?)", token)));

    match candidate {
        Some(token) => format!("Sala {}", strip_frequency_note(&token)),
        None => CHECK_SOURCE.to_string(),
    }
}

/// Finds `sala <token>` where the token runs up to the next comma (or end of
/// text). "sala" must be followed by whitespace; occurrences with nothing
/// usable after them are skipped. Original casing of the token is kept.
fn find_room_token(text: &str) -> Option<&str> {
    let mut from = 0;
    while let Some((start, end)) = find_ci(&text[from..], "sala") {
        let at = from + start;
        let after = &text[from + end..];
        let body = after.trim_start();
        if body.len() < after.len() && !body.is_empty() && !body.starts_with(',') {
            let token = match body.find(',') {
                Some(comma) => &body[..comma],
                None => body,
            };
            let token = token.trim();
            if !token.is_empty() {
                return Some(token);
            }
        }
        from = at + 1;
    }
    None
}

/// Cuts a trailing "semanal"/"quinzenal" annotation (and everything after
/// it) off an extracted token.
fn strip_frequency_note(token: &str) -> String {
    let cut = ["semanal", "quinzenal"]
        .iter()
        .filter_map(|kw| find_ci(token, kw).map(|(start, _)| start))
        .min();
    match cut {
        Some(idx) => token[..idx].trim_end().to_string(),
        None => token.to_string(),
    }
}

/// Case-insensitive substring search returning the byte range of the match
/// in the original haystack. `needle` must already be lowercase.
fn find_ci(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return Some((0, 0));
    }
    let hay: Vec<(usize, char)> = haystack.char_indices().collect();

    'outer: for first in 0..hay.len() {
        let mut pos = first;
        for &nc in &needle {
            let Some(&(_, hc)) = hay.get(pos) else {
                continue 'outer;
            };
            if hc.to_lowercase().next() != Some(nc) {
                continue 'outer;
            }
            pos += 1;
        }
        let end = hay.get(pos).map_or(haystack.len(), |&(i, _)| i);
        return Some((hay[first].0, end));
    }
    None
}
