// File: ./src/table.rs
// Normalizes the externally-extracted rooms/instructors table.
//
// The PDF table extraction itself is an external collaborator; this module
// only consumes its output: a page-ordered sequence of rows of nullable text
// cells, delivered as a JSON document.

use anyhow::Result;
use std::fs;
use std::path::Path;

pub type Cell = Option<String>;
pub type Row = Vec<Cell>;
pub type Page = Vec<Row>;

/// First-cell value marking a repeated column-header row on every page.
pub const HEADER_SENTINEL: &str = "CURSO";

const COLUMN_COUNT: usize = 10;

/// One normalized table row. Content is taken verbatim; malformed schedule
/// text in the theory/practice fields is tolerated here and dealt with (or
/// not) by the room extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRow {
    pub course: String,
    pub code: String,
    pub class_section: String,
    pub theory: String,
    pub practice: String,
    pub theory_instructor_1: String,
    pub theory_instructor_2: String,
    pub theory_instructor_3: String,
    pub practice_instructor_1: String,
    pub practice_instructor_2: String,
}

#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    pub rows: Vec<ClassRow>,
}

impl ClassTable {
    /// Flattens all pages into one row set, dropping header sentinel rows
    /// and rows that do not carry the full ten columns (rows with more are
    /// truncated to the first ten). An empty result is not an error.
    pub fn from_pages(pages: &[Page]) -> Self {
        let mut rows = Vec::new();
        for row in pages.iter().flatten() {
            if row.first().and_then(|c| c.as_deref()) == Some(HEADER_SENTINEL) {
                continue;
            }
            let cells: Vec<&str> = row
                .iter()
                .take(COLUMN_COUNT)
                .map(|c| c.as_deref().unwrap_or(""))
                .collect();
            if cells.len() < COLUMN_COUNT {
                continue;
            }
            rows.push(ClassRow {
                course: cells[0].to_string(),
                code: cells[1].to_string(),
                class_section: cells[2].to_string(),
                theory: cells[3].to_string(),
                practice: cells[4].to_string(),
                theory_instructor_1: cells[5].to_string(),
                theory_instructor_2: cells[6].to_string(),
                theory_instructor_3: cells[7].to_string(),
                practice_instructor_1: cells[8].to_string(),
                practice_instructor_2: cells[9].to_string(),
            });
        }
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Decodes the extractor's page document: `pages[rows[cells]]` with nullable
/// string cells.
pub fn pages_from_json(data: &str) -> Result<Vec<Page>> {
    serde_json::from_str(data)
        .map_err(|e| anyhow::anyhow!("Failed to parse extracted table document: {}", e))
}

/// Reads and decodes the page document with contextualized errors.
pub fn load_pages(path: &Path) -> Result<Vec<Page>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!("Failed to read table document '{}': {}", path.display(), e)
    })?;
    pages_from_json(&contents)
}
