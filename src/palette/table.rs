//! CSV-backed reference palette table and name resolution
//!
//! The table layout follows the colorhexa-derived `colors.csv` convention:
//! columns `color` (name), `code` (`#` + 6 hex digits), and integer `R`,
//! `G`, `B` channels. The table is loaded once and is immutable for the run.

use crate::error::{DetectError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One row of the reference palette table
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteRow {
    /// Human-readable color name
    #[serde(rename = "color")]
    pub name: String,

    /// Hex code in stored form, with the leading `#` marker
    pub code: String,

    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
}

/// Final output row: a resolved (name, code) association.
///
/// `code` carries the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub code: String,
}

/// The reference palette, with a precomputed code-to-name index.
///
/// The index is keyed by marker-stripped code so resolution is O(1) per code
/// instead of a palette re-scan. When two rows share a code, the first row's
/// name wins, matching first-match scan semantics.
#[derive(Debug, Clone)]
pub struct ReferencePalette {
    rows: Vec<PaletteRow>,
    names_by_code: HashMap<String, String>,
}

impl ReferencePalette {
    /// Load the palette from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::PaletteLoad`] if the file cannot be read, a
    /// row fails to parse, or a code is not `#` followed by 6 hex digits.
    /// A table with headers but zero rows loads successfully; emptiness is
    /// diagnosed later by the matcher.
    pub fn from_csv_file(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            DetectError::palette_load(
                format!("Failed to open palette table: {}", path.display()),
                e,
            )
        })?;

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: PaletteRow = record.map_err(|e| {
                DetectError::palette_load(
                    format!("Malformed row in palette table: {}", path.display()),
                    e,
                )
            })?;
            validate_code(&row.code)?;
            rows.push(row);
        }

        info!("loaded {} palette rows from {}", rows.len(), path.display());
        Ok(Self::from_rows(rows))
    }

    /// Build a palette from in-memory rows, precomputing the name index
    pub fn from_rows(rows: Vec<PaletteRow>) -> Self {
        let mut names_by_code = HashMap::new();
        for row in &rows {
            let stripped = row.code.trim_start_matches('#').to_string();
            names_by_code.entry(stripped).or_insert_with(|| row.name.clone());
        }
        Self {
            rows,
            names_by_code,
        }
    }

    /// All rows, in table order
    pub fn rows(&self) -> &[PaletteRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve matched codes to (name, `#code`) associations.
    ///
    /// Output order equals input order, so the most dominant detected color
    /// stays first. Empty input yields empty output.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::UnknownCode`] if a code has no palette row.
    /// The matcher only emits palette codes, so this is defensive.
    pub fn resolve(&self, codes: &[String]) -> Result<Vec<NamedColor>> {
        codes
            .iter()
            .map(|code| {
                let name = self.names_by_code.get(code.as_str()).ok_or_else(|| {
                    DetectError::UnknownCode { code: code.clone() }
                })?;
                Ok(NamedColor {
                    name: name.clone(),
                    code: format!("#{}", code),
                })
            })
            .collect()
    }
}

fn validate_code(code: &str) -> Result<()> {
    let hex = code.strip_prefix('#');
    let valid = matches!(hex, Some(h) if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()));
    if valid {
        Ok(())
    } else {
        Err(DetectError::PaletteLoad {
            message: format!(
                "Invalid color code {:?}: expected '#' followed by 6 hex digits",
                code
            ),
            source: None,
        })
    }
}
