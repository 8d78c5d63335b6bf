//! Reference palette: the fixed table of named colors matched against
//!
//! Loading from CSV and code-to-name resolution both live here.

pub mod table;

pub use table::{NamedColor, PaletteRow, ReferencePalette};
