// atmct/src/lookup/resolvers.rs

//! Bundle of the four lookup tables.

use std::path::Path;

use super::{Fallback, NameTable};
use crate::Result;

/// The four lookup tables used when presenting a decoded card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolvers {
    /// Operating companies
    pub operators: NameTable,
    /// Lines; unknown codes render as the bare number
    pub lines: NameTable,
    /// Stops
    pub stops: NameTable,
    /// Fare titles
    pub titles: NameTable,
}

impl Default for Resolvers {
    fn default() -> Self {
        Self {
            operators: NameTable::new(Fallback::NotFound),
            // Unknown lines are shown by number.
            lines: NameTable::new(Fallback::Code),
            stops: NameTable::new(Fallback::NotFound),
            titles: NameTable::new(Fallback::NotFound),
        }
    }
}

impl Resolvers {
    /// Operator table file name
    pub const OPERATORS_FILE: &'static str = "companies.json";
    /// Line table file name
    pub const LINES_FILE: &'static str = "lines.json";
    /// Stop table file name
    pub const STOPS_FILE: &'static str = "stops.json";
    /// Fare title table file name
    pub const TITLES_FILE: &'static str = "titles.json";

    /// Load all four tables from a data directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let defaults = Self::default();
        Ok(Self {
            operators: NameTable::from_path(
                dir.join(Self::OPERATORS_FILE),
                defaults.operators.fallback(),
            )?,
            lines: NameTable::from_path(dir.join(Self::LINES_FILE), defaults.lines.fallback())?,
            stops: NameTable::from_path(dir.join(Self::STOPS_FILE), defaults.stops.fallback())?,
            titles: NameTable::from_path(dir.join(Self::TITLES_FILE), defaults.titles.fallback())?,
        })
    }

    /// Operator name or fallback.
    pub fn operator(&self, code: u8) -> String {
        self.operators.resolve(u32::from(code))
    }

    /// Line name or its number.
    pub fn line(&self, code: u16) -> String {
        self.lines.resolve(u32::from(code))
    }

    /// Stop name or fallback.
    pub fn stop(&self, code: u16) -> String {
        self.stops.resolve(u32::from(code))
    }

    /// Fare title name or fallback.
    pub fn title(&self, code: u8) -> String {
        self.titles.resolve(u32::from(code))
    }
}
