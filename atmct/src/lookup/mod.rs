// atmct/src/lookup/mod.rs

//! Code → name lookups for operators, lines, stops and fare titles.
//!
//! Tables are plain values loaded once and passed to whoever renders a
//! decoded card. The decoder itself never consults them.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::Result;

mod resolvers;
pub use resolvers::Resolvers;

/// Anything that can map a raw code to a display name.
pub trait Lookup {
    /// Name for `code`, if known.
    fn lookup(&self, code: u32) -> Option<&str>;
}

/// What to show for a code missing from the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fallback {
    /// `"Not found (42)"`
    #[default]
    NotFound,
    /// The bare code, `"42"`
    Code,
}

impl Fallback {
    /// Render an unknown `code`.
    pub fn render(self, code: u32) -> String {
        match self {
            Fallback::NotFound => format!("Not found ({})", code),
            Fallback::Code => code.to_string(),
        }
    }
}

/// One row of a lookup file. Both generic and per-table field names are
/// accepted.
#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(alias = "companyId", alias = "lineId", alias = "stopId", alias = "titleId")]
    id: u32,
    #[serde(
        alias = "companyName",
        alias = "lineName",
        alias = "stopName",
        alias = "titleName"
    )]
    name: String,
}

/// One code → name table with its fallback rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    names: HashMap<u32, String>,
    fallback: Fallback,
}

impl NameTable {
    /// Empty table.
    pub fn new(fallback: Fallback) -> Self {
        Self {
            names: HashMap::new(),
            fallback,
        }
    }

    /// Build from `(code, name)` pairs; the first name for a code wins.
    pub fn with_entries<I, S>(fallback: Fallback, entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        let mut table = Self::new(fallback);
        for (code, name) in entries {
            table.names.entry(code).or_insert_with(|| name.into());
        }
        table
    }

    /// Parse a JSON array of `{ "id": .., "name": .. }` objects.
    pub fn from_json_str(json: &str, fallback: Fallback) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries, fallback))
    }

    /// Parse a JSON table from any reader.
    pub fn from_reader<R: Read>(reader: R, fallback: Fallback) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(entries, fallback))
    }

    /// Load a JSON table file.
    pub fn from_path(path: impl AsRef<Path>, fallback: Fallback) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(BufReader::new(File::open(path)?), fallback)?;
        log::info!("loaded {} entries from {}", table.len(), path.display());
        Ok(table)
    }

    fn from_entries(entries: Vec<Entry>, fallback: Fallback) -> Self {
        Self::with_entries(fallback, entries.into_iter().map(|e| (e.id, e.name)))
    }

    /// Rendering used for unknown codes.
    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no code is known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name for `code`, or the fallback rendering when unknown.
    pub fn resolve(&self, code: u32) -> String {
        match self.lookup(code) {
            Some(name) => name.to_string(),
            None => self.fallback.render(code),
        }
    }
}

impl Lookup for NameTable {
    fn lookup(&self, code: u32) -> Option<&str> {
        self.names.get(&code).map(String::as_str)
    }
}
