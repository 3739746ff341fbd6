// src/cartridge.rs
use crate::error::{Error, Result};

/// Column order of the device's "Cartridges" table.
/// The Nth `<td>` of a body row fills the Nth field.
pub const FIELDS: [&str; 7] = ["letter", "cartridge", "status", "level", "capacity", "warranty", "part"];

/// One row of the ink-status table. Built once per fetch and never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartridgeRecord {
    pub letter: String,
    pub cartridge: String,
    pub status: String,
    pub level: String,
    pub capacity: String,
    pub warranty: String,
    pub part: String,
}

impl CartridgeRecord {
    /// Map cells onto `FIELDS` positionally. Missing trailing cells stay empty,
    /// surplus cells are ignored.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rec = Self::default();
        for (field, cell) in FIELDS.iter().zip(cells) {
            *rec.field_mut(field) = cell.into();
        }
        rec
    }

    fn field_mut(&mut self, name: &str) -> &mut String {
        match name {
            "letter" => &mut self.letter,
            "cartridge" => &mut self.cartridge,
            "status" => &mut self.status,
            "level" => &mut self.level,
            "capacity" => &mut self.capacity,
            "warranty" => &mut self.warranty,
            "part" => &mut self.part,
            other => unreachable!("unknown cartridge field {other}"),
        }
    }

    /// Level with its unit marker removed: `"45 %"` and `"45%"` both give `"45"`.
    pub fn level_key(&self) -> Result<&str> {
        let key = self.level.trim_end_matches(|c: char| !c.is_ascii_digit());
        if key.is_empty() {
            return Err(Error::MissingLevel { cartridge: self.cartridge.clone() });
        }
        Ok(key)
    }
}
