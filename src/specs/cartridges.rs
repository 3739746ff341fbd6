// src/specs/cartridges.rs
//! Spec for the device's ink status page.
//!
//! The page carries several tables; the one we want is identified by its
//! `<caption>Cartridges</caption>`. Its first row is the header, every
//! following row is one cartridge slot mapped onto `cartridge::FIELDS`.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::cartridge::CartridgeRecord;
use crate::core::html::{self, element_text, enclosing, selector};
use crate::error::{Error, Result};

/// Caption text that marks the ink table.
pub const CAPTION: &str = "Cartridges";

/// Decode the cartridge table into records, in document order.
pub fn extract(html_doc: &str) -> Result<Vec<CartridgeRecord>> {
    let doc = html::parse(html_doc);
    let table = find_table(&doc)?.ok_or(Error::TableNotFound)?;

    let tr = selector("tr")?;
    let mut records = Vec::new();
    // rows of nested tables belong to those tables
    let rows = table
        .select(&tr)
        .filter(|row| enclosing(*row, "table").map(|t| t.id()) == Some(table.id()));
    for row in rows.skip(1) {
        let cells: Vec<String> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| cell.value().name() == "td")
            .map(element_text)
            .collect();
        // extra <th>-only header rows
        if cells.is_empty() {
            continue;
        }
        records.push(CartridgeRecord::from_cells(cells));
    }

    debug!(count = records.len(), "cartridge rows extracted");
    Ok(records)
}

/// The table enclosing the first caption that reads exactly `CAPTION`.
fn find_table(doc: &Html) -> Result<Option<ElementRef<'_>>> {
    let caption = selector("caption")?;
    Ok(doc
        .select(&caption)
        .find(|cap| element_text(*cap) == CAPTION)
        .and_then(|cap| enclosing(cap, "table")))
}
