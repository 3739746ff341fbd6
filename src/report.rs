// src/report.rs
// Fixed-width text rendering of cartridge records.
//
// Layout per line:
//   cartridge (left, 20) | "(letter)" (left, 4) | part | level (right, 5) | status
// with four-space gaps between the last four columns.

use crate::cartridge::CartridgeRecord;

const NAME_W: usize = 20;
const LETTER_W: usize = 4;
const LEVEL_W: usize = 5;
const GAP: &str = "    ";

/// One line per record, each terminated by `\n`. Empty input gives `""`.
pub fn format_report(records: &[CartridgeRecord]) -> String {
    let mut out = String::new();
    for rec in records {
        let letter = join!("(", &rec.letter, ")");
        out.push_str(&format!(
            "{:<NAME_W$}{:<LETTER_W$}{GAP}{}{GAP}{:>LEVEL_W$}{GAP}{}\n",
            rec.cartridge, letter, rec.part, rec.level, rec.status
        ));
    }
    out
}

/// Columns recovered from a formatted line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub cartridge: String,
    pub letter: String,
    pub part: String,
    pub level: String,
    pub status: String,
}

/// Inverse of one `format_report` line. Assumes names fit their columns and
/// part numbers contain no four-space runs.
pub fn parse_report_line(line: &str) -> Option<ReportLine> {
    let line = line.trim_end_matches('\n');
    let (name, rest) = split_at_char(line, NAME_W)?;
    let (letter, rest) = split_at_char(rest, LETTER_W)?;
    let rest = rest.strip_prefix(GAP)?;
    let (part, rest) = rest.split_once(GAP)?;
    let (level, status) = rest.trim_start().split_once(GAP)?;

    Some(ReportLine {
        cartridge: s!(name.trim_end()),
        letter: s!(letter.trim_end().trim_start_matches('(').trim_end_matches(')')),
        part: s!(part),
        level: s!(level),
        status: s!(status),
    })
}

fn split_at_char(s: &str, n: usize) -> Option<(&str, &str)> {
    match s.char_indices().nth(n) {
        Some((ix, _)) => Some(s.split_at(ix)),
        None if s.chars().count() == n => Some((s, "")),
        None => None,
    }
}
