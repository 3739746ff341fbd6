// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows where the data lives on one device page and how to pull it
//! out. Specs are pure: they take the fetched document and return typed
//! records. Fetching, filtering and notification live elsewhere.
//!
//! ## Conventions
//! - Tag detection is case-insensitive and scoped to the smallest known block
//!   (the captioned `<table>`, then each `<tr>`).
//! - Column shapes are fixed per page and documented next to the record type
//!   (`cartridge::FIELDS`).
//! - Specs are testable offline against saved pages in `tests/fixtures/`.
pub mod cartridges;
