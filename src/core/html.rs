// src/core/html.rs
// DOM helpers over `scraper`. The parser follows the HTML5 tree rules, so
// implied end tags (`<td>` without `</td>`, `<tr>` without `</tr>`) and the
// full named-entity table are handled before we ever see the text.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::clean_text;
use crate::error::{Error, Result};

pub fn parse(html_doc: &str) -> Html {
    Html::parse_document(html_doc)
}

/// Compile a CSS selector, mapping a bad pattern onto the crate error.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// Nearest ancestor element named `tag` (lowercase).
pub fn enclosing<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|anc| anc.value().name() == tag)
}

/// Visible text of an element: descendant text joined, line breaks removed, trimmed.
pub fn element_text(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}
