//! Locating and rewriting a table inside an HTML document.
//!
//! This is not a general HTML parser. It finds `<table>`, `<tr>`, `<th>` and `<td>` tags, which
//! is enough to treat a table's cells as a [`HostTable`], and leaves every other byte of the
//! document alone when rendering it back out. Comments are skipped, and quoted attribute values
//! may contain `>`.

use std::{ops::Range, sync::OnceLock};

use regex::Regex;

use crate::{
    table::HostTable,
    utils::error::{TableError, TableResult},
};

/// Matches a comment, or one of the opening and closing tags we care about. For tags, group 1
/// is the slash of a closing tag and group 2 the tag name. An unterminated comment runs to the
/// end of the document.
fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(r#"(?is)<!--.*?(?:-->|\z)|<(/?)(table|tr|td|th)\b(?:"[^"]*"|'[^']*'|[^"'>])*>"#)
            .expect("tag regex should be valid")
    })
}

/// Matches one attribute of a tag, including its leading whitespace. Group 1 is the name, and
/// one of groups 2 to 4 holds the value, depending on quoting.
fn attribute_regex() -> &'static Regex {
    static ATTRIBUTE: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE.get_or_init(|| {
        Regex::new(r#"\s*([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
            .expect("attribute regex should be valid")
    })
}

/// A tag found by [`tag_regex`].
struct Tag<'a> {
    span: Range<usize>,
    text: &'a str,
    closing: bool,
    name: &'a str,
}

/// The tags in `source` from `start` on, without comments.
fn tags(source: &str, start: usize) -> impl Iterator<Item = Tag<'_>> {
    tag_regex()
        .captures_iter(&source[start..])
        .filter_map(move |caps| {
            let whole = caps.get(0)?;
            let name = caps.get(2)?.as_str();

            Some(Tag {
                span: (whole.start() + start)..(whole.end() + start),
                text: whole.as_str(),
                closing: caps.get(1).is_some_and(|slash| !slash.is_empty()),
                name,
            })
        })
}

/// An attribute of a tag. Its span includes the leading whitespace.
struct Attribute<'a> {
    span: Range<usize>,
    name: &'a str,
    value: Option<&'a str>,
}

/// Returns where the name of a tag ends, e.g. 3 for `<th class="x">`.
fn tag_name_end(tag: &str) -> usize {
    tag.char_indices()
        .skip(1)
        .find(|(_, c)| !c.is_ascii_alphanumeric())
        .map(|(index, _)| index)
        .unwrap_or(tag.len())
}

/// The attributes of an opening tag, in order.
fn attributes(tag: &str) -> impl Iterator<Item = Attribute<'_>> {
    let name_end = tag_name_end(tag);

    attribute_regex()
        .captures_iter(&tag[name_end..])
        .filter_map(move |caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str());

            Some(Attribute {
                span: (whole.start() + name_end)..(whole.end() + name_end),
                name,
                value,
            })
        })
}

/// Returns the value of the `id` attribute of an opening tag, if it has one.
fn tag_id(tag: &str) -> Option<&str> {
    attributes(tag)
        .find(|attr| attr.name.eq_ignore_ascii_case("id"))
        .and_then(|attr| attr.value)
}

/// An HTML document that tables can be pulled out of.
#[derive(Clone, Debug)]
pub struct HtmlDocument {
    source: String,
}

impl HtmlDocument {
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The ids of every table in the document, in document order.
    pub fn table_ids(&self) -> Vec<&str> {
        tags(&self.source, 0)
            .filter(|tag| !tag.closing && tag.name.eq_ignore_ascii_case("table"))
            .filter_map(|tag| tag_id(tag.text))
            .collect()
    }

    /// Finds the table whose `id` attribute is `id`.
    pub fn table(self, id: &str) -> TableResult<HtmlTable> {
        let start = tags(&self.source, 0)
            .filter(|tag| !tag.closing && tag.name.eq_ignore_ascii_case("table"))
            .find(|tag| tag_id(tag.text) == Some(id))
            .map(|tag| tag.span.end);

        let Some(start) = start else {
            debug!(
                "table '{id}' not found, the document has tables {:?}",
                self.table_ids()
            );
            return Err(TableError::NotFound(id.to_string()));
        };

        let rows = scan_rows(&self.source, start);
        trace!("found table '{id}' with {} rows", rows.len());

        Ok(HtmlTable {
            id: id.to_string(),
            source: self.source,
            rows,
        })
    }
}

/// A single `<th>` or `<td>` cell.
#[derive(Clone, Debug)]
struct HtmlCell {
    /// Where the opening tag is in the source.
    tag: Range<usize>,
    /// Where the inner HTML is in the source.
    inner: Range<usize>,
    /// The opening tag, possibly rewritten.
    open_tag: String,
    /// The inner HTML, possibly rewritten.
    content: String,
}

/// Walks the tags after a table's opening tag, and collects its rows and cells.
///
/// Rows and cells of nested tables are skipped. A cell ends at its closing tag, or at the
/// next cell, row, or end of the table if the closing tag was omitted.
fn scan_rows(source: &str, start: usize) -> Vec<Vec<HtmlCell>> {
    let mut rows: Vec<Vec<HtmlCell>> = Vec::new();
    let mut open_cell: Option<(Range<usize>, usize)> = None;
    let mut in_row = false;
    let mut depth = 1;

    let close_cell = |rows: &mut Vec<Vec<HtmlCell>>,
                      open: &mut Option<(Range<usize>, usize)>,
                      end: usize| {
        if let Some((tag, inner_start)) = open.take() {
            let cell = HtmlCell {
                open_tag: source[tag.clone()].to_string(),
                content: source[inner_start..end].to_string(),
                tag,
                inner: inner_start..end,
            };

            match rows.last_mut() {
                Some(row) => row.push(cell),
                None => rows.push(vec![cell]),
            }
        }
    };

    for tag in tags(source, start) {
        let name = tag.name.to_ascii_lowercase();

        if name == "table" {
            if tag.closing {
                depth -= 1;
                if depth == 0 {
                    close_cell(&mut rows, &mut open_cell, tag.span.start);
                    break;
                }
            } else {
                depth += 1;
            }
            continue;
        }

        if depth > 1 {
            continue;
        }

        close_cell(&mut rows, &mut open_cell, tag.span.start);
        match (name.as_str(), tag.closing) {
            ("tr", false) => {
                rows.push(Vec::new());
                in_row = true;
            }
            ("tr", true) => {
                in_row = false;
            }
            (_, false) => {
                // A cell outside of any row starts a new row, as it does in a browser.
                if !in_row {
                    rows.push(Vec::new());
                    in_row = true;
                }
                open_cell = Some((tag.span.clone(), tag.span.end));
            }
            (_, true) => {}
        }
    }

    // An unterminated table runs to the end of the document.
    close_cell(&mut rows, &mut open_cell, source.len());

    rows
}

/// A table inside an HTML document, whose cells can be read and rewritten.
///
/// The text of a cell is its inner HTML, verbatim.
#[derive(Clone, Debug)]
pub struct HtmlTable {
    id: String,
    source: String,
    rows: Vec<Vec<HtmlCell>>,
}

impl HtmlTable {
    /// The id of the table.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Wires every header cell up to call `handler` with its own zero-based column index when
    /// clicked, e.g. `<th onclick="sortBy(2)">`. Any existing `onclick` is replaced.
    pub fn wire_headers(&mut self, handler: &str) -> TableResult<()> {
        let Some(header) = self.rows.first_mut() else {
            return Err(TableError::MissingHeader);
        };

        for (column, cell) in header.iter_mut().enumerate() {
            let tag = cell.open_tag.as_str();
            let mut stripped = String::with_capacity(tag.len());
            let mut cursor = 0;
            for onclick in attributes(tag).filter(|attr| attr.name.eq_ignore_ascii_case("onclick")) {
                stripped.push_str(&tag[cursor..onclick.span.start]);
                cursor = onclick.span.end;

                // Keep the next attribute apart from the previous one.
                if !tag[cursor..].starts_with(|c: char| c.is_whitespace() || c == '>' || c == '/') {
                    stripped.push(' ');
                }
            }
            stripped.push_str(&tag[cursor..]);

            let name_end = tag_name_end(&stripped);

            cell.open_tag = format!(
                "{} onclick=\"{handler}({column})\"{}",
                &stripped[..name_end],
                &stripped[name_end..]
            );
        }

        debug!("wired {} header cells of '{}' to {handler}", header.len(), self.id);

        Ok(())
    }

    /// Renders the whole document, with every rewritten cell and header in place.
    pub fn to_html(&self) -> String {
        let mut edits: Vec<(&Range<usize>, &str)> = self
            .rows
            .iter()
            .flatten()
            .flat_map(|cell| {
                [
                    (&cell.tag, cell.open_tag.as_str()),
                    (&cell.inner, cell.content.as_str()),
                ]
            })
            .collect();
        edits.sort_by_key(|(range, _)| range.start);

        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for (range, replacement) in edits {
            out.push_str(&self.source[cursor..range.start]);
            out.push_str(replacement);
            cursor = range.end;
        }
        out.push_str(&self.source[cursor..]);

        out
    }
}

impl HostTable for HtmlTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell_count(&self, row: usize) -> usize {
        self.rows[row].len()
    }

    fn cell_text(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column].content
    }

    fn set_cell_text(&mut self, row: usize, column: usize, text: &str) {
        let cell = &mut self.rows[row][column];
        cell.content.clear();
        cell.content.push_str(text);
    }
}
