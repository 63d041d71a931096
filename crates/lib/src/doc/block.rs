//! One-entry-per-line layout for arrays.
//!
//! [`BlockList::take`] lifts the entries out of an [`Array`] together with
//! the comments around them; [`BlockList::write`] puts them back one per line
//! with a trailing comma. In between the entries can be filtered, sorted and
//! extended, and every comment travels with the entry it belongs to:
//!
//! ```toml
//! dependencies = [ # opening comment
//!   # above "effect"
//!   "effect", # after "effect"
//!   "prelude",
//!   # closing comment
//! ]
//! ```

use toml_edit::{Array, RawString, Value};

const DEFAULT_INDENT: &str = "  ";

/// An array entry and the comments attached to it.
#[derive(Debug, Clone)]
pub struct BlockEntry {
    value: Value,
    /// Comment lines on their own lines directly above the entry
    above: Vec<String>,
    /// Comment at the end of the entry's line
    after: Option<String>,
}

impl BlockEntry {
    /// Creates an entry with no comments
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            above: Vec::new(),
            after: None,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Swaps in a new value, keeping the entry's comments
    pub fn replace_value(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(&mut self.value, value.into())
    }

    pub fn comments_above(&self) -> &[String] {
        &self.above
    }

    pub fn comment_after(&self) -> Option<&str> {
        self.after.as_deref()
    }

    fn attach_after(&mut self, comment: String) {
        self.after = Some(match self.after.take() {
            Some(existing) => format!("{existing} {comment}"),
            None => comment,
        });
    }
}

/// The entries of an array, lifted out for rewriting.
#[derive(Debug, Clone, Default)]
pub struct BlockList {
    indent: String,
    /// Comment after the opening bracket
    opening: Option<String>,
    entries: Vec<BlockEntry>,
    /// Comment lines after the last entry
    closing: Vec<String>,
}

impl BlockList {
    /// Moves every entry out of `array`, leaving it empty.
    ///
    /// The array keeps its own decor, so writing the list back into the same
    /// array keeps whatever surrounds it.
    pub fn take(array: &mut Array) -> Self {
        let mut list = BlockList {
            indent: detect_indent(array),
            ..Default::default()
        };

        let values: Vec<Value> = array.iter().cloned().collect();
        let trailing = raw(Some(array.trailing())).to_owned();
        array.clear();

        // Comment lines between an entry and its comma sit above the next entry
        let mut carried = Vec::new();
        for mut value in values {
            let (same_line, own) = split_comments(raw(value.decor().prefix()));
            list.attach_to_last(same_line);
            let (after, below) = split_comments(raw(value.decor().suffix()));

            let mut above = std::mem::take(&mut carried);
            above.extend(own);
            carried = below;

            value.decor_mut().clear();
            list.entries.push(BlockEntry { value, above, after });
        }

        let (same_line, mut closing) = split_comments(&trailing);
        list.attach_to_last(same_line);
        carried.append(&mut closing);
        list.closing = carried;
        list
    }

    pub fn entries(&self) -> &[BlockEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<BlockEntry> {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: BlockEntry) {
        self.entries.push(entry);
    }

    /// Writes the entries into `array`, one per line.
    ///
    /// An empty list with no comments is written as `[]`.
    pub fn write(self, array: &mut Array) {
        let BlockList {
            indent,
            opening,
            entries,
            closing,
        } = self;

        array.clear();
        if entries.is_empty() && opening.is_none() && closing.is_empty() {
            array.set_trailing("");
            array.set_trailing_comma(false);
            return;
        }

        let has_entries = !entries.is_empty();
        let mut line_end = opening;
        for entry in entries {
            let mut prefix = end_line(line_end.take());
            push_lines(&mut prefix, &indent, &entry.above);
            prefix.push_str(&indent);

            let mut value = entry.value;
            value.decor_mut().set_prefix(prefix);
            value.decor_mut().set_suffix("");
            array.push_formatted(value);
            line_end = entry.after;
        }

        let mut trailing = end_line(line_end);
        push_lines(&mut trailing, &indent, &closing);
        array.set_trailing(trailing);
        array.set_trailing_comma(has_entries);
    }

    fn attach_to_last(&mut self, comment: Option<String>) {
        let Some(comment) = comment else {
            return;
        };
        match self.entries.last_mut() {
            Some(entry) => entry.attach_after(comment),
            None => {
                self.opening = Some(match self.opening.take() {
                    Some(existing) => format!("{existing} {comment}"),
                    None => comment,
                })
            }
        }
    }
}

/// Rewrites `array` one entry per line without changing its entries
pub fn set_block(array: &mut Array) {
    BlockList::take(array).write(array);
}

fn raw(raw: Option<&RawString>) -> &str {
    raw.and_then(RawString::as_str).unwrap_or("")
}

fn end_line(comment: Option<String>) -> String {
    match comment {
        Some(comment) => format!(" {comment}\n"),
        None => "\n".to_string(),
    }
}

fn push_lines(out: &mut String, indent: &str, lines: &[String]) {
    for line in lines {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }
}

/// Splits the whitespace between two array entries into the comment that
/// ends the first line and the comment lines that follow it.
fn split_comments(raw: &str) -> (Option<String>, Vec<String>) {
    let (first, rest) = raw.split_once('\n').unwrap_or((raw, ""));
    let first = first.trim();
    let same_line = (!first.is_empty()).then(|| first.to_string());
    let lines = rest
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    (same_line, lines)
}

/// Indentation of the first entry, if it starts on its own line
fn detect_indent(array: &Array) -> String {
    array
        .iter()
        .next()
        .and_then(|value| raw(value.decor().prefix()).rsplit_once('\n'))
        .map(|(_, indent)| indent)
        .filter(|indent| !indent.is_empty() && indent.chars().all(|c| c == ' ' || c == '\t'))
        .unwrap_or(DEFAULT_INDENT)
        .to_string()
}
