use crate::errors::RangeError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Sheet-title resolution against previously fetched spreadsheet metadata.
///
/// Callers fetch the sheet list once per command invocation and resolve every
/// range against that snapshot; the resolver itself never reaches the network.
pub trait SheetLookup {
    fn sheet_id(&self, title: &str) -> Option<i64>;
}

impl SheetLookup for HashMap<String, i64> {
    fn sheet_id(&self, title: &str) -> Option<i64> {
        self.get(title).copied()
    }
}

impl SheetLookup for BTreeMap<String, i64> {
    fn sheet_id(&self, title: &str) -> Option<i64> {
        self.get(title).copied()
    }
}

/// A single `C4`-style cell token, kept with its source text for diagnostics.
/// Coordinates are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAddress {
    pub column: u32,
    pub row: u32,
    pub original: String,
}

impl CellAddress {
    pub fn parse(s: &str) -> Option<Self> {
        // Split into letters and digits
        let split_idx = s.find(|c: char| c.is_ascii_digit())?;
        let (col_str, row_str) = s.split_at(split_idx);

        let row_display = row_str.parse::<u32>().ok()?;
        if row_display == 0 {
            return None;
        }
        let column = column_index(col_str)?;

        Some(Self {
            column,
            row: row_display - 1,
            original: s.to_string(),
        })
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.column), self.row + 1)
    }
}

/// `A` -> 0, `Z` -> 25, `AA` -> 26. Uppercase letters only; overflow fails
/// rather than wrapping.
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        index = index
            .checked_mul(26)?
            .checked_add(c as u32 - 'A' as u32 + 1)?;
    }
    Some(index - 1)
}

/// Zero-based index -> column letters; inverse of [`column_index`].
pub fn column_letters(index: u32) -> String {
    let mut n = index + 1;
    let mut out = String::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        out.insert(0, (b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    out
}

/// A resolved rectangular selection: zero-based, end-exclusive on both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeReference {
    /// Present only when the input was sheet-qualified.
    pub sheet_name: Option<String>,
    pub sheet_id: i64,
    pub start_column: u32,
    pub end_column_exclusive: u32,
    pub start_row: u32,
    pub end_row_exclusive: u32,
}

impl fmt::Display for RangeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.sheet_name {
            if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') && !name.is_empty() {
                write!(f, "{name}!")?;
            } else {
                write!(f, "'{name}'!")?;
            }
        }
        write!(
            f,
            "{}{}:{}{}",
            column_letters(self.start_column),
            self.start_row + 1,
            column_letters(self.end_column_exclusive - 1),
            self.end_row_exclusive
        )
    }
}

static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]+[0-9]+):([A-Z]+[0-9]+)$").expect("regex"));

/// Resolve a possibly sheet-qualified A1 range string into a grid selection.
///
/// `'My Sheet'!C3:D4` resolves the quoted title through `sheets`;
/// an unqualified `A1:B2` targets the first sheet (id 0). Single-cell ranges
/// like `A1:A1` are valid; open-ended forms (`A:A`) are not.
pub fn resolve_range(input: &str, sheets: &impl SheetLookup) -> Result<RangeReference, RangeError> {
    let (sheet_name, cells) = match input.split_once('!') {
        Some((title, cells)) => (Some(strip_quoted(title).to_string()), cells),
        None => (None, input),
    };

    let sheet_id = match &sheet_name {
        Some(title) => sheets
            .sheet_id(title)
            .ok_or_else(|| RangeError::SheetNotFound(title.clone()))?,
        None => 0,
    };

    let invalid = || RangeError::InvalidFormat(input.to_string());

    let caps = RANGE_RE.captures(cells).ok_or_else(invalid)?;
    let start = CellAddress::parse(&caps[1]).ok_or_else(invalid)?;
    let end = CellAddress::parse(&caps[2]).ok_or_else(invalid)?;

    let reference = RangeReference {
        sheet_name,
        sheet_id,
        start_column: start.column,
        end_column_exclusive: end.column.checked_add(1).ok_or_else(invalid)?,
        start_row: start.row,
        end_row_exclusive: end.row.checked_add(1).ok_or_else(invalid)?,
    };

    // Reversed ranges violate the end-exclusive invariants and are rejected,
    // never reordered.
    if reference.start_column >= reference.end_column_exclusive
        || reference.start_row >= reference.end_row_exclusive
    {
        return Err(invalid());
    }

    tracing::debug!(range = input, sheet_id, "resolved range");
    Ok(reference)
}

fn strip_quoted(title: &str) -> &str {
    title
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(title)
}
