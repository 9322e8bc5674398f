//! Display formatting for ranked entries in heft.
//!
//! Converts byte counts into short human-readable sizes and projects each
//! [FileEntry] into the [DisplayRow] shown by the table.
//!
//! Sizes use binary multiples (1 KB = 1024 B) with the SI letters, one decimal
//! place, and Rust's `{:.1}` rounding (round-half-to-even on the exact value).

use crate::core::FileEntry;

use unicode_width::UnicodeWidthChar;

const UNIT: u64 = 1024;
const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Formats a byte count as `"<value> <unit>"`.
///
/// Below 1024 the raw count is shown without decimals (`"1023 B"`),
/// otherwise the value is scaled to the largest unit that keeps it below 1024
/// (`"1.5 KB"`, `"1.0 MB"`). The unit is always `KB`/`MB`, never `KiB`/`MiB`.
pub fn human_readable(size: u64) -> String {
    if size < UNIT {
        return format!("{size} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", size as f64 / div as f64, PREFIXES[exp])
}

/// A read-only projection of a ranked [FileEntry] into table columns.
///
/// `index` is 1-based. `directory` has no trailing separator and is empty for
/// a bare relative file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    index: usize,
    filename: String,
    directory: String,
    size: String,
}

impl DisplayRow {
    /// Builds the row for the entry at zero-based `position` in the ranked list.
    pub fn from_entry(position: usize, entry: &FileEntry) -> Self {
        DisplayRow {
            index: position + 1,
            filename: entry.name_str().into_owned(),
            directory: entry.directory().to_string_lossy().into_owned(),
            size: human_readable(entry.size()),
        }
    }

    // Accessors

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[inline]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    #[inline]
    pub fn size(&self) -> &str {
        &self.size
    }
}

/// Projects a whole ranked list into rows.
pub fn display_rows(entries: &[FileEntry]) -> Vec<DisplayRow> {
    entries
        .iter()
        .enumerate()
        .map(|(pos, entry)| DisplayRow::from_entry(pos, entry))
        .collect()
}

/// Sanitizes a string to an exact terminal width.
///
/// Control characters are dropped, tabs expand to the next multiple of four,
/// and the result is clipped or space-padded to exactly `width` columns.
pub fn sanitize_to_exact_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut current_w = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let space_count = 4 - (current_w % 4);
            if current_w + space_count > width {
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if ch.is_control() {
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if current_w + w > width {
            break;
        }

        out.push(ch);
        current_w += w;
    }

    if current_w < width {
        out.push_str(&" ".repeat(width - current_w));
    }

    out
}
