//! Top-N ranking of scanned files.

use crate::core::FileEntry;

use std::cmp::Ordering;

/// Number of rows shown when the config does not override it.
pub const DEFAULT_LIMIT: usize = 10;

/// Order used for ranking: size descending, then path ascending.
///
/// Paths are unique within one scan, so this is a total order and the
/// ranking is reproducible for an unchanged tree.
#[inline]
pub fn by_size_desc(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| a.path().cmp(b.path()))
}

/// Sorts `entries` largest first and keeps the first `limit`.
///
/// Fewer than `limit` entries are all returned.
pub fn rank(mut entries: Vec<FileEntry>, limit: usize) -> Vec<FileEntry> {
    entries.sort_unstable_by(by_size_desc);
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(path: &str, size: u64) -> FileEntry {
        FileEntry::new(PathBuf::from(path), size)
    }

    fn sizes(entries: &[FileEntry]) -> Vec<u64> {
        entries.iter().map(FileEntry::size).collect()
    }

    #[test]
    fn ranks_descending() {
        let input = vec![
            entry("a", 500),
            entry("b", 2048),
            entry("c", 10),
            entry("d", 1_048_576),
            entry("e", 300),
        ];
        let ranked = rank(input, DEFAULT_LIMIT);
        assert_eq!(sizes(&ranked), vec![1_048_576, 2048, 500, 300, 10]);
    }

    #[test]
    fn truncates_to_limit() {
        let input: Vec<FileEntry> = (0..25).map(|i| entry(&format!("f{i:02}"), i)).collect();
        let ranked = rank(input, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].size(), 24);
        assert_eq!(ranked[9].size(), 15);
    }

    #[test]
    fn zero_limit_and_empty_input() {
        assert!(rank(vec![entry("a", 1)], 0).is_empty());
        assert!(rank(Vec::new(), DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn equal_sizes_break_ties_by_path() {
        let input = vec![
            entry("dir/zeta", 100),
            entry("alpha", 100),
            entry("dir/beta", 100),
            entry("big", 200),
        ];
        let ranked = rank(input, DEFAULT_LIMIT);
        let paths: Vec<_> = ranked.iter().map(|e| e.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("big"),
                PathBuf::from("alpha"),
                PathBuf::from("dir/beta"),
                PathBuf::from("dir/zeta"),
            ]
        );
    }

    #[test]
    fn ranking_ignores_input_order() {
        let forward = vec![entry("x", 3), entry("y", 3), entry("z", 1)];
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(rank(forward, 2), rank(backward, 2));
    }
}
