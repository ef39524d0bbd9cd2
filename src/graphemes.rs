//! Text positions counted in extended grapheme clusters, i.e. user-perceived
//! characters.

use std::ops::Range;

use icu::segmenter::GraphemeClusterSegmenter;

/// Index of the grapheme cluster containing `byte_offset`. An offset equal to
/// `text.len()` maps to the number of clusters in `text`.
pub fn grapheme_offset(text: &str, byte_offset: usize) -> usize {
    locate(text, byte_offset).0
}

/// Converts a byte range of `text` into a range of grapheme cluster indices.
/// A range that starts or ends inside a cluster is widened to cover it; an
/// empty range stays empty.
pub fn grapheme_range(text: &str, bytes: Range<usize>) -> Range<usize> {
    let start = grapheme_offset(text, bytes.start);
    if bytes.is_empty() {
        return start..start;
    }
    let (end, on_boundary) = locate(text, bytes.end);
    if on_boundary {
        start..end
    } else {
        start..end + 1
    }
}

// (cluster index, whether `byte_offset` is exactly a cluster boundary)
fn locate(text: &str, byte_offset: usize) -> (usize, bool) {
    if text.is_empty() {
        return (0, true);
    }
    let segmenter = GraphemeClusterSegmenter::new();
    let mut preceding = 0;
    for brk in segmenter.segment_str(text) {
        if brk > byte_offset {
            break;
        }
        if brk == byte_offset {
            return (preceding, true);
        }
        preceding += 1;
    }
    (preceding.saturating_sub(1), false)
}
