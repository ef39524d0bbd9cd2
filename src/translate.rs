//! Conversion of engine code unit ranges into byte ranges that are safe to
//! slice the subject with.

use std::ops::Range;

use crate::types::{CodeUnitRange, CodeUnits};

/// Translates `range` into a byte range of the string `units` was built from.
///
/// Returns `None` for the not-found sentinel, which is how a capture group
/// that did not participate in a match is reported.
///
/// # Panics
///
/// Panics if either end of `range` does not fall on a character boundary.
/// Engine output for the string it searched never does that, so such a range
/// means it was paired with the wrong subject.
pub fn translate(range: CodeUnitRange, units: &CodeUnits) -> Option<Range<usize>> {
    if range.is_not_found() {
        return None;
    }
    let start = byte_boundary(units, range, range.location);
    let end = byte_boundary(units, range, range.end());
    Some(start..end)
}

fn byte_boundary(units: &CodeUnits, range: CodeUnitRange, unit: usize) -> usize {
    match units.byte_offset(unit) {
        Some(byte) => byte,
        None => panic!(
            "range {range} does not lie on character boundaries of a {}-unit string \
             (offset {unit})",
            units.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_absent() {
        let units = CodeUnits::new("abc");
        assert_eq!(translate(CodeUnitRange::not_found(), &units), None);
    }

    #[test]
    fn empty_range_is_present() {
        let units = CodeUnits::new("abc");
        assert_eq!(translate(CodeUnitRange::new(1, 0), &units), Some(1..1));
        assert_eq!(translate(CodeUnitRange::new(3, 0), &units), Some(3..3));
    }

    #[test]
    fn multi_unit_characters() {
        let s = "\u{61}\u{65}\u{301}\u{221E}\u{1D11E}";
        let units = CodeUnits::new(s);
        // infinity is the fourth code unit
        let infinity = translate(CodeUnitRange::new(3, 1), &units).unwrap();
        assert_eq!(&s[infinity], "\u{221E}");
        let clef = translate(CodeUnitRange::new(4, 2), &units).unwrap();
        assert_eq!(&s[clef], "\u{1D11E}");
    }

    #[test]
    #[should_panic(expected = "character boundaries")]
    fn split_surrogate_pair_is_fatal() {
        let units = CodeUnits::new("\u{1D11E}");
        translate(CodeUnitRange::new(0, 1), &units);
    }

    #[test]
    #[should_panic(expected = "character boundaries")]
    fn out_of_bounds_is_fatal() {
        let units = CodeUnits::new("abc");
        translate(CodeUnitRange::new(2, 5), &units);
    }
}
