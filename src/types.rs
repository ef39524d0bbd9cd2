use std::fmt;

/// Location reported by the engine for a capture group that did not take part
/// in a match.
pub const NOT_FOUND: usize = usize::MAX;

/// A range measured in UTF-16 code units, as reported by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodeUnitRange {
    pub location: usize,
    pub length: usize,
}

impl CodeUnitRange {
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    pub const fn not_found() -> Self {
        Self {
            location: NOT_FOUND,
            length: 0,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        self.location == NOT_FOUND
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// One past the last code unit of the range.
    ///
    /// Panics if the range is the not-found sentinel or overflows.
    pub fn end(&self) -> usize {
        match self.location.checked_add(self.length) {
            Some(end) if !self.is_not_found() => end,
            _ => panic!("code unit range {self} has no end"),
        }
    }
}

impl fmt::Display for CodeUnitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_not_found() {
            write!(f, "{{not found}}")
        } else {
            write!(f, "{{{}, {}}}", self.location, self.length)
        }
    }
}

/// UTF-16 view over a UTF-8 string.
///
/// `offsets[u]` is the byte offset at which code unit `u` starts, with one
/// extra entry for the end of the string. The trailing half of a surrogate
/// pair repeats the byte offset of its leading half, which keeps the table
/// sorted and marks that unit as not being a character boundary. ASCII text
/// needs no table since both coordinate systems coincide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeUnits {
    len: usize,
    offsets: Option<Vec<usize>>,
}

impl CodeUnits {
    pub fn new(s: &str) -> Self {
        if s.is_ascii() {
            return Self {
                len: s.len(),
                offsets: None,
            };
        }
        let mut offsets = Vec::with_capacity(s.len() + 1);
        for (byte, c) in s.char_indices() {
            offsets.push(byte);
            if c.len_utf16() == 2 {
                offsets.push(byte);
            }
        }
        offsets.push(s.len());
        Self {
            len: offsets.len() - 1,
            offsets: Some(offsets),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn entire_range(&self) -> CodeUnitRange {
        CodeUnitRange::new(0, self.len)
    }

    /// Byte offset of code unit `unit`, or `None` if `unit` is past the end
    /// or lands between the two halves of a surrogate pair.
    pub fn byte_offset(&self, unit: usize) -> Option<usize> {
        match &self.offsets {
            None => (unit <= self.len).then_some(unit),
            Some(offsets) => {
                let byte = *offsets.get(unit)?;
                if unit > 0 && offsets[unit - 1] == byte {
                    return None;
                }
                Some(byte)
            }
        }
    }

    /// Code unit offset of `byte`, or `None` if `byte` is not a character
    /// boundary of the string this view was built from.
    pub fn unit_offset(&self, byte: usize) -> Option<usize> {
        match &self.offsets {
            None => (byte <= self.len).then_some(byte),
            Some(offsets) => {
                let unit = offsets.partition_point(|&b| b < byte);
                (offsets.get(unit) == Some(&byte)).then_some(unit)
            }
        }
    }

    /// The first character boundary strictly after `unit`, if any.
    pub fn next_boundary(&self, unit: usize) -> Option<usize> {
        if unit >= self.len {
            return None;
        }
        let next = unit + 1;
        if self.byte_offset(next).is_some() {
            Some(next)
        } else {
            Some(next + 1)
        }
    }

    /// The range from `unit` to the end of the string.
    pub fn suffix_from(&self, unit: usize) -> CodeUnitRange {
        CodeUnitRange::new(unit, self.len.saturating_sub(unit))
    }
}

/// A subject string together with its code unit view. Built once per search
/// and shared by every match found in it.
#[derive(Debug)]
pub struct Subject {
    text: Box<str>,
    units: CodeUnits,
}

impl Subject {
    pub fn new(text: &str) -> Self {
        Self {
            units: CodeUnits::new(text),
            text: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn units(&self) -> &CodeUnits {
        &self.units
    }
}
