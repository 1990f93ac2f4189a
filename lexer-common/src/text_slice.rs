use std::ops::{Deref, Range};
use std::sync::Arc;

/// Immutable slice of a shared input buffer.
///
/// Lexemes are handed out as `TextSlice`s so a token can outlive the scanner
/// that produced it without copying text. Equality compares the text only;
/// two lexemes spelled the same are equal whichever buffer they came from.
#[derive(Clone, Debug)]
pub struct TextSlice {
    buffer: Arc<str>,
    start: usize,
    end: usize,
}

impl TextSlice {
    /// Creates a new slice from the given shared buffer and byte range.
    pub fn new(buffer: Arc<str>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= buffer.len());
        debug_assert!(buffer.is_char_boundary(start) && buffer.is_char_boundary(end));
        Self { buffer, start, end }
    }

    /// Creates a slice that covers the entire buffer.
    pub fn from_arc(buffer: Arc<str>) -> Self {
        let end = buffer.len();
        Self {
            buffer,
            start: 0,
            end,
        }
    }

    /// Returns the length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the slice is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the underlying shared buffer.
    pub fn buffer(&self) -> Arc<str> {
        Arc::clone(&self.buffer)
    }

    /// Returns the start offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the end offset.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the byte range this slice covers in its buffer.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the text.
    pub fn as_str(&self) -> &str {
        &self.buffer[self.start..self.end]
    }

    /// Narrows the slice to `range`, given relative to this slice's start.
    ///
    /// Returns `None` if the range is out of bounds or splits a character.
    pub fn sub(&self, range: Range<usize>) -> Option<TextSlice> {
        let text = self.as_str();
        if range.start > range.end
            || range.end > text.len()
            || !text.is_char_boundary(range.start)
            || !text.is_char_boundary(range.end)
        {
            return None;
        }
        Some(Self::new(
            self.buffer(),
            self.start + range.start,
            self.start + range.end,
        ))
    }
}

impl From<&str> for TextSlice {
    fn from(value: &str) -> Self {
        Self::from_arc(Arc::from(value))
    }
}

impl std::fmt::Display for TextSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Deref for TextSlice {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for TextSlice {
    fn as_ref(&self) -> &str {
        self
    }
}

impl PartialEq<&str> for TextSlice {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<TextSlice> for &str {
    fn eq(&self, other: &TextSlice) -> bool {
        *self == other.as_str()
    }
}

impl PartialEq for TextSlice {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextSlice {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_reads_range() {
        let buffer: Arc<str> = Arc::from("let x = 42;");
        let slice = TextSlice::new(buffer, 8, 10);
        assert_eq!(slice, "42");
        assert_eq!(slice.range(), 8..10);
        assert_eq!(slice.len(), 2);
    }

    #[test]
    fn test_equality_ignores_buffer_identity() {
        let a = TextSlice::new(Arc::from("abc"), 1, 3);
        let b = TextSlice::from("bc");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sub_is_relative() {
        let slice = TextSlice::new(Arc::from("xxabcd"), 2, 6);
        let sub = slice.sub(1..3).unwrap();
        assert_eq!(sub, "bc");
        assert_eq!(sub.range(), 3..5);
        assert!(slice.sub(2..9).is_none());
    }

    #[test]
    fn test_sub_rejects_split_characters() {
        let slice = TextSlice::from("é");
        assert!(slice.sub(0..1).is_none());
        assert_eq!(slice.sub(0..2).unwrap(), "é");
    }
}
