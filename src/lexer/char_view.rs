use super::char_ext::CharExt;

/// Read-only view over the source buffer.
///
/// Analyzers never move a cursor of their own. They receive this view plus a
/// start offset, and report back how many bytes they consumed. Reading past
/// the end of the buffer yields [`None`] rather than a sentinel character.
#[derive(Clone, Copy)]
pub struct CharView<'a> {
    bytes: &'a [u8],
}

impl<'a> CharView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the byte at `pos`, or [`None`] past the end of the buffer.
    pub fn at(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    /// Checks whether the byte at `pos` equals `ch`.
    pub fn is(&self, pos: usize, ch: u8) -> bool {
        self.at(pos) == Some(ch)
    }

    /// Checks whether the byte at `pos` exists and satisfies `predicate`.
    pub fn test<P>(&self, pos: usize, predicate: P) -> bool
    where
        P: FnOnce(&u8) -> bool,
    {
        self.at(pos).filter(predicate).is_some()
    }

    /// Counts the bytes from `pos` onwards for which `predicate` holds.
    pub fn count_while<P>(&self, pos: usize, mut predicate: P) -> usize
    where
        P: FnMut(&u8) -> bool,
    {
        self.bytes
            .get(pos..)
            .map_or(0, |rest| rest.iter().take_while(|&ch| predicate(ch)).count())
    }

    /// Returns the first position at or after `pos` that is not a divider.
    pub fn skip_dividers(&self, pos: usize) -> usize {
        pos + self.count_while(pos, CharExt::is_divider)
    }

    /// The bytes in `start..end`, clamped to the buffer.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.bytes.len());
        self.bytes.get(start..end).unwrap_or_default()
    }
}
