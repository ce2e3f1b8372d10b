//! Byte cursor over an encoded image.

/// Reads an encoded image as header lines followed by raw bytes.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next line without its `\n` (or `\r\n`) terminator.
    ///
    /// Returns `None` only once the input is exhausted; an empty line is
    /// `Some(b"")`.
    pub fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }

        let rest = &self.data[self.pos..];
        let (line, advance) = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;

        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }

    /// Take up to `n` bytes.
    pub fn take(&mut self, n: usize) -> &'a [u8] {
        let end = self.pos.saturating_add(n).min(self.data.len());
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        bytes
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}
