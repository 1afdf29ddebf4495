/// A cursor for scanning inline text byte by byte.
///
/// Markers are ASCII, so every position the cursor stops at while matching a
/// marker is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at byte `i` of `s`.
    pub fn new(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat.as_bytes())
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Whether the byte at the current position is escaped by an odd run of
    /// backslashes directly before it.
    pub fn is_escaped(&self) -> bool {
        is_escaped_at(self.s, self.i)
    }

    /// Moves to the next occurrence of `pat` and returns its index.
    ///
    /// With `skip_escaped`, occurrences preceded by a backslash are ignored.
    /// On failure the cursor does not move.
    pub fn seek(&mut self, pat: &str, skip_escaped: bool) -> Option<usize> {
        let saved = self.i;
        while !self.eof() {
            if self.starts_with(pat) && !(skip_escaped && self.is_escaped()) {
                return Some(self.i);
            }
            self.bump();
        }
        self.i = saved;
        None
    }

    /// Advances past every consecutive copy of `b` and returns how many were skipped.
    pub fn skip_run(&mut self, b: u8) -> usize {
        let start = self.i;
        while self.peek() == Some(b) {
            self.bump();
        }
        self.i - start
    }
}

/// Whether byte `i` of `s` is preceded by an odd number of backslashes.
pub fn is_escaped_at(s: &str, i: usize) -> bool {
    let preceding = s.as_bytes()[..i.min(s.len())]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    preceding % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello", 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.i, 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**", 0);
        assert!(cur.starts_with("**"));
        assert!(!cur.starts_with("__"));
    }

    #[test]
    fn seek_finds_next_marker() {
        let mut cur = Cursor::new("a **b**", 0);
        assert_eq!(cur.seek("**", true), Some(2));
        cur.bump_n(2);
        assert_eq!(cur.seek("**", true), Some(5));
    }

    #[test]
    fn seek_skips_escaped_marker() {
        let mut cur = Cursor::new(r"\*a*", 0);
        assert_eq!(cur.seek("*", true), Some(3));
    }

    #[test]
    fn seek_can_ignore_escapes() {
        let mut cur = Cursor::new(r"\*a*", 0);
        assert_eq!(cur.seek("*", false), Some(1));
    }

    #[test]
    fn seek_failure_restores_position() {
        let mut cur = Cursor::new("abc", 1);
        assert_eq!(cur.seek("*", true), None);
        assert_eq!(cur.i, 1);
    }

    #[test]
    fn double_backslash_does_not_escape() {
        assert!(!is_escaped_at(r"\\*", 2));
        assert!(is_escaped_at(r"\*", 1));
    }

    #[test]
    fn skip_run_counts_bytes() {
        let mut cur = Cursor::new("***x", 0);
        assert_eq!(cur.skip_run(b'*'), 3);
        assert_eq!(cur.peek(), Some(b'x'));
    }
}
