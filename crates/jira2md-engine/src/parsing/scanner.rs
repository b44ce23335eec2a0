use regex::{Captures, Regex};

/// A cursor over immutable wiki markup with lookahead and regex-anchored matching.
///
/// The byte index `i` is the only mutable state. Every operation degrades to an
/// empty or `None` result at end of input; nothing here panics or errors.
#[derive(Clone)]
pub struct Scanner<'a> {
    /// The text being scanned.
    pub s: &'a str,
    /// Current byte index into `s`. Always on a char boundary.
    pub i: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Moves the cursor back (or forward) to a position previously returned by [`Scanner::pos`].
    pub fn reset(&mut self, pos: usize) {
        self.i = pos.min(self.s.len());
    }

    /// Returns true while unread input remains.
    pub fn has_more(&self) -> bool {
        self.i < self.s.len()
    }

    /// The unread remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Returns up to `n` characters from the cursor without advancing.
    pub fn peek(&self, n: usize) -> &'a str {
        let rest = self.rest();
        match rest.char_indices().nth(n) {
            Some((idx, _)) => &rest[..idx],
            None => rest,
        }
    }

    /// The next character, if any.
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances by one character, returning it.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes, clamped to the end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Text from the cursor up to (not including) the next newline.
    pub fn peek_line(&self) -> &'a str {
        let rest = self.rest();
        match rest.find('\n') {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    /// Like [`Scanner::peek_line`], but also advances past the newline.
    pub fn consume_line(&mut self) -> &'a str {
        let rest = self.rest();
        match rest.find('\n') {
            Some(end) => {
                self.i += end + 1;
                &rest[..end]
            }
            None => {
                self.i = self.s.len();
                rest
            }
        }
    }

    /// Searches the remaining input with `re` without advancing.
    ///
    /// Patterns are written with a leading `^` when they must start at the cursor.
    pub fn match_at(&self, re: &Regex) -> Option<Captures<'a>> {
        re.captures(self.rest())
    }

    /// Matches `re` and advances past it, but only for a non-empty match
    /// that starts exactly at the cursor.
    pub fn match_and_consume(&mut self, re: &Regex) -> Option<Captures<'a>> {
        let caps = self.match_at(re)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.is_empty() {
            return None;
        }
        self.i += whole.end();
        Some(caps)
    }

    /// Runs a probe and rewinds the cursor afterwards, whatever the probe did.
    pub fn speculate<T>(&mut self, probe: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.i;
        let out = probe(self);
        self.i = saved;
        out
    }
}
