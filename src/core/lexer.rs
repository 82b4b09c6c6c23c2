/// Splits a single input line into whitespace-separated tokens.
pub struct Lexer<'a> {
    line: &'a str,
    line_offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            line_offset: 0,
        }
    }

    pub fn scan_word(&mut self) -> Option<Token<'a>> {
        self.skip_whitespace();
        let start = self.line_offset;
        self.skip_until(char::is_whitespace);
        let end = self.line_offset;

        if start == end {
            return None;
        }

        Some(Token {
            data: &self.line[start..end],
        })
    }

    pub fn skip_whitespace(&mut self) {
        self.skip_while(char::is_whitespace)
    }

    pub fn skip_until<P: Delimiter>(&mut self, mut p: P) {
        self.skip_while(|c| !p.delim(c));
    }

    pub fn skip_while<P: Delimiter>(&mut self, mut p: P) {
        let prev_offset = self.line_offset;
        for (offset, c) in self.line[self.line_offset..].char_indices() {
            if !p.delim(c) {
                self.line_offset = prev_offset + offset;
                return;
            }
        }
        self.line_offset = self.line.len();
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.scan_word()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub data: &'a str,
}

impl Token<'_> {
    /// Parses the token as a signed integer literal (an optional sign followed by digits).
    pub fn as_int(&self) -> Option<i64> {
        self.data.parse().ok()
    }

    pub fn is(&self, symbol: &str) -> bool {
        self.data == symbol
    }
}

pub trait Delimiter {
    fn delim(&mut self, c: char) -> bool;
}

impl<T: FnMut(char) -> bool> Delimiter for T {
    fn delim(&mut self, c: char) -> bool {
        (self)(c)
    }
}
