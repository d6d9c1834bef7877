use crate::reader::error::{Position, SyntaxError, SyntaxErrorKind};
use crate::syntax_error;

pub fn is_whitespace(c: char) -> bool { matches!(c, ' ' | '\t' | '\r' | '\n') }

/// Characters allowed inside a symbol or integer atom.
pub fn is_atom_char(c: char) -> bool { c != '(' && c != ')' && !is_whitespace(c) }

/// Character cursor over the source text with one character of lookahead.
/// Tracks line and column so the parser can attach positions to errors.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Cursor<'a> {
        Cursor {
            src,
            position: Position::start(),
        }
    }

    pub fn position(&self) -> Position { self.position }

    pub fn peek(&self) -> Option<char> { self.src[self.position.offset..].chars().next() }

    pub fn is_eof(&self) -> bool { self.position.offset >= self.src.len() }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position.offset += c.len_utf8();
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
    }

    /// Reads the maximal run of atom characters and upcases it (ASCII only).
    pub fn read_atom(&mut self) -> String {
        let begin = self.position.offset;
        while self.peek().is_some_and(is_atom_char) {
            self.bump();
        }
        self.src[begin..self.position.offset].to_ascii_uppercase()
    }

    /// Reads a string literal; the cursor must be on the opening quote.
    ///
    /// Only `\n` and `\"` are valid escapes. A raw newline or end of input
    /// inside the literal takes precedence over a bad escape seen earlier in
    /// the same literal, so `"\q` followed by EOF reports the missing quote.
    pub fn read_string(&mut self) -> Result<String, SyntaxError> {
        let open = self.position;
        self.bump();

        let mut text = String::new();
        let mut bad_escape: Option<(char, Position)> = None;
        loop {
            let here = self.position;
            match self.bump() {
                None => syntax_error!(SyntaxErrorKind::UnterminatedString, open),
                Some('"') => break,
                Some('\n') => syntax_error!(SyntaxErrorKind::NewlineInString, here),
                Some('\\') => match self.peek() {
                    None => syntax_error!(SyntaxErrorKind::UnterminatedString, open),
                    Some('\n') => syntax_error!(SyntaxErrorKind::NewlineInString, self.position),
                    Some(c) => {
                        self.bump();
                        match c {
                            'n' => text.push('\n'),
                            '"' => text.push('"'),
                            other => {
                                bad_escape.get_or_insert((other, here));
                            }
                        }
                    }
                },
                Some(c) => text.push(c),
            }
        }

        match bad_escape {
            Some((c, pos)) => syntax_error!(SyntaxErrorKind::InvalidEscapeSequence(c), pos),
            None => Ok(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace_tracks_lines() {
        let mut cursor = Cursor::new(" \t\r\n  x");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.position().line, 2);
        assert_eq!(cursor.position().column, 3);
    }

    #[test]
    fn test_read_atom_upcases_ascii_only() {
        let mut cursor = Cursor::new("print-Int)");
        assert_eq!(cursor.read_atom(), "PRINT-INT");
        assert_eq!(cursor.peek(), Some(')'));

        let mut cursor = Cursor::new("straße ");
        assert_eq!(cursor.read_atom(), "STRAßE");
    }

    #[test]
    fn test_read_string_escapes() {
        let mut cursor = Cursor::new(r#""say \"hi\"\nbye" rest"#);
        assert_eq!(cursor.read_string().unwrap(), "say \"hi\"\nbye");
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn test_read_string_keeps_parens_and_semicolons() {
        let mut cursor = Cursor::new(r#""(a) ; b""#);
        assert_eq!(cursor.read_string().unwrap(), "(a) ; b");
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_read_string_errors() {
        let err = Cursor::new("\"abc").read_string().unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnterminatedString);
        assert_eq!(err.position, Position::start());

        let err = Cursor::new("\"ab\ncd\"").read_string().unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::NewlineInString);
        assert_eq!(err.position.column, 4);

        let err = Cursor::new(r#""a\tb""#).read_string().unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::InvalidEscapeSequence('t'));
        assert_eq!(err.position.column, 3);

        let err = Cursor::new(r#""a\\b""#).read_string().unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::InvalidEscapeSequence('\\'));
    }

    #[test]
    fn test_unterminated_wins_over_bad_escape() {
        let err = Cursor::new(r#""a\qb"#).read_string().unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnterminatedString);

        let err = Cursor::new("\"a\\\nb\"").read_string().unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::NewlineInString);
    }
}
