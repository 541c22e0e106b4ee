use crate::word_set::LENGTH;

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos(pub u32, pub u32);

impl Pos {
    pub fn start() -> Pos {
        Pos(1, 1)
    }

    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn column(&self) -> u32 {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub start: Pos,
    pub end: Pos,
    pub lexeme: String,
}

/// Splits a document into candidate words.
///
/// A word is a run of ASCII letters and apostrophes that starts with a letter.
/// Runs that contain a digit or are longer than [`LENGTH`] are skipped.
#[derive(Debug)]
pub struct Lexer {
    chars: Vec<char>,
    col: u32,
    line: u32,
    offset: usize,
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl Lexer {
    pub fn new<T: AsRef<str>>(text: T) -> Lexer {
        let start = Pos::start();
        Lexer {
            chars: text.as_ref().chars().collect(),
            col: start.column(),
            line: start.line(),
            offset: 0,
        }
    }

    fn pos(&self) -> Pos {
        Pos(self.line, self.col)
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            match self.peek()? {
                'a'..='z' | 'A'..='Z' => {
                    if let Some(token) = self.word() {
                        return Some(token);
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn advance(&mut self) -> Option<char> {
        let char = self.peek()?;

        if char == '\n' {
            self.col = 1;
            self.line += 1;
        } else {
            self.col += 1;
        }
        self.offset += 1;

        Some(char)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    fn word(&mut self) -> Option<Token> {
        let start = self.pos();
        let mut lexeme = String::new();

        while let Some(char) = self.peek() {
            match char {
                'a'..='z' | 'A'..='Z' | '\'' => {
                    lexeme.push(char);
                    self.advance();
                }
                '0'..='9' => {
                    self.skip_alphanumeric();
                    return None;
                }
                _ => break,
            }
        }

        if lexeme.len() > LENGTH {
            return None;
        }

        Some(Token {
            start,
            end: self.pos(),
            lexeme,
        })
    }

    fn skip_alphanumeric(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(src: &str) -> Vec<String> {
        Lexer::new(src).map(|t| t.lexeme).collect()
    }

    #[test]
    fn lex_words() {
        assert_eq!(
            lexemes("The quick, brown fox -- jumped!"),
            ["The", "quick", "brown", "fox", "jumped"]
        );
    }

    #[test]
    fn apostrophes_inside_words() {
        assert_eq!(lexemes("'tis the cat's 'toy'"), ["tis", "the", "cat's", "toy'"]);
    }

    #[test]
    fn words_with_digits_are_skipped() {
        assert_eq!(lexemes("abc1def ghi 42 x9 jkl"), ["ghi", "jkl"]);
        assert_eq!(lexemes("abc1'd"), ["d"]);
    }

    #[test]
    fn overlong_words_are_skipped() {
        let long = "a".repeat(LENGTH + 1);
        let max = "b".repeat(LENGTH);
        assert_eq!(lexemes(&format!("one {long} two {max}")), vec!["one".to_string(), "two".into(), max]);
    }

    #[test]
    fn non_ascii_separates_words() {
        assert_eq!(lexemes("café naïve"), ["caf", "na", "ve"]);
    }

    #[test]
    fn positions() {
        let tokens = Lexer::new("hi there\n  you").collect::<Vec<_>>();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].start, Pos(1, 1));
        assert_eq!(tokens[0].end, Pos(1, 3));
        assert_eq!(tokens[1].start, Pos(1, 4));
        assert_eq!(tokens[2].start, Pos(2, 3));
        assert_eq!(tokens[2].end, Pos(2, 6));
    }

    #[test]
    fn empty_text() {
        assert!(lexemes("").is_empty());
        assert!(lexemes(" \n\t 123 ").is_empty());
    }
}
