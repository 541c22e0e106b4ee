use crate::lexer::{Lexer, Token};
use crate::word_set::WordSet;

/// Result of running a document through a [`Pipeline`].
#[derive(Debug, Default)]
pub struct Outcome {
    /// Misspelled tokens in document order.
    pub misspelled: Vec<Token>,
    /// Number of words checked.
    pub words: usize,
}

pub struct Pipeline<'a> {
    words: &'a WordSet,
}

impl<'a> Pipeline<'a> {
    pub fn new(words: &'a WordSet) -> Pipeline<'a> {
        Pipeline { words }
    }

    pub fn run(&self, lexer: Lexer) -> Outcome {
        lexer.fold(Outcome::default(), |mut outcome, token| {
            outcome.words += 1;
            if !self.words.check(&token.lexeme) {
                outcome.misspelled.push(token);
            }
            outcome
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn pipeline() {
        let mut words = WordSet::new();
        words
            .load_from_reader(Cursor::new("a\ncat\nsat\non\nthe\nmat\nit's\n"))
            .unwrap();

        let text = "The cat sat on teh mat.\nIt's a cat, not a kat 4 sure!";
        let outcome = Pipeline::new(&words).run(Lexer::new(text));

        assert_eq!(outcome.words, 13);
        let misspelled = outcome
            .misspelled
            .iter()
            .map(|t| t.lexeme.as_str())
            .collect::<Vec<_>>();
        assert_eq!(misspelled, ["teh", "not", "kat", "sure"]);
        assert_eq!(outcome.misspelled[0].start.line(), 1);
        assert_eq!(outcome.misspelled[1].start.line(), 2);
    }

    #[test]
    fn empty_set_misspells_everything() {
        let words = WordSet::new();
        let outcome = Pipeline::new(&words).run(Lexer::new("hello world"));
        assert_eq!(outcome.words, 2);
        assert_eq!(outcome.misspelled.len(), 2);
    }
}
