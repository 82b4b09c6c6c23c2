pub use self::dictionary::{Dictionary, DictionaryEntry};
pub use self::lexer::{Lexer, Token};
pub use self::stack::Stack;
pub use self::word::{Primitive, Word};

use crate::error::*;

pub mod dictionary;
pub mod lexer;
pub mod stack;
pub mod word;

/// Evaluation state for a single call: a word table and a data stack.
pub struct Context {
    pub stack: Stack,
    pub dict: Dictionary,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with an empty dictionary and an unbounded stack.
    pub fn new() -> Self {
        Self {
            stack: Stack::new(None),
            dict: Default::default(),
        }
    }

    pub fn with_basic_modules(self) -> Result<Self> {
        self.with_module(crate::modules::BaseModule)
    }

    pub fn with_module<T: Module>(mut self, module: T) -> Result<Self> {
        self.add_module(module)?;
        Ok(self)
    }

    pub fn add_module<T: Module>(&mut self, module: T) -> Result<()> {
        module.init(&mut self.dict)
    }

    pub fn with_stack_capacity(mut self, capacity: Option<usize>) -> Self {
        self.stack = Stack::new(capacity);
        self
    }

    /// Handles a `: <name> <body...> ;` line.
    pub fn define(&mut self, line: &str) -> Result<()> {
        let line = line.to_uppercase();
        let tokens = Lexer::new(&line).collect::<Vec<_>>();

        let [open, name, body @ .., close] = tokens.as_slice() else {
            return Err(Error::MalformedDefinition);
        };
        if !open.is(":") || !close.is(";") || body.is_empty() {
            return Err(Error::MalformedDefinition);
        }
        if name.as_int().is_some() {
            return Err(Error::InvalidWordName(name.data.to_owned()));
        }

        let mut definition = Vec::with_capacity(body.len());
        for token in body {
            definition.extend_from_slice(&self.dict.resolve(*token)?);
        }

        self.dict.define_word(name.data, definition);
        Ok(())
    }

    /// Evaluates an expression line on a fresh stack and returns the
    /// resulting items, bottom first.
    pub fn evaluate(&mut self, line: &str) -> Result<Vec<i64>> {
        let line = line.to_uppercase();
        self.stack.clear();

        let result = self.interpret(&line);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "evaluation failed");
            self.stack.clear();
        }
        result?;

        tracing::debug!(stack = %self.stack.display_dump(), "evaluation finished");
        Ok(self.stack.as_slice().to_vec())
    }

    fn interpret(&mut self, line: &str) -> Result<()> {
        for token in Lexer::new(line) {
            let words = self.dict.resolve(token)?;
            for word in words.iter() {
                word.execute(&mut self.stack)?;
            }
        }
        Ok(())
    }
}

pub trait Module {
    fn init(&self, d: &mut Dictionary) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        Context::new().with_basic_modules().unwrap()
    }

    #[test]
    fn definitions_are_resolved_eagerly() {
        let mut ctx = context();
        ctx.define(": foo dup ;").unwrap();
        ctx.define(": bar foo 2 ;").unwrap();

        let entry = ctx.dict.lookup("BAR").unwrap();
        assert_eq!(
            &*entry.definition,
            [Word::Prim(Primitive::Dup), Word::Int(2)]
        );
    }

    #[test]
    fn malformed_definitions() {
        let mut ctx = context();
        for line in [": foo ;", "foo dup ;", ": foo dup", ":", "", ": foo dup ; ;x"] {
            assert_eq!(ctx.define(line), Err(Error::MalformedDefinition), "{line:?}");
        }
    }

    #[test]
    fn numeric_names_are_rejected() {
        let mut ctx = context();
        assert_eq!(ctx.define(": 1 dup ;"), Err(Error::InvalidWordName("1".to_owned())));
        assert_eq!(ctx.define(": 1 foo ;"), Err(Error::InvalidWordName("1".to_owned())));
        assert!(ctx.dict.lookup("1").is_none());

        ctx.define(": 99999999999999999999 2 ;").unwrap();
        assert_eq!(ctx.evaluate("99999999999999999999"), Ok(vec![2]));
    }

    #[test]
    fn unknown_word_in_body() {
        let mut ctx = context();
        assert_eq!(
            ctx.define(": foo bar ;"),
            Err(Error::UnknownWord("BAR".to_owned()))
        );
        assert!(ctx.dict.lookup("FOO").is_none());
    }

    #[test]
    fn failed_evaluation_clears_stack() {
        let mut ctx = context();
        assert_eq!(ctx.evaluate("1 2 3 0 /"), Err(Error::DivisionByZero));
        assert_eq!(ctx.stack.depth(), 0);
        assert_eq!(ctx.evaluate("4"), Ok(vec![4]));
    }

    #[test]
    fn errors_surface_in_order() {
        let mut ctx = context();
        assert_eq!(ctx.evaluate("1 0 / foo"), Err(Error::DivisionByZero));
        assert_eq!(ctx.evaluate("foo 1 0 /"), Err(Error::UnknownWord("FOO".to_owned())));
    }

    #[test]
    fn capacity_is_enforced() {
        let mut ctx = context().with_stack_capacity(Some(2));
        assert_eq!(ctx.evaluate("1 dup"), Ok(vec![1, 1]));
        assert_eq!(ctx.evaluate("1 dup dup"), Err(Error::StackOverflow));
    }

    #[test]
    fn empty_dictionary_knows_nothing() {
        let mut ctx = Context::new();
        assert_eq!(ctx.evaluate("1 2"), Ok(vec![1, 2]));
        assert_eq!(ctx.evaluate("1 2 +"), Err(Error::UnknownWord("+".to_owned())));
    }
}
