use std::rc::Rc;

use ahash::AHashMap;

use super::lexer::Token;
use super::word::{Primitive, Word};
use crate::error::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub definition: Rc<[Word]>,
}

impl DictionaryEntry {
    pub fn new(definition: impl Into<Rc<[Word]>>) -> Self {
        Self {
            definition: definition.into(),
        }
    }
}

impl From<Primitive> for DictionaryEntry {
    fn from(value: Primitive) -> Self {
        Self::new([Word::Prim(value)])
    }
}

impl From<Vec<Word>> for DictionaryEntry {
    fn from(value: Vec<Word>) -> Self {
        Self::new(value)
    }
}

/// Word table. Every stored definition is already resolved down to
/// integer literals and primitives.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: WordsMap,
}

impl Dictionary {
    pub fn lookup(&self, name: &str) -> Option<&DictionaryEntry> {
        self.words.get(name)
    }

    /// Expands a single token into the words it stands for.
    ///
    /// Dictionary entries take precedence over integer literals.
    pub fn resolve(&self, token: Token<'_>) -> Result<Rc<[Word]>> {
        if let Some(entry) = self.lookup(token.data) {
            return Ok(entry.definition.clone());
        }
        match token.as_int() {
            Some(value) => Ok(Rc::from([Word::Int(value)])),
            None => Err(Error::UnknownWord(token.data.to_owned())),
        }
    }

    /// Registers a built-in under its canonical name.
    pub fn define_stack_word(&mut self, primitive: Primitive) {
        self.define_word(primitive.name(), primitive)
    }

    /// Inserts or replaces a definition. The name is expected to be
    /// already normalized and validated.
    pub fn define_word<T, E>(&mut self, name: T, word: E)
    where
        T: Into<String>,
        E: Into<DictionaryEntry>,
    {
        fn define_word_impl(d: &mut Dictionary, name: String, word: DictionaryEntry) {
            tracing::debug!(name = %name, words = word.definition.len(), "define word");
            d.words.insert(name, word);
        }
        define_word_impl(self, name.into(), word.into())
    }
}

type WordsMap = AHashMap<String, DictionaryEntry>;
