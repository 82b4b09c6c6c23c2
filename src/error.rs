pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("stack underflow")]
    StackUnderflow,
    #[error("stack overflow")]
    StackOverflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("malformed word definition")]
    MalformedDefinition,
    #[error("word name can not be a number: {0}")]
    InvalidWordName(String),
    #[error("undefined word: {0}")]
    UnknownWord(String),
    #[error("unexpected end of input")]
    UnexpectedEof,
}
