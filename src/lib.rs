pub use self::core::{Context, Dictionary, Primitive, Stack, Word};
pub use self::error::*;

pub mod core;
pub mod error;
pub mod modules;

/// Evaluates a program with an unbounded stack.
///
/// Every line but the last is a word definition (`: name body... ;`),
/// applied in order. The last line is the expression. Returns the final
/// stack, bottom first.
pub fn run<I, S>(lines: I) -> Result<Vec<i64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    run_with_capacity(lines, None)
}

/// Same as [`run`], but fails with [`Error::StackOverflow`] once the stack
/// would grow past `capacity` items.
pub fn run_with_capacity<I, S>(lines: I, capacity: Option<usize>) -> Result<Vec<i64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ctx = Context::new()
        .with_basic_modules()?
        .with_stack_capacity(capacity);

    let mut lines = lines.into_iter().peekable();
    while let Some(line) = lines.next() {
        if lines.peek().is_none() {
            return ctx.evaluate(line.as_ref());
        }
        ctx.define(line.as_ref())?;
    }

    Err(Error::UnexpectedEof)
}
