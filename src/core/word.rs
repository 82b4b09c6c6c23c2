use super::Stack;
use crate::error::*;
use crate::modules::{arithmetic, stack_utils};

/// A fully resolved unit of execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Int(i64),
    Prim(Primitive),
}

impl Word {
    pub fn execute(self, stack: &mut Stack) -> Result<()> {
        tracing::trace!(word = ?self, depth = stack.depth(), "execute");
        match self {
            Self::Int(value) => stack.push(value),
            Self::Prim(primitive) => primitive.execute(stack),
        }
    }
}

/// Built-in stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Add,
    Sub,
    Mul,
    Div,
    Dup,
    Drop,
    Swap,
    Over,
}

impl Primitive {
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Dup,
        Self::Drop,
        Self::Swap,
        Self::Over,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Dup => "DUP",
            Self::Drop => "DROP",
            Self::Swap => "SWAP",
            Self::Over => "OVER",
        }
    }

    /// Number of stack items the operation requires.
    pub fn arity(self) -> usize {
        match self {
            Self::Dup | Self::Drop => 1,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Swap | Self::Over => 2,
        }
    }

    /// Applies the operation. The stack is left untouched when there are
    /// fewer than [`arity`] items on it.
    ///
    /// [`arity`]: Self::arity
    pub fn execute(self, stack: &mut Stack) -> Result<()> {
        stack.check_underflow(self.arity())?;
        match self {
            Self::Add => arithmetic::interpret_plus(stack),
            Self::Sub => arithmetic::interpret_minus(stack),
            Self::Mul => arithmetic::interpret_mul(stack),
            Self::Div => arithmetic::interpret_div(stack),
            Self::Dup => stack_utils::interpret_dup(stack),
            Self::Drop => stack_utils::interpret_drop(stack),
            Self::Swap => stack_utils::interpret_swap(stack),
            Self::Over => stack_utils::interpret_over(stack),
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
