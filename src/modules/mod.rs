use crate::core::{Dictionary, Module};
use crate::error::*;

pub use self::arithmetic::Arithmetic;
pub use self::stack_utils::StackUtils;

macro_rules! words {
    ($d:ident, {
        $($primitive:expr),*$(,)?
    }) => {
        $($d.define_stack_word($primitive);)*
    };
}

pub(crate) mod arithmetic;
pub(crate) mod stack_utils;

/// Registers every built-in word.
pub struct BaseModule;

impl Module for BaseModule {
    fn init(&self, d: &mut Dictionary) -> Result<()> {
        Arithmetic.init(d)?;
        StackUtils.init(d)
    }
}
