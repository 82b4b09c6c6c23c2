use crate::core::*;
use crate::error::*;

pub struct StackUtils;

impl Module for StackUtils {
    fn init(&self, d: &mut Dictionary) -> Result<()> {
        words!(d, {
            Primitive::Dup,
            Primitive::Drop,
            Primitive::Swap,
            Primitive::Over,
        });
        Ok(())
    }
}

pub(crate) fn interpret_drop(stack: &mut Stack) -> Result<()> {
    stack.pop()?;
    Ok(())
}

pub(crate) fn interpret_dup(stack: &mut Stack) -> Result<()> {
    stack.push(stack.fetch(0)?)
}

pub(crate) fn interpret_over(stack: &mut Stack) -> Result<()> {
    stack.push(stack.fetch(1)?)
}

pub(crate) fn interpret_swap(stack: &mut Stack) -> Result<()> {
    stack.swap(0, 1)
}
