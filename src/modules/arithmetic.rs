use crate::core::*;
use crate::error::*;

pub struct Arithmetic;

impl Module for Arithmetic {
    fn init(&self, d: &mut Dictionary) -> Result<()> {
        words!(d, {
            Primitive::Add,
            Primitive::Sub,
            Primitive::Mul,
            Primitive::Div,
        });
        Ok(())
    }
}

pub(crate) fn interpret_plus(stack: &mut Stack) -> Result<()> {
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push(x.checked_add(y).ok_or(Error::IntegerOverflow)?)
}

pub(crate) fn interpret_minus(stack: &mut Stack) -> Result<()> {
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push(x.checked_sub(y).ok_or(Error::IntegerOverflow)?)
}

pub(crate) fn interpret_mul(stack: &mut Stack) -> Result<()> {
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push(x.checked_mul(y).ok_or(Error::IntegerOverflow)?)
}

/// Quotient truncated toward zero.
pub(crate) fn interpret_div(stack: &mut Stack) -> Result<()> {
    if stack.fetch(0)? == 0 {
        return Err(Error::DivisionByZero);
    }
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push(x.checked_div(y).ok_or(Error::IntegerOverflow)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::tests::apply;

    #[test]
    fn basic_ops() {
        assert_eq!(apply(&[1, 2], Primitive::Add), Ok(vec![3]));
        assert_eq!(apply(&[3, 4], Primitive::Sub), Ok(vec![-1]));
        assert_eq!(apply(&[2, 4], Primitive::Mul), Ok(vec![8]));
        assert_eq!(apply(&[12, 3], Primitive::Div), Ok(vec![4]));
        assert_eq!(apply(&[8, 3], Primitive::Div), Ok(vec![2]));
    }

    #[test]
    fn ops_keep_lower_items() {
        assert_eq!(apply(&[7, 1, 2], Primitive::Add), Ok(vec![7, 3]));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(apply(&[-7, 2], Primitive::Div), Ok(vec![-3]));
        assert_eq!(apply(&[7, -2], Primitive::Div), Ok(vec![-3]));
        assert_eq!(apply(&[-7, -2], Primitive::Div), Ok(vec![3]));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(apply(&[5, 0], Primitive::Div), Err(Error::DivisionByZero));
        assert_eq!(apply(&[0, 0], Primitive::Div), Err(Error::DivisionByZero));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(apply(&[i64::MAX, 1], Primitive::Add), Err(Error::IntegerOverflow));
        assert_eq!(apply(&[i64::MIN, 1], Primitive::Sub), Err(Error::IntegerOverflow));
        assert_eq!(apply(&[i64::MAX, 2], Primitive::Mul), Err(Error::IntegerOverflow));
        assert_eq!(apply(&[i64::MIN, -1], Primitive::Div), Err(Error::IntegerOverflow));
    }
}
