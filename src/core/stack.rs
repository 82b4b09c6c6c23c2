use crate::error::*;

/// Integer data stack. Index 0 is the bottom.
#[derive(Debug, Default, Clone)]
pub struct Stack {
    items: Vec<i64>,
    capacity: Option<usize>,
}

impl Stack {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            items: Default::default(),
            capacity,
        }
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn check_underflow(&self, n: usize) -> Result<()> {
        if n > self.items.len() {
            Err(Error::StackUnderflow)
        } else {
            Ok(())
        }
    }

    /// Returns the item `idx` positions below the top.
    pub fn fetch(&self, idx: usize) -> Result<i64> {
        let len = self.items.len();
        if idx < len {
            Ok(self.items[len - idx - 1])
        } else {
            Err(Error::StackUnderflow)
        }
    }

    pub fn swap(&mut self, lhs: usize, rhs: usize) -> Result<()> {
        let len = self.items.len();
        if lhs >= len || rhs >= len {
            return Err(Error::StackUnderflow);
        }
        self.items.swap(len - lhs - 1, len - rhs - 1);
        Ok(())
    }

    pub fn push(&mut self, item: i64) -> Result<()> {
        if let Some(capacity) = self.capacity
            && self.items.len() >= capacity
        {
            return Err(Error::StackOverflow);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<i64> {
        self.items.pop().ok_or(Error::StackUnderflow)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.items
    }

    pub fn display_dump(&self) -> impl std::fmt::Display + '_ {
        struct StackDump<'a>(&'a Stack);

        impl std::fmt::Display for StackDump<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut first = true;
                for item in &self.0.items {
                    if first {
                        first = false;
                    } else {
                        f.write_str(" ")?;
                    }
                    std::fmt::Display::fmt(item, f)?;
                }
                Ok(())
            }
        }

        StackDump(self)
    }
}
