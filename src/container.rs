use thiserror::Error;

use crate::value::Value;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ContainerError {
    #[error("Container is empty")]
    Empty,
    #[error("Container holds {expected} values, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// The minimal capability a stack needs from its backing storage.
pub trait Container<T> {
    fn append(&mut self, item: T) -> Result<(), ContainerError>;
    fn remove_last(&mut self) -> Option<T>;
    fn len(&self) -> usize;
}

impl<T> Container<T> for Vec<T> {
    fn append(&mut self, item: T) -> Result<(), ContainerError> {
        self.push(item);
        Ok(())
    }

    fn remove_last(&mut self) -> Option<T> {
        self.pop()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// A backing container constrained to one value kind. Appending anything
/// other than a number is a `TypeMismatch`.
#[derive(Debug, Default)]
pub struct NumericBuffer(Vec<f64>);

impl NumericBuffer {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl Container<Value> for NumericBuffer {
    fn append(&mut self, item: Value) -> Result<(), ContainerError> {
        match item {
            Value::Number(n) => {
                self.0.push(n);
                Ok(())
            }
            other => Err(ContainerError::TypeMismatch {
                expected: "number",
                found: other.kind(),
            }),
        }
    }

    fn remove_last(&mut self) -> Option<Value> {
        self.0.pop().map(Value::Number)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_appends_and_removes_from_the_end() {
        // Vec has an inherent append, so go through the trait explicitly.
        let mut c: Vec<i32> = Vec::new();
        Container::append(&mut c, 1).unwrap();
        Container::append(&mut c, 2).unwrap();
        assert_eq!(Container::len(&c), 2);
        assert_eq!(c.remove_last(), Some(2));
        assert_eq!(c.remove_last(), Some(1));
        assert_eq!(c.remove_last(), None);
    }

    #[test]
    fn numeric_buffer_accepts_numbers_only() {
        let mut c = NumericBuffer::new();
        c.append(Value::Number(42.0)).unwrap();

        let err = c.append(Value::Boolean(true)).unwrap_err();
        assert_eq!(
            err,
            ContainerError::TypeMismatch {
                expected: "number",
                found: "boolean"
            }
        );
        assert!(c.append(Value::Nil).is_err());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn numeric_buffer_returns_values_back_as_numbers() {
        let mut c = NumericBuffer::new();
        c.append(Value::Number(23.0)).unwrap();
        assert_eq!(c.remove_last(), Some(Value::Number(23.0)));
        assert_eq!(c.remove_last(), None);
    }
}
