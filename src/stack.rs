use std::marker::PhantomData;

use crate::container::{Container, ContainerError};

/// A stack that composes over its backing container instead of extending it.
/// Only push, pop and len are exposed, whatever the backing storage offers.
#[derive(Debug)]
pub struct Stack<T, C: Container<T> = Vec<T>> {
    items: C,
    _item: PhantomData<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::with_container(Vec::new())
    }
}

impl<T, C: Container<T>> Stack<T, C> {
    /// Injects the backing container rather than creating one internally.
    pub fn with_container(container: C) -> Self {
        Self {
            items: container,
            _item: PhantomData,
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), ContainerError> {
        self.items.append(item)
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items.remove_last().ok_or(ContainerError::Empty)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
