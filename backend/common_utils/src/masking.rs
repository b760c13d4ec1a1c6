//! Wrapper types that keep sensitive values out of logs and debug output

use std::fmt;

/// Opaque wrapper around a sensitive value. `Debug` prints the type name
/// only, never the contents.
pub struct Secret<T>(T);

impl<T> Secret<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }
}

/// Borrow the wrapped value without consuming the secret
pub trait PeekInterface<T> {
    fn peek(&self) -> &T;
}

/// Consume the secret and take ownership of the wrapped value
pub trait ExposeInterface<T> {
    fn expose(self) -> T;
}

impl<T> PeekInterface<T> for Secret<T> {
    fn peek(&self) -> &T {
        &self.0
    }
}

impl<T> ExposeInterface<T> for Secret<T> {
    fn expose(self) -> T {
        self.0
    }
}

impl<T> From<T> for Secret<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Clone> Clone for Secret<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*** {} ***", std::any::type_name::<T>())
    }
}
