//! Wrap-around index over a collection of known length.

use crate::error::CarouselError;

/// Index into a collection that wraps at both ends.
///
/// Holds `Some(i)` with `i < len` whenever `len > 0`, and `None` for an
/// empty collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WrapCursor {
    index: Option<usize>,
    len: usize,
}

impl WrapCursor {
    /// Creates a cursor at the first element.
    pub fn new(len: usize) -> Self {
        Self {
            index: (len > 0).then_some(0),
            len,
        }
    }

    /// Points at a collection of a new length, back at the first element.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Moves forward, wrapping past the last element. No-op when empty.
    pub fn next(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + 1) % self.len);
        }
    }

    /// Moves backward, wrapping before the first element. No-op when empty.
    pub fn previous(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + self.len - 1) % self.len);
        }
    }

    /// Jumps directly to `index`.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = Some(index);
        Ok(())
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
