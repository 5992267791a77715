use crate::status::{BufferError, Status};

/// Fixed-capacity FIFO over an inline `[T; N]`.
///
/// `head` is where the next value goes, `tail` is the oldest value.
/// When the two are equal the buffer is either empty or full, and only the
/// `full` flag tells them apart. All `N` slots are usable.
///
/// A zero capacity is rejected when the buffer is instantiated:
///
/// ```compile_fail
/// let buffer = fixring::RingBuffer::<u8, 0>::new();
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<T, const N: usize> {
    storage: [T; N],
    tail: usize,
    head: usize,
    full: bool,
}

impl<T, const N: usize> RingBuffer<T, N> {
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "ring buffer capacity must be non-zero");

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn filled(&self) -> usize {
        if self.full {
            N
        } else if self.tail > self.head {
            // Occupied region wraps: tail..N and 0..head
            (N - self.tail) + self.head
        } else {
            self.head - self.tail
        }
    }

    // Computed on its own rather than as N - filled(), the two must agree.
    pub fn remaining(&self) -> usize {
        if self.full {
            0
        } else if self.tail > self.head {
            self.tail - self.head
        } else {
            N - (self.head - self.tail)
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.full && self.head == self.tail
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Forgets every element. The storage is not cleared, old values stay
    /// in place until they are overwritten but can no longer be read.
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.full = false;
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(&self.storage[self.tail])
    }

    /// Iterates from the oldest to the newest element.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            storage: &self.storage,
            pos: self.tail,
            left: self.filled(),
        }
    }

    /// Raw backing storage, including slots that are logically empty.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    /// Creates an empty buffer with every slot set to `value`.
    /// Usable for `static` and `const` initialisation.
    pub const fn new_with(value: T) -> Self {
        let () = Self::NON_ZERO_CAPACITY;
        Self {
            storage: [value; N],
            tail: 0,
            head: 0,
            full: false,
        }
    }

    /// Stores `value` unless the buffer is full, in which case the value
    /// is dropped and `Status::Full` is returned.
    pub fn push(&mut self, value: T) -> Status {
        if self.remaining() == 0 {
            trace!("push rejected, buffer full ({})", N);
            return Status::Full;
        }

        self.write(value);
        Status::Success
    }

    /// Stores `value` unconditionally. On a full buffer the oldest element
    /// is discarded and `Status::Overwrite` is returned.
    pub fn force_push(&mut self, value: T) -> Status {
        if self.remaining() != 0 {
            self.write(value);
            return Status::Success;
        }

        // The slot at head is the oldest element, tail follows it forward.
        self.storage[self.head] = value;
        self.head = (self.head + 1) % N;
        self.tail = self.head;
        warn!("oldest element overwritten, tail now at {}", self.tail);
        Status::Overwrite
    }

    /// Moves the oldest element into `out`. On an empty buffer `out` is
    /// left as it was and `Status::Empty` is returned.
    pub fn pop(&mut self, out: &mut T) -> Status {
        match self.try_pop() {
            Ok(value) => {
                *out = value;
                Status::Success
            }
            Err(err) => err.into(),
        }
    }

    pub fn try_push(&mut self, value: T) -> Result<(), BufferError> {
        self.push(value).into_result().map(|_| ())
    }

    pub fn try_pop(&mut self) -> Result<T, BufferError> {
        if self.filled() == 0 {
            trace!("pop rejected, buffer empty");
            return Err(BufferError::Empty);
        }

        let value = self.storage[self.tail];
        self.tail = (self.tail + 1) % N;
        // Removing can never leave the buffer full
        self.full = false;
        Ok(value)
    }

    fn write(&mut self, value: T) {
        self.storage[self.head] = value;
        self.head = (self.head + 1) % N;
        self.full = self.head == self.tail;
    }
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    pub fn new() -> Self {
        Self::new_with(T::default())
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "defmt")]
impl<T, const N: usize> defmt::Format for RingBuffer<T, N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "RingBuffer {{ filled: {}, capacity: {}, head: {}, tail: {} }}",
            self.filled(),
            N,
            self.head,
            self.tail
        )
    }
}

pub struct Iter<'a, T, const N: usize> {
    storage: &'a [T; N],
    pos: usize,
    left: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let item = &self.storage[self.pos];
        self.pos = (self.pos + 1) % N;
        self.left -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
