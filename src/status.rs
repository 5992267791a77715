use thiserror::Error;

/// Outcome of a buffer operation.
///
/// None of these are faults: a bounded buffer is expected to fill up and
/// drain. `Overwrite` is still a success, but the oldest element was lost.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    Success,
    /// `push` was rejected, the buffer already holds `N` elements.
    Full,
    /// `pop` was rejected, the buffer holds nothing.
    Empty,
    /// `force_push` stored the value by dropping the oldest element.
    Overwrite,
}

impl Status {
    // Overwrite counts as success: the value was stored.
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success | Status::Overwrite)
    }

    pub fn lost_data(&self) -> bool {
        *self == Status::Overwrite
    }

    /// Turns the rejections into errors so callers can use `?`.
    pub fn into_result(self) -> Result<Status, BufferError> {
        match self {
            Status::Success | Status::Overwrite => Ok(self),
            Status::Full => Err(BufferError::Full),
            Status::Empty => Err(BufferError::Empty),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    #[error("ring buffer is full")]
    Full,
    #[error("ring buffer is empty")]
    Empty,
}

impl From<BufferError> for Status {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::Full => Status::Full,
            BufferError::Empty => Status::Empty,
        }
    }
}
