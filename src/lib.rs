//#![warn(missing_docs)]

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

pub mod status;

pub mod ring;

pub use ring::{Iter, RingBuffer};
pub use status::{BufferError, Status};
