#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod kind;
pub mod message;

pub use error::{Error, Result};
pub use kind::ErrorKind;
pub use message::Message;
