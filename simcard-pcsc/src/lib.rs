//! Maps failures reported by the PC/SC stack onto [`simcard_core::Error`].

mod classify;

pub use classify::{classify, classify_with_context, kind_of};
