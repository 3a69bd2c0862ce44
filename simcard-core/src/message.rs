//! Owned message text carried by an [`Error`](crate::Error).

/// Message storage, heap allocated when `std` is available.
#[cfg(feature = "std")]
pub type Message = std::string::String;

/// Message storage, fixed capacity when built without `std`.
#[cfg(not(feature = "std"))]
pub type Message = heapless::String<64>;

/// Copies `text` into a [`Message`].
#[cfg(feature = "std")]
pub fn to_message(text: &str) -> Message {
    Message::from(text)
}

/// Copies `text` into a [`Message`], cut at the last character that fits.
#[cfg(not(feature = "std"))]
pub fn to_message(text: &str) -> Message {
    let mut message = Message::new();
    for c in text.chars() {
        if message.push(c).is_err() {
            break;
        }
    }
    message
}
