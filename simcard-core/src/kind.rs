use core::fmt;

/// Which of the three card failures an [`Error`](crate::Error) signals.
///
/// Use this to branch on the failure without touching its message:
///
/// ```rust
/// use simcard_core::{Error, ErrorKind};
///
/// let err = Error::reader("device disconnected");
/// match err.kind() {
///     ErrorKind::NoCard => println!("insert a card"),
///     ErrorKind::Protocol => println!("card answered out of sequence"),
///     ErrorKind::Reader => println!("check the reader connection"),
/// }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No card is present in the reader, or it was removed mid-operation.
    NoCard,

    /// The card or reader answered outside the expected framing or sequence
    /// (bad status word, malformed response, protocol mismatch).
    Protocol,

    /// The reader device or its service failed (open, I/O, disconnect).
    Reader,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 3] = [ErrorKind::NoCard, ErrorKind::Protocol, ErrorKind::Reader];

    /// Text shown for an error of this kind that carries no message.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorKind::NoCard => "no card present",
            ErrorKind::Protocol => "protocol error",
            ErrorKind::Reader => "reader error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
