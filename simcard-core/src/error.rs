use core::fmt::Write;

use crate::kind::ErrorKind;
use crate::message::{to_message, Message};

/// `Result` specialised to card failures.
pub type Result<T> = core::result::Result<T, Error>;

/// A failure while talking to a SIM or smart card.
///
/// The three variants are the whole taxonomy. Each carries an optional
/// human readable message; without one, the error displays the
/// description of its [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No card is present in the reader.
    #[error("{}", text(.0, ErrorKind::NoCard))]
    NoCard(Option<Message>),

    /// The card or reader broke protocol framing or sequencing.
    #[error("{}", text(.0, ErrorKind::Protocol))]
    Protocol(Option<Message>),

    /// The reader device itself failed.
    #[error("{}", text(.0, ErrorKind::Reader))]
    Reader(Option<Message>),
}

fn text(message: &Option<Message>, kind: ErrorKind) -> &str {
    message.as_deref().unwrap_or(kind.description())
}

impl Error {
    /// Creates an error of `kind` carrying `message`.
    pub fn new(kind: ErrorKind, message: impl AsRef<str>) -> Self {
        Self::with_message(kind, Some(to_message(message.as_ref())))
    }

    /// Creates an error of `kind` with no message.
    pub fn bare(kind: ErrorKind) -> Self {
        Self::with_message(kind, None)
    }

    /// No card present, with `message`.
    pub fn no_card(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::NoCard, message)
    }

    /// Protocol violation, with `message`.
    pub fn protocol(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Protocol, message)
    }

    /// Reader failure, with `message`.
    pub fn reader(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Reader, message)
    }

    /// Protocol error for a card that answered with status word `sw1 sw2`
    /// where success was expected, e.g. `unexpected SW 6A82`.
    pub fn unexpected_status(sw1: u8, sw2: u8) -> Self {
        let mut message = Message::new();
        // 18 bytes, always fits the no_std buffer
        write!(message, "unexpected SW {:02X}{:02X}", sw1, sw2).ok();
        Error::Protocol(Some(message))
    }

    fn with_message(kind: ErrorKind, message: Option<Message>) -> Self {
        match kind {
            ErrorKind::NoCard => Error::NoCard(message),
            ErrorKind::Protocol => Error::Protocol(message),
            ErrorKind::Reader => Error::Reader(message),
        }
    }

    /// The variant as a fieldless [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoCard(_) => ErrorKind::NoCard,
            Error::Protocol(_) => ErrorKind::Protocol,
            Error::Reader(_) => ErrorKind::Reader,
        }
    }

    /// The message given at construction, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::NoCard(message) | Error::Protocol(message) | Error::Reader(message) => {
                message.as_deref()
            }
        }
    }

    /// Returns `true` if this error is of `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::bare(kind)
    }
}


#[cfg(all(test, not(feature = "std")))]
mod no_std_tests {
    use super::*;

    // 64 ASCII bytes
    const FULL: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
    const OVER: &str = concat!(
        "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
        "x"
    );
    // 63 ASCII bytes then a two byte char spanning bytes 63..65
    const STRADDLE: &str = concat!(
        "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcde",
        "\u{e9}"
    );

    #[test]
    fn message_at_capacity_is_kept_whole() {
        assert_eq!(64, FULL.len());
        assert_eq!(Some(FULL), Error::reader(FULL).message());
    }

    #[test]
    fn message_over_capacity_is_cut_to_capacity() {
        assert_eq!(65, OVER.len());
        assert_eq!(Some(FULL), Error::no_card(OVER).message());
    }

    #[test]
    fn multi_byte_char_is_not_split() {
        assert_eq!(65, STRADDLE.len());
        let err = Error::protocol(STRADDLE);
        assert_eq!(Some(&STRADDLE[..63]), err.message());
    }

    #[test]
    fn unexpected_status_fits() {
        let err = Error::unexpected_status(0x6A, 0x82);
        assert_eq!(ErrorKind::Protocol, err.kind());
        assert_eq!(Some("unexpected SW 6A82"), err.message());
    }

    #[test]
    fn bare_error_has_no_message() {
        assert_eq!(None, Error::bare(ErrorKind::NoCard).message());
    }
}
