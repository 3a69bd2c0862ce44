use simcard_core::{Error, ErrorKind};
use tracing::debug;

/// Which card failure a PC/SC error code stands for.
pub fn kind_of(err: pcsc::Error) -> ErrorKind {
    match err {
        // A wait for card presence that times out means no card arrived.
        pcsc::Error::NoSmartcard | pcsc::Error::RemovedCard | pcsc::Error::Timeout => {
            ErrorKind::NoCard
        }
        pcsc::Error::NoReadersAvailable
        | pcsc::Error::UnknownReader
        | pcsc::Error::ReaderUnavailable
        | pcsc::Error::ReaderUnsupported
        | pcsc::Error::SharingViolation
        | pcsc::Error::NoService
        | pcsc::Error::ServiceStopped
        | pcsc::Error::Shutdown => ErrorKind::Reader,
        _ => ErrorKind::Protocol,
    }
}

/// Converts a PC/SC error into a card error carrying its display text.
pub fn classify(err: pcsc::Error) -> Error {
    let kind = kind_of(err);
    debug!(pcsc_error = ?err, ?kind, "classified PC/SC error");
    Error::new(kind, err.to_string())
}

/// Like [`classify`], prefixing the message with what was being attempted.
pub fn classify_with_context(context: &str, err: pcsc::Error) -> Error {
    let kind = kind_of(err);
    debug!(pcsc_error = ?err, ?kind, context, "classified PC/SC error");
    Error::new(kind, format!("{}: {}", context, err))
}
