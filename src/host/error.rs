//! Host operation errors.

/// Errors reported by a host document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Fullscreen request was not allowed")]
    FullscreenNotAllowed,

    #[error("Element is not connected to the document")]
    NotConnected,
}
