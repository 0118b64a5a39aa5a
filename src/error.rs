//! Error taxonomy for the NYA decoder.
//!
//! Every variant corresponds to one of the format's named failure modes:
//! structural failures surfaced before any allocation, stream failures
//! from bit-level exhaustion, a semantic overrun, and a resource failure
//! from buffer allocation. Inner routines never log; they return one of
//! these and let the caller decide what to do with it.

/// All ways a decode can fail.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("path does not have a .nya extension")]
    NotNyaExtension,
    #[error("failed to open file: {0}")]
    OpenFailed(std::io::Error),
    #[error("file magic does not match NYA!")]
    InvalidMagic,
    #[error("filter type in header flags is reserved/unspecified")]
    InvalidFilter,
    #[error("bit source was exhausted before the stream was fully consumed")]
    TruncatedStream,
    #[error("a run-length block would write past the end of the pixel buffer")]
    Overrun,
    #[error("failed to allocate the pixel buffer")]
    AllocationFailed,
}
