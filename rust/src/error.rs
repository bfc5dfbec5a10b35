//! Failure type of the bridge.
//!
//! Every way a decode can fail resolves at this boundary into one
//! [`DecodeError`], and from there into a single [`DecodeStatus`] via
//! [`DecodeError::status`]. Native codes pass through unchanged; shim-local
//! failures map onto the same vocabulary so callers only ever look at one
//! kind of outcome.

use thiserror::Error;

use crate::status::DecodeStatus;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input buffer was empty; the decoder was never touched.
    #[error("input buffer is empty")]
    EmptyInput,

    /// The native library returned no decoder handle.
    #[error("decoder handle could not be acquired")]
    Init,

    /// Loading the buffer into the decoder failed; carries the native status
    /// verbatim.
    #[error("decoder rejected the buffer: {0}")]
    Open(DecodeStatus),

    /// Unpacking the raw data failed; carries the native status verbatim.
    #[error("decoder could not unpack the raw data: {0}")]
    Unpack(DecodeStatus),

    /// Dimensions or the pixel plane pointer were inconsistent after unpack.
    #[error("decoder state is inconsistent after unpack")]
    Data,

    /// The output buffer's byte length overflowed or could not be allocated.
    #[error("decoded plane does not fit in memory")]
    TooBig,

    /// The bounds-checked bulk copy could not be satisfied.
    #[error("pixel plane copy failed")]
    Copy,
}

impl DecodeError {
    /// The status code the caller sees for this failure.
    ///
    /// `Open` and `Unpack` return what the library reported; the shim-local
    /// variants use the library's vocabulary for the closest outcome.
    pub fn status(&self) -> DecodeStatus {
        match self {
            DecodeError::EmptyInput => DecodeStatus::Unspecified,
            DecodeError::Init => DecodeStatus::Unspecified,
            DecodeError::Open(status) => *status,
            DecodeError::Unpack(status) => *status,
            DecodeError::Data => DecodeStatus::DataError,
            DecodeError::TooBig => DecodeStatus::InsufficientMemory,
            DecodeError::Copy => DecodeStatus::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_statuses_pass_through_verbatim() {
        let status = DecodeStatus::Other(-31337);
        assert_eq!(DecodeError::Open(status).status(), status);
        assert_eq!(DecodeError::Unpack(status).status(), status);
        assert_eq!(
            DecodeError::Open(DecodeStatus::IoError).status(),
            DecodeStatus::IoError
        );
    }

    #[test]
    fn test_shim_local_failures_map_onto_native_vocabulary() {
        assert_eq!(DecodeError::EmptyInput.status(), DecodeStatus::Unspecified);
        assert_eq!(DecodeError::Init.status(), DecodeStatus::Unspecified);
        assert_eq!(DecodeError::Data.status(), DecodeStatus::DataError);
        assert_eq!(
            DecodeError::TooBig.status(),
            DecodeStatus::InsufficientMemory
        );
        assert_eq!(DecodeError::Copy.status(), DecodeStatus::Unspecified);
    }

    #[test]
    fn test_no_variant_reports_success() {
        let errors = [
            DecodeError::EmptyInput,
            DecodeError::Init,
            DecodeError::Open(DecodeStatus::FileUnsupported),
            DecodeError::Unpack(DecodeStatus::DataError),
            DecodeError::Data,
            DecodeError::TooBig,
            DecodeError::Copy,
        ];
        for error in errors {
            assert!(!error.status().is_success(), "{error:?}");
        }
    }
}
