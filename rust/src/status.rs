//! Outcome codes reported by the native decoder.
//!
//! LibRaw reports every outcome as an integer: zero for success, small
//! negatives for call-sequence problems, `-1000xx` for fatal decode errors.
//! The bridge never reinterprets these; a failure at open or unpack surfaces
//! the exact code the library returned, so callers can tell library-reported
//! reasons apart from shim-local ones.

use std::fmt;

/// Status vocabulary of the native decoder, plus [`DecodeStatus::Other`] for
/// codes outside the known set.
///
/// [`from_code`](DecodeStatus::from_code) and [`code`](DecodeStatus::code)
/// round-trip every integer, known or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStatus {
    Success,
    Unspecified,
    FileUnsupported,
    NonexistentImage,
    OutOfOrderCall,
    NoThumbnail,
    UnsupportedThumbnail,
    InputClosed,
    InsufficientMemory,
    DataError,
    IoError,
    CancelledByCallback,
    BadCrop,
    /// A code this crate does not know by name, carried verbatim.
    Other(i32),
}

impl DecodeStatus {
    /// Map a native return code onto the status vocabulary.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => DecodeStatus::Success,
            -1 => DecodeStatus::Unspecified,
            -2 => DecodeStatus::FileUnsupported,
            -3 => DecodeStatus::NonexistentImage,
            -4 => DecodeStatus::OutOfOrderCall,
            -5 => DecodeStatus::NoThumbnail,
            -6 => DecodeStatus::UnsupportedThumbnail,
            -7 => DecodeStatus::InputClosed,
            -100007 => DecodeStatus::InsufficientMemory,
            -100008 => DecodeStatus::DataError,
            -100009 => DecodeStatus::IoError,
            -100010 => DecodeStatus::CancelledByCallback,
            -100011 => DecodeStatus::BadCrop,
            other => DecodeStatus::Other(other),
        }
    }

    /// The native integer for this status, unchanged from what the library
    /// reported.
    pub fn code(self) -> i32 {
        match self {
            DecodeStatus::Success => 0,
            DecodeStatus::Unspecified => -1,
            DecodeStatus::FileUnsupported => -2,
            DecodeStatus::NonexistentImage => -3,
            DecodeStatus::OutOfOrderCall => -4,
            DecodeStatus::NoThumbnail => -5,
            DecodeStatus::UnsupportedThumbnail => -6,
            DecodeStatus::InputClosed => -7,
            DecodeStatus::InsufficientMemory => -100007,
            DecodeStatus::DataError => -100008,
            DecodeStatus::IoError => -100009,
            DecodeStatus::CancelledByCallback => -100010,
            DecodeStatus::BadCrop => -100011,
            DecodeStatus::Other(code) => code,
        }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        self == DecodeStatus::Success
    }
}

impl fmt::Display for DecodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecodeStatus::Success => "success",
            DecodeStatus::Unspecified => "unspecified error",
            DecodeStatus::FileUnsupported => "file unsupported",
            DecodeStatus::NonexistentImage => "request for nonexistent image",
            DecodeStatus::OutOfOrderCall => "out of order call",
            DecodeStatus::NoThumbnail => "no thumbnail",
            DecodeStatus::UnsupportedThumbnail => "unsupported thumbnail",
            DecodeStatus::InputClosed => "input closed",
            DecodeStatus::InsufficientMemory => "insufficient memory",
            DecodeStatus::DataError => "data error",
            DecodeStatus::IoError => "i/o error",
            DecodeStatus::CancelledByCallback => "cancelled by callback",
            DecodeStatus::BadCrop => "bad crop",
            DecodeStatus::Other(_) => "unknown",
        };
        write!(f, "{} (code {})", name, self.code())
    }
}
