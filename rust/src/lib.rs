//! # rawbridge
//!
//! Safe buffer-handoff bridge over the LibRaw raw decoding library.
//!
//! The crate does exactly one thing: hand an in-memory raw file to a native
//! decoder handle, drive the handle through its open → unpack → inspect →
//! copy lifecycle, and return an owned [`BayerPlane`] of 16-bit sensor
//! samples. Decoding itself happens entirely inside the native library; what
//! this crate guarantees is the boundary discipline: the handle is released
//! exactly once on every exit path, no plane escapes a failed call, and
//! native status codes reach the caller unchanged.
//!
//! The protocol is generic over a [`RawBackend`] so its lifecycle contract
//! is testable without LibRaw; enable the `libraw` feature for the real
//! backend and the [`decode`] convenience entry point.
//!
//! ```rust
//! use rawbridge::{decode_with, testing::MockBackend};
//!
//! let backend = MockBackend::new(4, 3);
//! let plane = decode_with(&backend, &[0u8; 64]).unwrap();
//! assert_eq!((plane.width(), plane.height()), (4, 3));
//! assert_eq!(plane.samples().len(), 12);
//! ```

pub mod backend;
mod bridge;
mod error;
mod plane;
mod status;
pub mod testing;

#[cfg(feature = "libraw")]
pub mod ffi;

pub use backend::{RawBackend, RawSession};
pub use bridge::decode_with;
pub use error::DecodeError;
pub use plane::BayerPlane;
pub use status::DecodeStatus;

#[cfg(feature = "libraw")]
pub use ffi::{decode, LibrawBackend, LibrawSession};
