//! The seam between the decode protocol and the native library.
//!
//! The protocol in [`crate::decode_with`] only needs five things from a
//! decoder session, so those five things are a trait. The `libraw` feature
//! provides the real implementation over the native library; the
//! [`crate::testing`] module provides a mock whose handle lifecycle can be
//! counted and whose failures can be injected.

use crate::status::DecodeStatus;

/// Source of decoder sessions.
///
/// One session is acquired per decode call and never shared or reused.
pub trait RawBackend {
    type Session: RawSession;

    /// Acquire a fresh decoder handle. `None` means the library could not
    /// allocate one; there is nothing to release in that case.
    fn open(&self) -> Option<Self::Session>;
}

/// One in-progress decode session over a native handle.
///
/// Releasing the handle is the implementor's `Drop`, which must run exactly
/// once; the protocol relies on drop-on-every-exit for its no-leak
/// guarantee. Sessions are not thread-safe and are never shared.
pub trait RawSession {
    /// Present the input buffer to the decoder. The borrow of `input` spans
    /// the native call, so the bytes cannot move while the library holds a
    /// pointer into them.
    fn load_buffer(&mut self, input: &[u8]) -> DecodeStatus;

    /// Decode the loaded buffer into the session's internal pixel plane.
    /// Must be called after [`load_buffer`](RawSession::load_buffer).
    fn unpack(&mut self) -> DecodeStatus;

    /// Dimensions of the buffer `unpack` filled, as recorded next to it.
    fn raw_dimensions(&self) -> (u32, u32);

    /// Dimensions from the session's header fields. This is a second source
    /// of truth for the same image; the protocol checks both.
    fn dimensions(&self) -> (u32, u32);

    /// Borrowed view of the internal pixel plane, or `None` if the decoder
    /// produced no plane. The view is only valid while the session lives.
    fn raw_plane(&self) -> Option<&[u16]>;
}
