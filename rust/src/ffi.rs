//! LibRaw-backed implementation of the decoder backend.
//!
//! One [`LibrawSession`] owns one `libraw_data_t` handle; its `Drop` closes
//! the handle, which is what gives the protocol its release-on-every-exit
//! guarantee over the real library.

use std::os::raw::c_void;
use std::ptr::NonNull;
use std::slice;

use rawbridge_sys as sys;

use crate::backend::{RawBackend, RawSession};
use crate::error::DecodeError;
use crate::plane::BayerPlane;
use crate::status::DecodeStatus;

/// Backend over the system LibRaw.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibrawBackend {
    flags: u32,
}

impl LibrawBackend {
    /// Backend with the default init flag word (0).
    pub fn new() -> Self {
        LibrawBackend::default()
    }

    /// Backend passing `flags` to `libraw_init`.
    pub fn with_flags(flags: u32) -> Self {
        LibrawBackend { flags }
    }
}

impl RawBackend for LibrawBackend {
    type Session = LibrawSession;

    fn open(&self) -> Option<LibrawSession> {
        // SAFETY: libraw_init returns a valid handle or null on allocation
        // failure; null never reaches a session.
        let lr = unsafe { sys::libraw_init(self.flags) };
        NonNull::new(lr).map(|inner| LibrawSession { inner })
    }
}

/// One decode session over an exclusively owned `libraw_data_t`.
pub struct LibrawSession {
    inner: NonNull<sys::libraw_data_t>,
}

// SAFETY: the session owns its handle exclusively and LibRaw instances are
// independent of each other, so moving a session between threads is fine.
unsafe impl Send for LibrawSession {}

impl RawSession for LibrawSession {
    fn load_buffer(&mut self, input: &[u8]) -> DecodeStatus {
        // SAFETY: the handle is valid, and `input` is borrowed for the span
        // of the call, so the pointer stays stable while the library reads
        // from it.
        let code = unsafe {
            sys::libraw_open_buffer(
                self.inner.as_ptr(),
                input.as_ptr() as *const c_void,
                input.len(),
            )
        };
        DecodeStatus::from_code(code)
    }

    fn unpack(&mut self) -> DecodeStatus {
        // SAFETY: the handle is valid and a buffer has been loaded; on a
        // misuse LibRaw itself reports an out-of-order call.
        let code = unsafe { sys::libraw_unpack(self.inner.as_ptr()) };
        DecodeStatus::from_code(code)
    }

    fn raw_dimensions(&self) -> (u32, u32) {
        // SAFETY: the accessors only read fixed fields of a valid handle.
        unsafe {
            (
                sys::rawbridge_raw_width(self.inner.as_ptr()) as u32,
                sys::rawbridge_raw_height(self.inner.as_ptr()) as u32,
            )
        }
    }

    fn dimensions(&self) -> (u32, u32) {
        // SAFETY: as above.
        unsafe {
            (
                sys::rawbridge_width(self.inner.as_ptr()) as u32,
                sys::rawbridge_height(self.inner.as_ptr()) as u32,
            )
        }
    }

    fn raw_plane(&self) -> Option<&[u16]> {
        // SAFETY: the handle is valid; a null plane pointer never becomes a
        // slice.
        let ptr = unsafe { sys::rawbridge_raw_image(self.inner.as_ptr()) };
        if ptr.is_null() {
            return None;
        }
        let (raw_width, raw_height) = self.raw_dimensions();
        let len = (raw_width as usize).checked_mul(raw_height as usize)?;
        // SAFETY: LibRaw sizes the plane by the same raw dimensions it
        // reports. The borrow is tied to `&self`, so the slice cannot
        // outlive the handle backing it.
        Some(unsafe { slice::from_raw_parts(ptr, len) })
    }
}

impl Drop for LibrawSession {
    fn drop(&mut self) {
        // SAFETY: the handle came from libraw_init and drop runs once, so
        // this is the single close for this handle.
        unsafe { sys::libraw_close(self.inner.as_ptr()) }
    }
}

/// Decode one raw buffer with a fresh LibRaw handle.
pub fn decode(input: &[u8]) -> Result<BayerPlane, DecodeError> {
    crate::decode_with(&LibrawBackend::new(), input)
}
