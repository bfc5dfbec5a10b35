//! The buffer-handoff protocol: one input buffer in, one fresh handle
//! driven through open, unpack, inspect and copy, one owned plane out.

use std::mem;

use log::{debug, warn};

use crate::backend::{RawBackend, RawSession};
use crate::error::DecodeError;
use crate::plane::BayerPlane;

/// Decode one raw buffer through `backend`.
///
/// The call is synchronous and runs the strict linear lifecycle: acquire a
/// handle, load the buffer, unpack, validate dimensions and plane pointer,
/// copy the samples out. A fresh handle is used per call and released on
/// every exit path, success included; nothing is cached across calls and
/// nothing is retried.
///
/// On failure the caller gets a [`DecodeError`] and no plane; native status
/// codes from the open and unpack steps are carried verbatim inside the
/// error. On success the returned plane's dimensions are both positive and
/// its sample count matches them.
pub fn decode_with<B: RawBackend>(backend: &B, input: &[u8]) -> Result<BayerPlane, DecodeError> {
    if input.is_empty() {
        debug!("decode called with an empty buffer");
        return Err(DecodeError::EmptyInput);
    }

    let mut session = match backend.open() {
        Some(session) => session,
        None => {
            warn!("decoder handle could not be acquired");
            return Err(DecodeError::Init);
        }
    };
    // From here on, every return path drops `session`, releasing the native
    // handle exactly once.

    let status = session.load_buffer(input);
    if !status.is_success() {
        warn!("decoder rejected {} byte buffer: {status}", input.len());
        return Err(DecodeError::Open(status));
    }

    let status = session.unpack();
    if !status.is_success() {
        warn!("unpack failed: {status}");
        return Err(DecodeError::Unpack(status));
    }

    // The unpack buffer's size fields and the header size fields describe
    // the same image through different paths in the native state. Check
    // both; treating either as redundant is not ours to decide.
    let (raw_width, raw_height) = session.raw_dimensions();
    if raw_width == 0 || raw_height == 0 {
        warn!("unpack buffer reports zero dimensions: {raw_width}x{raw_height}");
        return Err(DecodeError::Data);
    }
    let (width, height) = session.dimensions();
    if width == 0 || height == 0 {
        warn!("header reports zero dimensions: {width}x{height}");
        return Err(DecodeError::Data);
    }

    let Some(plane) = session.raw_plane() else {
        warn!("decoder produced no pixel plane");
        return Err(DecodeError::Data);
    };

    // Guard the byte length before touching the allocator.
    let total_pixels = match (width as usize).checked_mul(height as usize) {
        Some(pixels) => pixels,
        None => {
            warn!("pixel count overflows for {width}x{height}");
            return Err(DecodeError::TooBig);
        }
    };
    let byte_len = match total_pixels.checked_mul(mem::size_of::<u16>()) {
        Some(bytes) if bytes <= isize::MAX as usize => bytes,
        _ => {
            warn!("byte length overflows for {width}x{height}");
            return Err(DecodeError::TooBig);
        }
    };

    let mut samples: Vec<u16> = Vec::new();
    if samples.try_reserve_exact(total_pixels).is_err() {
        warn!("failed to allocate {byte_len} bytes for the decoded plane");
        return Err(DecodeError::TooBig);
    }

    // Bounds-checked bulk copy: the plane must cover every sample we copy.
    if plane.len() < total_pixels {
        warn!(
            "pixel plane holds {} samples, {total_pixels} required",
            plane.len()
        );
        return Err(DecodeError::Copy);
    }
    samples.extend_from_slice(&plane[..total_pixels]);

    Ok(BayerPlane::from_samples(samples, width, height))
}
