//! Mock decoder backend.
//!
//! The handoff protocol's most important contract is invisible on the happy
//! path: exactly one handle release per call, no matter where the call
//! exits. This module provides a backend whose acquire/release lifecycle is
//! counted and whose failures can be injected at every step, so that
//! contract is testable without the native library.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::backend::{RawBackend, RawSession};
use crate::status::DecodeStatus;

/// Shared acquire/release counters for one [`MockBackend`].
///
/// Cloning shares the underlying counters, so a clone taken before a batch
/// of decode calls observes all of them.
#[derive(Debug, Clone, Default)]
pub struct LifecycleCounters {
    acquired: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl LifecycleCounters {
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    fn note_acquire(&self) {
        self.acquired.fetch_add(1, Ordering::SeqCst);
    }

    fn note_release(&self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Configurable stand-in for the native decoder.
///
/// By default every step succeeds and the session exposes a deterministic
/// plane of `width * height` samples. Each `fail_*`/`*_status` knob makes
/// exactly one step of the protocol misbehave.
#[derive(Debug, Clone)]
pub struct MockBackend {
    width: u32,
    height: u32,
    counters: LifecycleCounters,
    fail_acquire: bool,
    open_status: DecodeStatus,
    unpack_status: DecodeStatus,
    zero_raw_dimensions: bool,
    zero_header_dimensions: bool,
    missing_plane: bool,
    /// Samples withheld from the end of the plane, to starve the bulk copy.
    plane_deficit: usize,
}

impl MockBackend {
    pub fn new(width: u32, height: u32) -> Self {
        MockBackend {
            width,
            height,
            counters: LifecycleCounters::default(),
            fail_acquire: false,
            open_status: DecodeStatus::Success,
            unpack_status: DecodeStatus::Success,
            zero_raw_dimensions: false,
            zero_header_dimensions: false,
            missing_plane: false,
            plane_deficit: 0,
        }
    }

    /// Counter handle shared with every session this backend opens.
    pub fn counters(&self) -> LifecycleCounters {
        self.counters.clone()
    }

    /// Make `open` yield no handle at all.
    pub fn fail_acquire(mut self) -> Self {
        self.fail_acquire = true;
        self
    }

    /// Status the load-buffer step returns.
    pub fn open_status(mut self, status: DecodeStatus) -> Self {
        self.open_status = status;
        self
    }

    /// Status the unpack step returns.
    pub fn unpack_status(mut self, status: DecodeStatus) -> Self {
        self.unpack_status = status;
        self
    }

    /// Zero out the unpack buffer's size fields while leaving the header
    /// fields intact.
    pub fn zero_raw_dimensions(mut self) -> Self {
        self.zero_raw_dimensions = true;
        self
    }

    /// Zero out the header size fields while leaving the unpack buffer's
    /// fields intact.
    pub fn zero_header_dimensions(mut self) -> Self {
        self.zero_header_dimensions = true;
        self
    }

    /// Report no pixel plane after unpack.
    pub fn missing_plane(mut self) -> Self {
        self.missing_plane = true;
        self
    }

    /// Expose a plane that is `deficit` samples shorter than the dimensions
    /// require.
    pub fn short_plane(mut self, deficit: usize) -> Self {
        self.plane_deficit = deficit;
        self
    }

    /// The samples a successful decode against this backend must return.
    pub fn expected_samples(&self) -> Vec<u16> {
        let pixels = capped_pixel_count(self.width, self.height);
        (0..pixels).map(sample_at).collect()
    }
}

/// Deterministic sample value for plane index `i`.
fn sample_at(i: usize) -> u16 {
    (i.wrapping_mul(2654435761) >> 8) as u16
}

/// Plane sizes are capped so oversized-dimension tests never materialize
/// the plane they describe; the overflow guard rejects those before the
/// plane length matters.
fn capped_pixel_count(width: u32, height: u32) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .min(1 << 20)
}

impl RawBackend for MockBackend {
    type Session = MockSession;

    fn open(&self) -> Option<MockSession> {
        if self.fail_acquire {
            return None;
        }
        self.counters.note_acquire();
        let pixels = capped_pixel_count(self.width, self.height);
        let plane = (0..pixels.saturating_sub(self.plane_deficit))
            .map(sample_at)
            .collect();
        Some(MockSession {
            backend: self.clone(),
            plane,
            unpacked: false,
        })
    }
}

/// Session handed out by [`MockBackend`]; its `Drop` is the mock analogue of
/// closing the native handle.
#[derive(Debug)]
pub struct MockSession {
    backend: MockBackend,
    plane: Vec<u16>,
    unpacked: bool,
}

impl RawSession for MockSession {
    fn load_buffer(&mut self, input: &[u8]) -> DecodeStatus {
        debug_assert!(!input.is_empty(), "protocol rejects empty input earlier");
        self.backend.open_status
    }

    fn unpack(&mut self) -> DecodeStatus {
        if self.backend.unpack_status.is_success() {
            self.unpacked = true;
        }
        self.backend.unpack_status
    }

    fn raw_dimensions(&self) -> (u32, u32) {
        if self.backend.zero_raw_dimensions {
            (0, 0)
        } else {
            (self.backend.width, self.backend.height)
        }
    }

    fn dimensions(&self) -> (u32, u32) {
        if self.backend.zero_header_dimensions {
            (0, 0)
        } else {
            (self.backend.width, self.backend.height)
        }
    }

    fn raw_plane(&self) -> Option<&[u16]> {
        if self.backend.missing_plane || !self.unpacked {
            None
        } else {
            Some(&self.plane)
        }
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.backend.counters.note_release();
    }
}
