//! Raw FFI bindings to the LibRaw C API
//!
//! Only the entry points rawbridge drives are declared here: the
//! init/open/unpack/close lifecycle plus the field accessors compiled from
//! `csrc/rawbridge_shim.c`. Everything is `unsafe` and pointer-shaped; the
//! safe surface lives in the `rawbridge` crate.
#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_int, c_uint, c_ushort, c_void};

/// Opaque decoder state. LibRaw allocates and owns the layout; this crate
/// only ever holds a pointer to it.
#[repr(C)]
pub struct libraw_data_t {
    _private: [u8; 0],
}

extern "C" {
    // ==================== Lifecycle ====================
    pub fn libraw_init(flags: c_uint) -> *mut libraw_data_t;
    pub fn libraw_open_buffer(
        lr: *mut libraw_data_t,
        buffer: *const c_void,
        size: usize,
    ) -> c_int;
    pub fn libraw_unpack(lr: *mut libraw_data_t) -> c_int;
    pub fn libraw_close(lr: *mut libraw_data_t);
    pub fn libraw_strerror(errorcode: c_int) -> *const c_char;

    // ==================== Field accessors (rawbridge_shim.c) ====================
    pub fn rawbridge_raw_width(lr: *const libraw_data_t) -> c_ushort;
    pub fn rawbridge_raw_height(lr: *const libraw_data_t) -> c_ushort;
    pub fn rawbridge_width(lr: *const libraw_data_t) -> c_ushort;
    pub fn rawbridge_height(lr: *const libraw_data_t) -> c_ushort;
    pub fn rawbridge_raw_image(lr: *const libraw_data_t) -> *const c_ushort;
}
