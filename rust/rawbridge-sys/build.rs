fn main() {
    // Compile the accessor shim. The shim exists because the LibRaw C API has
    // no getters for the fields rawbridge reads (rawdata sizes, header sizes,
    // raw pixel plane pointer) and mirroring libraw_data_t's layout in Rust
    // would break across LibRaw versions.
    cc::Build::new()
        .file("csrc/rawbridge_shim.c")
        .opt_level(2)
        .compile("rawbridge_shim");

    println!("cargo:rerun-if-changed=csrc/rawbridge_shim.c");

    // Link the system LibRaw
    println!("cargo:rustc-link-lib=dylib=raw");
}
