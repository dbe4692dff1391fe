// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

extern crate version_check as rustc;

fn main() {
    // Avoid unnecessary rebuilding.
    println!("cargo:rerun-if-changed=build.rs");

    // Declare custom cfgs (ignored as metadata by older Cargo).
    println!("cargo:rustc-check-cfg=cfg(onpdiff_assume, values(\"stable\", \"fallback\"))");
    println!("cargo:rustc-check-cfg=cfg(onpdiff_error_in_core, values(\"stable\", \"unavailable\"))");
    println!("cargo:rustc-check-cfg=cfg(onpdiff_tests_without_debug_assertions)");

    // Method: core::hint::assert_unchecked
    // assert_unchecked: 1.81- (stable)
    // Older compilers fall back to core::hint::unreachable_unchecked.
    if rustc::is_min_version("1.81.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=onpdiff_assume=\"stable\"");
    } else {
        println!("cargo:rustc-cfg=onpdiff_assume=\"fallback\"");
    }

    // Trait: core::error::Error
    // error_in_core: 1.65-1.80 ("error_in_core" unstable feature)
    // error_in_core: 1.81-     (stable)
    if rustc::is_min_version("1.81.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=onpdiff_error_in_core=\"stable\"");
    } else {
        println!("cargo:rustc-cfg=onpdiff_error_in_core=\"unavailable\"");
    }
}
