//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dishbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("dishbook_core ping={}", dishbook_core::ping());
    println!("dishbook_core version={}", dishbook_core::core_version());
}
