//! Flutter-facing FFI crate for Dishbook.

pub mod api;
