//! Catalogue store layer.
//!
//! # Responsibility
//! - Own the in-memory dish collection and its persistence through the
//!   named slot.
//! - Keep UI layers decoupled from blob encoding and storage details.
//!
//! # Invariants
//! - The store is the only writer of the catalogue slot.
//! - Views hold only transient, derived read access to the collection.

pub mod dish_store;
