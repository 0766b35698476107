//! Domain model for the dish catalogue.
//!
//! # Responsibility
//! - Define the canonical `Dish` record and its closed category set.
//! - Own the persisted field-tag layout of the catalogue blob.
//!
//! # Invariants
//! - Every dish is identified by a stable `DishId`.
//! - Records are immutable once created; there is no edit or delete path.

pub mod dish;
