//! Dish creation form.
//!
//! # Responsibility
//! - Collect field values and gate submission on the minimal required set.
//! - Hand completed records to the store, nothing else.

pub mod dish_form;
