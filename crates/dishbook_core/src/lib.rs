//! Core domain logic for Dishbook.
//! This crate is the single source of truth for catalogue invariants.

pub mod catalog;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod photo;
pub mod store;

pub use catalog::{find_dish, group_by_category, CategoryGroup};
pub use form::dish_form::{DishForm, FormSignal, FormState};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dish::{Category, Dish, DishId};
pub use photo::{photo_pick, PhotoPoll, PhotoSender, PhotoTicket, PickRequest};
pub use store::dish_store::{DishStore, ListenerId, DISHES_SLOT_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
