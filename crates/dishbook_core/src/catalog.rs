//! List/detail read projections.
//!
//! # Responsibility
//! - Group the store's collection by the three fixed categories for list
//!   rendering.
//!
//! # Invariants
//! - Exactly one group per category, in fixed enumeration order, even when
//!   a group is empty.
//! - Within a group, dishes keep their original collection order.
//! - Projections borrow; they never copy or retain the collection.

use crate::model::dish::{Category, Dish, DishId};

/// One list section: a category and its dishes in collection order.
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub dishes: Vec<&'a Dish>,
}

/// Projects the collection into the three fixed list sections.
pub fn group_by_category(dishes: &[Dish]) -> Vec<CategoryGroup<'_>> {
    Category::ALL
        .iter()
        .map(|&category| CategoryGroup {
            category,
            dishes: dishes
                .iter()
                .filter(|dish| dish.category == category)
                .collect(),
        })
        .collect()
}

/// Looks up one dish for the detail view.
pub fn find_dish(dishes: &[Dish], id: DishId) -> Option<&Dish> {
    dishes.iter().find(|dish| dish.id == id)
}
