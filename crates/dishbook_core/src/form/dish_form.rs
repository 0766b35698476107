//! Creation-form state machine.
//!
//! # Responsibility
//! - Track field edits and the pending photo pick while editing.
//! - Construct a `Dish` exactly once, on a valid submit.
//!
//! # Invariants
//! - Submission requires a non-empty `name` and a present photo; all other
//!   fields accept arbitrary text, including empty.
//! - A form constructs at most one record over its lifetime; cancellation
//!   is terminal and keeps submission gated.
//! - Closing the form (submit or cancel) drops any pending photo ticket, so
//!   a late picker callback is ignored.

use crate::db::SlotStore;
use crate::model::dish::{Category, Dish};
use crate::photo::{photo_pick, PhotoPoll, PhotoSender, PhotoTicket, PickRequest};
use crate::store::dish_store::DishStore;
use log::info;

/// Lifecycle state of the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Collecting field values; submission may be gated.
    Editing,
    /// A record was constructed and handed to the store.
    Submitted,
    /// Closed without constructing a record. Terminal.
    Cancelled,
}

/// Signal to the presenting screen after a form action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSignal {
    /// Dismiss the form screen.
    Close,
    /// Keep the form open (submission was gated or already done).
    Stay,
}

/// Entry form for a new dish.
pub struct DishForm {
    state: FormState,
    name: String,
    description: String,
    recipe: String,
    duration: String,
    difficulty: String,
    category: Category,
    photo: Option<Vec<u8>>,
    pending_photo: Option<PhotoTicket>,
}

impl DishForm {
    /// Creates an empty form in editing state.
    pub fn new() -> Self {
        Self {
            state: FormState::Editing,
            name: String::new(),
            description: String::new(),
            recipe: String::new(),
            duration: String::new(),
            difficulty: String::new(),
            category: Category::Antipasto,
            photo: None,
            pending_photo: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_recipe(&mut self, value: impl Into<String>) {
        self.recipe = value.into();
    }

    pub fn set_duration(&mut self, value: impl Into<String>) {
        self.duration = value.into();
    }

    pub fn set_difficulty(&mut self, value: impl Into<String>) {
        self.difficulty = value.into();
    }

    pub fn set_category(&mut self, value: Category) {
        self.category = value;
    }

    /// Currently selected photo payload, if any.
    pub fn photo(&self) -> Option<&[u8]> {
        self.photo.as_deref()
    }

    /// Starts a photo pick and returns the picker-side handle.
    ///
    /// # Contract
    /// - Starting a new pick supersedes any pending one; the superseded
    ///   callback's resolution is ignored.
    pub fn begin_photo_pick(&mut self) -> (PickRequest, PhotoSender) {
        let (sender, ticket) = photo_pick();
        self.pending_photo = Some(ticket);
        (PickRequest::single_image(), sender)
    }

    /// Polls the pending pick on the UI thread and absorbs its outcome.
    ///
    /// A resolution with no payload leaves the form editing with its
    /// previous photo selection.
    pub fn poll_photo(&mut self) {
        let Some(ticket) = &self.pending_photo else {
            return;
        };

        match ticket.try_take() {
            PhotoPoll::Pending => {}
            PhotoPoll::Resolved(payload) => {
                if let Some(bytes) = payload {
                    self.photo = Some(bytes);
                }
                self.pending_photo = None;
            }
        }
    }

    /// Whether the submit action is enabled.
    ///
    /// Gated only on non-empty name and a present photo; duration,
    /// difficulty, description and recipe may be empty.
    pub fn can_submit(&self) -> bool {
        self.state == FormState::Editing && !self.name.is_empty() && self.photo.is_some()
    }

    /// Constructs the dish and hands it to the store.
    ///
    /// Returns [`FormSignal::Close`] on success; [`FormSignal::Stay`] when
    /// submission is gated (the UI renders this as a disabled button).
    pub fn submit<S: SlotStore>(&mut self, store: &mut DishStore<S>) -> FormSignal {
        if !self.can_submit() {
            return FormSignal::Stay;
        }

        // can_submit() guarantees the photo is present.
        let Some(photo) = self.photo.take() else {
            return FormSignal::Stay;
        };

        let dish = Dish::new(
            self.name.clone(),
            photo,
            self.description.clone(),
            self.recipe.clone(),
            self.category,
            self.duration.clone(),
            self.difficulty.clone(),
        );

        info!(
            "event=form_submit module=form status=ok id={} category={}",
            dish.id,
            dish.category.as_str()
        );

        store.add(dish);
        self.state = FormState::Submitted;
        self.pending_photo = None;
        FormSignal::Close
    }

    /// Closes the form without constructing a record.
    ///
    /// # Contract
    /// - Cancellation is terminal: a later submit stays gated and never
    ///   constructs a record.
    /// - An already-submitted form keeps its `Submitted` state.
    pub fn cancel(&mut self) -> FormSignal {
        info!("event=form_cancel module=form status=ok");
        if self.state == FormState::Editing {
            self.state = FormState::Cancelled;
        }
        self.pending_photo = None;
        FormSignal::Close
    }
}

impl Default for DishForm {
    fn default() -> Self {
        Self::new()
    }
}
