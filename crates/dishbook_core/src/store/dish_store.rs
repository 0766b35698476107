//! Dish collection owner plus its persistence adapter.
//!
//! # Responsibility
//! - Hold the ordered dish collection in memory.
//! - Serialize the whole collection to the named slot on every add.
//! - Notify registered change listeners so views re-query and re-render.
//!
//! # Invariants
//! - `add` appends at the end; insertion order is preserved in the blob.
//! - Persistence and load failures are never surfaced to callers, only
//!   logged (the source contract swallows them).
//! - The collection is replaced wholesale on load, never merged.

use crate::db::{DbError, SlotStore};
use crate::model::dish::Dish;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key under which the whole catalogue is persisted as one blob.
pub const DISHES_SLOT_KEY: &str = "dishes";

/// Handle for a registered change listener.
pub type ListenerId = u64;

#[derive(Debug)]
enum StoreError {
    Encode(serde_json::Error),
    Decode(serde_json::Error),
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "catalogue encode failed: {err}"),
            Self::Decode(err) => write!(f, "catalogue decode failed: {err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) | Self::Decode(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Exclusive owner of the in-memory dish collection.
///
/// Constructed once per screen/session and passed by reference to whichever
/// component needs read or write access; no ambient singleton.
pub struct DishStore<S: SlotStore> {
    slot: S,
    dishes: Vec<Dish>,
    listeners: Vec<(ListenerId, Box<dyn Fn()>)>,
    next_listener_id: ListenerId,
}

impl<S: SlotStore> DishStore<S> {
    /// Creates a store with an empty collection.
    ///
    /// Callers that want persisted state must call [`DishStore::load`]
    /// explicitly, matching the screen-start flow.
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            dishes: Vec::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Read-only view of the ordered collection.
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Appends a dish at the end of the collection and persists wholesale.
    ///
    /// # Contract
    /// - Insertion order is retained.
    /// - Persistence failure is logged and swallowed; the in-memory append
    ///   still takes effect and listeners are still notified.
    pub fn add(&mut self, dish: Dish) {
        info!(
            "event=dish_add module=store status=ok id={} category={}",
            dish.id,
            dish.category.as_str()
        );
        self.dishes.push(dish);

        if let Err(err) = self.persist() {
            error!("event=slot_persist module=store status=error key={DISHES_SLOT_KEY} error={err}");
        }

        self.notify_listeners();
    }

    /// Replaces the collection from the named slot.
    ///
    /// # Contract
    /// - Absent slot or undecodable blob leaves the collection empty, never
    ///   an error (decode/read failures are logged and swallowed).
    /// - Listeners are notified after the replacement.
    pub fn load(&mut self) {
        self.dishes = match self.read_slot_blob() {
            Ok(dishes) => {
                info!(
                    "event=slot_load module=store status=ok key={DISHES_SLOT_KEY} count={}",
                    dishes.len()
                );
                dishes
            }
            Err(err) => {
                error!(
                    "event=slot_load module=store status=error key={DISHES_SLOT_KEY} error={err}"
                );
                Vec::new()
            }
        };

        self.notify_listeners();
    }

    /// Registers a change listener invoked after every add or load.
    ///
    /// Listeners receive no payload; views re-query [`DishStore::dishes`]
    /// on notification.
    pub fn subscribe(&mut self, listener: impl Fn() + 'static) -> ListenerId {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_vec(&self.dishes).map_err(StoreError::Encode)?;
        self.slot.write_slot(DISHES_SLOT_KEY, &blob)?;
        Ok(())
    }

    fn read_slot_blob(&self) -> Result<Vec<Dish>, StoreError> {
        match self.slot.read_slot(DISHES_SLOT_KEY)? {
            Some(blob) => serde_json::from_slice(&blob).map_err(StoreError::Decode),
            None => Ok(Vec::new()),
        }
    }

    fn notify_listeners(&self) {
        for (_, listener) in &self.listeners {
            listener();
        }
    }
}
