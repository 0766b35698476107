//! One-shot photo delivery from the platform picker.
//!
//! # Responsibility
//! - Model the picker callback as a single-result asynchronous operation.
//! - Guarantee the "resolves at most once, with zero or one payload"
//!   contract at the type level.
//!
//! # Invariants
//! - A sender can resolve only once (it is consumed by `resolve`).
//! - Resolution after the ticket is gone is silently ignored.
//! - A dropped sender counts as "picker dismissed", i.e. resolved with no
//!   payload.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TryRecvError};

/// Configuration handed to the platform picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickRequest {
    /// Restrict the picker to still images.
    pub images_only: bool,
    /// Maximum number of selectable items.
    pub selection_limit: u8,
}

impl PickRequest {
    /// The catalogue's only pick mode: exactly one still image.
    pub fn single_image() -> Self {
        Self {
            images_only: true,
            selection_limit: 1,
        }
    }
}

/// Result of polling a [`PhotoTicket`] on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoPoll {
    /// The picker has not called back yet.
    Pending,
    /// The picker resolved with zero or one image payload.
    Resolved(Option<Vec<u8>>),
}

/// Picker-side handle. Resolving consumes the handle, so a second
/// resolution is impossible by construction.
pub struct PhotoSender {
    tx: SyncSender<Option<Vec<u8>>>,
}

impl PhotoSender {
    /// Delivers the picker outcome.
    ///
    /// Late delivery (ticket already dropped because the form closed or a
    /// newer pick superseded this one) is ignored.
    pub fn resolve(self, photo: Option<Vec<u8>>) {
        let _ = self.tx.send(photo);
    }
}

/// Form-side handle polled on the UI thread.
pub struct PhotoTicket {
    rx: Receiver<Option<Vec<u8>>>,
}

impl PhotoTicket {
    /// Non-blocking poll for the picker outcome.
    ///
    /// A sender dropped without resolving reads as `Resolved(None)`.
    pub fn try_take(&self) -> PhotoPoll {
        match self.rx.try_recv() {
            Ok(photo) => PhotoPoll::Resolved(photo),
            Err(TryRecvError::Empty) => PhotoPoll::Pending,
            Err(TryRecvError::Disconnected) => PhotoPoll::Resolved(None),
        }
    }
}

/// Creates a one-shot photo delivery pair.
///
/// The channel is bounded at one message so the picker thread never blocks
/// on delivery.
pub fn photo_pick() -> (PhotoSender, PhotoTicket) {
    let (tx, rx) = sync_channel(1);
    (PhotoSender { tx }, PhotoTicket { rx })
}

#[cfg(test)]
mod tests {
    use super::{photo_pick, PhotoPoll, PickRequest};

    #[test]
    fn pending_until_resolved() {
        let (sender, ticket) = photo_pick();
        assert_eq!(ticket.try_take(), PhotoPoll::Pending);

        sender.resolve(Some(vec![0xFF, 0xD8]));
        assert_eq!(ticket.try_take(), PhotoPoll::Resolved(Some(vec![0xFF, 0xD8])));
    }

    #[test]
    fn dropped_sender_reads_as_dismissed() {
        let (sender, ticket) = photo_pick();
        drop(sender);
        assert_eq!(ticket.try_take(), PhotoPoll::Resolved(None));
    }

    #[test]
    fn late_resolution_after_ticket_drop_is_ignored() {
        let (sender, ticket) = photo_pick();
        drop(ticket);
        sender.resolve(Some(vec![1, 2, 3]));
    }

    #[test]
    fn single_image_request_shape() {
        let request = PickRequest::single_image();
        assert!(request.images_only);
        assert_eq!(request.selection_limit, 1);
    }
}
