// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short-lived messages shown in the bottom-right corner: files that could
//! not be added to the gallery, a copied link, a contact form that was not
//! sent, a settings file that failed to load.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager` queueing toasts and expiring them on ticks
//! - [`toast`] - Rendering
//!
//! Info toasts last 3s, warnings 5s. At most three are visible; the rest
//! wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
