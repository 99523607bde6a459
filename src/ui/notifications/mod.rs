// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications carry an i18n message key and a severity; the [`Manager`]
//! owns their lifecycle (visible set, overflow queue, auto-dismiss timers)
//! and [`Toast`] renders them as an overlay in the bottom-right corner.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
