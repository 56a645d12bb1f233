// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Save confirmations, navigation boundaries and load or save failures are
//! reported as short-lived toasts in the bottom-right corner.
//!
//! - Toast duration: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
