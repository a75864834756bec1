//! Reusable UI components.

mod approval_card;
mod header;
mod loading;
mod notification_item;
mod payment_request_modal;

pub use approval_card::ApprovalCard;
pub use header::{HeaderBack, HeaderLogoChatNotify};
pub use loading::Loading;
pub use notification_item::NotificationItem;
pub use payment_request_modal::PaymentRequestModal;
