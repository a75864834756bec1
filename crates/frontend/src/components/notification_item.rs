//! Pending-transaction list row component.

use core_types::{Notification, format_won};
use yew::prelude::*;

/// Properties for NotificationItem component.
#[derive(Properties, PartialEq)]
pub struct NotificationItemProps {
    pub notification: Notification,
    /// Emits the clicked notification so the page can open the modal.
    pub on_click: Callback<Notification>,
}

/// One pending transaction; clicking it opens the confirmation modal.
#[function_component(NotificationItem)]
pub fn notification_item(props: &NotificationItemProps) -> Html {
    let notification = &props.notification;

    let onclick = {
        let on_click = props.on_click.clone();
        let notification = notification.clone();
        Callback::from(move |_: MouseEvent| {
            on_click.emit(notification.clone());
        })
    };

    let type_class = if notification.transaction_type.is_deposit() {
        "transaction-type deposit"
    } else {
        "transaction-type outgoing"
    };

    html! {
        <div class="card notification-item" {onclick}>
            <span class="notification-time">{ &notification.transaction_time }</span>
            <div class="notification-row">
                <span class="notification-account">
                    { format!("신한 {}", notification.account_number) }
                </span>
                <span class="notification-sender">{ &notification.sender_name }</span>
            </div>
            <div class="notification-row amount-row">
                <span class={type_class}>
                    { notification.transaction_type.label() }
                </span>
                <span class="notification-amount">
                    { format_won(notification.transaction_balance) }
                </span>
            </div>
        </div>
    }
}
