//! Confirmation modal for a single pending transaction.

use core_types::{Notification, format_won};
use yew::prelude::*;

/// Properties for PaymentRequestModal component.
#[derive(Properties, PartialEq)]
pub struct PaymentRequestModalProps {
    pub notification: Notification,
    /// A reply for this notification is outstanding.
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_reject: Callback<()>,
    pub on_close: Callback<()>,
}

/// Presents the selected notification and collects a yes/no decision.
///
/// Clicking the dimmed backdrop dismisses without replying; the
/// decision buttons forward to the page's reply handler.
#[function_component(PaymentRequestModal)]
pub fn payment_request_modal(props: &PaymentRequestModalProps) -> Html {
    let notification = &props.notification;

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // keep panel clicks from reaching the backdrop
    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_reject = {
        let on_reject = props.on_reject.clone();
        Callback::from(move |_: MouseEvent| on_reject.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-panel" onclick={on_panel_click}>
                <h2 class="modal-title">{"이체 확인 요청"}</h2>
                <p class="modal-line">
                    { format!("{} 님이", notification.sender_name) }
                </p>
                <p class="modal-line">
                    { format!("신한 {} 계좌에서", notification.account_number) }
                </p>
                <p class="modal-amount">
                    { format_won(notification.transaction_balance) }
                    <span class="modal-type">
                        { format!(" {}을 요청했습니다.", notification.transaction_type.label()) }
                    </span>
                </p>
                <p class="modal-question">{"승인하시겠습니까?"}</p>
                <div class="modal-actions">
                    <button
                        class="btn btn-primary"
                        disabled={props.busy}
                        onclick={on_confirm}
                    >
                        {"예"}
                    </button>
                    <button
                        class="btn btn-danger"
                        disabled={props.busy}
                        onclick={on_reject}
                    >
                        {"아니오"}
                    </button>
                </div>
            </div>
        </div>
    }
}
