//! Notification page: pending group invites and transfer confirmations.
//!
//! Two independent lists load on mount. Replying to an invite updates
//! the session group on acceptance and clears the invite list without
//! a refetch; replying to a transaction clears and refetches its list
//! before closing the confirmation modal.

use std::cell::Cell;
use std::rc::Rc;

use core_types::{Approval, GroupMembership, Notification, PendingConfirmation};
use yew::prelude::*;

use crate::components::{ApprovalCard, HeaderBack, NotificationItem, PaymentRequestModal};
use crate::services;
use crate::session::{SessionAction, SessionContext};

/// Notification page component.
#[function_component(NotificationPage)]
pub fn notification_page() -> Html {
    let approvals = use_state(|| None::<Vec<Approval>>);
    let notifications = use_state(Vec::<Notification>::new);
    let confirm = use_state(PendingConfirmation::closed);
    let approval_busy = use_state(|| false);
    let notification_busy = use_state(|| false);
    let fetch_error = use_state(|| None::<&'static str>);

    let session = use_context::<SessionContext>().expect("session context missing");
    let can_view_notifications = session.session.can_view_notifications();

    // Both fetches are issued independently on mount; the alive flag is
    // cleared in the destructor so a late response cannot touch state
    // after unmount.
    {
        let approvals = approvals.clone();
        let notifications = notifications.clone();
        let fetch_error = fetch_error.clone();

        use_effect_with(can_view_notifications, move |&can_view| {
            let alive = Rc::new(Cell::new(true));

            {
                let approvals = approvals.clone();
                let fetch_error = fetch_error.clone();
                let alive = alive.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match services::get_approvals().await {
                        Ok(data) => {
                            if alive.get() {
                                approvals.set(Some(data));
                            }
                        }
                        Err(e) => {
                            services::log_error("Error fetching approvals", &e);
                            if alive.get() {
                                fetch_error.set(Some("알림을 불러오지 못했습니다."));
                            }
                        }
                    }
                });
            }

            if can_view {
                let notifications = notifications.clone();
                let fetch_error = fetch_error.clone();
                let alive = alive.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match services::get_unanswered_notifications().await {
                        Ok(data) => {
                            if alive.get() {
                                notifications.set(data);
                            }
                        }
                        Err(e) => {
                            services::log_error("Error fetching notifications", &e);
                            if alive.get() {
                                fetch_error.set(Some("이체 내역을 불러오지 못했습니다."));
                            }
                        }
                    }
                });
            }

            move || alive.set(false)
        });
    }

    let on_approval_reply = {
        let approvals = approvals.clone();
        let approval_busy = approval_busy.clone();
        let session = session.clone();

        Callback::from(move |(approval, accept): (Approval, bool)| {
            if *approval_busy {
                return;
            }
            approval_busy.set(true);

            let approvals = approvals.clone();
            let approval_busy = approval_busy.clone();
            let session = session.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match services::reply_approval(approval.approval_id, accept).await {
                    Ok(()) => {
                        if let Some(group) = GroupMembership::from_accepted_invite(
                            accept,
                            approval.family_id,
                            &approval.family_name,
                        ) {
                            session.dispatch(SessionAction::UpdateGroup {
                                group_id: group.group_id,
                                group_name: group.group_name,
                            });
                        }
                        // cleared without a refetch; the list repopulates on
                        // the next visit to this page
                        approvals.set(None);
                    }
                    Err(e) => {
                        // row stays visible so the user can retry
                        services::log_error("Error sending approval reply", &e);
                    }
                }
                approval_busy.set(false);
            });
        })
    };

    let open_modal = {
        let confirm = confirm.clone();
        Callback::from(move |notification: Notification| {
            confirm.set(PendingConfirmation::opened(notification));
        })
    };

    let close_modal = {
        let confirm = confirm.clone();
        Callback::from(move |_: ()| {
            confirm.set(PendingConfirmation::closed());
        })
    };

    let on_notification_reply = {
        let confirm = confirm.clone();
        let notifications = notifications.clone();
        let notification_busy = notification_busy.clone();

        Callback::from(move |approve: bool| {
            // no-op without a selection or while a reply is outstanding
            let Some(selected) = confirm.selected().cloned() else {
                return;
            };
            if *notification_busy {
                return;
            }
            notification_busy.set(true);

            let confirm = confirm.clone();
            let notifications = notifications.clone();
            let notification_busy = notification_busy.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match services::reply_notification(selected.notification_id, approve).await {
                    Ok(()) => {
                        notifications.set(Vec::new());
                        match services::get_unanswered_notifications().await {
                            Ok(data) => notifications.set(data),
                            Err(e) => {
                                services::log_error("Error refreshing notifications", &e);
                            }
                        }
                        confirm.set(PendingConfirmation::closed());
                    }
                    Err(e) => {
                        // modal stays open so the user can retry or cancel
                        services::log_error("Error sending notification reply", &e);
                    }
                }
                notification_busy.set(false);
            });
        })
    };

    // visible() and the selection only ever change together; both are
    // required here so the modal can never render half-set state
    let modal = if confirm.visible()
        && let Some(selected) = confirm.selected()
    {
        html! {
            <PaymentRequestModal
                notification={selected.clone()}
                busy={*notification_busy}
                on_confirm={on_notification_reply.reform(|_| true)}
                on_reject={on_notification_reply.reform(|_| false)}
                on_close={close_modal.clone()}
            />
        }
    } else {
        Html::default()
    };

    let approval_section = match approvals.as_ref() {
        Some(list) if !list.is_empty() => html! {
            { for list.iter().map(|item| html! {
                <ApprovalCard
                    key={item.approval_id.to_string()}
                    approval={item.clone()}
                    busy={*approval_busy}
                    on_reply={on_approval_reply.clone()}
                />
            })}
        },
        _ => html! {
            <div class="empty-message">{"초대 내역이 없습니다."}</div>
        },
    };

    html! {
        <div>
            <HeaderBack />
            <div class="page">
                if let Some(message) = *fetch_error {
                    <div class="error-banner">{ message }</div>
                }

                <div class="section-title">
                    <span>{"그룹 초대"}</span>
                </div>
                { approval_section }

                if can_view_notifications {
                    <>
                        <div class="section-title">
                            <span>{"이체 내역"}</span>
                        </div>
                        if notifications.is_empty() {
                            <div class="empty-message">{"이체 내역이 없습니다."}</div>
                        } else {
                            { for notifications.iter().map(|notification| html! {
                                <NotificationItem
                                    key={notification.notification_id.to_string()}
                                    notification={notification.clone()}
                                    on_click={open_modal.clone()}
                                />
                            })}
                        }
                        { modal }
                    </>
                }
            </div>
        </div>
    }
}
