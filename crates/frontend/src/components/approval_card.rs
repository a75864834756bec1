//! Group-invite card component.

use core_types::Approval;
use yew::prelude::*;

/// Properties for ApprovalCard component.
#[derive(Properties, PartialEq)]
pub struct ApprovalCardProps {
    pub approval: Approval,
    /// A reply is outstanding somewhere on the page.
    pub busy: bool,
    /// Emits the invite and the accept/reject decision.
    pub on_reply: Callback<(Approval, bool)>,
}

/// One pending invitation with accept/reject actions.
#[function_component(ApprovalCard)]
pub fn approval_card(props: &ApprovalCardProps) -> Html {
    let approval = &props.approval;

    let reply = |accept: bool| {
        let on_reply = props.on_reply.clone();
        let approval = approval.clone();
        Callback::from(move |_: MouseEvent| {
            on_reply.emit((approval.clone(), accept));
        })
    };

    html! {
        <div class="card approval-card">
            <h2 class="card-title">{ &approval.family_name }</h2>
            <p class="card-description">{ &approval.family_description }</p>
            <div class="card-actions">
                <button
                    class="btn btn-primary"
                    disabled={props.busy}
                    onclick={reply(true)}
                >
                    {"수락"}
                </button>
                <button
                    class="btn btn-danger"
                    disabled={props.busy}
                    onclick={reply(false)}
                >
                    {"거절"}
                </button>
            </div>
        </div>
    }
}
