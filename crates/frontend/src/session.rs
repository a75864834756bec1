//! Session/group state shared across pages.
//!
//! The store is injected as a Yew context rather than living in a
//! module-level singleton, so pages receive it as an explicit
//! dependency and tests can seed their own identity.

use std::rc::Rc;

use core_types::{Role, Session, User};
use yew::prelude::*;

/// Actions accepted by the session store.
///
/// The approval flow is the only dispatcher of `UpdateGroup`.
pub enum SessionAction {
    UpdateGroup { group_id: i64, group_name: String },
}

/// Reducer state wrapping the session identity.
#[derive(Clone, PartialEq)]
pub struct SessionStore {
    pub session: Session,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        match action {
            SessionAction::UpdateGroup {
                group_id,
                group_name,
            } => {
                let mut session = self.session.clone();
                session.update_group(group_id, group_name);
                Rc::new(SessionStore { session })
            }
        }
    }
}

/// Handle pages use to read and dispatch against the session.
pub type SessionContext = UseReducerHandle<SessionStore>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    /// Identity to seed the store with. Login and logout own the real
    /// lifecycle outside this repo; the default is a demo identity so
    /// the client runs against the dev server.
    #[prop_or_else(demo_session)]
    pub initial: Session,
    pub children: Html,
}

/// Provides the session store to the page tree.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let initial = props.initial.clone();
    let store = use_reducer(move || SessionStore { session: initial });

    html! {
        <ContextProvider<SessionContext> context={store}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

fn demo_session() -> Session {
    Session {
        user: User {
            name: "김신한".to_string(),
            role: Role::Owner,
        },
        group: None,
    }
}
