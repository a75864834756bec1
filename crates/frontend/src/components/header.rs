//! Top bars for the mobile shell.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Back-navigation header used by detail pages.
#[function_component(HeaderBack)]
pub fn header_back() -> Html {
    html! {
        <header class="header">
            <Link<Route> to={Route::Main} classes="header-icon">
                {"‹"}
            </Link<Route>>
        </header>
    }
}

/// Logo header with chatbot and notification shortcuts.
#[function_component(HeaderLogoChatNotify)]
pub fn header_logo_chat_notify() -> Html {
    html! {
        <header class="header">
            <span class="header-brand">{"더 가디언즈"}</span>
            <div class="header-actions">
                <span class="header-icon">{"💬"}</span>
                <Link<Route> to={Route::Notification} classes="header-icon">
                    {"🔔"}
                </Link<Route>>
            </div>
        </header>
    }
}
