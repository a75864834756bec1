//! Loading indicator component.

use yew::prelude::*;

/// Spinner with the standard waiting message.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{"로딩 중..."}</p>
        </div>
    }
}
