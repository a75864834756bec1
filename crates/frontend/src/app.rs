//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{MainPage, NotificationPage, QuestionBankPage, SignUpPage};
use crate::session::SessionProvider;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Main,
    #[at("/notification")]
    Notification,
    #[at("/questionBank")]
    QuestionBank,
    #[at("/signup")]
    SignUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Main => html! { <MainPage /> },
        Route::Notification => html! { <NotificationPage /> },
        Route::QuestionBank => html! { <QuestionBankPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404"}</h1>
                <p>{"요청하신 페이지를 찾을 수 없습니다."}</p>
            </div>
        },
    }
}

/// Main application component.
///
/// The session store is provided here so every page reads the same
/// identity; the mobile shell centers the app at phone width.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <div class="app-shell">
                    <Switch<Route> render={switch} />
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}
