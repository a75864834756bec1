//! Main page: greeting, group overview, and service menu.

use std::cell::Cell;
use std::rc::Rc;

use core_types::FamilySummary;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::HeaderLogoChatNotify;
use crate::services;
use crate::session::SessionContext;

/// Main page component.
#[function_component(MainPage)]
pub fn main_page() -> Html {
    let family = use_state(|| None::<FamilySummary>);

    let session = use_context::<SessionContext>().expect("session context missing");
    let user = &session.session.user;

    {
        let family = family.clone();

        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let guard = alive.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match services::get_family().await {
                    Ok(data) => {
                        if alive.get() {
                            family.set(Some(data));
                        }
                    }
                    Err(e) => {
                        services::log_error("Error fetching family summary", &e);
                    }
                }
            });

            move || guard.set(false)
        });
    }

    let member_count = family
        .as_ref()
        .map(|f| f.users.len().to_string())
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div>
            <HeaderLogoChatNotify />
            <div class="page main-page">
                <div class="hero">
                    <p class="hero-tagline">
                        {"금융 위협으로부터"}<br />
                        {"가족을 지키는"}<br />
                        <strong class="hero-title">{"신한: 더 가디언즈"}</strong>
                    </p>
                    <div class="hero-card">
                        <div>
                            <h1 class="hero-name">
                                { &user.name }<span>{"고객님"}</span>
                            </h1>
                            <p class="hero-members">
                                { format!("현재 그룹원이 {} 명입니다.", member_count) }
                            </p>
                        </div>
                        <span class="hero-role">{ format!("{:?}", user.role) }</span>
                    </div>
                </div>

                <div class="invite-banner">
                    <button class="btn btn-primary">{"그룹원 초대하기"}</button>
                </div>

                <div class="menu-grid">
                    <div class="menu-card">
                        <span class="menu-title">{"가디언 평가"}</span>
                        <p class="menu-description">
                            {"가디언 평가에"}<br />{"도전해보세요."}
                        </p>
                    </div>
                    <Link<Route> to={Route::QuestionBank} classes="menu-card">
                        <span class="menu-title">{"문제 은행"}</span>
                        <p class="menu-description">
                            {"다양한 문제들로"}<br />{"연습해보세요."}
                        </p>
                    </Link<Route>>
                    <div class="menu-card">
                        <span class="menu-title">{"그룹원 목록"}</span>
                        <p class="menu-description">
                            {"현재 그룹원의"}<br />{"목록을 조회해보세요."}
                        </p>
                    </div>
                    <div class="menu-card">
                        <span class="menu-title">{"챗봇"}</span>
                        <p class="menu-description">
                            {"챗봇을 통해"}<br />{"학습할 수 있습니다."}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
