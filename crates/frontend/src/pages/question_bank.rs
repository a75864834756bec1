//! Question-bank page: cycles through fraud-education quiz questions.

use std::cell::Cell;
use std::rc::Rc;

use core_types::{Answer, Question};
use yew::prelude::*;

use crate::components::{HeaderLogoChatNotify, Loading};
use crate::services;

/// Question bank page component.
#[function_component(QuestionBankPage)]
pub fn question_bank_page() -> Html {
    let questions = use_state(Vec::<Question>::new);
    let loading = use_state(|| true);
    let current_index = use_state(|| 0usize);
    let selected_answer = use_state(|| None::<Answer>);

    {
        let questions = questions.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let guard = alive.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match services::get_questions().await {
                    Ok(data) => {
                        if alive.get() {
                            questions.set(data);
                        }
                    }
                    Err(e) => {
                        services::log_error("Error fetching questions", &e);
                    }
                }
                if alive.get() {
                    loading.set(false);
                }
            });

            move || guard.set(false)
        });
    }

    let on_answer = {
        let selected_answer = selected_answer.clone();
        Callback::from(move |answer: Answer| {
            // first pick locks the choice until the next question
            if selected_answer.is_none() {
                selected_answer.set(Some(answer));
            }
        })
    };

    let on_next = {
        let selected_answer = selected_answer.clone();
        let current_index = current_index.clone();
        let total = questions.len();
        Callback::from(move |_: MouseEvent| {
            if total == 0 {
                return;
            }
            selected_answer.set(None);
            current_index.set((*current_index + 1) % total);
        })
    };

    if *loading {
        return html! {
            <div>
                <HeaderLogoChatNotify />
                <Loading />
            </div>
        };
    }

    let Some(question) = questions.get(*current_index) else {
        return html! {
            <div>
                <HeaderLogoChatNotify />
                <div class="card">
                    <p>{"문제를 불러오지 못했습니다."}</p>
                </div>
            </div>
        };
    };

    let answered = selected_answer.is_some();

    let answer_button = |choice: Answer, label: &str| {
        let class = match *selected_answer {
            None => "btn answer-button".to_string(),
            Some(_) => {
                if question.answer == choice {
                    "btn answer-button right".to_string()
                } else if *selected_answer == Some(choice) {
                    "btn answer-button wrong".to_string()
                } else {
                    "btn answer-button".to_string()
                }
            }
        };

        html! {
            <button
                class={class}
                onclick={on_answer.reform(move |_| choice)}
            >
                { label }
            </button>
        }
    };

    html! {
        <div>
            <HeaderLogoChatNotify />
            <main class="page quiz-page">
                <div class="card quiz-question">
                    <span class="quiz-progress">
                        { format!("{} / {}", *current_index + 1, questions.len()) }
                    </span>
                    <p>{ &question.question }</p>
                </div>

                <div class="quiz-answers">
                    { answer_button(Answer::Correct, "O") }
                    { answer_button(Answer::Incorrect, "X") }
                </div>

                if answered {
                    <div class="card quiz-explanation">
                        <p>{ &question.explanation }</p>
                    </div>
                }

                <button
                    class="btn btn-primary quiz-next"
                    disabled={!answered}
                    onclick={on_next}
                >
                    {"다음"}
                </button>
            </main>
        </div>
    }
}
