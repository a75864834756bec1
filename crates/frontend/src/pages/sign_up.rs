//! Sign-up page: controlled form with phone-number focus advance.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Maximum digits per phone-number part (010-1234-5678).
const PHONE_PART_MAX: [usize; 3] = [3, 4, 4];

/// Keep only digits, capped at the part's maximum length.
fn sanitize_phone_part(value: &str, max: usize) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

/// Move focus to the next field in the ordered ref list, if any.
fn advance_focus(refs: &[NodeRef], index: usize) {
    if let Some(next) = refs.get(index + 1)
        && let Some(input) = next.cast::<HtmlInputElement>()
    {
        let _ = input.focus();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

#[derive(Clone, PartialEq, Default)]
struct SignUpForm {
    username: String,
    password: String,
    password_check: String,
    name: String,
    gender: Gender,
    birth_date: String,
    account_number: String,
}

/// Sign-up page component.
#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let form = use_state(SignUpForm::default);
    let phone_parts = use_state(|| [String::new(), String::new(), String::new()]);
    let form_error = use_state(|| None::<&'static str>);

    let phone_ref_1 = use_node_ref();
    let phone_ref_2 = use_node_ref();
    let phone_ref_3 = use_node_ref();
    let phone_refs = [phone_ref_1.clone(), phone_ref_2.clone(), phone_ref_3.clone()];

    // one text-field handler per form field, all writing through the
    // same setter
    let set_field = |apply: fn(&mut SignUpForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_gender_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.gender = match select.value().as_str() {
                "female" => Gender::Female,
                "other" => Gender::Other,
                _ => Gender::Male,
            };
            form.set(next);
        })
    };

    let on_phone_input = |index: usize| {
        let phone_parts = phone_parts.clone();
        let refs = phone_refs.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = sanitize_phone_part(&input.value(), PHONE_PART_MAX[index]);
            input.set_value(&value);

            let mut parts = (*phone_parts).clone();
            parts[index] = value.clone();
            phone_parts.set(parts);

            if value.len() == PHONE_PART_MAX[index] {
                advance_focus(&refs, index);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let phone_parts = phone_parts.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if form.password != form.password_check {
                form_error.set(Some("비밀번호가 일치하지 않습니다."));
                return;
            }
            form_error.set(None);

            let phone_number = phone_parts.join("-");
            // backend signup is outside this repo; log what would be sent
            web_sys::console::log_1(
                &format!("sign up submitted: {} ({})", form.username, phone_number).into(),
            );
        })
    };

    html! {
        <div class="page sign-up-page">
            <div class="sign-up-heading">
                <h1>{"회원가입"}</h1>
            </div>
            <form class="sign-up-form" onsubmit={on_submit}>
                <div class="form-field">
                    <label>{"아이디"}</label>
                    <input
                        type="text"
                        value={form.username.clone()}
                        oninput={set_field(|f, v| f.username = v)}
                        required={true}
                    />
                </div>
                <div class="form-field">
                    <label>{"비밀번호"}</label>
                    <input
                        type="password"
                        value={form.password.clone()}
                        oninput={set_field(|f, v| f.password = v)}
                        required={true}
                    />
                </div>
                <div class="form-field">
                    <label>{"비밀번호 확인"}</label>
                    <input
                        type="password"
                        value={form.password_check.clone()}
                        oninput={set_field(|f, v| f.password_check = v)}
                        required={true}
                    />
                </div>
                <div class="form-field">
                    <label>{"이름"}</label>
                    <input
                        type="text"
                        value={form.name.clone()}
                        oninput={set_field(|f, v| f.name = v)}
                        required={true}
                    />
                </div>
                <div class="form-field">
                    <label>{"성별"}</label>
                    <select onchange={on_gender_change}>
                        <option value="male" selected={form.gender == Gender::Male}>
                            {"남성"}
                        </option>
                        <option value="female" selected={form.gender == Gender::Female}>
                            {"여성"}
                        </option>
                        <option value="other" selected={form.gender == Gender::Other}>
                            {"기타"}
                        </option>
                    </select>
                </div>
                <div class="form-field">
                    <label>{"생일"}</label>
                    <input
                        type="date"
                        value={form.birth_date.clone()}
                        oninput={set_field(|f, v| f.birth_date = v)}
                        required={true}
                    />
                </div>
                <div class="form-field">
                    <label>{"연락처"}</label>
                    <div class="phone-row">
                        <input
                            type="text"
                            class="phone-part"
                            ref={phone_ref_1}
                            value={phone_parts[0].clone()}
                            oninput={on_phone_input(0)}
                            required={true}
                        />
                        <span>{"-"}</span>
                        <input
                            type="text"
                            class="phone-part"
                            ref={phone_ref_2}
                            value={phone_parts[1].clone()}
                            oninput={on_phone_input(1)}
                            required={true}
                        />
                        <span>{"-"}</span>
                        <input
                            type="text"
                            class="phone-part"
                            ref={phone_ref_3}
                            value={phone_parts[2].clone()}
                            oninput={on_phone_input(2)}
                            required={true}
                        />
                    </div>
                </div>
                <div class="form-field">
                    <label>{"계좌번호"}</label>
                    <div class="account-row">
                        <input
                            type="text"
                            value={form.account_number.clone()}
                            oninput={set_field(|f, v| f.account_number = v)}
                            required={true}
                        />
                        <button type="button" class="btn btn-secondary">
                            {"인증하기"}
                        </button>
                    </div>
                </div>

                if let Some(message) = *form_error {
                    <div class="error-banner">{ message }</div>
                }

                <button type="submit" class="btn btn-primary">
                    {"가입하기"}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_phone_part_strips_non_digits() {
        assert_eq!(sanitize_phone_part("010-12", 3), "010");
        assert_eq!(sanitize_phone_part("abc", 3), "");
        assert_eq!(sanitize_phone_part("12345678", 4), "1234");
    }

    #[test]
    fn test_phone_part_maxima_match_korean_format() {
        assert_eq!(PHONE_PART_MAX, [3, 4, 4]);
    }
}
