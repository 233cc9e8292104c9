use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact_form::{
    ContactForm, FormAction, SubmitOutcome, STATUS_DISPLAY_MS, SUBMIT_DELAY_MS,
};

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Recruiting pitch, contact details and the message form. Submission is
/// simulated: the payload is logged to the console after a short wait and
/// the form reports success. The timed continuations dispatch against the
/// reducer, so they touch only their own piece of the state and anything
/// typed while the banner is up survives the clear.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::new);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::EditName(input.value()));
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::EditEmail(input.value()));
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::EditMessage(area.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_submitting() {
                return;
            }
            let submission = form.submission();
            form.dispatch(FormAction::BeginSubmit);

            let form = form.clone();
            spawn_local(async move {
                // Simulated latency; there is no backend to deliver to.
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                if let Ok(payload) = serde_json::to_string(&submission) {
                    log!("Form submitted:", payload);
                }
                form.dispatch(FormAction::FinishSubmit(SubmitOutcome::Success));

                TimeoutFuture::new(STATUS_DISPLAY_MS).await;
                form.dispatch(FormAction::ClearOutcome);
            });
        })
    };

    html! {
        <section class="section contact-section">
            <style>
                {r#"
                    .contact-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom right, #111827, #1e3a8a, #14532d);
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .contact-intro {
                        animation: fade-up 0.8s ease-out both;
                    }
                    .contact-title-bar {
                        width: 8rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-pitch {
                        font-size: 1.25rem;
                        color: #e5e7eb;
                        line-height: 1.7;
                        margin: 0 0 2rem;
                    }
                    .contact-channel {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-channel h3 {
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #fff;
                        margin: 0 0 0.25rem;
                    }
                    .contact-channel p {
                        color: #d1d5db;
                        margin: 0;
                    }
                    .contact-card {
                        background: rgba(31, 41, 55, 0.5);
                        backdrop-filter: blur(4px);
                        border: 1px solid #374151;
                        border-radius: 1rem;
                        padding: 2rem;
                        animation: fade-up 0.8s ease-out 0.2s both;
                    }
                    .contact-field {
                        margin-bottom: 1.5rem;
                    }
                    .contact-field label {
                        display: block;
                        color: #fff;
                        font-size: 0.9rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .contact-field input,
                    .contact-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(55, 65, 81, 0.5);
                        border: 1px solid #4b5563;
                        border-radius: 0.5rem;
                        padding: 0.75rem 1rem;
                        color: #fff;
                        font-size: 1rem;
                        transition: border-color 0.3s ease;
                    }
                    .contact-field input::placeholder,
                    .contact-field textarea::placeholder {
                        color: #9ca3af;
                    }
                    .contact-field input:focus,
                    .contact-field textarea:focus {
                        border-color: #4ade80;
                        outline: none;
                    }
                    .contact-field textarea {
                        resize: none;
                    }
                    .submit-banner {
                        text-align: center;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .submit-banner.success {
                        background: rgba(34, 197, 94, 0.2);
                        border: 1px solid rgba(34, 197, 94, 0.3);
                        color: #4ade80;
                    }
                    .submit-banner.error {
                        background: rgba(239, 68, 68, 0.2);
                        border: 1px solid rgba(239, 68, 68, 0.3);
                        color: #f87171;
                    }
                    .submit-button {
                        width: 100%;
                    }
                    .submit-button:disabled {
                        background: #4b5563;
                        color: #9ca3af;
                        cursor: not-allowed;
                        transform: none;
                        box-shadow: none;
                    }
                    .contact-footer {
                        text-align: center;
                        margin-top: 4rem;
                        padding-top: 2rem;
                        border-top: 1px solid #374151;
                        animation: fade-up 0.8s ease-out 0.4s both;
                    }
                    .contact-footer p {
                        color: #9ca3af;
                        margin: 0;
                    }
                    @media (max-width: 1024px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                            gap: 2.5rem;
                        }
                    }
                "#}
            </style>
            <div class="contact-backdrop"></div>
            <div class="section-inner">
                <div class="contact-grid">
                    <div class="contact-intro">
                        <h2 class="section-title">
                            <span>{"加入"}</span>
                            <span class="accent-text">{"未來"}</span>
                        </h2>
                        <div class="accent-bar contact-title-bar"></div>
                        <p class="contact-pitch">
                            {"準備好與 Azure Lab 一同創建下一代虛擬世界嗎？我們正在尋找具有創新精神的人才，共同打造改變世界的數位體驗。讓我們一起重新定義數位未來。"}
                        </p>
                        <div class="contact-channel">
                            <div class="glyph-chip" style="background: linear-gradient(to right, #4ade80, #60a5fa);">
                                {"✉"}
                            </div>
                            <div>
                                <h3>{"電子郵件"}</h3>
                                <p>{"info@azurelab-hk.com"}</p>
                            </div>
                        </div>
                        <div class="contact-channel">
                            <div class="glyph-chip" style="background: linear-gradient(to right, #fb923c, #f87171);">
                                {"📍"}
                            </div>
                            <div>
                                <h3>{"地址"}</h3>
                                <p>{"Unit 1010, Silvercord, Tower 1, 30 Canton Road, Hong Kong"}</p>
                            </div>
                        </div>
                    </div>
                    <div class="contact-card">
                        <form {onsubmit}>
                            <div class="contact-field">
                                <label for="contact-name">{"姓名"}</label>
                                <input
                                    id="contact-name"
                                    type="text"
                                    name="name"
                                    value={form.name.clone()}
                                    oninput={on_name}
                                    required=true
                                    placeholder="請輸入您的姓名"
                                />
                            </div>
                            <div class="contact-field">
                                <label for="contact-email">{"電子郵件"}</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    name="email"
                                    value={form.email.clone()}
                                    oninput={on_email}
                                    required=true
                                    placeholder="請輸入您的電子郵件"
                                />
                            </div>
                            <div class="contact-field">
                                <label for="contact-message">{"訊息"}</label>
                                <textarea
                                    id="contact-message"
                                    rows="4"
                                    name="message"
                                    value={form.message.clone()}
                                    oninput={on_message}
                                    required=true
                                    placeholder="請輸入您的訊息"
                                />
                            </div>
                            {
                                match form.outcome() {
                                    Some(SubmitOutcome::Success) => html! {
                                        <div class="submit-banner success">
                                            {"✓ 訊息發送成功！我們會盡快回覆您。"}
                                        </div>
                                    },
                                    Some(SubmitOutcome::Error) => html! {
                                        <div class="submit-banner error">
                                            {"✗ 發送失敗，請稍後再試。"}
                                        </div>
                                    },
                                    None => html! {},
                                }
                            }
                            <button
                                class="cta-button submit-button"
                                type="submit"
                                disabled={form.is_submitting()}
                            >
                                { if form.is_submitting() { "發送中..." } else { "發送訊息" } }
                            </button>
                        </form>
                    </div>
                </div>
                <div class="contact-footer">
                    <p>{"© 2025 Azure Lab Limited. 版權所有。"}</p>
                </div>
            </div>
        </section>
    }
}
