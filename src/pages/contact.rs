use gloo_console::log;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

/// What a full deployment would POST to its submission endpoint. No
/// endpoint is wired here; the payload is only logged.
#[derive(Serialize, Clone, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    message: String,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);
    let sent = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
                error.set(Some("Please fill in all fields.".to_string()));
                return;
            }
            let form = ContactForm {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            if let Ok(payload) = serde_json::to_string(&form) {
                log!("contact form captured:", payload);
            }
            error.set(None);
            sent.set(true);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        })
    };

    let contact_css = r#"
        .contact-page {
            min-height: 100vh;
            padding: 2rem;
            font-family: 'Helvetica Neue', Arial, sans-serif;
        }
        @media (min-width: 768px) {
            .contact-page {
                padding: 6rem;
            }
        }
        .contact-page h1 {
            font-size: 2.25rem;
            font-weight: 700;
            margin-bottom: 2rem;
        }
        .contact-form {
            max-width: 28rem;
        }
        .form-field {
            margin-bottom: 1rem;
        }
        .form-field label {
            display: block;
            margin-bottom: 0.5rem;
        }
        .form-field input,
        .form-field textarea {
            width: 100%;
            padding: 0.5rem;
            border: 1px solid #d1d5db;
            border-radius: 0.25rem;
            box-sizing: border-box;
            font: inherit;
        }
        .contact-form button {
            background: #3B82F6;
            color: #fff;
            border: none;
            padding: 0.75rem 1.5rem;
            border-radius: 0.5rem;
            font-size: 1rem;
            cursor: pointer;
        }
        .contact-form button:hover {
            background: #2563EB;
        }
        .form-error {
            color: #dc2626;
            margin-bottom: 1rem;
        }
        .form-sent {
            color: #16a34a;
            margin-bottom: 1rem;
        }
        .back-link {
            margin-top: 2rem;
        }
        .back-link a {
            color: #3B82F6;
            text-decoration: none;
        }
        .back-link a:hover {
            text-decoration: underline;
        }
    "#;

    html! {
        <main class="contact-page">
            <style>{ contact_css }</style>
            <h1>{"Contact Us"}</h1>
            <form class="contact-form" onsubmit={onsubmit}>
                if let Some(err) = (*error).as_ref() {
                    <p class="form-error">{ err }</p>
                }
                if *sent {
                    <p class="form-sent">{"Thanks! We'll get back to you soon."}</p>
                }
                <div class="form-field">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        required=true
                        value={(*name).clone()}
                        oninput={{
                            let name = name.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                name.set(input.value());
                            })
                        }}
                    />
                </div>
                <div class="form-field">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required=true
                        value={(*email).clone()}
                        oninput={{
                            let email = email.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                email.set(input.value());
                            })
                        }}
                    />
                </div>
                <div class="form-field">
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        required=true
                        value={(*message).clone()}
                        oninput={{
                            let message = message.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                message.set(input.value());
                            })
                        }}
                    ></textarea>
                </div>
                <button type="submit">{"Send Message"}</button>
            </form>
            <div class="back-link">
                <Link<Route> to={Route::Home}>{"\u{2190} Back to Home"}</Link<Route>>
            </div>
        </main>
    }
}
