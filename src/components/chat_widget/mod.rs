pub mod state;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use self::state::{ChatAction, ChatState, Message, Panel, REPLY_DELAY_MS};

const CHAT_CSS: &str = r#"
    .chat-widget {
        position: fixed;
        bottom: 1rem;
        right: 1rem;
        display: flex;
        flex-direction: column;
        align-items: flex-end;
        z-index: 50;
    }
    .chat-teaser {
        position: relative;
        background: #fff;
        color: #1f2937;
        padding: 0.75rem;
        border-radius: 0.5rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
        margin-bottom: 0.5rem;
        font-size: 0.875rem;
        max-width: 16rem;
    }
    .chat-teaser::after {
        content: "";
        position: absolute;
        bottom: -10px;
        right: 1rem;
        border-left: 10px solid transparent;
        border-right: 10px solid transparent;
        border-top: 10px solid #fff;
    }
    .chat-launcher {
        width: 4rem;
        height: 4rem;
        border: none;
        border-radius: 9999px;
        background: #3B82F6;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
        cursor: pointer;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .chat-launcher:hover {
        background: #2563EB;
    }
    .chat-launcher img {
        width: 2.5rem;
        height: 2.5rem;
        object-fit: contain;
    }
    .chat-panel {
        width: 20rem;
        height: 32rem;
        border-radius: 0.5rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
        display: flex;
        flex-direction: column;
        overflow: hidden;
    }
    .chat-panel-header {
        padding: 1rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        color: #fff;
    }
    .chat-panel-header .bot-name {
        display: flex;
        align-items: center;
        font-weight: 700;
        gap: 0.5rem;
    }
    .chat-panel-header img {
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
    }
    .chat-panel-header button {
        background: none;
        border: none;
        color: #fff;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .chat-messages {
        flex-grow: 1;
        overflow-y: auto;
        padding: 1rem;
    }
    .chat-message {
        display: flex;
        margin-bottom: 1rem;
    }
    .chat-message.user {
        justify-content: flex-end;
    }
    .chat-message .avatar {
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        flex-shrink: 0;
    }
    .chat-message .avatar.bot { margin-right: 0.5rem; }
    .chat-message .avatar.user { margin-left: 0.5rem; }
    .message-bubble {
        padding: 0.5rem;
        border-radius: 0.5rem;
        max-width: 70%;
        color: #fff;
        word-break: break-word;
    }
    .message-bubble.user {
        background: #fff;
        color: #000;
    }
    .starter-options {
        margin-top: 0.5rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .starter-option {
        display: block;
        width: 100%;
        text-align: left;
        font-size: 0.875rem;
        background: rgba(31, 41, 55, 0.5);
        color: #fff;
        border: none;
        padding: 0.5rem;
        border-radius: 0.25rem;
        cursor: pointer;
    }
    .starter-option:hover {
        background: rgba(31, 41, 55, 0.75);
    }
    .chat-input-form {
        padding: 1rem;
        border-top: 1px solid #374151;
    }
    .chat-input-form input {
        width: 100%;
        padding: 0.5rem;
        border: 1px solid #4b5563;
        border-radius: 0.5rem;
        background: #1f2937;
        color: #fff;
        box-sizing: border-box;
    }
    .chat-input-form input::placeholder {
        color: #9ca3af;
    }
    .chat-settings {
        flex-grow: 1;
        background: #111827;
        color: #fff;
        padding: 1rem;
        display: flex;
        flex-direction: column;
    }
    .chat-settings-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 1rem;
    }
    .chat-settings-header .back-group {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .chat-settings-header h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin: 0;
    }
    .chat-settings-header button {
        background: none;
        border: none;
        color: #fff;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .color-row {
        display: flex;
        align-items: center;
        margin-bottom: 1rem;
        gap: 0.5rem;
    }
    .color-row label {
        width: 50%;
    }
    .color-row input[type="color"] {
        width: 2rem;
        height: 2rem;
        border: none;
        border-radius: 9999px;
        overflow: hidden;
        cursor: pointer;
        padding: 0;
    }
"#;

fn render_message(msg: &Message, bubble_color: &str, on_option: &Callback<String>) -> Html {
    let bubble_style = if msg.is_user {
        "background-color: #FFFFFF;".to_string()
    } else {
        format!("background-color: {};", bubble_color)
    };
    html! {
        <div class={classes!("chat-message", msg.is_user.then_some("user"))}>
            if !msg.is_user {
                <img class="avatar bot" src="/assets/bot-avatar.png" alt="Bot" />
            }
            <div
                class={classes!("message-bubble", msg.is_user.then_some("user"))}
                style={bubble_style}
            >
                <p>{ &msg.text }</p>
                if let Some(options) = &msg.options {
                    <div class="starter-options">
                        { for options.iter().map(|option| {
                            let on_option = on_option.clone();
                            let text = option.clone();
                            html! {
                                <button
                                    type="button"
                                    class="starter-option"
                                    onclick={Callback::from(move |_| on_option.emit(text.clone()))}
                                >
                                    { option }
                                </button>
                            }
                        }) }
                    </div>
                }
            </div>
            if msg.is_user {
                <img class="avatar user" src="/assets/user-avatar.png" alt="User" />
            }
        </div>
    }
}

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let state = use_reducer(ChatState::default);
    // Handle to the one-shot reply timer. Dropping it cancels the
    // timeout, so a reply in flight is discarded when the widget closes
    // or unmounts instead of poking discarded state.
    let pending_reply = use_mut_ref(|| None::<Timeout>);

    let send = {
        let state = state.clone();
        let pending_reply = pending_reply.clone();
        Callback::from(move |text: String| {
            if !state.accepts_send(&text) {
                return;
            }
            state.dispatch(ChatAction::Send(text));
            let state = state.clone();
            // A fresh send replaces any still-pending reply, so at most
            // one reply is ever in flight.
            *pending_reply.borrow_mut() = Some(Timeout::new(REPLY_DELAY_MS, move || {
                state.dispatch(ChatAction::ReplyArrived);
            }));
        })
    };

    let open = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ChatAction::Open))
    };

    let close = {
        let state = state.clone();
        let pending_reply = pending_reply.clone();
        Callback::from(move |_: MouseEvent| {
            pending_reply.borrow_mut().take();
            state.dispatch(ChatAction::Close);
        })
    };

    let open_settings = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ChatAction::OpenSettings))
    };

    let close_settings = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ChatAction::CloseSettings))
    };

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ChatAction::DraftChanged(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let send = send.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit(state.draft.clone());
        })
    };

    let on_background_color = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ChatAction::BackgroundColorChanged(input.value()));
        })
    };

    let on_bubble_color = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ChatAction::BubbleColorChanged(input.value()));
        })
    };

    html! {
        <div class="chat-widget">
            <style>{ CHAT_CSS }</style>
            if state.panel == Panel::Closed && state.show_teaser {
                <div class="chat-teaser">
                    <p>{"Hi there! Need any help? Click below to chat with us."}</p>
                </div>
            }
            {
                match state.panel {
                    Panel::Closed => html! {
                        <button class="chat-launcher" onclick={open}>
                            <img src="/assets/chat-bubble.png" alt="Chat" />
                        </button>
                    },
                    Panel::Chat => html! {
                        <div
                            class="chat-panel"
                            style={format!("background-color: {};", state.background_color)}
                        >
                            <div class="chat-panel-header">
                                <div class="bot-name">
                                    <img src="/assets/bot-avatar.png" alt="Bot" />
                                    <span>{"Assistant"}</span>
                                </div>
                                <div>
                                    <button onclick={open_settings}>{"\u{2699}\u{fe0f}"}</button>
                                    <button onclick={close.clone()}>{"\u{00d7}"}</button>
                                </div>
                            </div>
                            <div class="chat-messages">
                                { for state
                                    .transcript
                                    .iter()
                                    .map(|msg| render_message(msg, &state.bubble_color, &send)) }
                            </div>
                            <form class="chat-input-form" onsubmit={onsubmit}>
                                <input
                                    type="text"
                                    value={state.draft.clone()}
                                    oninput={oninput}
                                    placeholder="Type your message..."
                                />
                            </form>
                        </div>
                    },
                    Panel::Settings => html! {
                        <div
                            class="chat-panel"
                            style={format!("background-color: {};", state.background_color)}
                        >
                            <div class="chat-settings">
                                <div class="chat-settings-header">
                                    <div class="back-group">
                                        <button onclick={close_settings}>{"\u{2190}"}</button>
                                        <h3>{"Settings"}</h3>
                                    </div>
                                    <button onclick={close}>{"\u{00d7}"}</button>
                                </div>
                                <div class="color-row">
                                    <label for="bgColor">{"Background Color:"}</label>
                                    <input
                                        type="color"
                                        id="bgColor"
                                        value={state.background_color.clone()}
                                        oninput={on_background_color}
                                    />
                                </div>
                                <div class="color-row">
                                    <label for="bubbleColor">{"Bubble Color:"}</label>
                                    <input
                                        type="color"
                                        id="bubbleColor"
                                        value={state.bubble_color.clone()}
                                        oninput={on_bubble_color}
                                    />
                                </div>
                            </div>
                        </div>
                    },
                }
            }
        </div>
    }
}
