#![cfg(target_arch = "wasm32")]

//! Browser-side checks for the simulated reply timer: it fires once
//! after the fixed delay, and dropping the handle before expiry
//! discards the reply entirely.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use frontend::components::chat_widget::state::{ChatAction, ChatState, CANNED_REPLY, REPLY_DELAY_MS};

wasm_bindgen_test_configure!(run_in_browser);

fn after_send() -> Rc<RefCell<ChatState>> {
    let state = ChatState::default()
        .apply(ChatAction::Open)
        .apply(ChatAction::Send("hello".into()));
    Rc::new(RefCell::new(state))
}

fn schedule_reply(state: &Rc<RefCell<ChatState>>) -> Timeout {
    let state = state.clone();
    Timeout::new(REPLY_DELAY_MS, move || {
        let next = state.borrow().apply(ChatAction::ReplyArrived);
        *state.borrow_mut() = next;
    })
}

#[wasm_bindgen_test]
async fn reply_arrives_after_the_fixed_delay() {
    let state = after_send();
    let _pending = schedule_reply(&state);

    TimeoutFuture::new(REPLY_DELAY_MS / 2).await;
    assert_eq!(state.borrow().transcript.len(), 1, "reply must not arrive early");

    TimeoutFuture::new(REPLY_DELAY_MS).await;
    let state = state.borrow();
    assert_eq!(state.transcript.len(), 2);
    assert!(!state.transcript[1].is_user);
    assert_eq!(state.transcript[1].text, CANNED_REPLY);
}

#[wasm_bindgen_test]
async fn dropping_the_pending_timer_discards_the_reply() {
    let state = after_send();
    let pending = schedule_reply(&state);
    drop(pending);

    TimeoutFuture::new(REPLY_DELAY_MS + 200).await;
    assert_eq!(state.borrow().transcript.len(), 1);
}
