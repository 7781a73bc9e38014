//! Local state machine for the chat widget.
//!
//! All transitions are pure functions over [`ChatState`]. The view layer
//! owns the reply timer and feeds [`ChatAction::ReplyArrived`] back in
//! when it fires, so nothing in here touches the browser.

use std::rc::Rc;

use yew::functional::Reducible;

pub const GREETING: &str = "Hey there! Thanks for contacting us. What can I do for you today?";
pub const CANNED_REPLY: &str = "Thanks for your message! I'm a placeholder response.";
pub const REPLY_DELAY_MS: u32 = 1_000;
pub const CONVERSATION_STARTERS: [&str; 3] = [
    "Tell me more about your product",
    "How can I get started?",
    "What are your pricing options?",
];
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";
pub const DEFAULT_BUBBLE_COLOR: &str = "#3B82F6";

/// One conversation turn. `options` is only ever present on the initial
/// assistant greeting and is dropped from the transcript as soon as the
/// visitor replies.
#[derive(Clone, PartialEq, Debug)]
pub struct Message {
    pub text: String,
    pub is_user: bool,
    pub options: Option<Vec<String>>,
}

impl Message {
    fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            options: None,
        }
    }

    fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            options: None,
        }
    }

    fn greeting() -> Self {
        Self {
            text: GREETING.to_string(),
            is_user: false,
            options: Some(
                CONVERSATION_STARTERS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        }
    }
}

/// Which surface the widget is showing. Settings is only reachable from
/// the open chat, so "settings open while chat closed" cannot be
/// represented.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Panel {
    Closed,
    Chat,
    Settings,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ChatState {
    pub panel: Panel,
    pub transcript: Vec<Message>,
    pub draft: String,
    pub show_teaser: bool,
    pub background_color: String,
    pub bubble_color: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            panel: Panel::Closed,
            transcript: Vec::new(),
            draft: String::new(),
            show_teaser: true,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            bubble_color: DEFAULT_BUBBLE_COLOR.to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ChatAction {
    Open,
    Close,
    OpenSettings,
    CloseSettings,
    DraftChanged(String),
    /// Free-text submit or starter-option click; both go through here.
    Send(String),
    ReplyArrived,
    BackgroundColorChanged(String),
    BubbleColorChanged(String),
}

impl ChatState {
    /// Whether submitting `text` right now would append a user message
    /// (and therefore whether a reply should be scheduled).
    pub fn accepts_send(&self, text: &str) -> bool {
        self.panel == Panel::Chat && !text.trim().is_empty()
    }

    pub fn apply(&self, action: ChatAction) -> ChatState {
        let mut next = self.clone();
        match action {
            ChatAction::Open => {
                next.panel = Panel::Chat;
                next.show_teaser = false;
                // Seeded at most once per page session; reopening with a
                // non-empty transcript never reseeds.
                if next.transcript.is_empty() {
                    next.transcript.push(Message::greeting());
                }
            }
            ChatAction::Close => {
                next.panel = Panel::Closed;
                next.show_teaser = true;
            }
            ChatAction::OpenSettings => {
                if next.panel == Panel::Chat {
                    next.panel = Panel::Settings;
                }
            }
            ChatAction::CloseSettings => {
                if next.panel == Panel::Settings {
                    next.panel = Panel::Chat;
                }
            }
            ChatAction::DraftChanged(text) => {
                next.draft = text;
            }
            ChatAction::Send(text) => {
                if !self.accepts_send(&text) {
                    return next;
                }
                // Retract the greeting's quick replies the moment the
                // conversation actually starts.
                next.transcript.retain(|msg| msg.options.is_none());
                next.transcript.push(Message::user(text));
                next.draft.clear();
            }
            ChatAction::ReplyArrived => {
                next.transcript.push(Message::assistant(CANNED_REPLY));
            }
            ChatAction::BackgroundColorChanged(color) => {
                next.background_color = color;
            }
            ChatAction::BubbleColorChanged(color) => {
                next.bubble_color = color;
            }
        }
        next
    }
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: ChatAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> ChatState {
        ChatState::default().apply(ChatAction::Open)
    }

    #[test]
    fn first_open_seeds_greeting_with_three_starters() {
        let state = open();
        assert_eq!(state.panel, Panel::Chat);
        assert!(!state.show_teaser);
        assert_eq!(state.transcript.len(), 1);

        let greeting = &state.transcript[0];
        assert!(!greeting.is_user);
        assert_eq!(greeting.text, GREETING);
        assert_eq!(
            greeting.options.as_deref(),
            Some(
                &[
                    "Tell me more about your product".to_string(),
                    "How can I get started?".to_string(),
                    "What are your pricing options?".to_string(),
                ][..]
            )
        );
    }

    #[test]
    fn reopening_does_not_reseed() {
        let state = open().apply(ChatAction::Close).apply(ChatAction::Open);
        assert_eq!(state.transcript.len(), 1);

        let state = open()
            .apply(ChatAction::Send("hello".into()))
            .apply(ChatAction::ReplyArrived)
            .apply(ChatAction::Close)
            .apply(ChatAction::Open);
        assert_eq!(state.transcript.len(), 2);
        assert!(state.transcript.iter().all(|m| m.options.is_none()));
    }

    #[test]
    fn send_appends_user_message_and_drops_greeting_options() {
        let state = open().apply(ChatAction::Send("hello".into()));
        // Greeting removed at send time, before any reply arrives.
        assert_eq!(state.transcript.len(), 1);
        assert!(state.transcript[0].is_user);
        assert_eq!(state.transcript[0].text, "hello");
        assert!(state.transcript[0].options.is_none());
    }

    #[test]
    fn send_clears_draft() {
        let state = open()
            .apply(ChatAction::DraftChanged("hello".into()))
            .apply(ChatAction::Send("hello".into()));
        assert!(state.draft.is_empty());
    }

    #[test]
    fn whitespace_only_send_is_a_no_op() {
        let before = open().apply(ChatAction::DraftChanged("   ".into()));
        assert!(!before.accepts_send("   "));
        assert!(!before.accepts_send(""));

        let after = before.apply(ChatAction::Send("   ".into()));
        assert_eq!(after.transcript, before.transcript);
        assert_eq!(after.draft, "   ");
    }

    #[test]
    fn send_is_rejected_while_closed() {
        let state = ChatState::default();
        assert!(!state.accepts_send("hello"));
        let after = state.apply(ChatAction::Send("hello".into()));
        assert!(after.transcript.is_empty());
    }

    #[test]
    fn starter_click_matches_typed_text() {
        let via_option = open().apply(ChatAction::Send(CONVERSATION_STARTERS[1].into()));
        let via_typing = open()
            .apply(ChatAction::DraftChanged(CONVERSATION_STARTERS[1].into()))
            .apply(ChatAction::Send(CONVERSATION_STARTERS[1].into()));
        assert_eq!(via_option.transcript, via_typing.transcript);
    }

    #[test]
    fn close_resets_teaser_and_settings_but_keeps_transcript_and_colors() {
        let state = open()
            .apply(ChatAction::Send("hello".into()))
            .apply(ChatAction::BackgroundColorChanged("#112233".into()))
            .apply(ChatAction::OpenSettings)
            .apply(ChatAction::Close);

        assert_eq!(state.panel, Panel::Closed);
        assert!(state.show_teaser);
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.background_color, "#112233");

        let reopened = state.apply(ChatAction::Open);
        assert_eq!(reopened.panel, Panel::Chat);
        assert_eq!(reopened.background_color, "#112233");
    }

    #[test]
    fn color_changes_persist_after_leaving_settings() {
        let state = open()
            .apply(ChatAction::OpenSettings)
            .apply(ChatAction::BackgroundColorChanged("#abcdef".into()))
            .apply(ChatAction::BubbleColorChanged("#ff0000".into()))
            .apply(ChatAction::CloseSettings);

        assert_eq!(state.panel, Panel::Chat);
        assert_eq!(state.background_color, "#abcdef");
        assert_eq!(state.bubble_color, "#ff0000");
    }

    #[test]
    fn settings_only_reachable_from_open_chat() {
        let closed = ChatState::default().apply(ChatAction::OpenSettings);
        assert_eq!(closed.panel, Panel::Closed);

        let state = open()
            .apply(ChatAction::DraftChanged("dra".into()))
            .apply(ChatAction::OpenSettings);
        assert_eq!(state.panel, Panel::Settings);

        let back = state.apply(ChatAction::CloseSettings);
        assert_eq!(back.panel, Panel::Chat);
        assert_eq!(back.draft, "dra");
        assert_eq!(back.transcript.len(), 1);
    }

    #[test]
    fn full_conversation_scenario() {
        let state = open();
        assert_eq!(state.transcript.len(), 1);
        assert!(state.transcript[0].options.is_some());

        let state = state.apply(ChatAction::Send("How can I get started?".into()));
        assert_eq!(state.transcript.len(), 1);
        assert!(state.transcript[0].is_user);
        assert_eq!(state.transcript[0].text, "How can I get started?");

        let state = state.apply(ChatAction::ReplyArrived);
        assert_eq!(state.transcript.len(), 2);
        assert!(!state.transcript[1].is_user);
        assert_eq!(state.transcript[1].text, CANNED_REPLY);
    }

    #[test]
    fn transcript_holds_at_most_one_options_message_as_first_element() {
        let state = open()
            .apply(ChatAction::Close)
            .apply(ChatAction::Open)
            .apply(ChatAction::Send("hi".into()))
            .apply(ChatAction::ReplyArrived);
        let with_options = state
            .transcript
            .iter()
            .filter(|m| m.options.is_some())
            .count();
        assert_eq!(with_options, 0);
    }
}
