//! Simulated demo-chat state machine.
//!
//! DESIGN
//! ======
//! The demo assistant is an illusion: the user's text is echoed into history,
//! then one fixed reply is revealed a character at a time. Transitions are
//! plain methods so the machine can be driven by browser timers
//! (`util::reply_timer`) or stepped directly in tests.
//!
//! ```text
//! Idle --submit--> AwaitingReply --begin_reply--> Typing --reveal_next (done)--> Idle
//! ```
//!
//! While not `Idle`, submissions are rejected, so at most one reply sequence is
//! ever in flight and only the last (bot) message is mutated. A sequence whose
//! timers are torn down early is closed with `settle_reply`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// The single reply shown for every input.
pub const CANNED_REPLY: &str =
    "Ohoo it's just a demo doctor! Please sign up on the last slide to unlock the full experience.";

/// Delay before the bot message appears.
pub const THINKING_DELAY_MS: u32 = 800;

/// Interval between revealed characters.
pub const REVEAL_INTERVAL_MS: u32 = 30;

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Reply lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    /// User message accepted; bot is "thinking".
    AwaitingReply,
    /// Bot message is growing; `revealed` counts characters shown so far.
    Typing { revealed: usize },
}

/// State for the demo chat slide.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub phase: ChatPhase,
}

impl ChatState {
    /// True from the moment a submission is accepted until the reply finishes.
    pub fn is_typing(&self) -> bool {
        self.phase != ChatPhase::Idle
    }

    /// Whether `input` would be accepted by `submit`.
    pub fn can_send(&self, input: &str) -> bool {
        !self.is_typing() && !input.trim().is_empty()
    }

    /// Accept a user submission. Whitespace-only input and submissions during
    /// an in-flight reply are ignored and return `false`.
    ///
    /// The text is stored verbatim; only all-whitespace input is rejected.
    pub fn submit(&mut self, input: &str) -> bool {
        if !self.can_send(input) {
            return false;
        }
        self.messages.push(ChatMessage { role: ChatRole::User, text: input.to_owned() });
        self.phase = ChatPhase::AwaitingReply;
        true
    }

    /// End the thinking delay: append an empty bot message and start typing.
    pub fn begin_reply(&mut self) -> bool {
        if self.phase != ChatPhase::AwaitingReply {
            return false;
        }
        self.messages.push(ChatMessage { role: ChatRole::Bot, text: String::new() });
        self.phase = ChatPhase::Typing { revealed: 0 };
        true
    }

    /// Advance the reveal by one character.
    ///
    /// Returns `true` while the reveal timer should keep running. The tick after
    /// the last character returns the machine to `Idle` and yields `false`.
    pub fn reveal_next(&mut self) -> bool {
        let ChatPhase::Typing { revealed } = self.phase else {
            return false;
        };
        let Some(last) = self.messages.last_mut().filter(|m| m.role == ChatRole::Bot) else {
            self.phase = ChatPhase::Idle;
            return false;
        };

        // The bot text is always a prefix of CANNED_REPLY, so its byte length
        // is the offset of the next character.
        match CANNED_REPLY[last.text.len()..].chars().next() {
            Some(next) => {
                last.text.push(next);
                self.phase = ChatPhase::Typing { revealed: revealed + 1 };
                true
            }
            None => {
                self.phase = ChatPhase::Idle;
                false
            }
        }
    }

    /// Settle a reply whose timers were cancelled, returning the machine to
    /// `Idle` so later submissions are accepted.
    ///
    /// A reply still in its thinking delay is dropped without a bot message;
    /// one already typing is completed to the full canned text. Returns
    /// whether anything changed.
    pub fn settle_reply(&mut self) -> bool {
        match self.phase {
            ChatPhase::Idle => return false,
            ChatPhase::AwaitingReply => {}
            ChatPhase::Typing { .. } => {
                if let Some(last) = self.messages.last_mut().filter(|m| m.role == ChatRole::Bot) {
                    CANNED_REPLY.clone_into(&mut last.text);
                }
            }
        }
        self.phase = ChatPhase::Idle;
        true
    }

    /// Text of the bot message currently being (or last) revealed.
    pub fn bot_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Bot)
            .map(|m| m.text.as_str())
    }

    /// Bouncing-dots indicator: typing but no bot message yet.
    pub fn show_thinking_indicator(&self) -> bool {
        self.is_typing() && self.messages.last().is_some_and(|m| m.role != ChatRole::Bot)
    }

    /// The "join waitlist" call-to-action appears after a completed reply.
    pub fn show_join_cta(&self) -> bool {
        !self.is_typing() && self.messages.last().is_some_and(|m| m.role == ChatRole::Bot)
    }
}

/// Number of reveal ticks for one reply, including the final stopping tick.
pub fn reveal_tick_count() -> usize {
    CANNED_REPLY.chars().count() + 1
}
