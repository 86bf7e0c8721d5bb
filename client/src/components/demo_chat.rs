//! Demo assistant chat rendered on the `chat` slide.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submissions go through `ChatState::submit`; on acceptance a `ReplyTimer`
//! drives the canned reply. The input and send button are disabled while a
//! reply is in flight, and a "join waitlist" call-to-action appears once the
//! first reply has finished revealing.

use leptos::prelude::*;

use crate::components::join_button::JoinLink;
use crate::state::chat::{ChatRole, ChatState};
use crate::util::reply_timer::ReplyTimer;

/// Chat history plus the gradient-ringed prompt input.
#[component]
pub fn DemoChat() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let timer = StoredValue::new_local(ReplyTimer::default());

    // The chat signal outlives this view; never leave it mid-reply.
    on_cleanup(move || {
        timer.try_with_value(ReplyTimer::cancel);
        chat.try_update(ChatState::settle_reply);
    });

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let mut accepted = false;
        chat.update(|c| accepted = c.submit(&text));
        if !accepted {
            return;
        }
        input.set(String::new());
        timer.with_value(|t| t.start(chat));
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || chat.with(|c| c.can_send(&input.get()));

    view! {
        <div class="demo-chat">
            <div class="demo-chat__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="demo-chat__empty">
                                <span class="demo-chat__shimmer">"after trials"</span>
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|msg| {
                            let is_user = msg.role == ChatRole::User;
                            if is_user {
                                view! {
                                    <div class="demo-chat__message demo-chat__message--user">
                                        <p class="demo-chat__bubble">{msg.text}</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="demo-chat__message demo-chat__message--bot">
                                        <p>
                                            <span class="gradient-text demo-chat__speaker">"AI: "</span>
                                            {msg.text}
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                <Show when=move || chat.get().show_thinking_indicator()>
                    <div class="demo-chat__thinking">
                        <span class="gradient-text demo-chat__speaker">"AI:"</span>
                        <span class="demo-chat__dot"></span>
                        <span class="demo-chat__dot"></span>
                        <span class="demo-chat__dot"></span>
                    </div>
                </Show>

                <Show when=move || chat.get().show_join_cta()>
                    <JoinLink label="join waitlist →" variant="demo-chat__cta"/>
                </Show>
            </div>

            <div class="demo-chat__input-row">
                <div class="demo-chat__ring"></div>
                <div class="demo-chat__field">
                    <input
                        class="demo-chat__input"
                        type="text"
                        placeholder="type something..."
                        disabled=move || chat.get().is_typing()
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button class="demo-chat__send" type="button" on:click=on_click disabled=move || !can_send()>
                        "send"
                    </button>
                </div>
            </div>
        </div>
    }
}
