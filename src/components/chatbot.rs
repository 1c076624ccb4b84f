use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::components::product_card::ProductCard;
use crate::funnels::conversation::{ChatMessage, Conversation};
use crate::funnels::FunnelKind;

#[derive(Properties, PartialEq)]
pub struct FunnelChatbotProps {
    pub kind: FunnelKind,
    pub on_back: Callback<()>,
}

/// Render the closing summary with explicit line breaks instead of relying
/// on whitespace collapsing.
fn multiline(text: &str) -> Html {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            html! {
                <>
                    if i > 0 { <br/> }
                    {line}
                </>
            }
        })
        .collect()
}

#[function_component]
pub fn FunnelChatbot(props: &FunnelChatbotProps) -> Html {
    let kind = props.kind;
    let conversation = use_state(|| Conversation::new(kind));
    let draft = use_state(String::new);
    // Owns the delayed bot reply; dropping the component drops the handle
    // and cancels the timeout, so a torn-down chat is never mutated.
    let pending_reply = use_mut_ref(|| None::<Timeout>);
    let transcript_end = use_node_ref();

    let replying = conversation.awaiting_reply();
    let locked = replying || conversation.is_complete();

    // Keep the newest entry visible whenever the transcript grows.
    {
        let transcript_end = transcript_end.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(end) = transcript_end.cast::<web_sys::Element>() {
                    let options = web_sys::ScrollIntoViewOptions::new();
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    end.scroll_into_view_with_scroll_into_view_options(&options);
                }
                || ()
            },
            conversation.messages().len(),
        );
    }

    let on_submit = {
        let conversation = conversation.clone();
        let draft = draft.clone();
        let pending_reply = pending_reply.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut updated = (*conversation).clone();
            if !updated.submit(draft.as_str()) {
                return;
            }
            draft.set(String::new());
            conversation.set(updated.clone());

            let conversation = conversation.clone();
            *pending_reply.borrow_mut() =
                Some(Timeout::new(config::BOT_REPLY_DELAY_MS, move || {
                    let mut replied = updated;
                    if let Err(err) = replied.advance() {
                        gloo_console::error!("funnel reply failed:", err.to_string());
                    }
                    conversation.set(replied);
                }));
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    html! {
        <div class="chat-panel">
            <header class="chat-header">
                <h2 class="chat-title">{kind.chat_title()}{" Chatbot"}</h2>
                <button class="chat-back" onclick={on_back} aria-label="Back to the funnel overview">
                    {"←"}
                </button>
            </header>

            <div class="chat-transcript">
                {
                    conversation.messages().iter().map(|message| {
                        match message {
                            ChatMessage::Bot(text) => html! {
                                <div class="chat-row bot">
                                    <div class="chat-bubble bot">{text}</div>
                                </div>
                            },
                            ChatMessage::User(text) => html! {
                                <div class="chat-row user">
                                    <div class="chat-bubble user">{text}</div>
                                </div>
                            },
                            ChatMessage::Summary(text) => html! {
                                <div class="chat-row bot">
                                    <div class="chat-bubble bot">{multiline(text)}</div>
                                </div>
                            },
                            ChatMessage::Product(product) => html! {
                                <div class="chat-row bot">
                                    <ProductCard product={*product} />
                                </div>
                            },
                        }
                    }).collect::<Html>()
                }
                if replying {
                    <div class="chat-row bot">
                        <div class="chat-bubble bot typing">
                            <span class="typing-dot"></span>
                            <span class="typing-dot"></span>
                            <span class="typing-dot"></span>
                        </div>
                    </div>
                }
                <div ref={transcript_end}></div>
            </div>

            <form class="chat-input-row" onsubmit={on_submit}>
                <input
                    type="text"
                    class="chat-input"
                    placeholder="Type your message..."
                    value={(*draft).clone()}
                    oninput={on_input}
                    disabled={locked}
                />
                <button type="submit" class="chat-send" disabled={locked}>
                    {"Send"}
                </button>
            </form>

            <style>
                {r#"
                .chat-panel {
                    display: flex;
                    flex-direction: column;
                    width: 100%;
                    max-width: 640px;
                    height: 80vh;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
                }
                .chat-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding-bottom: 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .chat-title {
                    color: white;
                    font-size: 1.4rem;
                    margin: 0;
                }
                .chat-back {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    color: #999;
                    font-size: 1.1rem;
                    padding: 0.4rem 0.8rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .chat-back:hover {
                    background: rgba(255, 255, 255, 0.1);
                    color: white;
                }
                .chat-transcript {
                    flex: 1;
                    overflow-y: auto;
                    margin: 1rem 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .chat-row {
                    display: flex;
                }
                .chat-row.bot {
                    justify-content: flex-start;
                }
                .chat-row.user {
                    justify-content: flex-end;
                }
                .chat-bubble {
                    max-width: 75%;
                    padding: 0.8rem 1rem;
                    border-radius: 12px;
                    font-size: 0.95rem;
                    line-height: 1.5;
                }
                .chat-bubble.bot {
                    background: rgba(255, 255, 255, 0.06);
                    color: #e0e0e0;
                    border-bottom-left-radius: 0;
                }
                .chat-bubble.user {
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: white;
                    border-bottom-right-radius: 0;
                }
                .chat-bubble.typing {
                    display: flex;
                    gap: 0.3rem;
                    align-items: center;
                }
                .typing-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #7EB2FF;
                    animation: typing-pulse 1s ease-in-out infinite;
                }
                .typing-dot:nth-child(2) {
                    animation-delay: 0.2s;
                }
                .typing-dot:nth-child(3) {
                    animation-delay: 0.4s;
                }
                @keyframes typing-pulse {
                    0%, 100% { opacity: 0.3; }
                    50% { opacity: 1; }
                }
                .chat-input-row {
                    display: flex;
                    gap: 0.5rem;
                    padding-top: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .chat-input {
                    flex: 1;
                    padding: 0.9rem 1rem;
                    border-radius: 8px;
                    border: 2px solid rgba(30, 144, 255, 0.3);
                    background: rgba(0, 0, 0, 0.3);
                    color: white;
                    font-size: 0.95rem;
                    transition: all 0.3s ease;
                }
                .chat-input:focus {
                    outline: none;
                    border-color: rgba(30, 144, 255, 0.6);
                    box-shadow: 0 0 0 2px rgba(30, 144, 255, 0.1);
                }
                .chat-input::placeholder {
                    color: rgba(255, 255, 255, 0.3);
                }
                .chat-input:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .chat-send {
                    padding: 0.9rem 1.5rem;
                    border-radius: 8px;
                    border: none;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: white;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .chat-send:hover:enabled {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
                }
                .chat-send:disabled {
                    background: rgba(255, 255, 255, 0.1);
                    color: #666;
                    cursor: not-allowed;
                }
                @media (max-width: 768px) {
                    .chat-panel {
                        height: 85vh;
                        padding: 1rem;
                    }
                    .chat-bubble {
                        max-width: 85%;
                    }
                }
                "#}
            </style>
        </div>
    }
}
