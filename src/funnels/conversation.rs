use super::engine::{EngineError, Product};
use super::FunnelKind;

/// One entry in the chat transcript.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatMessage {
    Bot(String),
    User(String),
    /// Closing multi-line summary, rendered with explicit line breaks.
    Summary(String),
    Product(Product),
}

impl ChatMessage {
    pub fn user_text(&self) -> Option<&str> {
        match self {
            ChatMessage::User(text) => Some(text),
            _ => None,
        }
    }
}

/// A single funnel run. The transcript is the only source of truth: the
/// collected answers are derived from it rather than kept in a parallel
/// list.
///
/// `cursor` is the index of the question currently awaiting an answer and
/// stays within `0..=N`. It reaches `N` only once the final answer has been
/// replied to, after which no further input is accepted. Between an accepted
/// `submit` and the matching `advance` the conversation is waiting for the
/// bot reply and rejects input as well.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    kind: FunnelKind,
    messages: Vec<ChatMessage>,
    cursor: usize,
}

impl Conversation {
    /// Start a fresh run: the transcript opens with the first question.
    pub fn new(kind: FunnelKind) -> Self {
        Self {
            kind,
            messages: vec![ChatMessage::Bot(kind.questions()[0].to_string())],
            cursor: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.kind.questions().len()
    }

    /// True while an accepted answer has not been replied to yet.
    pub fn awaiting_reply(&self) -> bool {
        self.answers().len() > self.cursor
    }

    /// Record a user answer. Whitespace-only input, a pending reply, and a
    /// completed conversation are all rejected without any state change.
    /// Returns whether the answer was accepted; every accepted answer must
    /// be followed by exactly one `advance`.
    pub fn submit(&mut self, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.awaiting_reply() || self.is_complete() {
            return false;
        }
        self.messages.push(ChatMessage::User(trimmed.to_string()));
        true
    }

    /// Produce the bot's reply to the last accepted answer: the next
    /// scripted question, or the summary plus product pitch after the final
    /// one. A no-op unless a reply is owed.
    pub fn advance(&mut self) -> Result<(), EngineError> {
        if !self.awaiting_reply() {
            return Ok(());
        }
        let questions = self.kind.questions();
        let next = self.cursor + 1;
        if next < questions.len() {
            self.messages.push(ChatMessage::Bot(questions[next].to_string()));
        } else {
            let outcome = self.kind.generate_response(&self.answers())?;
            self.messages.push(ChatMessage::Summary(outcome.summary));
            self.messages.push(ChatMessage::Product(outcome.product));
        }
        self.cursor = next;
        Ok(())
    }

    /// The answers given so far, in order, derived from the transcript.
    pub fn answers(&self) -> Vec<String> {
        self.messages
            .iter()
            .filter_map(|message| message.user_text().map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_completion(kind: FunnelKind, answers: &[&str]) -> Conversation {
        let mut conversation = Conversation::new(kind);
        for answer in answers {
            assert!(conversation.submit(answer));
            conversation.advance().unwrap();
        }
        conversation
    }

    #[test]
    fn opens_with_the_first_question() {
        for kind in FunnelKind::ALL {
            let conversation = Conversation::new(kind);
            assert_eq!(
                conversation.messages(),
                &[ChatMessage::Bot(kind.questions()[0].to_string())]
            );
            assert!(!conversation.is_complete());
            assert!(!conversation.awaiting_reply());
        }
    }

    #[test]
    fn asks_every_question_in_order_then_pitches() {
        let answers = ["vegan", "more energy", "20 minutes"];
        let conversation = run_to_completion(FunnelKind::MediterraneanDiet, &answers);
        let questions = FunnelKind::MediterraneanDiet.questions();

        // bot q0, user a0, bot q1, user a1, bot q2, user a2, summary, product
        assert_eq!(conversation.messages().len(), 8);
        for (i, question) in questions.iter().enumerate() {
            assert_eq!(
                conversation.messages()[i * 2],
                ChatMessage::Bot(question.to_string())
            );
        }
        for (i, answer) in answers.iter().enumerate() {
            assert_eq!(
                conversation.messages()[i * 2 + 1],
                ChatMessage::User(answer.to_string())
            );
        }
        match &conversation.messages()[6] {
            ChatMessage::Summary(summary) => {
                for answer in answers {
                    assert!(summary.contains(answer));
                }
            }
            other => panic!("expected summary, got {other:?}"),
        }
        match &conversation.messages()[7] {
            ChatMessage::Product(product) => {
                assert_eq!(product.name, "The Mediterranean Diet Guide");
            }
            other => panic!("expected product, got {other:?}"),
        }
        assert!(conversation.is_complete());
        assert!(!conversation.awaiting_reply());
    }

    #[test]
    fn whitespace_input_changes_nothing() {
        let mut conversation = Conversation::new(FunnelKind::ManifestationJournal);
        let before = conversation.clone();

        assert!(!conversation.submit(""));
        assert!(!conversation.submit("   "));
        assert!(!conversation.submit("\n\t"));
        assert_eq!(conversation, before);
    }

    #[test]
    fn input_is_rejected_while_a_reply_is_pending() {
        let mut conversation = Conversation::new(FunnelKind::FidelityGuide);
        assert!(conversation.submit("will it last?"));
        assert!(conversation.awaiting_reply());

        let before = conversation.clone();
        assert!(!conversation.submit("second thoughts"));
        assert_eq!(conversation, before);

        conversation.advance().unwrap();
        assert!(!conversation.awaiting_reply());
        assert!(conversation.submit("jealousy"));
    }

    #[test]
    fn answers_are_trimmed_before_recording() {
        let mut conversation = Conversation::new(FunnelKind::MediterraneanDiet);
        assert!(conversation.submit("  vegan  "));
        assert_eq!(conversation.answers(), vec!["vegan".to_string()]);
    }

    #[test]
    fn no_input_accepted_after_completion() {
        let mut conversation =
            run_to_completion(FunnelKind::ManifestationJournal, &["write a novel", "courage", "8"]);
        let before = conversation.clone();

        assert!(!conversation.submit("one more thing"));
        conversation.advance().unwrap();
        assert_eq!(conversation, before);
    }

    #[test]
    fn exactly_one_product_message() {
        let conversation =
            run_to_completion(FunnelKind::FidelityGuide, &["a", "b", "c"]);
        let products = conversation
            .messages()
            .iter()
            .filter(|message| matches!(message, ChatMessage::Product(_)))
            .count();
        assert_eq!(products, 1);
    }

    #[test]
    fn a_new_conversation_carries_nothing_over() {
        let _finished = run_to_completion(FunnelKind::MediterraneanDiet, &["a", "b", "c"]);
        let fresh = Conversation::new(FunnelKind::ManifestationJournal);

        assert_eq!(fresh.messages().len(), 1);
        assert!(fresh.answers().is_empty());
        assert!(!fresh.is_complete());
    }
}
