use thiserror::Error;

use super::FunnelKind;

/// The product pitched at the end of a funnel. One fixed literal per funnel;
/// the link is an inert placeholder and the image is a hosted placeholder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub image_url: &'static str,
}

/// What the generator produces once every question is answered.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelOutcome {
    pub summary: String,
    pub product: Product,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    #[error("funnel expects {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },
}

const MEDITERRANEAN_GUIDE: Product = Product {
    name: "The Mediterranean Diet Guide",
    description: "A comprehensive guide with meal plans, recipes, and tips to embrace a healthy lifestyle.",
    link: "#",
    image_url: "https://placehold.co/400x200/2980b9/ffffff?text=Meal+Plan",
};

const MANIFESTATION_JOURNAL: Product = Product {
    name: "The Manifestation Journal",
    description: "A guided journal with prompts and exercises to help you manifest your dreams and achieve your goals.",
    link: "#",
    image_url: "https://placehold.co/400x200/8e44ad/ffffff?text=Manifest+Journal",
};

const FIDELITY_GUIDE: Product = Product {
    name: "Guide to an Alternate Fidelity Structure",
    description: "A comprehensive guide for exploring and transitioning to new relationship dynamics with communication strategies and real-life examples.",
    link: "#",
    image_url: "https://placehold.co/400x200/e67e22/ffffff?text=Relationship+Guide",
};

impl FunnelKind {
    /// The scripted questions, asked in order. Never empty.
    pub fn questions(self) -> &'static [&'static str] {
        match self {
            FunnelKind::MediterraneanDiet => &[
                "Welcome! To create your personalized meal plan, tell me about your dietary preferences or any restrictions you have.",
                "What is your main health goal? (e.g., more energy, weight management, improved heart health)",
                "Lastly, how much time can you dedicate to cooking each day?",
            ],
            FunnelKind::ManifestationJournal => &[
                "Hello! Let's create your self-actualization plan. What is the biggest dream or goal you want to manifest?",
                "What is a core value or belief you want to strengthen?",
                "On a scale of 1-10, how ready are you to start taking action towards this goal?",
            ],
            FunnelKind::FidelityGuide => &[
                "Welcome. To begin your relationship reading, please tell me the one question you have about your current or future relationship.",
                "Now, describe one challenge or fear you are currently facing in your relationship dynamic.",
                "Finally, describe what a truly liberated relationship looks like to you.",
            ],
        }
    }

    /// Build the closing summary and product pitch from the collected
    /// answers. Deterministic: the same answers always produce the same
    /// output. The answer count must match the question count.
    pub fn generate_response(self, answers: &[String]) -> Result<FunnelOutcome, EngineError> {
        let expected = self.questions().len();
        if answers.len() != expected {
            return Err(EngineError::AnswerCount {
                expected,
                got: answers.len(),
            });
        }

        let outcome = match self {
            FunnelKind::MediterraneanDiet => {
                let (preferences, goal, time) = (&answers[0], &answers[1], &answers[2]);
                FunnelOutcome {
                    summary: format!(
                        "Your Personalized Meal Plan\n\
                         \n\
                         Goal: {goal}\n\
                         Preferences: {preferences}\n\
                         Cooking Time: {time}\n\
                         \n\
                         Based on your answers, a Mediterranean-style plan focused on fresh vegetables and healthy fats would be perfect. To get a full 7-day plan with recipes and shopping lists, check out our guide!"
                    ),
                    product: MEDITERRANEAN_GUIDE,
                }
            }
            FunnelKind::ManifestationJournal => {
                let (dream, value, readiness) = (&answers[0], &answers[1], &answers[2]);
                FunnelOutcome {
                    summary: format!(
                        "Your Self-Actualization Plan\n\
                         \n\
                         Dream: {dream}\n\
                         Core Value: {value}\n\
                         Readiness Score: {readiness}/10\n\
                         \n\
                         Your path to self-actualization is clear. To turn these ideas into reality, consistent action is key. Our journal provides the structure you need."
                    ),
                    product: MANIFESTATION_JOURNAL,
                }
            }
            FunnelKind::FidelityGuide => {
                let (question, challenge, vision) = (&answers[0], &answers[1], &answers[2]);
                FunnelOutcome {
                    summary: format!(
                        "Your Relationship Reading\n\
                         \n\
                         Your Question: \"{question}\"\n\
                         Your Challenge: \"{challenge}\"\n\
                         Your Vision: \"{vision}\"\n\
                         \n\
                         This reading shows a path towards a deeper and more fulfilling connection. It's time to explore new ways of thinking about your partnership. Our guide can provide a framework for these conversations."
                    ),
                    product: FIDELITY_GUIDE,
                }
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn answers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn every_funnel_has_a_script() {
        for kind in FunnelKind::ALL {
            assert!(!kind.questions().is_empty());
        }
    }

    #[test]
    fn meal_plan_summary_reflects_the_answers() {
        let outcome = FunnelKind::MediterraneanDiet
            .generate_response(&answers(&["vegan", "more energy", "20 minutes"]))
            .unwrap();

        assert!(outcome.summary.contains("Goal: more energy"));
        assert!(outcome.summary.contains("Preferences: vegan"));
        assert!(outcome.summary.contains("Cooking Time: 20 minutes"));
        assert_eq!(outcome.product.name, "The Mediterranean Diet Guide");
        assert_eq!(outcome.product.link, "#");
    }

    #[test]
    fn manifestation_summary_reflects_the_answers() {
        let outcome = FunnelKind::ManifestationJournal
            .generate_response(&answers(&["write a novel", "courage", "8"]))
            .unwrap();

        assert!(outcome.summary.contains("Dream: write a novel"));
        assert!(outcome.summary.contains("Core Value: courage"));
        assert!(outcome.summary.contains("Readiness Score: 8/10"));
        assert_eq!(outcome.product.name, "The Manifestation Journal");
    }

    #[test]
    fn relationship_reading_quotes_the_answers() {
        let outcome = FunnelKind::FidelityGuide
            .generate_response(&answers(&["will it last?", "jealousy", "open and honest"]))
            .unwrap();

        assert!(outcome.summary.contains("Your Question: \"will it last?\""));
        assert!(outcome.summary.contains("Your Challenge: \"jealousy\""));
        assert!(outcome.summary.contains("Your Vision: \"open and honest\""));
        assert_eq!(outcome.product.name, "Guide to an Alternate Fidelity Structure");
    }

    #[test]
    fn generator_is_deterministic() {
        let input = answers(&["vegan", "more energy", "20 minutes"]);
        for kind in FunnelKind::ALL {
            let first = kind.generate_response(&input).unwrap();
            let second = kind.generate_response(&input).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn short_answer_sequences_are_rejected() {
        let err = FunnelKind::MediterraneanDiet
            .generate_response(&answers(&["vegan"]))
            .unwrap_err();
        assert_eq!(err, EngineError::AnswerCount { expected: 3, got: 1 });
    }
}
