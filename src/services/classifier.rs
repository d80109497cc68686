//! Keyword-based intent classification
//!
//! No language model behind this: classification is deterministic substring
//! matching over a fixed rule table. The table order is part of the contract,
//! a message hitting several keyword sets always resolves to the earliest
//! declared category.

use crate::models::Intent;

/// Ordered rule table. First rule with a keyword hit wins.
const RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["привет", "здравствуй", "добрый", "hi", "hello"],
    ),
    (
        Intent::Wellbeing,
        &["как дела", "как ты", "как поживаешь"],
    ),
    (
        Intent::CreateProject,
        &["создай", "сделай", "построй", "разработай", "напиши"],
    ),
    (
        Intent::Capabilities,
        &["что умеешь", "возможности", "функции", "помощь"],
    ),
    (
        Intent::GameDiscussion,
        &["игра", "game", "игр", "развлечение", "весело"],
    ),
    (
        Intent::Suggestions,
        &["что можно", "что думаешь", "как думаешь", "предложи", "идеи"],
    ),
];

/// Classify a raw user message into exactly one intent.
pub fn classify(text: &str) -> Intent {
    let text = text.to_lowercase();

    for (intent, keywords) in RULES {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return *intent;
        }
    }

    Intent::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(classify("Привет"), Intent::Greeting);
        assert_eq!(classify("Добрый день!"), Intent::Greeting);
        assert_eq!(classify("hello there"), Intent::Greeting);
    }

    #[test]
    fn test_wellbeing() {
        assert_eq!(classify("Как дела?"), Intent::Wellbeing);
    }

    #[test]
    fn test_create_project() {
        assert_eq!(classify("создай калькулятор"), Intent::CreateProject);
        assert_eq!(classify("Сделай мне будильник"), Intent::CreateProject);
    }

    #[test]
    fn test_capabilities() {
        assert_eq!(classify("что умеешь?"), Intent::Capabilities);
        assert_eq!(classify("нужна помощь"), Intent::Capabilities);
    }

    #[test]
    fn test_game_discussion() {
        assert_eq!(classify("хочу игру"), Intent::GameDiscussion);
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(classify("предложи идеи"), Intent::Suggestions);
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(classify("расскажи про погоду"), Intent::General);
        assert_eq!(classify(""), Intent::General);
    }

    #[test]
    fn test_rule_precedence_is_stable() {
        // Greeting is declared before game discussion, so a message hitting
        // both keyword sets must classify as greeting.
        assert_eq!(classify("привет, обсудим игру?"), Intent::Greeting);
        // Create beats game for the same reason.
        assert_eq!(classify("создай игру"), Intent::CreateProject);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let input = "создай сайт для университета";
        let first = classify(input);
        for _ in 0..10 {
            assert_eq!(classify(input), first);
        }
    }
}
