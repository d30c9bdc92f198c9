use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

pub(crate) const NEXT_QUESTION: &str = "Next Question";
pub(crate) const FINISH_QUIZ: &str = "Finish Quiz";

/// Single advance button shown under the feedback message.
pub(crate) fn progress_keyboard(is_last: bool) -> InlineKeyboardMarkup {
    let label = if is_last { FINISH_QUIZ } else { NEXT_QUESTION };

    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(label, label)]])
}

/// Suggested topics shown alongside the topic prompt. Free-typed topics are
/// accepted just the same.
pub(crate) fn topics_keyboard() -> KeyboardMarkup {
    let keyboard: Vec<Vec<KeyboardButton>> = vec![
        vec![
            KeyboardButton::new("Backend engineering"),
            KeyboardButton::new("Frontend development"),
        ],
        vec![
            KeyboardButton::new("Machine learning"),
            KeyboardButton::new("System design"),
        ],
    ];

    KeyboardMarkup::new(keyboard)
}
