use crate::quiz::Question;

/// Per-chat dialogue state. One practice session lives entirely inside one
/// variant chain; finishing a set returns to `Idle`, which is the same state
/// a fresh chat starts in.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Idle,
    // PART FOR --- GENERATING A QUESTION SET ---
    Generating {
        topic: String,
    },
    // PART FOR --- ANSWERING QUESTIONS ---
    Answering {
        questions: Vec<Question>,
        curr_idx: usize,
    },
    Evaluating {
        questions: Vec<Question>,
        curr_idx: usize,
    },
    Reviewing {
        questions: Vec<Question>,
        curr_idx: usize,
        feedback: String,
    },
}

/// Moves the session past the question at `curr_idx`. Answer and feedback are
/// dropped with the `Reviewing` variant itself. Exhausting the set clears it
/// and lands back in `Idle`.
pub fn advance(questions: Vec<Question>, curr_idx: usize) -> SessionState {
    if curr_idx + 1 < questions.len() {
        SessionState::Answering {
            questions,
            curr_idx: curr_idx + 1,
        }
    } else {
        SessionState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::parse_questions;

    #[test]
    fn advance_moves_to_next_question() {
        let questions = parse_questions("1. Explain REST.\n2. What is a database index?");
        match advance(questions.clone(), 0) {
            SessionState::Answering {
                questions: kept,
                curr_idx,
            } => {
                assert_eq!(curr_idx, 1);
                assert_eq!(kept, questions);
            }
            other => panic!("expected Answering, got {:?}", other),
        }
    }

    #[test]
    fn advance_on_last_question_returns_to_idle() {
        let questions = parse_questions("1. Explain REST.\n2. What is a database index?");
        assert!(matches!(advance(questions, 1), SessionState::Idle));
    }

    #[test]
    fn advance_on_single_question_set_returns_to_idle() {
        let questions = parse_questions("1. What is AI?");
        assert!(matches!(advance(questions, 0), SessionState::Idle));
    }
}
