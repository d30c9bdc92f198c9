/// Prompt sent when the user submits a topic.
pub fn question_set(topic: &str) -> String {
    format!("Generate 5 simple AI interview questions about {topic}. Return as a numbered list.")
}

/// Prompt sent when the user submits an answer to the current question.
pub fn answer_feedback(answer: &str, question: &str) -> String {
    format!(
        "Evaluate this answer: \"{answer}\" for the question: \"{question}\". \
         Provide short constructive feedback."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_set_embeds_the_topic() {
        let prompt = question_set("backend engineering");
        assert!(prompt.contains("about backend engineering."));
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn answer_feedback_embeds_answer_and_question() {
        let prompt = answer_feedback("REST is...", "Explain REST.");
        assert!(prompt.contains("\"REST is...\""));
        assert!(prompt.contains("\"Explain REST.\""));
    }
}
