use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Leading ordinal of a numbered list item: "1. ", "2.  ", ...
    static ref ORDINAL: Regex = Regex::new(r"\d+\.\s+").unwrap();
}

/// One generated interview question. `number` is assigned by position in the
/// completion, 1-based; whatever numbering the model wrote is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    number: usize,
    text: String,
}

impl Question {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Splits a completion shaped like a numbered list into questions.
/// Empty and whitespace-only segments are dropped, the rest are trimmed and
/// renumbered sequentially. Text without any ordinal marker comes back as a
/// single question; callers decide whether that is acceptable.
pub fn parse_questions(completion: &str) -> Vec<Question> {
    ORDINAL
        .split(completion)
        .filter(|segment| !segment.trim().is_empty())
        .enumerate()
        .map(|(idx, segment)| Question {
            number: idx + 1,
            text: segment.trim().to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbered_list_into_questions() {
        let parsed = parse_questions("1. What is AI?\n2. What is ML?");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].number(), 1);
        assert_eq!(parsed[0].text(), "What is AI?");
        assert_eq!(parsed[1].number(), 2);
        assert_eq!(parsed[1].text(), "What is ML?");
    }

    #[test]
    fn renumbers_by_position_ignoring_source_ordinals() {
        let parsed = parse_questions("3. First in text.\n7. Second in text.");
        let numbers: Vec<usize> = parsed.iter().map(Question::number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(parsed[0].text(), "First in text.");
    }

    #[test]
    fn keeps_every_item_regardless_of_count() {
        let completion = "1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g";
        assert_eq!(parse_questions(completion).len(), 7);
    }

    #[test]
    fn drops_empty_and_whitespace_segments() {
        let parsed = parse_questions("1. \n2. Real question?\n3.   ");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].number(), 1);
        assert_eq!(parsed[0].text(), "Real question?");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let parsed = parse_questions("1.   What is Rust?  \n");
        assert_eq!(parsed[0].text(), "What is Rust?");
    }

    #[test]
    fn empty_completion_yields_no_questions() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("   \n  ").is_empty());
    }

    #[test]
    fn text_without_ordinals_is_one_question() {
        let parsed = parse_questions("Tell me about yourself.");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].number(), 1);
        assert_eq!(parsed[0].text(), "Tell me about yourself.");
    }
}
