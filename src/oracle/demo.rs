//! Demo answers for when the answer service is unreachable
//!
//! Picks one of a few canned templates, drops the question into it and pairs
//! it with a fixed list of placeholder sources. The pick goes through a
//! [`Chooser`] so tests can pin a template.

use super::payload::AnswerPayload;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Placeholder sources attached to every demo answer
pub const DEMO_SOURCES: [&str; 3] = [
    "Example_Document_1.pdf",
    "Reference_File_2.docx",
    "Knowledge_Base_3.txt",
];

/// Templates; `{question}` is replaced verbatim
const TEMPLATES: [&str; 3] = [
    "Based on the consulted documents, I can offer relevant information about \"{question}\". \
     This is a demonstration answer, because the connection to the answer service is not active right now.",
    "The Oracle analyzed your question about \"{question}\" and found references in the specialized documents. \
     In demonstration mode, this answer simulates the expected behavior of the AI integration.",
    "Your question about \"{question}\" was processed. The documents hold pertinent information that the AI \
     would analyze in a complete deployment. This is a simulated answer for demonstration purposes.",
];

/// Picks an index in `0..len`
pub type Chooser = Arc<dyn Fn(usize) -> usize + Send + Sync>;

/// Produces synthetic answer payloads
#[derive(Clone)]
pub struct DemoResponder {
    choose: Chooser,
}

impl DemoResponder {
    /// Uniformly random template choice
    pub fn new() -> Self {
        Self::with_chooser(Arc::new(|len| rand::thread_rng().gen_range(0..len)))
    }

    /// Custom choice function (out-of-range picks wrap around)
    pub fn with_chooser(choose: Chooser) -> Self {
        Self { choose }
    }

    /// Always use the template at `index`
    pub fn pinned(index: usize) -> Self {
        Self::with_chooser(Arc::new(move |_| index))
    }

    pub fn template_count() -> usize {
        TEMPLATES.len()
    }

    pub fn synthesize(&self, question: &str) -> AnswerPayload {
        let index = (self.choose)(TEMPLATES.len()) % TEMPLATES.len();
        let text = TEMPLATES[index].replace("{question}", question);
        AnswerPayload::structured(text, &DEMO_SOURCES)
    }
}

impl Default for DemoResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DemoResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoResponder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_template_interpolates_question() {
        let question = "What is the capital of France?";
        for index in 0..DemoResponder::template_count() {
            let answer = DemoResponder::pinned(index)
                .synthesize(question)
                .into_answer();
            assert!(answer.text.contains("\"What is the capital of France?\""));
            assert!(!answer.text.contains("{question}"));
            assert_eq!(answer.sources, DEMO_SOURCES);
        }
    }

    #[test]
    fn test_templates_differ() {
        let q = "short text";
        let a = DemoResponder::pinned(0).synthesize(q).into_answer().text;
        let b = DemoResponder::pinned(1).synthesize(q).into_answer().text;
        let c = DemoResponder::pinned(2).synthesize(q).into_answer().text;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_question_is_inserted_verbatim() {
        let question = "<b>{odd}</b> & \"quotes\"";
        let answer = DemoResponder::pinned(2).synthesize(question).into_answer();
        assert!(answer.text.contains(question));
    }

    #[test]
    fn test_out_of_range_choice_wraps() {
        let wrapped = DemoResponder::pinned(4).synthesize("short text");
        let direct = DemoResponder::pinned(1).synthesize("short text");
        assert_eq!(wrapped, direct);
    }

    #[test]
    fn test_random_choice_stays_in_range() {
        let responder = DemoResponder::new();
        for _ in 0..50 {
            let answer = responder.synthesize("short text").into_answer();
            assert_eq!(answer.sources.len(), 3);
        }
    }
}
