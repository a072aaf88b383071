//! Pluggable AI responder.
//!
//! The service records question/answer exchanges against highlights but
//! does not ship a real inference backend. [`AiResponder`] is the seam:
//! the default [`CannedResponder`] picks a template at random, and a
//! real model client can be swapped in without touching the comment or
//! annotation flow.

use rand::Rng;

/// Produces a response to a question, optionally grounded in the
/// highlighted text of an annotation.
pub trait AiResponder: Send + Sync {
    /// `context` is the highlighted text of the referenced annotation,
    /// or empty when the question is not tied to a highlight.
    fn respond(&self, question: &str, context: &str) -> String;
}

/// Template-based placeholder responder.
pub struct CannedResponder;

/// Each template interpolates the highlighted context and the question.
const RESPONSE_TEMPLATES: &[fn(&str, &str) -> String] = &[
    |question, context| {
        format!(
            "Based on the highlighted text \"{context}\", here are some key insights: \
             This appears to discuss important concepts that relate to your question \
             about \"{question}\"."
        )
    },
    |question, context| {
        format!(
            "The highlighted passage \"{context}\" suggests several interpretations. \
             Regarding \"{question}\", this could indicate..."
        )
    },
    |question, context| {
        format!(
            "From the context \"{context}\", I can help clarify that your question \
             \"{question}\" touches on fundamental aspects discussed in this section."
        )
    },
    |question, context| {
        format!(
            "The selected text \"{context}\" provides useful background. For your \
             question \"{question}\", consider these perspectives..."
        )
    },
];

impl AiResponder for CannedResponder {
    fn respond(&self, question: &str, context: &str) -> String {
        let index = rand::rng().random_range(0..RESPONSE_TEMPLATES.len());
        RESPONSE_TEMPLATES[index](question, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_interpolates_question_and_context() {
        let responder = CannedResponder;
        let response = responder.respond("what is attention?", "scaled dot-product");
        assert!(response.contains("what is attention?"));
        assert!(response.contains("scaled dot-product"));
    }

    #[test]
    fn response_handles_empty_context() {
        let responder = CannedResponder;
        let response = responder.respond("what is attention?", "");
        assert!(response.contains("what is attention?"));
        assert!(!response.is_empty());
    }

    #[test]
    fn responder_is_object_safe() {
        let responder: Box<dyn AiResponder> = Box::new(CannedResponder);
        assert!(!responder.respond("q", "c").is_empty());
    }
}
