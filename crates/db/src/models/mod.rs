pub mod ai_conversation;
pub mod annotation;
pub mod comment;
pub mod paper;
