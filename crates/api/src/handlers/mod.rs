pub mod ai;
pub mod annotation;
pub mod comment;
pub mod paper;
