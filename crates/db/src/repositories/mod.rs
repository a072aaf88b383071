pub mod ai_conversation_repo;
pub mod annotation_repo;
pub mod comment_repo;
pub mod paper_repo;

pub use ai_conversation_repo::AiConversationRepo;
pub use annotation_repo::AnnotationRepo;
pub use comment_repo::CommentRepo;
pub use paper_repo::PaperRepo;
