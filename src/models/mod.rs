pub mod comment;
pub mod config;
pub mod list;
pub mod submission;

// Re-export commonly used types at models root for convenience
pub use comment::{Comment, CommentList, CommentSearchParams};
pub use config::ClientConfig;
pub use list::List;
pub use submission::{
    Image, Media, Oembed, Preview, Resolution, Submission, SubmissionList,
    SubmissionSearchParams,
};
