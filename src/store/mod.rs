mod storage;
mod types;

pub use storage::CommentStore;
pub use types::*;
