mod account;
mod blog;

pub use account::{AccountPage, account_document};
pub use blog::{BlogPage, COUNT_SELECT_ID, blog_document};
