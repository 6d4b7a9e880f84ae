pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod gate;
pub mod map;
pub mod pages;
pub mod renderer;
pub mod server;
pub mod slideshow;
pub mod store;

pub use error::{Error, Result};
