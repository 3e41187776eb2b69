//! Data models for Bindery

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookForm};
