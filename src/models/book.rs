//! Book (catalog entry) model and form payloads.

use serde::{Deserialize, Serialize};

/// A catalog entry. The `id` is assigned by the store at creation time
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
}

/// Payload of the create/update HTML forms.
#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
}
