//! In-memory book store.
//!
//! Holds the ordered book collection and the id-issuing counter. All
//! mutations of catalog state go through this type; shared access and
//! locking live one layer up, in the catalog service.

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// The catalog state: insertion-ordered records plus a monotonically
/// increasing id counter. Ids are never reused, even after deletion.
#[derive(Debug)]
pub struct BookStore {
    records: Vec<Book>,
    next_id: i32,
}

impl BookStore {
    /// Create a store from an initial set of records. The id counter
    /// starts at one greater than the highest seeded id.
    pub fn with_books(records: Vec<Book>) -> Self {
        let next_id = records.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    /// The store as shipped: three sample books with ids 1-3.
    pub fn seeded() -> Self {
        Self::with_books(vec![
            Book {
                id: 1,
                title: "The Hobbit".to_string(),
                author: "J.R.R. Tolkien".to_string(),
            },
            Book {
                id: 2,
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
            },
            Book {
                id: 3,
                title: "To Kill a Mockingbird".to_string(),
                author: "Harper Lee".to_string(),
            },
        ])
    }

    /// All books, in insertion order (minus deletions).
    pub fn list(&self) -> &[Book] {
        &self.records
    }

    /// Look up a book by id. Absence is a normal outcome, not an error.
    pub fn find_by_id(&self, id: i32) -> Option<&Book> {
        self.records.iter().find(|b| b.id == id)
    }

    /// Append a new book with the next free id. Rejects blank titles or
    /// authors without touching the store; the rejected id is not consumed.
    pub fn insert(&mut self, title: &str, author: &str) -> AppResult<Book> {
        if title.is_empty() || author.is_empty() {
            return Err(AppError::Validation(
                "title and author are required".to_string(),
            ));
        }

        let book = Book {
            id: self.next_id,
            title: title.to_string(),
            author: author.to_string(),
        };
        self.next_id += 1;
        self.records.push(book.clone());
        Ok(book)
    }

    /// Replace the title and author of an existing book in place. The id
    /// and the book's position in the sequence are preserved. Never
    /// creates a record.
    pub fn update(&mut self, id: i32, title: &str, author: &str) -> AppResult<()> {
        let book = self
            .records
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("no book with id {}", id)))?;

        book.title = title.to_string();
        book.author = author.to_string();
        Ok(())
    }

    /// Remove the book with the given id, if present. Returns whether a
    /// record was removed; deleting an absent id is a no-op.
    pub fn delete(&mut self, id: i32) -> bool {
        let before = self.records.len();
        self.records.retain(|b| b.id != id);
        self.records.len() != before
    }

    /// Remove the book with the numerically largest id, recomputed at
    /// call time. Returns the removed id, or `None` on an empty store.
    pub fn delete_max_id(&mut self) -> Option<i32> {
        let max_id = self.records.iter().map(|b| b.id).max()?;
        self.records.retain(|b| b.id != max_id);
        Some(max_id)
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &BookStore) -> Vec<i32> {
        store.list().iter().map(|b| b.id).collect()
    }

    #[test]
    fn seeded_store_has_three_books() {
        let store = BookStore::seeded();
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.find_by_id(1).unwrap().title, "The Hobbit");
    }

    #[test]
    fn insert_issues_unique_increasing_ids() {
        let mut store = BookStore::seeded();
        let a = store.insert("Dune", "Frank Herbert").unwrap();
        let b = store.insert("Neuromancer", "William Gibson").unwrap();
        assert_eq!(a.id, 4);
        assert_eq!(b.id, 5);

        let mut seen = ids(&store);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), store.list().len());
    }

    #[test]
    fn insert_appends_at_the_end() {
        let mut store = BookStore::seeded();
        store.insert("Dune", "Frank Herbert").unwrap();
        assert_eq!(store.list().last().unwrap().title, "Dune");
    }

    #[test]
    fn insert_rejects_blank_fields() {
        let mut store = BookStore::seeded();
        assert!(matches!(
            store.insert("", "Somebody"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.insert("Something", ""),
            Err(AppError::Validation(_))
        ));
        assert_eq!(ids(&store), vec![1, 2, 3]);

        // A rejected insert must not burn an id.
        let next = store.insert("Dune", "Frank Herbert").unwrap();
        assert_eq!(next.id, 4);
    }

    #[test]
    fn ids_are_never_reused_after_deletion() {
        let mut store = BookStore::seeded();
        assert!(store.delete(3));
        let book = store.insert("Dune", "Frank Herbert").unwrap();
        assert_eq!(book.id, 4);
    }

    #[test]
    fn delete_then_find_yields_absent() {
        let mut store = BookStore::seeded();
        assert!(store.delete(2));
        assert!(store.find_by_id(2).is_none());
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn delete_of_unknown_id_is_a_noop() {
        let mut store = BookStore::seeded();
        assert!(!store.delete(99));
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn update_changes_fields_but_not_id_or_position() {
        let mut store = BookStore::seeded();
        store.update(2, "Animal Farm", "George Orwell").unwrap();

        assert_eq!(ids(&store), vec![1, 2, 3]);
        let book = store.find_by_id(2).unwrap();
        assert_eq!(book.title, "Animal Farm");
        assert_eq!(store.list()[1].id, 2);
    }

    #[test]
    fn update_of_unknown_id_is_not_found() {
        let mut store = BookStore::seeded();
        assert!(matches!(
            store.update(99, "X", "Y"),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn book_one_update_touches_only_book_one() {
        let mut store = BookStore::seeded();
        store.update(1, "Harry Potter", "J.K Rowling").unwrap();

        let one = store.find_by_id(1).unwrap();
        assert_eq!(one.title, "Harry Potter");
        assert_eq!(one.author, "J.K Rowling");
        assert_eq!(store.find_by_id(2).unwrap().title, "1984");
        assert_eq!(
            store.find_by_id(3).unwrap().title,
            "To Kill a Mockingbird"
        );
    }

    #[test]
    fn delete_max_id_removes_exactly_the_highest() {
        let mut store = BookStore::seeded();
        assert_eq!(store.delete_max_id(), Some(3));
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn delete_max_id_on_empty_store_is_a_noop() {
        let mut store = BookStore::with_books(vec![]);
        assert_eq!(store.delete_max_id(), None);
        assert!(store.list().is_empty());
    }

    #[test]
    fn delete_max_id_recomputes_the_maximum() {
        let mut store = BookStore::seeded();
        let book = store.insert("Dune", "Frank Herbert").unwrap();
        assert_eq!(book.id, 4);

        assert_eq!(store.delete_max_id(), Some(4));
        assert_eq!(ids(&store), vec![1, 2, 3]);

        assert_eq!(store.delete_max_id(), Some(3));
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn with_books_starts_counter_above_highest_seed() {
        let mut store = BookStore::with_books(vec![Book {
            id: 7,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
        }]);
        let book = store.insert("Neuromancer", "William Gibson").unwrap();
        assert_eq!(book.id, 8);
    }
}
