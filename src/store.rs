use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Book, NewBook};

/// Store error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No book exists under the given id
    #[error("book {id} not found")]
    NotFound { id: String },
}

/// In-memory book store
///
/// Owns the backing map and its synchronization; all handler access goes
/// through this type. Ids are generated here (UUID v4) and are never
/// accepted from callers. Iteration order is arbitrary.
#[derive(Debug, Default)]
pub struct BookStore {
    books: DashMap<String, Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }

    /// All books, in arbitrary order
    pub fn list(&self) -> Vec<Book> {
        self.books.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Insert a new book under a freshly generated id and return the record
    pub fn create(&self, fields: NewBook) -> Book {
        let id = Uuid::new_v4().to_string();
        let book = Book {
            id: id.clone(),
            title: fields.title,
            author: fields.author,
            genre: fields.genre,
            year: fields.year,
        };
        self.books.insert(id, book.clone());
        book
    }

    /// Fetch a book by id
    pub fn get(&self, id: &str) -> Result<Book, StoreError> {
        self.books
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Replace every non-id field of an existing book
    ///
    /// The check and the replacement happen under one entry lock, so a
    /// concurrent delete cannot resurrect the record.
    pub fn update(&self, id: &str, fields: NewBook) -> Result<Book, StoreError> {
        match self.books.entry(id.to_string()) {
            Entry::Occupied(mut entry) => {
                let book = Book {
                    id: id.to_string(),
                    title: fields.title,
                    author: fields.author,
                    genre: fields.genre,
                    year: fields.year,
                };
                entry.insert(book.clone());
                Ok(book)
            }
            Entry::Vacant(_) => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    /// Remove a book by id and return the removed record
    pub fn remove(&self, id: &str) -> Result<Book, StoreError> {
        self.books
            .remove(id)
            .map(|(_, book)| book)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Number of books currently stored
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Test Author".to_string(),
            genre: "Test Genre".to_string(),
            year: 2000,
        }
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let store = BookStore::new();
        let first = store.create(fields("First"));
        let second = store.create(fields("Second"));

        assert_ne!(first.id, second.id);
        assert!(!first.id.is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_returns_created_record() {
        let store = BookStore::new();
        let created = store.create(fields("Neuromancer"));

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = BookStore::new();
        let err = store.get("missing").unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                id: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let store = BookStore::new();
        let created = store.create(fields("Old Title"));

        let updated = store
            .update(
                &created.id,
                NewBook {
                    title: "New Title".to_string(),
                    author: "New Author".to_string(),
                    genre: "New Genre".to_string(),
                    year: 2024,
                },
            )
            .unwrap();

        // Same id, every other field replaced, nothing merged
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.author, "New Author");
        assert_eq!(updated.genre, "New Genre");
        assert_eq!(updated.year, 2024);
        assert_eq!(store.get(&created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let store = BookStore::new();
        let err = store.update("missing", fields("Anything")).unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                id: "missing".to_string()
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_deletes_the_record() {
        let store = BookStore::new();
        let created = store.create(fields("Ephemeral"));

        let removed = store.remove(&created.id).unwrap();
        assert_eq!(removed, created);
        assert!(store.get(&created.id).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let store = BookStore::new();
        assert!(store.remove("missing").is_err());
    }

    #[test]
    fn test_list_reflects_non_deleted_books() {
        let store = BookStore::new();
        let a = store.create(fields("A"));
        let b = store.create(fields("B"));
        let c = store.create(fields("C"));
        store.remove(&b.id).unwrap();

        let mut ids: Vec<String> = store.list().into_iter().map(|b| b.id).collect();
        ids.sort();
        let mut expected = vec![a.id, c.id];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound {
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "book abc not found");
    }
}
