use serde::{Deserialize, Serialize};

/// A catalogued book
///
/// The `id` is generated by the store on creation and is never accepted
/// from callers; update requests replace every other field wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Generated UUID, unique and immutable for the lifetime of the record
    pub id: String,
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Genre label
    pub genre: String,
    /// Publication year
    pub year: i32,
}

/// Caller-supplied payload for create and update requests
///
/// Every field is optional at the serde level so that presence validation
/// is explicit and a missing field yields the API's own 400 response
/// instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

/// A fully validated set of book fields, ready to insert or replace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
}

impl BookInput {
    /// Validate that all required fields are present
    ///
    /// Returns the names of every missing field, not just the first one,
    /// so the error message lists the complete set.
    pub fn validate(self) -> Result<NewBook, Vec<&'static str>> {
        match (self.title, self.author, self.genre, self.year) {
            (Some(title), Some(author), Some(genre), Some(year)) => Ok(NewBook {
                title,
                author,
                genre,
                year,
            }),
            (title, author, genre, year) => {
                let mut missing = Vec::new();
                if title.is_none() {
                    missing.push("title");
                }
                if author.is_none() {
                    missing.push("author");
                }
                if genre.is_none() {
                    missing.push("genre");
                }
                if year.is_none() {
                    missing.push("year");
                }
                Err(missing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> BookInput {
        BookInput {
            title: Some("The Dispossessed".to_string()),
            author: Some("Ursula K. Le Guin".to_string()),
            genre: Some("Science Fiction".to_string()),
            year: Some(1974),
        }
    }

    #[test]
    fn test_validate_complete_input() {
        let fields = complete_input().validate().unwrap();
        assert_eq!(fields.title, "The Dispossessed");
        assert_eq!(fields.author, "Ursula K. Le Guin");
        assert_eq!(fields.genre, "Science Fiction");
        assert_eq!(fields.year, 1974);
    }

    #[test]
    fn test_validate_reports_single_missing_field() {
        let mut input = complete_input();
        input.author = None;

        let missing = input.validate().unwrap_err();
        assert_eq!(missing, vec!["author"]);
    }

    #[test]
    fn test_validate_reports_all_missing_fields() {
        let missing = BookInput::default().validate().unwrap_err();
        assert_eq!(missing, vec!["title", "author", "genre", "year"]);
    }

    #[test]
    fn test_input_deserializes_with_missing_fields() {
        let input: BookInput = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("Dune"));
        assert!(input.year.is_none());
    }

    #[test]
    fn test_book_serializes_all_fields() {
        let book = Book {
            id: "abc-123".to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Science Fiction".to_string(),
            year: 1965,
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["id"], "abc-123");
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["author"], "Frank Herbert");
        assert_eq!(value["genre"], "Science Fiction");
        assert_eq!(value["year"], 1965);
    }
}
