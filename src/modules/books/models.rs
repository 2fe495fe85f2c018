use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A catalogued book record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier for the book, assigned by the store
    pub id: Uuid,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Year the book was published
    pub publish_year: i32,
    /// Sale price, strictly positive
    pub price: f64,
    /// Optional genre label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Set once when the record is first persisted
    pub created_at: DateTime<Utc>,
    /// Bumped by the store on every save
    pub updated_at: DateTime<Utc>,
}

/// Field values for a book that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publish_year: i32,
    pub price: f64,
    pub genre: Option<String>,
}

impl Book {
    /// Trims the text fields in place.
    pub fn normalize(&mut self) {
        normalize_fields(&mut self.title, &mut self.author, &mut self.genre);
    }

    /// Checks the field constraints, collecting one violation per field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.title, &self.author, self.publish_year, self.price)
    }
}

impl NewBook {
    /// Trims the text fields in place.
    pub fn normalize(&mut self) {
        normalize_fields(&mut self.title, &mut self.author, &mut self.genre);
    }

    /// Checks the field constraints, collecting one violation per field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.title, &self.author, self.publish_year, self.price)
    }
}

fn normalize_fields(title: &mut String, author: &mut String, genre: &mut Option<String>) {
    *title = title.trim().to_string();
    *author = author.trim().to_string();
    if let Some(genre) = genre {
        *genre = genre.trim().to_string();
    }
}

fn validate_fields(
    title: &str,
    author: &str,
    publish_year: i32,
    price: f64,
) -> Result<(), ValidationErrors> {
    let mut violations = Vec::new();

    if title.is_empty() {
        violations.push(FieldViolation {
            field: "title",
            message: "title is required".to_string(),
        });
    }
    if author.is_empty() {
        violations.push(FieldViolation {
            field: "author",
            message: "author is required".to_string(),
        });
    }
    if publish_year < 0 {
        violations.push(FieldViolation {
            field: "publishYear",
            message: "publishYear must not be negative".to_string(),
        });
    }
    if price <= 0.0 {
        violations.push(FieldViolation {
            field: "price",
            message: "Price must be a positive number".to_string(),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(violations))
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    /// Wire name of the offending field
    pub field: &'static str,
    /// Human-readable description of the violation
    pub message: String,
}

/// Every field violation found during one validation pass, in field
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|violation| violation.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewBook {
        NewBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publish_year: 1965,
            price: 9.99,
            genre: None,
        }
    }

    #[test]
    fn valid_draft_passes_validation() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn whitespace_title_fails_after_normalize() {
        let mut book = draft();
        book.title = "   ".to_string();
        book.normalize();

        let errors = book.validate().unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "title");
        assert_eq!(errors.to_string(), "title is required");
    }

    #[test]
    fn negative_year_and_price_collect_in_field_order() {
        let mut book = draft();
        book.publish_year = -5;
        book.price = -1.0;

        let errors = book.validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "publishYear must not be negative, Price must be a positive number"
        );
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut book = draft();
        book.price = 0.0;

        let errors = book.validate().unwrap_err();
        assert_eq!(errors.0[0].field, "price");
    }

    #[test]
    fn normalize_trims_all_text_fields() {
        let mut book = draft();
        book.title = "  Dune  ".to_string();
        book.author = " Frank Herbert ".to_string();
        book.genre = Some("  Science Fiction  ".to_string());
        book.normalize();

        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.genre.as_deref(), Some("Science Fiction"));
    }

    #[test]
    fn book_serializes_with_wire_field_names() {
        let book = Book {
            id: Uuid::nil(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publish_year: 1965,
            price: 9.99,
            genre: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["publishYear"], 1965);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("genre").is_none());
    }
}
