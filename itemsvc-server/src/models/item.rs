//! Item domain types
//!
//! `ItemName` enforces the create-time rule that a name is present and
//! non-empty. Updates bind whatever the caller sent, so they bypass it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A row of the `items` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Validated item name for inserts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Accept any name that is present and non-empty.
    ///
    /// # Example
    /// ```
    /// use itemsvc_server::models::ItemName;
    ///
    /// assert!(ItemName::new(Some("widget".into())).is_ok());
    /// assert!(ItemName::new(Some(String::new())).is_err());
    /// assert!(ItemName::new(None).is_err());
    /// ```
    pub fn new(name: Option<String>) -> Result<Self, ValidationError> {
        match name {
            Some(name) if !name.is_empty() => Ok(Self(name)),
            _ => Err(ValidationError::Required { field: "name" }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Body of `POST /api/items`
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateItemRequest {
    /// Empty descriptions are stored as NULL.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Body of `PUT /api/items/{id}`
///
/// Both fields overwrite the stored row; an absent field binds NULL.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of a successful `DELETE /api/items/{id}`
#[derive(Debug, Serialize)]
pub struct DeletedItem {
    pub deleted: bool,
    pub item: Item,
}

impl From<Item> for DeletedItem {
    fn from(item: Item) -> Self {
        Self {
            deleted: true,
            item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_required() {
        assert_eq!(
            ItemName::new(None).unwrap_err(),
            ValidationError::Required { field: "name" }
        );
        assert!(ItemName::new(Some(String::new())).is_err());
    }

    #[test]
    fn name_keeps_whitespace() {
        // Only presence is checked
        let name = ItemName::new(Some("  ".into())).unwrap();
        assert_eq!(name.as_str(), "  ");
    }

    #[test]
    fn empty_description_becomes_null() {
        let req: CreateItemRequest =
            serde_json::from_str(r#"{"name": "a", "description": ""}"#).unwrap();
        assert_eq!(req.description(), None);

        let req: CreateItemRequest =
            serde_json::from_str(r#"{"name": "a", "description": "blue"}"#).unwrap();
        assert_eq!(req.description(), Some("blue"));
    }

    #[test]
    fn update_fields_default_to_none() {
        let req: UpdateItemRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.description.is_none());
    }

    #[test]
    fn deleted_item_shape() {
        let item = Item {
            id: 7,
            name: "lamp".into(),
            description: None,
            created_at: None,
        };
        let value = serde_json::to_value(DeletedItem::from(item)).unwrap();
        assert_eq!(value["deleted"], true);
        assert_eq!(value["item"]["id"], 7);
        assert_eq!(value["item"]["name"], "lamp");
        assert!(value["item"]["description"].is_null());
    }
}
