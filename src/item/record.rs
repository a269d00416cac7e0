use serde::{Deserialize, Serialize};

/// A single item from the hiring JSON array.
///
/// JSON shape:
/// { "id": 755, "listId": 2, "name": "Item 755" }
///
/// `name` may be `null`, `""`, or missing entirely; all three decode to
/// something the pipeline drops. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub id: i64,

    #[serde(rename = "listId")]
    pub list_id: i64,

    #[serde(default)]
    pub name: Option<String>,
}

/// The decoded response body.
pub type Records = Vec<Record>;

impl Record {
    pub fn new(id: i64, list_id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            list_id,
            name: name.map(str::to_string),
        }
    }

    /// The display name, if it is present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some("") | None => None,
            Some(name) => Some(name),
        }
    }
}
