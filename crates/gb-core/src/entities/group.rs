use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A study group. Owns zero or more students.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub name: String,
}
