use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A teacher. Owns zero or more subjects.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Teacher {
    pub id: i64,
    pub fullname: String,
}
