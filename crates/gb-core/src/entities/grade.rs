use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single grade a student received in a subject on a given date.
///
/// `grade` is expected in `[1, 10]` but the range is not enforced on write.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub grade: f64,
    pub date_received: NaiveDate,
    pub student_id: i64,
    pub subject_id: i64,
}

/// Insert payload for a grade (the id is assigned by the store).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewGrade {
    pub grade: f64,
    pub date_received: NaiveDate,
    pub student_id: i64,
    pub subject_id: i64,
}
