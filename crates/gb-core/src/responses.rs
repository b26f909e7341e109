//! Typed results of the analytical query catalog.
//!
//! Every average carried by these structs has already been rounded with
//! [`crate::rounding::round_average`].

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student together with their rounded average grade.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentAverage {
    pub student_id: i64,
    pub fullname: String,
    pub average: f64,
}

/// A group together with its rounded average grade.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GroupAverage {
    pub group_id: i64,
    pub name: String,
    pub average: f64,
}

/// One (non-aggregated) grade row labelled with the student's name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentGrade {
    pub student_id: i64,
    pub fullname: String,
    pub grade: f64,
    pub date_received: NaiveDate,
}

/// Ids the `report` command runs the catalog with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportParams {
    pub subject_id: i64,
    pub teacher_id: i64,
    pub group_id: i64,
    pub student_id: i64,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            subject_id: 1,
            teacher_id: 1,
            group_id: 1,
            student_id: 1,
        }
    }
}

/// Response from `gradebook report`: every catalog query, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Report {
    pub params: ReportParams,
    pub top_performers: Vec<StudentAverage>,
    pub best_in_subject: Option<StudentAverage>,
    pub group_averages_for_subject: Vec<GroupAverage>,
    pub global_average: Option<f64>,
    pub teacher_subjects: Vec<String>,
    pub group_roster: Vec<String>,
    pub group_subject_grades: Vec<StudentGrade>,
    pub teacher_average: Option<f64>,
    pub student_courses: Vec<String>,
    pub student_courses_by_teacher: Vec<String>,
    pub teacher_student_average: Option<f64>,
    pub last_session_grades: Vec<StudentGrade>,
}

/// Counts of rows inserted by `gradebook seed`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedSummary {
    pub groups: u32,
    pub teachers: u32,
    pub subjects: u32,
    pub students: u32,
    pub grades: u32,
}
