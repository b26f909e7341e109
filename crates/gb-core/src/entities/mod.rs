//! Entity structs for all gradebook domain objects.
//!
//! Each entity maps to one table in the libSQL store. Identifiers are
//! store-assigned `INTEGER PRIMARY KEY` values and never change.

mod grade;
mod group;
mod student;
mod subject;
mod teacher;

pub use grade::{Grade, NewGrade};
pub use group::Group;
pub use student::{Student, StudentUpdate};
pub use subject::{Subject, SubjectUpdate};
pub use teacher::Teacher;
