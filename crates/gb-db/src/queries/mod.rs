//! The analytical query catalog.
//!
//! Twelve read-only operations, each an `impl GradeService` method that
//! builds an explicit [`Select`](crate::sql::Select), runs it on a fresh
//! connection and maps rows into `gb_core::responses` types.
//!
//! Shared policies:
//! - averages are computed by the store and rounded by
//!   [`round_average`](gb_core::rounding::round_average);
//! - an empty row set gives `None` for scalars and an empty `Vec` for lists;
//! - grouping is on entity ids, never on display names;
//! - top-N orders by the unrounded mean descending, then student id ascending;
//! - every join is an inner join.

pub mod averages;
pub mod grades;
pub mod listings;
pub mod report;

use gb_core::responses::{GroupAverage, StudentAverage, StudentGrade};
use gb_core::rounding::{round_average, round_optional};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_f64, parse_date};

/// Size of the `top-performers` list.
pub const TOP_PERFORMERS_LIMIT: u32 = 5;

/// Columns: student id, fullname, unrounded average.
fn row_to_student_average(row: &libsql::Row) -> Result<StudentAverage, DatabaseError> {
    Ok(StudentAverage {
        student_id: row.get(0)?,
        fullname: row.get(1)?,
        average: round_average(row.get::<f64>(2)?),
    })
}

/// Columns: group id, name, unrounded average.
fn row_to_group_average(row: &libsql::Row) -> Result<GroupAverage, DatabaseError> {
    Ok(GroupAverage {
        group_id: row.get(0)?,
        name: row.get(1)?,
        average: round_average(row.get::<f64>(2)?),
    })
}

/// Columns: student id, fullname, grade, date received.
fn row_to_student_grade(row: &libsql::Row) -> Result<StudentGrade, DatabaseError> {
    Ok(StudentGrade {
        student_id: row.get(0)?,
        fullname: row.get(1)?,
        grade: row.get(2)?,
        date_received: parse_date(&row.get::<String>(3)?)?,
    })
}

/// Single TEXT column.
fn row_to_name(row: &libsql::Row) -> Result<String, DatabaseError> {
    Ok(row.get(0)?)
}

/// Single aggregate column; NULL over an empty set.
fn row_to_average(row: &libsql::Row) -> Result<Option<f64>, DatabaseError> {
    Ok(round_optional(get_opt_f64(row, 0)?))
}
