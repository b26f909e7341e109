pub mod dispatch;
pub mod grade;
pub mod group;
pub mod query;
pub mod report;
pub mod seed;
pub mod shared;
pub mod student;
pub mod subject;
pub mod teacher;
