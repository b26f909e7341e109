pub mod grade;
pub mod group;
pub mod query;
pub mod student;
pub mod subject;
pub mod teacher;

pub use grade::GradeCommands;
pub use group::GroupCommands;
pub use query::QueryCommands;
pub use student::StudentCommands;
pub use subject::SubjectCommands;
pub use teacher::TeacherCommands;
