use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QueryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook query`.
///
/// Scalar answers are wrapped in an object naming their inputs so that an
/// absent average prints as `null` next to what was asked.
pub async fn handle(
    action: &QueryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    let format = flags.format;
    match *action {
        QueryCommands::TopPerformers => output(&service.top_performers().await?, format),
        QueryCommands::BestInSubject { subject_id } => output(
            &json!({
                "subject_id": subject_id,
                "best": service.best_in_subject(subject_id).await?,
            }),
            format,
        ),
        QueryCommands::GroupAverages { subject_id } => output(
            &service.group_averages_for_subject(subject_id).await?,
            format,
        ),
        QueryCommands::GlobalAverage => output(
            &json!({ "average": service.global_average().await? }),
            format,
        ),
        QueryCommands::TeacherSubjects { teacher_id } => {
            output(&service.teacher_subjects(teacher_id).await?, format)
        }
        QueryCommands::GroupRoster { group_id } => {
            output(&service.group_roster(group_id).await?, format)
        }
        QueryCommands::GroupGrades {
            group_id,
            subject_id,
        } => output(
            &service.group_subject_grades(group_id, subject_id).await?,
            format,
        ),
        QueryCommands::TeacherAverage { teacher_id } => output(
            &json!({
                "teacher_id": teacher_id,
                "average": service.teacher_average(teacher_id).await?,
            }),
            format,
        ),
        QueryCommands::StudentCourses { student_id } => {
            output(&service.student_courses(student_id).await?, format)
        }
        QueryCommands::StudentCoursesByTeacher {
            student_id,
            teacher_id,
        } => output(
            &service
                .student_courses_by_teacher(student_id, teacher_id)
                .await?,
            format,
        ),
        QueryCommands::TeacherStudentAverage {
            teacher_id,
            student_id,
        } => output(
            &json!({
                "teacher_id": teacher_id,
                "student_id": student_id,
                "average": service.teacher_student_average(teacher_id, student_id).await?,
            }),
            format,
        ),
        QueryCommands::LastSession {
            group_id,
            subject_id,
        } => output(
            &service.last_session_grades(group_id, subject_id).await?,
            format,
        ),
    }
}
