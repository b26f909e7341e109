use anyhow::Context;
use gb_core::entities::NewGrade;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GradeCommands;
use crate::commands::shared::{Removed, lookup_error};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook grade`.
pub async fn handle(
    action: &GradeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        GradeCommands::Create {
            student_id,
            subject_id,
            grade,
            date,
        } => {
            let new = NewGrade {
                grade: *grade,
                date_received: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
                student_id: *student_id,
                subject_id: *subject_id,
            };
            let created = service.create_grade(&new).await.with_context(|| {
                format!("failed to record grade for student {student_id} in subject {subject_id}")
            })?;
            output(&created, flags.format)
        }
        GradeCommands::List { limit } => {
            let limit = limit.unwrap_or(ctx.config.general.default_limit);
            output(&service.list_grades(limit).await?, flags.format)
        }
        GradeCommands::Remove { id } => {
            service
                .delete_grade(*id)
                .await
                .map_err(|e| lookup_error(e, "grade", *id))?;
            output(&Removed::new("grade", *id), flags.format)
        }
    }
}
