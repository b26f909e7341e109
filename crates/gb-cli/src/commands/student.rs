use anyhow::Context;
use gb_core::entities::StudentUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::commands::shared::{Removed, lookup_error};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook student`.
pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        StudentCommands::Create { name, group_id } => {
            let student = service
                .create_student(name, *group_id)
                .await
                .with_context(|| format!("failed to create student in group {group_id}"))?;
            output(&student, flags.format)
        }
        StudentCommands::List => output(&service.list_students().await?, flags.format),
        StudentCommands::Get { id } => {
            let student = service
                .get_student(*id)
                .await
                .map_err(|e| lookup_error(e, "student", *id))?;
            output(&student, flags.format)
        }
        StudentCommands::Update { id, name, group_id } => {
            let update = StudentUpdate {
                fullname: name.clone(),
                group_id: *group_id,
            };
            let student = service
                .update_student(*id, &update)
                .await
                .map_err(|e| lookup_error(e, "student", *id))?;
            output(&student, flags.format)
        }
        StudentCommands::Remove { id } => {
            service
                .delete_student(*id)
                .await
                .map_err(|e| lookup_error(e, "student", *id))?;
            output(&Removed::new("student", *id), flags.format)
        }
    }
}
