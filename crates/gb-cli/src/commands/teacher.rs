use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TeacherCommands;
use crate::commands::shared::{Removed, lookup_error};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook teacher`.
pub async fn handle(
    action: &TeacherCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        TeacherCommands::Create { name } => {
            let teacher = service
                .create_teacher(name)
                .await
                .context("failed to create teacher")?;
            output(&teacher, flags.format)
        }
        TeacherCommands::List => output(&service.list_teachers().await?, flags.format),
        TeacherCommands::Get { id } => {
            let teacher = service
                .get_teacher(*id)
                .await
                .map_err(|e| lookup_error(e, "teacher", *id))?;
            output(&teacher, flags.format)
        }
        TeacherCommands::Update { id, name } => {
            let teacher = service
                .update_teacher(*id, name)
                .await
                .map_err(|e| lookup_error(e, "teacher", *id))?;
            output(&teacher, flags.format)
        }
        TeacherCommands::Remove { id } => {
            service
                .delete_teacher(*id)
                .await
                .map_err(|e| lookup_error(e, "teacher", *id))?;
            output(&Removed::new("teacher", *id), flags.format)
        }
    }
}
