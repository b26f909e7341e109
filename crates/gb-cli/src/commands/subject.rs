use anyhow::Context;
use gb_core::entities::SubjectUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubjectCommands;
use crate::commands::shared::{Removed, lookup_error};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook subject`.
pub async fn handle(
    action: &SubjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        SubjectCommands::Create { name, teacher_id } => {
            let subject = service
                .create_subject(name, *teacher_id)
                .await
                .with_context(|| format!("failed to create subject for teacher {teacher_id}"))?;
            output(&subject, flags.format)
        }
        SubjectCommands::List => output(&service.list_subjects().await?, flags.format),
        SubjectCommands::Get { id } => {
            let subject = service
                .get_subject(*id)
                .await
                .map_err(|e| lookup_error(e, "subject", *id))?;
            output(&subject, flags.format)
        }
        SubjectCommands::Update {
            id,
            name,
            teacher_id,
        } => {
            let update = SubjectUpdate {
                name: name.clone(),
                teacher_id: *teacher_id,
            };
            let subject = service
                .update_subject(*id, &update)
                .await
                .map_err(|e| lookup_error(e, "subject", *id))?;
            output(&subject, flags.format)
        }
        SubjectCommands::Remove { id } => {
            service
                .delete_subject(*id)
                .await
                .map_err(|e| lookup_error(e, "subject", *id))?;
            output(&Removed::new("subject", *id), flags.format)
        }
    }
}
