use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GroupCommands;
use crate::commands::shared::{Removed, lookup_error};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook group`.
pub async fn handle(
    action: &GroupCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        GroupCommands::Create { name } => {
            let group = service
                .create_group(name)
                .await
                .context("failed to create group")?;
            output(&group, flags.format)
        }
        GroupCommands::List => output(&service.list_groups().await?, flags.format),
        GroupCommands::Get { id } => {
            let group = service
                .get_group(*id)
                .await
                .map_err(|e| lookup_error(e, "group", *id))?;
            output(&group, flags.format)
        }
        GroupCommands::Update { id, name } => {
            let group = service
                .update_group(*id, name)
                .await
                .map_err(|e| lookup_error(e, "group", *id))?;
            output(&group, flags.format)
        }
        GroupCommands::Remove { id } => {
            service
                .delete_group(*id)
                .await
                .map_err(|e| lookup_error(e, "group", *id))?;
            output(&Removed::new("group", *id), flags.format)
        }
    }
}
