use gb_core::responses::ReportParams;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook report`.
pub async fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = ReportParams {
        subject_id: args.subject_id,
        teacher_id: args.teacher_id,
        group_id: args.group_id,
        student_id: args.student_id,
    };
    output(&ctx.service.report(params).await?, flags.format)
}
