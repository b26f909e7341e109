use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook seed`.
pub async fn handle(args: &SeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rng = args
        .rng_seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let today = chrono::Local::now().date_naive();

    let summary = ctx
        .service
        .seed(&ctx.config.seed, today, &mut rng)
        .await
        .context("seeding failed; nothing was written")?;
    output(&summary, flags.format)
}
