use flow_config::FlowConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &FlowConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => commands::run::handle(&args, config, flags).await,
        Commands::Forecast(args) => commands::forecast::handle(&args, config, flags).await,
        Commands::Calendar(args) => commands::calendar::handle(&args, config, flags),
        Commands::Models => commands::models::handle(config, flags).await,
    }
}
