use crate::cli::parser::Commands;
use crate::context::Context;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*edit_config {
            info("Nothing to do: use --print or --edit");
        }

        if *print_config {
            ConfigLogic::print(&ctx.cfg, &ctx.config_path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&ctx.cfg, &ctx.config_path, editor)?;
        }
    }
    Ok(())
}
