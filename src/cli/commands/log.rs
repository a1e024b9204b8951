use crate::cli::parser::Commands;
use crate::context::Context;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        LogLogic::print_log(&ctx.cfg.journal_path())?;
    }

    Ok(())
}
