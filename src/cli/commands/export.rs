use crate::cli::parser::Commands;
use crate::context::Context;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        sheet,
        format,
        file,
        force,
    } = cmd
    {
        let sheet_path = expand_tilde(sheet);
        let out = expand_tilde(file);

        ExportLogic::export(&sheet_path, *format, &out, *force)?;

        ctx.journal(
            "export",
            format.as_str(),
            &format!("{} → {}", sheet_path.display(), out.display()),
        );
    }
    Ok(())
}
