use crate::cli::parser::Commands;
use crate::context::Context;
use crate::core::process::{ProcessLogic, ProcessRequest};
use crate::errors::AppResult;
use crate::utils::date::validate_sheet_date;
use crate::utils::path::expand_tilde;

/// Handle the `process` command: CLI flags override the configuration.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Process {
        file,
        date,
        sheet,
        out_dir,
        window_start,
        window_end,
        min_fraction,
        skip_malformed,
        details,
        force,
    } = cmd
    {
        let mut cfg = ctx.cfg.clone();

        if let Some(f) = file {
            cfg.input_file = f.clone();
        }
        if let Some(d) = out_dir {
            cfg.output_dir = d.clone();
        }
        if let Some(s) = window_start {
            cfg.window_start = s.clone();
        }
        if let Some(e) = window_end {
            cfg.window_end = e.clone();
        }
        if let Some(m) = min_fraction {
            cfg.min_attendance_fraction = *m;
        }
        if *skip_malformed {
            cfg.skip_malformed_rows = true;
        }

        let date = match date {
            Some(d) => validate_sheet_date(d)?,
            None => cfg.processing_date()?,
        };

        let req = ProcessRequest {
            input: cfg.input_path(),
            date,
            sheet: sheet.as_deref().map(expand_tilde),
            out_dir: cfg.output_dir_path(),
            force: *force,
            details: *details,
        };

        let outcome = ProcessLogic::run(&req, &cfg)?;

        let present = outcome
            .report
            .entries
            .iter()
            .filter(|e| e.verdict.verdict.is_present())
            .count();

        ctx.journal(
            "process",
            &req.date,
            &format!(
                "{} → {} ({present}/{} present, {} new row(s))",
                req.input.display(),
                outcome.output.display(),
                outcome.report.entries.len(),
                outcome.summary.added_rows
            ),
        );
    }
    Ok(())
}
