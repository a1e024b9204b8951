use crate::config::Config;
use crate::core::aggregator::{AppendSummary, MonthlySheet};
use crate::core::calculator::classifier::classify;
use crate::core::calculator::reconciler::{ParticipantDuration, reconcile};
use crate::core::normalizer::clean_identity;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ingest::daily::{ReadOptions, read_daily_log};
use crate::models::event::AttendanceEvent;
use crate::models::policy::AttendancePolicy;
use crate::models::verdict::AttendanceVerdict;
use crate::sheet::{load_sheet, save_sheet};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{colorize_duration, colorize_mark};
use crate::utils::date::{parse_sheet_date, sheet_file_name};
use crate::utils::formatting::percent_of;
use crate::utils::format_duration;
use crate::utils::table::{Column, Table};
use chrono::TimeDelta;
use std::path::PathBuf;

/// Reconciled attendance of one raw identity on one date.
#[derive(Debug, Clone)]
pub struct DayEntry {
    pub duration: ParticipantDuration,
    pub verdict: AttendanceVerdict,
}

#[derive(Debug, Clone)]
pub struct DayReport {
    pub date: String,
    pub session: TimeDelta,
    pub entries: Vec<DayEntry>,
}

impl DayReport {
    pub fn verdicts(&self) -> Vec<AttendanceVerdict> {
        self.entries.iter().map(|e| e.verdict.clone()).collect()
    }
}

/// Run reconciliation and classification for one date's events.
pub fn evaluate_day(
    events: &[AttendanceEvent],
    policy: &AttendancePolicy,
    date: &str,
) -> AppResult<DayReport> {
    let session = policy.window.session_duration();

    let entries = reconcile(events, &policy.window)?
        .into_iter()
        .map(|duration| {
            let verdict = AttendanceVerdict {
                participant: clean_identity(duration.participant.as_deref()),
                date: date.to_string(),
                total: duration.total,
                verdict: classify(duration.total, session, policy.min_fraction),
            };
            DayEntry { duration, verdict }
        })
        .collect();

    Ok(DayReport {
        date: date.to_string(),
        session,
        entries,
    })
}

/// What to process and where to write it.
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    pub input: PathBuf,
    pub date: String,
    /// existing monthly sheet to extend
    pub sheet: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub force: bool,
    pub details: bool,
}

impl ProcessRequest {
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(sheet_file_name(&self.date))
    }
}

#[derive(Debug)]
pub struct ProcessOutcome {
    pub output: PathBuf,
    pub report: DayReport,
    pub summary: AppendSummary,
}

pub struct ProcessLogic;

impl ProcessLogic {
    /// Daily log → verdicts → monthly sheet on disk.
    ///
    /// Nothing is written unless every step before the save succeeded.
    pub fn run(req: &ProcessRequest, cfg: &Config) -> AppResult<ProcessOutcome> {
        let policy = cfg.policy()?;
        let opts = ReadOptions::from_config(cfg)?;

        header(format!("Attendance for {}", req.date));
        info(format!("Reading daily log: {}", req.input.display()));

        let log = read_daily_log(&req.input, &opts)?;
        info(format!("Columns: {}", log.columns.join(", ")));

        for row in &log.skipped_rows {
            warning(format!("Skipped line {}: {}", row.line, row.reason));
        }
        if log.ignored_actions > 0 {
            warning(format!(
                "{} row(s) with an unknown action ignored",
                log.ignored_actions
            ));
        }

        if let Some(day) = parse_sheet_date(&req.date) {
            let other_days = log
                .events
                .iter()
                .filter(|e| e.timestamp.date() != day)
                .count();
            if other_days > 0 {
                warning(format!(
                    "{other_days} event(s) are not dated {}: check --date",
                    req.date
                ));
            }
        }

        let report = evaluate_day(&log.events, &policy, &req.date)?;

        for e in &report.entries {
            if e.duration.ignored_leaves > 0 {
                warning(format!(
                    "{}: {} unmatched 'Left' event(s) ignored",
                    e.duration.participant.as_deref().unwrap_or("<unnamed>"),
                    e.duration.ignored_leaves
                ));
            }
        }

        let mut sheet = match &req.sheet {
            Some(path) => {
                info(format!("Extending monthly sheet: {}", path.display()));
                load_sheet(path)?
            }
            None => MonthlySheet::new(),
        };

        let summary = sheet.append_date_column(&req.date, &report.verdicts());

        if summary.skipped_unnamed > 0 {
            warning(format!(
                "{} participant(s) without a name left out of the sheet",
                summary.skipped_unnamed
            ));
        }
        if summary.replaced_column {
            warning(format!("Column {} already present: replaced", req.date));
        }

        if req.details {
            print_details(&report, &policy);
        }

        let output = req.output_path();
        ensure_writable(&output, req.force)?;
        save_sheet(&sheet, &output)?;

        let present = report
            .entries
            .iter()
            .filter(|e| e.verdict.verdict.is_present())
            .count();

        success(format!(
            "{present}/{} present (window {}, min {:.0}%) → {}",
            report.entries.len(),
            policy.window.label(),
            policy.min_fraction * 100.0,
            output.display()
        ));

        Ok(ProcessOutcome {
            output,
            report,
            summary,
        })
    }
}

fn print_details(report: &DayReport, policy: &AttendancePolicy) {
    let mut table = Table::new(vec![
        Column::left("Name"),
        Column::right("Pairs"),
        Column::right("Attended"),
        Column::right("Share"),
        Column::left("Present"),
    ]);

    for e in &report.entries {
        let total = e.duration.total;
        table.add_row(vec![
            e.verdict
                .participant
                .clone()
                .unwrap_or_else(|| "<unnamed>".to_string()),
            e.duration.intervals.len().to_string(),
            colorize_duration(&format_duration(total), total < TimeDelta::zero()),
            percent_of(total, report.session),
            colorize_mark(Some(e.verdict.verdict)),
        ]);
    }

    println!();
    println!(
        "Session {} ({}), threshold {:.0}%",
        policy.window.label(),
        format_duration(report.session),
        policy.min_fraction * 100.0
    );
    println!("{}", table.render());
}
