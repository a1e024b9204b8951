use crate::errors::AppResult;
use crate::journal::read_journal;
use crate::ui::messages::info;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;
use std::path::Path;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "process" => Colour::Green,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_journal(path)?;

        if entries.is_empty() {
            info(format!("Journal is empty ({})", path.display()));
            return Ok(());
        }

        let rows: Vec<(usize, String, String, String)> = entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);

                let color = color_for_operation(&e.operation);
                let op_target = if e.target.is_empty() {
                    color.paint(e.operation).to_string()
                } else {
                    format!("{} ({})", color.paint(e.operation), e.target)
                };

                (i + 1, date, op_target, e.message)
            })
            .collect();

        // larghezza massima con limite a 60
        let op_w = rows
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(60);
        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(_, d, _, _)| d.len()).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rows {
            let visible = strip_ansi(&op_target).chars().count();
            let padding = " ".repeat(op_w.saturating_sub(visible));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
