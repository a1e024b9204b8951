use crate::cli::parser::Commands;
use crate::context::Context;
use crate::errors::AppResult;
use crate::sheet::load_sheet;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_mark;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

/// Handle the `show` command: render a monthly sheet as a table.
pub fn handle(cmd: &Commands, _ctx: &Context) -> AppResult<()> {
    if let Commands::Show { sheet } = cmd {
        let path = expand_tilde(sheet);
        let data = load_sheet(&path)?;

        header(format!("Monthly sheet: {}", path.display()));

        if data.rows().is_empty() {
            info("No participants recorded.");
            return Ok(());
        }

        let mut columns = vec![Column::left("Name")];
        columns.extend(data.dates().iter().map(|d| Column::left(d)));
        columns.push(Column::right("Present"));

        let mut table = Table::new(columns);
        for row in data.rows() {
            let mut cells = vec![row.name.clone()];
            cells.extend(
                data.dates()
                    .iter()
                    .map(|d| colorize_mark(row.marks.get(d).copied())),
            );
            cells.push(format!(
                "{}/{}",
                data.present_count(&row.name),
                data.dates().len()
            ));
            table.add_row(cells);
        }

        println!("{}", table.render());
    }
    Ok(())
}
