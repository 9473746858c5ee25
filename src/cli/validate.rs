use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::validator::validate_path;

pub fn run(input: &str) -> Result<()> {
    let results = validate_path(Path::new(input))?;

    let mut table = Table::new();
    table.set_header(vec!["File", "Rows"]);
    for (path, rows) in &results {
        table.add_row(vec![Cell::new(path.display()), Cell::new(rows)]);
    }
    println!("{table}");
    println!("{}", format!("{} file(s) valid", results.len()).green());
    Ok(())
}
