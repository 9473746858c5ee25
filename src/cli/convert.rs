use std::path::PathBuf;

use colored::Colorize;
use tracing::debug;

use crate::converter::{check_same_path, convert_path, ConvertOptions};
use crate::error::Result;
use crate::remap::CategoryMap;
use crate::settings::{load_settings, shellexpand_path};
use crate::transform::Plan;

pub struct ConvertArgs {
    pub input: String,
    pub output: String,
    pub profile: Option<String>,
    pub actions: Option<String>,
    pub categories: Option<String>,
    pub strip_headers: bool,
    pub force: bool,
    pub atomic: bool,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let input = PathBuf::from(&args.input);
    let output = PathBuf::from(&args.output);

    check_same_path(&input, &output, args.force)?;

    let plan = Plan::resolve(
        args.profile.as_deref(),
        args.actions.as_deref(),
        args.strip_headers,
    )?;
    debug!(actions = ?plan.actions(), "resolved actions");

    let settings = load_settings()?;
    let categories_path = args
        .categories
        .as_deref()
        .map(|p| PathBuf::from(shellexpand_path(p)))
        .or_else(|| settings.categories_path());
    let categories = categories_path
        .as_deref()
        .map(CategoryMap::load)
        .transpose()?;
    if let Some(map) = &categories {
        debug!(mappings = map.len(), "using category remap");
    }

    let options = ConvertOptions {
        plan,
        categories,
        atomic: args.atomic || settings.atomic,
    };
    let results = convert_path(&input, &output, &options)?;

    let rows: usize = results.iter().map(|r| r.rows).sum();
    let remapped: usize = results.iter().map(|r| r.remapped).sum();
    for r in &results {
        println!("{} -> {} ({} rows)", r.input.display(), r.output.display(), r.rows);
    }
    let summary = format!("{} file(s), {rows} rows converted", results.len());
    if options.categories.is_some() {
        println!("{}, {remapped} categories remapped", summary.green());
    } else {
        println!("{}", summary.green());
    }
    Ok(())
}
