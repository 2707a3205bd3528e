use anyhow::Context;
use magicsort_core::{key::parse_array, MagicSortConfig, SeedSearch};

use crate::cli::args::{OutputFormat, SortArgs};
use crate::cli::output::SortReport;
use crate::exit_codes::SUCCESS;

pub fn run(args: SortArgs, config: &MagicSortConfig) -> anyhow::Result<i32> {
    let values = match &args.input {
        Some(raw) => parse_array(raw).context("failed to parse --input")?,
        None => args.values,
    };
    sort_and_report(values, config, args.format)
}

/// Sort and print. Search limits are reported on stderr with their exit code.
pub(crate) fn sort_and_report(
    values: Vec<i64>,
    config: &MagicSortConfig,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    let store = config.open_store();
    let search = SeedSearch::new(store.as_ref(), config.search_config());

    let mut sorted = values.clone();
    match search.sort(&mut sorted) {
        Ok(outcome) => {
            let report = SortReport::new(&values, &sorted, &outcome);
            println!("{}", report.render(format)?);
            Ok(SUCCESS)
        }
        Err(e) if e.is_limit() => {
            eprintln!("{e}");
            Ok(e.exit_code())
        }
        Err(e) => Err(e.into()),
    }
}
