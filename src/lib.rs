pub mod config;
pub mod report;
pub mod suite;
pub mod test_case;
pub mod test_context;
pub mod test_events;

use crate::config::Config;
use crate::suite::{Suite, SuiteSummary};

/// Runs the selected catalog cases and writes the report.
///
/// The report is written even when cases fail; only setup and report
/// errors are returned as `Err`.
pub fn exec(config: &Config) -> anyhow::Result<SuiteSummary> {
    let cases = test_case::catalog::select(&config.cases)?;

    // Events are only consumed by embedders; the cli drops them.
    let (mut suite, _listener) = Suite::set_up(config)?;
    let summary = suite.run(&cases);
    let report = suite.tear_down()?;

    println!("Report written to {}", report.display());
    Ok(summary)
}
