use crate::config::Config;
use crate::report::ReportSink;
use crate::test_case::{CaseOutcome, TestCase, TestResult};
use crate::test_context::TestCtx;
use crate::test_events::{TestEvent, TestSuiteBegin, TestSuiteEnd};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

/// Aggregated results of one suite run.
#[derive(Debug, Clone, Default)]
pub struct SuiteSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CaseOutcome>,
    pub exec_duration: Duration,
}

impl SuiteSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, outcome: CaseOutcome) {
        self.total += 1;
        match outcome.result {
            TestResult::Passed => self.passed += 1,
            TestResult::Failed(_) => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn print_stats(&self) {
        let line = format!(
            "Summary: {{ Total: {}, Passed: {}, Failed: {}, Time: {:?} }}",
            self.total, self.passed, self.failed, self.exec_duration
        );
        if self.all_passed() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }
}

/// Owns everything a run shares between cases: the http context with the
/// base endpoint, and the report sink.
pub struct Suite {
    ts_ctx: TestCtx,
    report: ReportSink,
    verbose: bool,
    tx: Sender<TestEvent>,
    cases_run: usize,
}

impl Suite {
    /// Fixes the base endpoint and binds the report sink to its output file.
    /// The returned receiver yields the lifecycle events of the run.
    pub fn set_up(config: &Config) -> anyhow::Result<(Self, Receiver<TestEvent>)> {
        let ts_ctx = TestCtx::new(&config.base_url)?;
        let report = ReportSink::new(&config.report_file);
        let (tx, rx) = mpsc::channel();

        tracing::info!(
            base_url = ts_ctx.base_url(),
            report = %report.output().display(),
            run_id = %report.run_id(),
            "suite set up"
        );

        Ok((
            Suite {
                ts_ctx,
                report,
                verbose: config.verbose,
                tx,
                cases_run: 0,
            },
            rx,
        ))
    }

    /// Runs every case in order. A failing case never stops the ones after it.
    pub fn run(&mut self, cases: &[TestCase]) -> SuiteSummary {
        println!("Running the test suite");
        println!("======================");

        let start = Instant::now();
        let run_id = self.report.run_id().to_string();
        let _ = self.tx.send(TestEvent::EvtTestSuiteBegin(TestSuiteBegin {
            timestamp: start,
            run_id: run_id.clone(),
            base_url: self.ts_ctx.base_url().to_string(),
            total: cases.len(),
        }));

        let mut summary = SuiteSummary::default();
        for test_case in cases {
            let outcome = test_case.run(&self.ts_ctx, &mut self.report, self.verbose, &self.tx);
            summary.record(outcome);
            println!("------------------------------");
        }
        summary.exec_duration = start.elapsed();
        self.cases_run += summary.total;

        let _ = self.tx.send(TestEvent::EvtTestSuiteEnd(TestSuiteEnd {
            timestamp: Instant::now(),
            exec_duration: summary.exec_duration,
            run_id,
            passed: summary.passed,
            failed: summary.failed,
        }));

        summary.print_stats();
        summary
    }

    pub fn report(&self) -> &ReportSink {
        &self.report
    }

    /// Writes the report file and returns its path.
    pub fn tear_down(self) -> anyhow::Result<PathBuf> {
        self.report.flush(self.cases_run)?;
        Ok(self.report.output().to_path_buf())
    }
}
