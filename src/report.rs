//
// HTML report sink. Entries accumulate in memory while the suite runs and
// are written to a single file at teardown, overwriting any previous report.
//
use anyhow::Context as _;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use uuid::Uuid;

const REPORT_TEMPLATE: &str = "report.html";

/// `Fail` is only produced by callers of [`ReportSink::log`]; the suite
/// records passes alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub description: String,
    pub outcome: Outcome,
    pub message: String,
}

#[derive(Debug)]
pub struct ReportSink {
    output: PathBuf,
    run_id: Uuid,
    entries: Vec<ReportEntry>,
}

impl ReportSink {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        ReportSink {
            output: output.into(),
            run_id: Uuid::new_v4(),
            entries: Vec::new(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn log(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Records a passed test.
    pub fn pass(&mut self, name: &str, description: &str, message: &str) {
        self.log(ReportEntry {
            name: name.to_string(),
            description: description.to_string(),
            outcome: Outcome::Pass,
            message: message.to_string(),
        });
    }

    /// Writes the report to the output file. `total_cases` is the number of
    /// cases that were run, including the ones without an entry.
    pub fn flush(&self, total_cases: usize) -> anyhow::Result<()> {
        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create report directory {}", parent.display())
                })?;
            }
        }

        fs::write(&self.output, self.render(total_cases)?)
            .with_context(|| format!("failed to write report {}", self.output.display()))?;

        tracing::info!(path = %self.output.display(), entries = self.entries.len(), "report written");
        Ok(())
    }

    pub fn render(&self, total_cases: usize) -> anyhow::Result<String> {
        let passed = self
            .entries
            .iter()
            .filter(|e| e.outcome == Outcome::Pass)
            .count();

        // Templates named *.html are auto-escaped.
        let mut tera = Tera::default();
        tera.add_raw_template(REPORT_TEMPLATE, include_str!("../templates/report.html"))
            .context("failed to load report template")?;

        let mut context = Context::new();
        context.insert("run_id", &self.run_id.to_string());
        context.insert("passed", &passed);
        context.insert("total", &total_cases);
        context.insert("entries", &self.entries);

        tera.render(REPORT_TEMPLATE, &context)
            .context("failed to render report")
    }
}
