use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a request is in flight.
pub struct ProgressDisplay;

impl ProgressDisplay {
    /// Starts the spinner with a message for the given URL.
    /// Returns the same progress bar for chaining.
    pub fn show_progress<'a>(url: &str, pb: &'a ProgressBar) -> &'a ProgressBar {
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{elapsed}]") {
            pb.set_style(style);
        }
        pb.set_message(format!("Fetching {}...", url));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn stop_progress(pb: &ProgressBar) {
        pb.disable_steady_tick();
        pb.finish_and_clear();
    }
}
