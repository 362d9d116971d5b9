//! UI/Progress presentation layer
//!
//! Command handlers receive a [`ProgressReporter`] instead of writing to the
//! terminal directly:
//! - [`SpinnerReporter`]: spinner on stderr while fetching, styled result on stdout
//! - `SilentReporter` (tests only): records messages without drawing anything

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for a single fetch
pub trait ProgressReporter {
    /// A long-running step begins
    fn start(&mut self, message: &str);

    /// The step succeeded; `message` is the user-facing result
    fn finish(&mut self, message: &str);

    /// The step failed; the caller reports the error itself
    fn abandon(&mut self);
}

/// Interactive reporter with an indicatif spinner
#[derive(Default)]
pub struct SpinnerReporter {
    spinner: Option<ProgressBar>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for SpinnerReporter {
    fn start(&mut self, message: &str) {
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn finish(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        println!("{} {}", style("✓").green().bold(), message);
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

/// Reporter that draws nothing and keeps the messages it was given
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SilentReporter {
    pub started: Vec<String>,
    pub finished: Vec<String>,
    pub abandoned: usize,
}

#[cfg(test)]
impl ProgressReporter for SilentReporter {
    fn start(&mut self, message: &str) {
        self.started.push(message.to_string());
    }

    fn finish(&mut self, message: &str) {
        self.finished.push(message.to_string());
    }

    fn abandon(&mut self) {
        self.abandoned += 1;
    }
}
