// crates/cli/src/progress.rs
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use linesindir_engine::progress::ProgressReporter;
use linesindir_engine::stats::ProgressState;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner} {msg}";
const BAR_TEMPLATE: &str = "Counting files... [{bar:30}] {msg}";

/// Transient progress drawn on stdout.
///
/// indicatif stays silent when stdout is not a terminal, so this reporter is
/// safe to use with redirected output.
#[derive(Default)]
pub struct TerminalProgress {
    spinner: Option<ProgressBar>,
    bar: Option<ProgressBar>,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn bar(&mut self, total: usize) -> &ProgressBar {
        self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stdout());
            bar.set_style(
                ProgressStyle::with_template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            bar
        })
    }
}

impl ProgressReporter for TerminalProgress {
    fn collecting(&mut self) {
        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        spinner.set_style(
            ProgressStyle::with_template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Collecting files...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn collected(&mut self, _found: usize) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn update(&mut self, state: &ProgressState) {
        if state.total == 0 {
            return;
        }
        let message = format!("{:>3}% {}", state.percent(), state.label);
        let bar = self.bar(state.total);
        bar.set_length(state.total as u64);
        bar.set_position(state.step as u64);
        bar.set_message(message);
    }

    fn complete(&mut self, _success: bool) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
