use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(80);

/// One spinner line for the whole pipeline; finished steps are printed above it.
pub struct StepSpinner {
    bar: ProgressBar,
    started: Instant,
    step_started: Instant,
}

impl StepSpinner {
    pub fn new(total_steps: u8) -> Self {
        let bar = ProgressBar::new(u64::from(total_steps));
        bar.set_style(spinner_style());

        let now = Instant::now();
        Self {
            bar,
            started: now,
            step_started: now,
        }
    }

    pub fn step(&mut self, description: &str) {
        self.step_started = Instant::now();
        self.bar.inc(1);
        self.bar.set_message(format!("{description}..."));
        self.bar.enable_steady_tick(TICK);
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        let elapsed = self.step_started.elapsed();

        self.bar.suspend(|| {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(
                stderr,
                "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
                description,
                elapsed.as_secs_f64()
            );
            for substep in substeps {
                let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {substep}");
            }
        });
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
        print_footer(self.started.elapsed());
    }
}

// An early return from a failed step must not leave the spinner drawn under
// the error panel.
impl Drop for StepSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("  {spinner:.cyan} [{pos}/{len}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
}

fn print_footer(elapsed: Duration) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[2m╺━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╸\x1b[0m"
    );
    let _ = writeln!(
        stderr,
        "  \x1b[32m✓\x1b[0m Pipeline complete {:>32}\n",
        format!("Total: {:.2}s", elapsed.as_secs_f64())
    );
}

/// Step reporting that is a no-op when stderr is not interactive.
pub enum Progress {
    Interactive(StepSpinner),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        if interactive {
            Self::Interactive(StepSpinner::new(total_steps))
        } else {
            Self::Silent
        }
    }

    pub fn step(&mut self, description: &str) {
        if let Self::Interactive(spinner) = self {
            spinner.step(description);
        }
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        if let Self::Interactive(spinner) = self {
            spinner.complete_step(description, substeps);
        }
    }

    pub fn finish(self) {
        if let Self::Interactive(spinner) = self {
            spinner.finish();
        }
    }
}
