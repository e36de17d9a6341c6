mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{RunSummary, print_run_summary};

/// Whether decorated output (banner, spinner, summary table) goes to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    /// Decorated output needs a terminal on stderr and no `--quiet`.
    pub fn for_terminal(quiet: bool) -> Self {
        Self::resolve(crate::io::stderr_is_tty(), quiet)
    }

    fn resolve(tty: bool, quiet: bool) -> Self {
        Self {
            interactive: tty && !quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_or_redirected_stderr_disables_decoration() {
        assert!(Context::resolve(true, false).interactive);
        assert!(!Context::resolve(true, true).interactive);
        assert!(!Context::resolve(false, false).interactive);
    }
}
