use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use crate::db::{Provider, SqliteProvider};

pub struct CliContext {
    provider: SqliteProvider,
}

impl CliContext {
    pub fn new(provider: SqliteProvider) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn Provider {
        &self.provider
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::ContactsError) {
        println!("Error: {}", e);
    }
}

/// Run one screen's fetch as an isolated one-shot task.
///
/// Fire-and-forget: the task's value replaces the screen's records wholesale,
/// and a panicked task is simply discarded (`None`), matching the no-retry,
/// no-error-surface contract of the screens. The store is opened read-only,
/// so an abandoned fetch leaves nothing to observe.
pub fn run_fetch<T>(task: impl FnOnce() -> T) -> Option<T> {
    panic::catch_unwind(AssertUnwindSafe(task)).ok()
}

#[cfg(test)]
mod tests {
    use super::run_fetch;

    #[test]
    fn run_fetch_returns_task_value() {
        assert_eq!(run_fetch(|| 7), Some(7));
    }

    #[test]
    fn run_fetch_discards_panicked_task() {
        let result: Option<i32> = run_fetch(|| panic!("boom"));
        assert_eq!(result, None);
    }
}
