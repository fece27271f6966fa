pub mod shell;
pub mod task;

use std::io::{self, BufRead, Write};
use todo_domain::Confirm;

/// Asks on stderr and reads one answer line from `input`.
///
/// Only `y` or `yes` (any case) confirms. End of input declines.
pub struct LineConfirm<'a, R> {
    input: &'a mut R,
}

impl<'a, R: BufRead> LineConfirm<'a, R> {
    pub fn new(input: &'a mut R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Confirm for LineConfirm<'_, R> {
    fn confirm(&mut self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_yes(&answer),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
