use std::io::{self, BufRead, Stdout, Write};

use crate::custom_error::{CustomError, CustomResult};

/// Asks the user to pick one of several candidate branches.
pub trait SelectionPrompt {
    /// Returns an index into `candidates`.
    fn select(&mut self, candidates: &[String]) -> CustomResult<usize>;
}

/// Prints the candidates with their 0-based index and reads one line.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> SelectionPrompt for LinePrompt<R, W> {
    fn select(&mut self, candidates: &[String]) -> CustomResult<usize> {
        self.show(candidates).map_err(|err| {
            CustomError::CommandExecution(format!("Failed to write prompt: {}", err))
        })?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(|err| CustomError::Input(err.to_string()))?;

        parse_selection(&line, candidates.len())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    fn show(&mut self, candidates: &[String]) -> io::Result<()> {
        writeln!(self.output, "Select the branch to merge into:")?;
        for (index, branch) in candidates.iter().enumerate() {
            writeln!(self.output, "{} {}", index, branch)?;
        }
        self.output.flush()
    }
}

pub fn parse_selection(line: &str, candidate_count: usize) -> CustomResult<usize> {
    let entry = line.trim();
    match entry.parse::<usize>() {
        Ok(index) if index < candidate_count => Ok(index),
        _ => Err(CustomError::Input(entry.to_string())),
    }
}
