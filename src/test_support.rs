//! Deterministic stand-ins for `git` and the browser.

use std::{cell::RefCell, collections::HashMap};

use crate::{
    browser::UrlOpener,
    custom_error::{CustomError, CustomResult},
    system_command::{CommandOutput, CommandRunner},
};

/// Answers commands from a table keyed by the full command line.
/// Unknown commands fail to spawn.
#[derive(Default)]
pub struct FakeRunner {
    responses: HashMap<String, CommandOutput>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses.insert(
            command_line.to_string(),
            CommandOutput {
                success: true,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    pub fn fail(mut self, command_line: &str, stderr: &str) -> Self {
        self.responses.insert(
            command_line.to_string(),
            CommandOutput {
                success: false,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> CustomResult<CommandOutput> {
        let command_line = format!("{} {}", program, args.join(" "));
        self.calls.borrow_mut().push(command_line.clone());

        self.responses
            .get(&command_line)
            .cloned()
            .ok_or_else(|| CustomError::CommandExecution(format!("unexpected: {}", command_line)))
    }
}

#[derive(Default)]
pub struct FakeBrowser {
    opened: RefCell<Vec<String>>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for FakeBrowser {
    fn open(&self, url: &str) -> CustomResult<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
