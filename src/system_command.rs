use std::process::Command;

use crate::{
    custom_error::{CustomError, CustomResult},
    logger::Logger,
};

/// Captured result of one external process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Capability to run an external program and capture its output.
pub trait CommandRunner {
    /// Runs `program` with `args`. A non-zero exit is reported through
    /// [`CommandOutput::success`]; `Err` means the process could not be spawned.
    fn run(&self, program: &str, args: &[&str]) -> CustomResult<CommandOutput>;
}

pub struct SystemCommand {
    logger: Logger,
}

impl SystemCommand {
    pub fn new() -> Self {
        Self {
            logger: Logger::new(),
        }
    }
}

impl CommandRunner for SystemCommand {
    fn run(&self, program: &str, args: &[&str]) -> CustomResult<CommandOutput> {
        let command_line = format!("{} {}", program, args.join(" "));
        self.logger
            .debug(format!("Executing command: {}", command_line));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|err| CustomError::CommandExecution(format!("{}: {}", command_line, err)))?;

        let result = CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success {
            self.logger.debug(format!(
                "Command '{}' exited with {}: {}",
                command_line,
                output.status,
                result.stderr.trim()
            ));
        }

        Ok(result)
    }
}
