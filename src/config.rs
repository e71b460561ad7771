use std::path::PathBuf;

use crate::{cli::Cli, logger::Logger};

/// What the run should open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Feature,
    Develop,
    Release,
    Master,
    Main,
    Explicit { source: String, target: String },
    List,
    Default,
}

/// Settings for a single run, fixed once the command line is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub working_dir: Option<PathBuf>,
}

impl Config {
    /// When several mode flags are given, the first of
    /// `-f -d -r -m -M (-s + -t) -l` wins.
    pub fn from_cli(cli: Cli) -> Self {
        let source = cli.source.filter(|branch| !branch.is_empty());
        let target = cli.target.filter(|branch| !branch.is_empty());

        let mode = if cli.feature {
            Mode::Feature
        } else if cli.develop {
            Mode::Develop
        } else if cli.release {
            Mode::Release
        } else if cli.master {
            Mode::Master
        } else if cli.main {
            Mode::Main
        } else if let (Some(source), Some(target)) = (&source, &target) {
            Mode::Explicit {
                source: source.clone(),
                target: target.clone(),
            }
        } else {
            if source.is_some() != target.is_some() {
                Logger::new().warn("-s and -t must be used together; ignoring the one given");
            }
            if cli.list {
                Mode::List
            } else {
                Mode::Default
            }
        };

        Self {
            mode,
            working_dir: cli.path,
        }
    }
}
