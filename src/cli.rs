use std::path::PathBuf;

use clap::Parser;

use crate::logger::LogLevel;

/// Open a pre-filled merge request page for the current repository.
///
/// Without flags, opens the new merge request page.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Merge the current branch into its feature branch
    #[arg(short = 'f')]
    pub feature: bool,

    /// Merge the current branch into develop
    #[arg(short = 'd')]
    pub develop: bool,

    /// Merge the current branch into a release branch
    #[arg(short = 'r')]
    pub release: bool,

    /// Merge the current branch into master
    #[arg(short = 'm')]
    pub master: bool,

    /// Merge the current branch into main
    #[arg(short = 'M')]
    pub main: bool,

    /// Open the merge request list of the repository
    #[arg(short = 'l')]
    pub list: bool,

    /// Source branch, used together with -t
    #[arg(short = 's', value_name = "BRANCH")]
    pub source: Option<String>,

    /// Target branch, used together with -s
    #[arg(short = 't', value_name = "BRANCH")]
    pub target: Option<String>,

    /// Enter this directory before doing anything else
    #[arg(short = 'p', value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Log verbosity (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}
