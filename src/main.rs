mod browser;
mod cli;
mod config;
mod constants;
mod custom_error;
mod git;
mod location;
mod logger;
mod merge_request;
mod output;
mod system_command;
#[cfg(test)]
mod test_support;

use browser::SystemBrowser;
use clap::Parser;
use cli::Cli;
use config::Config;
use custom_error::CustomResult;
use location::Location;
use logger::Logger;
use merge_request::{release_prompt::LinePrompt, MergeRequestCli};
use system_command::SystemCommand;

fn main() {
    let cli = Cli::parse();
    Logger::init(cli.log_level);
    let config = Config::from_cli(cli);

    // Failures are reported, not turned into an exit status.
    if let Err(err) = run(&config) {
        output::print_error(&err.to_string());
    }
}

fn run(config: &Config) -> CustomResult<()> {
    if let Some(path) = &config.working_dir {
        Location::new().enter(path)?;
    }

    let runner = SystemCommand::new();
    let browser = SystemBrowser::new();
    let mut prompt = LinePrompt::stdin();

    let url = MergeRequestCli::new(&runner, &browser).run(&config.mode, &mut prompt)?;
    Logger::new().debug(format!("Opened {}", url));

    Ok(())
}
