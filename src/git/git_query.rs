use crate::{
    constants,
    custom_error::{CustomError, CustomResult},
    logger::Logger,
    system_command::CommandRunner,
};

/// Read-only queries against the local repository and its remote.
///
/// A failed `git` invocation is treated the same as "nothing found": callers
/// cannot tell a missing branch from an unreachable remote.
pub struct GitQuery<'a> {
    logger: Logger,
    runner: &'a dyn CommandRunner,
}

impl<'a> GitQuery<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            logger: Logger::new(),
            runner,
        }
    }

    pub fn is_inside_work_tree(&self) -> CustomResult<()> {
        self.logger.debug("Checking for a git work tree");

        let output = self
            .runner
            .run("git", &["rev-parse", "--is-inside-work-tree"])
            .map_err(|err| CustomError::NotAGitRepository(err.to_string()))?;

        if output.success && output.stdout.trim() == "true" {
            return Ok(());
        }

        let reason = if output.stderr.trim().is_empty() {
            output.stdout.trim()
        } else {
            output.stderr.trim()
        };

        Err(CustomError::NotAGitRepository(reason.to_string()))
    }

    /// Short name of the checked-out branch, or an empty string when HEAD is
    /// detached.
    pub fn current_branch(&self) -> String {
        self.git(&["symbolic-ref", "--short", "HEAD"])
            .unwrap_or_default()
    }

    pub fn remote_fetch_url(&self) -> String {
        self.git(&["ls-remote", "--get-url"]).unwrap_or_default()
    }

    pub fn remote_branch_exists(&self, name: &str, repo_url: &str) -> bool {
        self.logger
            .debug(format!("Checking if branch '{}' exists on {}", name, repo_url));

        let exists = self
            .git(&["ls-remote", "--heads", repo_url, name])
            .map(|heads| !heads.is_empty())
            .unwrap_or(false);

        self.logger
            .debug(format!("Branch '{}' exists: {}", name, exists));

        exists
    }

    /// Release branches on the remote, in the order the remote lists them.
    pub fn list_remote_release_branches(&self) -> CustomResult<Vec<String>> {
        self.logger.debug("Listing remote release branches");

        let branches = self
            .git(&["ls-remote", "-q"])
            .map(|listing| parse_release_branches(&listing))
            .unwrap_or_default();

        if branches.is_empty() {
            return Err(CustomError::NoReleaseBranch);
        }

        self.logger
            .debug(format!("Found release branches: {:?}", branches));

        Ok(branches)
    }

    fn git(&self, args: &[&str]) -> Option<String> {
        match self.runner.run("git", args) {
            Ok(output) if output.success => Some(output.stdout.trim_end().to_string()),
            Ok(_) => None,
            Err(err) => {
                self.logger.debug(err.to_string());
                None
            }
        }
    }
}

/// Picks `release/*` heads out of `git ls-remote` output
/// (`<sha>\t<ref>` per line) and returns their short names.
fn parse_release_branches(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .filter_map(|reference| reference.strip_prefix(constants::HEADS_REF_PREFIX))
        .filter(|branch| branch.starts_with(constants::RELEASE_BRANCH_PREFIX))
        .map(str::to_string)
        .collect()
}
