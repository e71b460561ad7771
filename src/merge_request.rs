pub mod branch_resolver;
pub mod release_prompt;

use crate::{
    browser::UrlOpener,
    config::Mode,
    constants,
    custom_error::{CustomError, CustomResult},
    git::{
        remote_url::{
            build_creation_url, build_list_url, build_merge_request_url, normalize_remote_to_base,
        },
        GitQuery,
    },
    logger::Logger,
    output,
    system_command::CommandRunner,
};

use branch_resolver::{BranchResolver, Resolution};
use release_prompt::SelectionPrompt;

/// Source and target branch of the merge request to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestTarget {
    source: String,
    target: String,
}

impl MergeRequestTarget {
    pub fn new(source: String, target: String) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

pub struct MergeRequestCli<'a> {
    logger: Logger,
    git: GitQuery<'a>,
    browser: &'a dyn UrlOpener,
}

impl<'a> MergeRequestCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner, browser: &'a dyn UrlOpener) -> Self {
        Self {
            logger: Logger::new(),
            git: GitQuery::new(runner),
            browser,
        }
    }

    /// Resolves `mode` to a page of the hosting service and opens it.
    /// Returns the opened URL.
    pub fn run(&self, mode: &Mode, prompt: &mut dyn SelectionPrompt) -> CustomResult<String> {
        self.git.is_inside_work_tree()?;

        let resolution = BranchResolver::new(&self.git).resolve(mode, prompt)?;

        let remote = self.git.remote_fetch_url();
        if remote.is_empty() {
            return Err(CustomError::NoRemote);
        }
        let base = normalize_remote_to_base(&remote);
        self.logger
            .debug(format!("Remote {} maps to {}", remote, base));

        let url = match resolution {
            Resolution::List => build_list_url(&base),
            Resolution::New => build_creation_url(&base),
            Resolution::Merge(target) => {
                self.validate(&target, &remote)?;
                output::print_merge_request(target.source(), target.target());
                build_merge_request_url(&base, target.source(), target.target())
            }
        };

        self.browser.open(&url)?;

        Ok(url)
    }

    /// Checks that both branches exist on the remote, source first.
    ///
    /// Names containing "release" are not checked at all. That also lets
    /// through any other branch that happens to contain the word.
    fn validate(&self, target: &MergeRequestTarget, repo_url: &str) -> CustomResult<()> {
        for branch in [target.source(), target.target()] {
            if branch.contains(constants::RELEASE_MARKER) {
                self.logger
                    .debug(format!("Skipping remote check for '{}'", branch));
                continue;
            }

            if !self.git.remote_branch_exists(branch, repo_url) {
                self.logger
                    .error(format!("Branch '{}' not found on {}", branch, repo_url));
                return Err(CustomError::BranchNotFound(branch.to_string()));
            }
        }

        Ok(())
    }
}
