use crate::{
    config::Mode,
    constants,
    custom_error::{CustomError, CustomResult},
    git::GitQuery,
    logger::Logger,
};

use super::{release_prompt::SelectionPrompt, MergeRequestTarget};

/// Page a mode resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Merge request list, no branches involved.
    List,
    /// Blank "new merge request" form.
    New,
    Merge(MergeRequestTarget),
}

pub struct BranchResolver<'a, 'g> {
    logger: Logger,
    git: &'a GitQuery<'g>,
}

impl<'a, 'g> BranchResolver<'a, 'g> {
    pub fn new(git: &'a GitQuery<'g>) -> Self {
        Self {
            logger: Logger::new(),
            git,
        }
    }

    pub fn resolve(
        &self,
        mode: &Mode,
        prompt: &mut dyn SelectionPrompt,
    ) -> CustomResult<Resolution> {
        self.logger.debug(format!("Resolving branches for {:?}", mode));

        let target = match mode {
            Mode::Feature => {
                let current = self.current_branch()?;
                let feature = feature_branch_for(&current);
                MergeRequestTarget::new(current, feature)
            }
            Mode::Develop => self.from_current(constants::DEVELOP_BRANCH)?,
            Mode::Master => self.from_current(constants::MASTER_BRANCH)?,
            Mode::Main => self.from_current(constants::MAIN_BRANCH)?,
            Mode::Release => {
                let candidates = self.git.list_remote_release_branches()?;
                let release = select_release_branch(candidates, prompt)?;
                MergeRequestTarget::new(self.current_branch()?, release)
            }
            Mode::Explicit { source, target } => {
                MergeRequestTarget::new(source.clone(), target.clone())
            }
            Mode::List => return Ok(Resolution::List),
            Mode::Default => return Ok(Resolution::New),
        };

        Ok(Resolution::Merge(target))
    }

    fn from_current(&self, target: &str) -> CustomResult<MergeRequestTarget> {
        Ok(MergeRequestTarget::new(
            self.current_branch()?,
            target.to_string(),
        ))
    }

    fn current_branch(&self) -> CustomResult<String> {
        let branch = self.git.current_branch();
        if branch.is_empty() {
            return Err(CustomError::UnknownCurrentBranch);
        }
        Ok(branch)
    }
}

/// `feature/<last path segment>`, so `bugfix/login` maps to `feature/login`.
pub fn feature_branch_for(branch: &str) -> String {
    let name = branch.rsplit('/').next().unwrap_or(branch);
    format!("{}{}", constants::FEATURE_BRANCH_PREFIX, name)
}

fn select_release_branch(
    mut candidates: Vec<String>,
    prompt: &mut dyn SelectionPrompt,
) -> CustomResult<String> {
    if candidates.len() == 1 {
        return Ok(candidates.remove(0));
    }

    let index = prompt.select(&candidates)?;
    if index >= candidates.len() {
        return Err(CustomError::Input(index.to_string()));
    }
    Ok(candidates.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use rstest::rstest;

    use super::*;
    use crate::{merge_request::release_prompt::LinePrompt, test_support::FakeRunner};

    const RELEASES: &str = "\
aaaa\trefs/heads/release/1.0
bbbb\trefs/heads/release/2.0
";

    fn no_input() -> LinePrompt<Cursor<&'static str>, io::Sink> {
        LinePrompt::new(Cursor::new(""), io::sink())
    }

    fn on_branch(branch: &str) -> FakeRunner {
        FakeRunner::new().respond("git symbolic-ref --short HEAD", &format!("{}\n", branch))
    }

    fn merge(source: &str, target: &str) -> Resolution {
        Resolution::Merge(MergeRequestTarget::new(source.into(), target.into()))
    }

    #[rstest]
    #[case("feature/login", "feature/login")]
    #[case("bugfix/login", "feature/login")]
    #[case("user/jo/fix/login", "feature/login")]
    #[case("login", "feature/login")]
    fn feature_target_uses_last_segment(#[case] branch: &str, #[case] expected: &str) {
        assert_eq!(feature_branch_for(branch), expected);
    }

    #[rstest]
    #[case(Mode::Feature, "feature/login")]
    #[case(Mode::Develop, "develop")]
    #[case(Mode::Master, "master")]
    #[case(Mode::Main, "main")]
    fn fixed_targets_merge_from_current_branch(#[case] mode: Mode, #[case] target: &str) {
        let runner = on_branch("bugfix/login");
        let git = GitQuery::new(&runner);

        let resolution = BranchResolver::new(&git)
            .resolve(&mode, &mut no_input())
            .unwrap();

        assert_eq!(resolution, merge("bugfix/login", target));
    }

    #[test]
    fn detached_head_cannot_be_a_source() {
        let runner = FakeRunner::new().fail(
            "git symbolic-ref --short HEAD",
            "fatal: ref HEAD is not a symbolic ref\n",
        );
        let git = GitQuery::new(&runner);

        assert!(matches!(
            BranchResolver::new(&git).resolve(&Mode::Develop, &mut no_input()),
            Err(CustomError::UnknownCurrentBranch)
        ));
    }

    #[test]
    fn explicit_mode_does_not_touch_git() {
        let runner = FakeRunner::new();
        let git = GitQuery::new(&runner);
        let mode = Mode::Explicit {
            source: "topic".into(),
            target: "stable".into(),
        };

        let resolution = BranchResolver::new(&git)
            .resolve(&mode, &mut no_input())
            .unwrap();

        assert_eq!(resolution, merge("topic", "stable"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn list_and_default_resolve_to_pages() {
        let runner = FakeRunner::new();
        let git = GitQuery::new(&runner);
        let resolver = BranchResolver::new(&git);

        assert_eq!(
            resolver.resolve(&Mode::List, &mut no_input()).unwrap(),
            Resolution::List
        );
        assert_eq!(
            resolver.resolve(&Mode::Default, &mut no_input()).unwrap(),
            Resolution::New
        );
    }

    #[test]
    fn single_release_branch_is_picked_without_prompting() {
        let runner = on_branch("feature/login")
            .respond("git ls-remote -q", "aaaa\trefs/heads/release/1.0\n");
        let git = GitQuery::new(&runner);

        let resolution = BranchResolver::new(&git)
            .resolve(&Mode::Release, &mut no_input())
            .unwrap();

        assert_eq!(resolution, merge("feature/login", "release/1.0"));
    }

    #[test]
    fn release_branch_is_chosen_by_index() {
        let runner = on_branch("feature/login").respond("git ls-remote -q", RELEASES);
        let git = GitQuery::new(&runner);
        let mut prompt = LinePrompt::new(Cursor::new("1\n"), io::sink());

        let resolution = BranchResolver::new(&git)
            .resolve(&Mode::Release, &mut prompt)
            .unwrap();

        assert_eq!(resolution, merge("feature/login", "release/2.0"));
    }

    #[rstest]
    #[case("5\n")]
    #[case("abc\n")]
    fn invalid_release_choice_is_an_input_error(#[case] entry: &'static str) {
        let runner = on_branch("feature/login").respond("git ls-remote -q", RELEASES);
        let git = GitQuery::new(&runner);
        let mut prompt = LinePrompt::new(Cursor::new(entry), io::sink());

        assert!(matches!(
            BranchResolver::new(&git).resolve(&Mode::Release, &mut prompt),
            Err(CustomError::Input(_))
        ));
    }

    #[test]
    fn release_mode_without_candidates_fails() {
        let runner = on_branch("feature/login").respond("git ls-remote -q", "");
        let git = GitQuery::new(&runner);

        assert!(matches!(
            BranchResolver::new(&git).resolve(&Mode::Release, &mut no_input()),
            Err(CustomError::NoReleaseBranch)
        ));
    }
}
