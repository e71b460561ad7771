pub const MERGE_REQUESTS_PATH: &str = "/merge_requests";
pub const NEW_MERGE_REQUEST_SUFFIX: &str = "/new";
pub const SOURCE_BRANCH_PARAM: &str = "merge_request[source_branch]";
pub const TARGET_BRANCH_PARAM: &str = "merge_request[target_branch]";

pub const HEADS_REF_PREFIX: &str = "refs/heads/";
pub const RELEASE_BRANCH_PREFIX: &str = "release/";
/// Branch names containing this are not checked against the remote.
pub const RELEASE_MARKER: &str = "release";

pub const FEATURE_BRANCH_PREFIX: &str = "feature/";
pub const DEVELOP_BRANCH: &str = "develop";
pub const MASTER_BRANCH: &str = "master";
pub const MAIN_BRANCH: &str = "main";
