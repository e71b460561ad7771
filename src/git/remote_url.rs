//! Hosting-service URLs derived from the remote's fetch URL.
//!
//! Branch names are concatenated into query strings as-is, so names
//! containing `&`, `=` or `#` produce a broken URL.

use std::fmt::{Display, Formatter, Result};

use crate::constants;

/// Normalized HTTPS base URL of the repository on its hosting service,
/// without a `.git` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl(String);

impl RemoteUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RemoteUrl {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(&self.0)
    }
}

/// Turns `git@host:org/repo.git` or `https://host/org/repo.git` into
/// `https://host/org/repo`.
pub fn normalize_remote_to_base(raw: &str) -> RemoteUrl {
    let raw = raw.trim();
    let host_and_path = raw.rsplit('@').next().unwrap_or(raw);
    let base = host_and_path.strip_suffix(".git").unwrap_or(host_and_path);

    if base.starts_with("https://") || base.starts_with("http://") {
        RemoteUrl(base.to_string())
    } else {
        RemoteUrl(format!("https://{}", base.replacen(':', "/", 1)))
    }
}

/// Merge request list page.
pub fn build_list_url(base: &RemoteUrl) -> String {
    format!("{}{}", base.as_str(), constants::MERGE_REQUESTS_PATH)
}

pub fn build_creation_url(base: &RemoteUrl) -> String {
    format!(
        "{}{}",
        build_list_url(base),
        constants::NEW_MERGE_REQUEST_SUFFIX
    )
}

pub fn build_merge_request_url(base: &RemoteUrl, source: &str, target: &str) -> String {
    format!(
        "{}?{}={}&{}={}",
        build_creation_url(base),
        constants::SOURCE_BRANCH_PARAM,
        source,
        constants::TARGET_BRANCH_PARAM,
        target
    )
}
