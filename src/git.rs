pub mod git_query;
pub mod remote_url;

pub use git_query::GitQuery;

