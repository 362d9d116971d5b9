//! Resource fetching from GitHub
//!
//! - [`transport`]: downloads a repository's branch tarball
//! - [`extract`]: unpacks the tarball into a scratch directory
//! - [`locate`]: finds the resource inside the unpacked tree
//! - [`pipeline`]: runs the stages and hands the result to the installer

pub mod extract;
pub mod locate;
pub mod pipeline;
pub mod transport;

pub use extract::extract_tarball;
pub use locate::locate_resource;
pub use pipeline::{fetch_resource, fetch_resource_in};
pub use transport::GitHubClient;
