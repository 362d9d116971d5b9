//! Version command implementation

use crate::config::FetchConfig;
use crate::error::Result;

/// Print the version and where resources are fetched from
pub fn run(config: &FetchConfig) -> Result<()> {
    for line in version_lines(config) {
        println!("{line}");
    }
    Ok(())
}

fn version_lines(config: &FetchConfig) -> Vec<String> {
    vec![
        format!("agr {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "Build info:".to_string(),
        format!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION")),
        format!("  Profile: {}", build_profile()),
        String::new(),
        "Fetch settings:".to_string(),
        format!("  Archive host: {}", config.base_url),
        format!("  Branch: {}", config.branch),
        format!("  Timeout: {}s", config.timeout.as_secs()),
    ]
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
