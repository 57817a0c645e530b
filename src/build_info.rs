//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Line printed by `flappy --version`.
pub fn version_line() -> String {
    format!(
        "flappy {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        // Short hash (7+ chars) or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() >= 7);
    }

    #[test]
    fn test_version_line_mentions_build() {
        let line = version_line();
        assert!(line.starts_with("flappy "));
        assert!(line.contains(BUILD_DATE));
        assert!(line.contains(BUILD_COMMIT));
    }
}
