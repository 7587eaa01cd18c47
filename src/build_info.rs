//! Build date and commit, written by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `<date> (<commit>)`, as printed by `--version`.
pub fn version_line() -> String {
    format!("{} ({})", BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_line() {
        let line = version_line();
        assert!(line.starts_with(BUILD_DATE));
        assert!(line.ends_with(&format!("({})", BUILD_COMMIT)));
    }
}
