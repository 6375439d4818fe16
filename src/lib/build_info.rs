pub fn git_commit_hash() -> &'static str {
    match option_env!("NEXUS_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Abbreviated commit hash for footer display.
pub fn short_commit_hash() -> &'static str {
    let hash = git_commit_hash();
    hash.get(..7).unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::{git_commit_hash, short_commit_hash};

    #[test]
    fn commit_hash_is_never_empty() {
        assert!(!git_commit_hash().is_empty());
        assert!(short_commit_hash().len() <= 7 || short_commit_hash() == git_commit_hash());
    }
}
