//! # Error Suggestions
//!
//! Helpers that turn registry errors into user-facing messages with hints.
//! Errors should tell users what went wrong AND how to fix it, so each
//! helper keeps the original message on the first line and appends
//! `hint:` lines below it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use four_key::suggestions;
//!
//! registry
//!     .remove(&name)
//!     .map_err(|e| suggestions::explain(e, &registered_names))?;
//! ```

use crate::error::Error;

/// Attach hints to a registry error.
///
/// `registered` lists the names currently in the registry; it feeds the
/// "did you mean" hint for unknown repositories and may be empty.
pub fn explain(error: Error, registered: &[&str]) -> anyhow::Error {
    match error {
        Error::RepositoryNotFound { name } => repository_not_found(&name, registered),
        Error::DuplicateRepository { name } => duplicate_repository(&name),
        other => {
            let hint = match &other {
                Error::MissingCloneAddress => {
                    "hint: Pass the remote to track with --cloneAddress <url>"
                }
                Error::MissingTeam => "hint: Pass the owning team with --team <name>",
                Error::MissingReleaseTagPattern => {
                    "hint: Pass the release tag prefix with --releaseTagPattern <pattern> (e.g. 'release-v')"
                }
                Error::MissingFixCommitPatterns => {
                    "hint: Pass --fixCommitPatterns <pattern>, and repeat -f <pattern> for more"
                }
                Error::InvalidCloneAddress { .. } => {
                    "hint: The repository name is the last path segment of the clone address"
                }
                Error::CorruptConfig { .. } => {
                    "hint: Fix the YAML by hand, or move the file aside to start with an empty registry"
                }
                Error::Persistence { .. } => {
                    "hint: Check that the config directory is writable\n\
                     hint: Use --config or FOUR_KEY_CONFIG to store the registry elsewhere"
                }
                Error::RepositoryNotFound { .. } | Error::DuplicateRepository { .. } => "",
            };
            anyhow::anyhow!("{other}\n\n{hint}")
        }
    }
}

/// Generate an error for a repository name that is not registered.
///
/// Suggests the closest registered name when one is within a small edit
/// distance.
pub fn repository_not_found(name: &str, registered: &[&str]) -> anyhow::Error {
    let did_you_mean = find_similar(name, registered)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "The {name} repository does not exist!{did_you_mean}\n\n\
         hint: Run 'four-key list' to see registered repositories"
    )
}

/// Generate an error for a repository that is already registered.
pub fn duplicate_repository(name: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "The {name} repository already exists!\n\n\
         hint: Run 'four-key remove --repository {name}' first to register it again"
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance between two names, counted in characters.
fn edit_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    // previous[j] is the distance from the consumed prefix of `a` to target[..j].
    let mut previous: Vec<usize> = (0..=target.len()).collect();

    for (i, source_char) in a.chars().enumerate() {
        let mut current = Vec::with_capacity(previous.len());
        current.push(i + 1);
        for (j, &target_char) in target.iter().enumerate() {
            let substitution = previous[j] + usize::from(source_char != target_char);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current.push(substitution.min(deletion).min(insertion));
        }
        previous = current;
    }

    previous[target.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_repository_not_found_suggests_similar() {
        let message = repository_not_found("four-kee", &["four-key", "api"]).to_string();

        assert!(message.starts_with("The four-kee repository does not exist!"));
        assert!(message.contains("Did you mean 'four-key'?"));
        assert!(message.contains("four-key list"));
    }

    #[test]
    fn test_repository_not_found_without_candidates() {
        let message = repository_not_found("four-key", &[]).to_string();

        assert!(message.contains("The four-key repository does not exist!"));
        assert!(!message.contains("Did you mean"));
    }

    #[test]
    fn test_duplicate_repository_includes_remove_hint() {
        let message = duplicate_repository("four-key").to_string();

        assert!(message.contains("The four-key repository already exists!"));
        assert!(message.contains("remove --repository four-key"));
    }

    #[test]
    fn test_explain_keeps_original_message_first() {
        let message = explain(Error::MissingCloneAddress, &[]).to_string();
        assert!(message.starts_with("You must specify a repository to clone"));
        assert!(message.contains("--cloneAddress"));

        let message = explain(Error::MissingFixCommitPatterns, &[]).to_string();
        assert!(message.contains("-f <pattern>"));
    }

    #[test]
    fn test_explain_routes_registry_errors() {
        let message = explain(
            Error::RepositoryNotFound {
                name: "apii".to_string(),
            },
            &["api"],
        )
        .to_string();
        assert!(message.contains("Did you mean 'api'?"));

        let message = explain(
            Error::DuplicateRepository {
                name: "api".to_string(),
            },
            &["api"],
        )
        .to_string();
        assert!(message.contains("already exists"));
    }

    #[test]
    fn test_explain_storage_errors() {
        let message = explain(
            Error::CorruptConfig {
                path: PathBuf::from("repositories.yaml"),
                message: "bad indentation".to_string(),
            },
            &[],
        )
        .to_string();
        assert!(message.contains("bad indentation"));
        assert!(message.contains("move the file aside"));

        let message = explain(
            Error::Persistence {
                path: PathBuf::from("/ro/repositories.yaml"),
                operation: "write",
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
            &[],
        )
        .to_string();
        assert!(message.contains("FOUR_KEY_CONFIG"));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("four-key", "four-key"), 0);
        assert_eq!(edit_distance("four-ke", "four-key"), 1);
        assert_eq!(edit_distance("fuor-key", "four-key"), 2);
        assert_eq!(edit_distance("", "api"), 3);
    }

    #[test]
    fn test_find_similar() {
        let candidates = ["four-key", "api", "web"];

        assert_eq!(find_similar("four-keys", &candidates), Some("four-key"));
        assert_eq!(find_similar("ap", &candidates), Some("api"));
        assert_eq!(find_similar("database", &candidates), None);
    }
}
