//! Property-based tests for repository name derivation and validation.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::error::Error;
    use crate::record::{derive_name, RepositoryRecord};
    use crate::registry::RepositoryRegistry;
    use crate::store::MemoryConfigStore;
    use proptest::prelude::*;

    // ============================================================================
    // derive_name property tests
    // ============================================================================

    proptest! {
        /// Property: derive_name is deterministic (same input = same output)
        #[test]
        fn derive_name_is_deterministic(input in ".*") {
            prop_assert_eq!(derive_name(&input), derive_name(&input));
        }

        /// Property: derived names never contain path separators
        #[test]
        fn derive_name_never_contains_separators(input in ".*") {
            if let Some(name) = derive_name(&input) {
                for ch in ['/', '\\', ':'] {
                    prop_assert!(
                        !name.contains(ch),
                        "derive_name produced '{}' containing '{}' from input '{}'",
                        name,
                        ch,
                        input
                    );
                }
                prop_assert!(!name.is_empty());
            }
        }

        /// Property: the repository segment of an https address is its name
        #[test]
        fn derive_name_from_https_address(
            host in "[a-z]{1,10}\\.(com|org|io)",
            owner in "[a-zA-Z0-9_-]{1,20}",
            repo in "[a-zA-Z0-9_-]{1,20}",
            suffix in prop::bool::ANY,
        ) {
            let address = format!(
                "https://{}/{}/{}{}",
                host,
                owner,
                repo,
                if suffix { ".git" } else { "" }
            );
            prop_assert_eq!(derive_name(&address), Some(repo));
        }

        /// Property: scp-like and https forms of the same repository agree
        #[test]
        fn derive_name_scp_matches_https(
            owner in "[a-zA-Z0-9_-]{1,20}",
            repo in "[a-zA-Z0-9_-]{1,20}",
        ) {
            let https = format!("https://github.com/{}/{}.git", owner, repo);
            let scp = format!("git@github.com:{}/{}.git", owner, repo);
            prop_assert_eq!(derive_name(&https), derive_name(&scp));
        }

        /// Property: names with spaces and non-ASCII letters agree across transports
        #[test]
        fn derive_name_decoded_names_match_across_transports(
            owner in "[a-zA-Z0-9_-]{1,12}",
            repo in "[a-zA-Z0-9äöüçğşı_-]([a-zA-Z0-9äöüçğşı _-]{0,16}[a-zA-Z0-9äöüçğşı_-])?",
        ) {
            let https = format!("https://dev.azure.com/{}/project/_git/{}", owner, repo);
            let scp = format!("git@ssh.dev.azure.com:v3/{}/project/{}", owner, repo);
            prop_assert_eq!(derive_name(&https), Some(repo.clone()));
            prop_assert_eq!(derive_name(&scp), Some(repo));
        }
    }

    // ============================================================================
    // Validation and registry property tests
    // ============================================================================

    proptest! {
        /// Property: an empty clone address fails first regardless of other fields
        #[test]
        fn empty_clone_address_always_fails_first(
            blank in "[ \t]{0,4}",
            team in ".*",
            release in ".*",
            patterns in prop::collection::vec(".*", 0..4),
        ) {
            let result = RepositoryRecord::new(&blank, &team, &release, &patterns);
            prop_assert!(matches!(result, Err(Error::MissingCloneAddress)));
        }

        /// Property: a valid add followed by list holds exactly that record
        #[test]
        fn add_then_list_contains_derived_name(
            owner in "[a-zA-Z0-9_-]{1,20}",
            repo in "[a-zA-Z0-9_-]{1,20}",
            team in "[a-z-]{1,12}",
            patterns in prop::collection::vec("[a-z]{1,8}", 1..4),
        ) {
            let registry = RepositoryRegistry::new(MemoryConfigStore::new());
            let address = format!("https://github.com/{}/{}.git", owner, repo);

            let added = registry.add(&address, &team, "release-v", &patterns).unwrap();
            let listed = registry.list().unwrap();

            prop_assert_eq!(listed.len(), 1);
            prop_assert_eq!(listed[0].name(), repo.as_str());
            prop_assert_eq!(&listed[0], &added);
            prop_assert_eq!(listed[0].fix_commit_patterns(), patterns.as_slice());
        }

        /// Property: adding the same address twice never grows the registry
        #[test]
        fn duplicate_add_leaves_size_unchanged(repo in "[a-zA-Z0-9_-]{1,20}") {
            let registry = RepositoryRegistry::new(MemoryConfigStore::new());
            let address = format!("https://github.com/org/{}.git", repo);

            registry.add(&address, "team", "v", ["fix"]).unwrap();
            let second = registry.add(&address, "team", "v", ["fix"]);

            prop_assert!(
                matches!(second, Err(Error::DuplicateRepository { ref name }) if *name == repo),
                "unexpected result: {:?}",
                second
            );
            prop_assert_eq!(registry.list().unwrap().len(), 1);
        }
    }
}
