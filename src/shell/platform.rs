//! Platform and environment detection.

/// Check if running in a CI environment.
///
/// Used to pick the non-interactive UI in `main()`. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    is_ci_with(|key| std::env::var(key).is_ok())
}

/// CI detection with a custom env var lookup, for tests.
pub fn is_ci_with<F>(has_var: F) -> bool
where
    F: Fn(&str) -> bool,
{
    const CI_VARS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
    ];
    CI_VARS.iter().any(|var| has_var(var))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_github_actions() {
        assert!(is_ci_with(|k| k == "GITHUB_ACTIONS"));
    }

    #[test]
    fn no_ci_vars_means_not_ci() {
        assert!(!is_ci_with(|_| false));
    }
}
