//! Property-based tests for descriptor rendering.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use hkd_cli::domain::ServiceDescriptor;
use hkd_cli::domain::plist::escape;

proptest! {
    /// Identical inputs always render byte-identical content.
    #[test]
    fn prop_render_is_deterministic(
        exe in "/[a-zA-Z0-9_./ -]{1,60}",
        path in "[a-zA-Z0-9_./:&<> -]{1,120}",
        user in "[a-z_][a-z0-9_-]{0,15}",
    ) {
        let first = ServiceDescriptor::for_daemon(&exe, &path, &user).render();
        let second = ServiceDescriptor::for_daemon(&exe, &path, &user).render();
        prop_assert_eq!(first, second);
    }

    /// PATH reaches the document unaltered apart from XML escaping.
    #[test]
    fn prop_path_is_embedded_verbatim(path in "[a-zA-Z0-9_./:&<>\"' -]{1,120}") {
        let content = ServiceDescriptor::for_daemon("/usr/local/bin/hkd", &path, "alice").render();
        let expected = format!("<string>{}</string>", escape(&path));
        prop_assert!(content.contains(&expected), "missing {}", expected);
    }

    /// The user name only namespaces the log files.
    #[test]
    fn prop_user_namespaces_logs(user in "[a-z_][a-z0-9_-]{0,15}") {
        let d = ServiceDescriptor::for_daemon("/usr/local/bin/hkd", "/usr/bin", &user);
        prop_assert_eq!(d.stdout_path, format!("/tmp/hkd_{user}.out.log"));
        prop_assert_eq!(d.stderr_path, format!("/tmp/hkd_{user}.err.log"));
    }
}
