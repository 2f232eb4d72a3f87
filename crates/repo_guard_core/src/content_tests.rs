use super::*;

#[test]
fn test_readme_markdown_uses_repository_name_as_heading() {
    let markdown = readme_markdown("widgets");

    assert!(markdown.starts_with("# widgets\n\n"));
    assert!(markdown.ends_with('\n'));
}

#[test]
fn test_readme_payload_is_base64_encoded_with_fixed_message() {
    let payload = readme_payload("widgets");

    assert_eq!(payload.message, README_COMMIT_MESSAGE);
    assert_ne!(payload.content, readme_markdown("widgets"));
    assert!(payload.content.starts_with("IyB3aWRnZXRz"));
}

#[test]
fn test_notification_issue_reports_success() {
    let repository = RepositoryRef::new("acme", "widgets");

    let issue = notification_issue(&repository, ReadmeOutcome::Created, Some("main"), true);

    assert_eq!(issue.title, NOTIFICATION_ISSUE_TITLE);
    let body = issue.body.expect("issue body");
    assert!(body.contains("`acme/widgets`"));
    assert!(body.contains("created a placeholder"));
    assert!(body.contains("enabled on `main`"));
}

#[test]
fn test_notification_issue_reports_failures() {
    let repository = RepositoryRef::new("acme", "widgets");

    let issue = notification_issue(&repository, ReadmeOutcome::Failed, Some("trunk"), false);

    let body = issue.body.expect("issue body");
    assert!(body.contains("could not be created"));
    assert!(body.contains("**failed** on `trunk`"));
}

#[test]
fn test_notification_issue_reports_unresolved_branch() {
    let repository = RepositoryRef::new("acme", "widgets");

    let issue = notification_issue(&repository, ReadmeOutcome::AlreadyExists, None, false);

    let body = issue.body.expect("issue body");
    assert!(body.contains("existing `README.md` was kept"));
    assert!(body.contains("could not be resolved"));
}
