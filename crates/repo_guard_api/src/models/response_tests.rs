//! Tests for response models

use super::*;
use repo_guard_core::RepositoryRef;
use serde_json::json;

fn report(readme: ReadmeOutcome) -> ProvisioningReport {
    ProvisioningReport {
        repository: RepositoryRef::new("acme", "widgets"),
        default_branch: Some("main".to_string()),
        readme,
        branch_protection: true,
        notification_issue: Some(
            "https://github.com/acme/widgets/issues/3"
                .parse()
                .expect("valid url"),
        ),
    }
}

#[test]
fn test_webhook_response_from_successful_report() {
    let response = WebhookResponse::from(report(ReadmeOutcome::Created));

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "repository": "acme/widgets",
            "default_branch": "main",
            "readme": "created",
            "readme_created": true,
            "branch_protection": true,
            "notification_issue": true,
            "notification_issue_url": "https://github.com/acme/widgets/issues/3"
        })
    );
}

#[test]
fn test_existing_readme_counts_as_success() {
    let response = WebhookResponse::from(report(ReadmeOutcome::AlreadyExists));

    assert_eq!(response.readme, ReadmeOutcome::AlreadyExists);
    assert!(response.readme_created);
}

#[test]
fn test_partial_failure_report() {
    let failed = ProvisioningReport {
        repository: RepositoryRef::new("acme", "widgets"),
        default_branch: None,
        readme: ReadmeOutcome::Failed,
        branch_protection: false,
        notification_issue: None,
    };

    let json = serde_json::to_value(WebhookResponse::from(failed)).unwrap();

    assert_eq!(json["readme_created"], false);
    assert_eq!(json["branch_protection"], false);
    assert!(json["default_branch"].is_null());
    assert_eq!(json["notification_issue"], false);
    assert!(json["notification_issue_url"].is_null());
}
