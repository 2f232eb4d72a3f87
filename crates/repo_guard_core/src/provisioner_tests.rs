//! Tests for provisioner module.

use super::*;
use async_trait::async_trait;
use github_client::{
    models::Repository, BranchProtectionRules, CreateFilePayload, CreateIssuePayload, FileContent,
    Issue,
};
use std::sync::Mutex;
use tracing_test::traced_test;

/// A call recorded by [`FakeClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    GetFile(String),
    CreateFile(String),
    GetRepository,
    UpdateBranchProtection(String),
    CreateIssue,
}

/// Scripted answers for each client operation.
struct FakeClient {
    readme: Result<(), fn() -> GitHubError>,
    readme_exists: bool,
    create_file_fails: bool,
    default_branch: Result<Option<&'static str>, fn() -> GitHubError>,
    protection_fails: bool,
    issue_fails: bool,
    calls: Mutex<Vec<Call>>,
    protection_rules: Mutex<Option<BranchProtectionRules>>,
    issue_body: Mutex<Option<String>>,
}

impl FakeClient {
    fn healthy() -> Self {
        Self {
            readme: Ok(()),
            readme_exists: false,
            create_file_fails: false,
            default_branch: Ok(Some("main")),
            protection_fails: false,
            issue_fails: false,
            calls: Mutex::new(Vec::new()),
            protection_rules: Mutex::new(None),
            issue_body: Mutex::new(None),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RepositoryClient for FakeClient {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, GitHubError> {
        self.record(Call::GetRepository);
        match self.default_branch {
            Ok(branch) => Ok(Repository::new(repo, format!("{owner}/{repo}"), branch)),
            Err(make_error) => Err(make_error()),
        }
    }

    async fn get_file(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
    ) -> Result<FileContent, GitHubError> {
        self.record(Call::GetFile(path.to_string()));
        if let Err(make_error) = self.readme {
            return Err(make_error());
        }
        if self.readme_exists {
            Ok(FileContent {
                name: path.to_string(),
                path: path.to_string(),
                sha: "abc123".to_string(),
                size: 10,
            })
        } else {
            Err(GitHubError::NotFound)
        }
    }

    async fn create_file(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
        _payload: &CreateFilePayload,
    ) -> Result<(), GitHubError> {
        self.record(Call::CreateFile(path.to_string()));
        if self.create_file_fails {
            Err(GitHubError::ApiError {
                status: 409,
                message: "Git Repository is empty.".to_string(),
            })
        } else {
            Ok(())
        }
    }

    async fn update_branch_protection(
        &self,
        _owner: &str,
        _repo: &str,
        branch: &str,
        rules: &BranchProtectionRules,
    ) -> Result<(), GitHubError> {
        self.record(Call::UpdateBranchProtection(branch.to_string()));
        *self.protection_rules.lock().unwrap() = Some(rules.clone());
        if self.protection_fails {
            Err(GitHubError::ApiError {
                status: 403,
                message: "Resource not accessible by integration".to_string(),
            })
        } else {
            Ok(())
        }
    }

    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        payload: &CreateIssuePayload,
    ) -> Result<Issue, GitHubError> {
        self.record(Call::CreateIssue);
        *self.issue_body.lock().unwrap() = payload.body.clone();
        if self.issue_fails {
            return Err(GitHubError::ApiError {
                status: 410,
                message: "Issues are disabled for this repo".to_string(),
            });
        }
        Ok(Issue {
            number: 1,
            title: payload.title.clone(),
            html_url: Url::parse(&format!("https://github.com/{owner}/{repo}/issues/1")).unwrap(),
        })
    }
}

fn provisioner(client: Arc<FakeClient>, notification_issue: bool) -> RepositoryProvisioner {
    RepositoryProvisioner::new(client, ProvisioningSettings { notification_issue })
}

fn widgets() -> RepositoryRef {
    RepositoryRef::new("acme", "widgets")
}

#[tokio::test]
#[traced_test]
async fn test_provision_happy_path_runs_all_steps_in_order() {
    let client = Arc::new(FakeClient::healthy());

    let report = provisioner(client.clone(), true).provision(&widgets()).await;

    assert_eq!(
        client.calls(),
        vec![
            Call::GetFile("README.md".to_string()),
            Call::CreateFile("README.md".to_string()),
            Call::GetRepository,
            Call::UpdateBranchProtection("main".to_string()),
            Call::CreateIssue,
        ]
    );
    assert_eq!(report.readme, ReadmeOutcome::Created);
    assert_eq!(report.default_branch.as_deref(), Some("main"));
    assert!(report.branch_protection);
    assert_eq!(
        report.notification_issue.as_ref().map(Url::as_str),
        Some("https://github.com/acme/widgets/issues/1")
    );
    assert!(report.is_success(&ProvisioningSettings::default()));
    assert!(logs_contain("Provisioning complete"));
}

#[tokio::test]
#[traced_test]
async fn test_existing_readme_is_not_written() {
    let client = Arc::new(FakeClient {
        readme_exists: true,
        ..FakeClient::healthy()
    });

    let report = provisioner(client.clone(), false).provision(&widgets()).await;

    assert_eq!(report.readme, ReadmeOutcome::AlreadyExists);
    assert!(!client
        .calls()
        .iter()
        .any(|c| matches!(c, Call::CreateFile(_))));
    assert!(report.branch_protection);
    assert!(logs_contain("README already exists"));
}

#[tokio::test]
async fn test_readme_lookup_failure_skips_write_but_continues() {
    let client = Arc::new(FakeClient {
        readme: Err(|| GitHubError::ApiError {
            status: 500,
            message: "Server Error".to_string(),
        }),
        ..FakeClient::healthy()
    });

    let report = provisioner(client.clone(), false).provision(&widgets()).await;

    assert_eq!(report.readme, ReadmeOutcome::Failed);
    assert_eq!(
        client.calls(),
        vec![
            Call::GetFile("README.md".to_string()),
            Call::GetRepository,
            Call::UpdateBranchProtection("main".to_string()),
        ]
    );
    assert!(report.branch_protection);
}

#[tokio::test]
async fn test_readme_write_failure_does_not_stop_protection() {
    let client = Arc::new(FakeClient {
        create_file_fails: true,
        ..FakeClient::healthy()
    });

    let report = provisioner(client.clone(), false).provision(&widgets()).await;

    assert_eq!(report.readme, ReadmeOutcome::Failed);
    assert!(report.branch_protection);
    assert!(!report.is_success(&ProvisioningSettings {
        notification_issue: false
    }));
}

#[tokio::test]
async fn test_protection_uses_branch_resolved_from_api() {
    let client = Arc::new(FakeClient {
        default_branch: Ok(Some("trunk")),
        ..FakeClient::healthy()
    });

    let report = provisioner(client.clone(), false).provision(&widgets()).await;

    assert_eq!(report.default_branch.as_deref(), Some("trunk"));
    assert!(client
        .calls()
        .contains(&Call::UpdateBranchProtection("trunk".to_string())));
    assert_eq!(
        client.protection_rules.lock().unwrap().clone(),
        Some(policy::default_branch_protection())
    );
}

#[tokio::test]
async fn test_failed_repository_fetch_reports_no_protection() {
    let client = Arc::new(FakeClient {
        default_branch: Err(|| GitHubError::NotFound),
        ..FakeClient::healthy()
    });

    let report = provisioner(client.clone(), true).provision(&widgets()).await;

    assert_eq!(report.default_branch, None);
    assert!(!report.branch_protection);
    assert!(!client
        .calls()
        .iter()
        .any(|c| matches!(c, Call::UpdateBranchProtection(_))));
    // The notification still goes out and mentions the skipped step.
    assert!(report.notification_issue.is_some());
    let body = client.issue_body.lock().unwrap().clone().unwrap();
    assert!(body.contains("could not be resolved"));
}

#[tokio::test]
async fn test_missing_default_branch_reports_no_protection() {
    let client = Arc::new(FakeClient {
        default_branch: Ok(None),
        ..FakeClient::healthy()
    });

    let report = provisioner(client.clone(), false).provision(&widgets()).await;

    assert_eq!(report.default_branch, None);
    assert!(!report.branch_protection);
}

#[tokio::test]
#[traced_test]
async fn test_protection_failure_is_reported() {
    let client = Arc::new(FakeClient {
        protection_fails: true,
        ..FakeClient::healthy()
    });

    let report = provisioner(client.clone(), true).provision(&widgets()).await;

    assert_eq!(report.default_branch.as_deref(), Some("main"));
    assert!(!report.branch_protection);
    let body = client.issue_body.lock().unwrap().clone().unwrap();
    assert!(body.contains("**failed** on `main`"));
    assert!(logs_contain("Provisioning finished with failed steps"));
}

#[tokio::test]
async fn test_notification_disabled_creates_no_issue() {
    let client = Arc::new(FakeClient::healthy());

    let report = provisioner(client.clone(), false).provision(&widgets()).await;

    assert!(report.notification_issue.is_none());
    assert!(!client.calls().contains(&Call::CreateIssue));
    assert!(report.is_success(&ProvisioningSettings {
        notification_issue: false
    }));
}

#[tokio::test]
async fn test_notification_failure_is_reported() {
    let client = Arc::new(FakeClient {
        issue_fails: true,
        ..FakeClient::healthy()
    });

    let report = provisioner(client.clone(), true).provision(&widgets()).await;

    assert!(report.notification_issue.is_none());
    assert!(report.branch_protection);
    assert!(!report.is_success(&ProvisioningSettings::default()));
}

#[test]
fn test_readme_outcome_serialization() {
    assert_eq!(
        serde_json::to_value(ReadmeOutcome::AlreadyExists).unwrap(),
        serde_json::json!("already_exists")
    );
    assert!(ReadmeOutcome::Created.is_success());
    assert!(ReadmeOutcome::AlreadyExists.is_success());
    assert!(!ReadmeOutcome::Failed.is_success());
}
