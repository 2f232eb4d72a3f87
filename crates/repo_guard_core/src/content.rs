//! Text written into new repositories: the placeholder README and the
//! notification issue.

use github_client::{CreateFilePayload, CreateIssuePayload};

use crate::{ReadmeOutcome, RepositoryRef};

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;

/// Path of the README file at the repository root.
pub const README_PATH: &str = "README.md";

/// Commit message used when the README is created.
pub const README_COMMIT_MESSAGE: &str = "Add default README";

/// Title of the notification issue.
pub const NOTIFICATION_ISSUE_TITLE: &str = "Repository setup completed";

/// Returns the placeholder README body for a repository.
pub fn readme_markdown(repo_name: &str) -> String {
    format!(
        "# {}\n\n\
         This repository was created on GitHub and initialised automatically.\n\n\
         Replace this file with a description of the project.\n",
        repo_name
    )
}

/// Builds the Contents API request that creates the placeholder README.
pub fn readme_payload(repo_name: &str) -> CreateFilePayload {
    CreateFilePayload::new(README_COMMIT_MESSAGE, readme_markdown(repo_name))
}

/// Builds the notification issue summarising the setup steps.
pub fn notification_issue(
    repository: &RepositoryRef,
    readme: ReadmeOutcome,
    default_branch: Option<&str>,
    branch_protection: bool,
) -> CreateIssuePayload {
    let readme_line = match readme {
        ReadmeOutcome::Created => "- README: created a placeholder `README.md`",
        ReadmeOutcome::AlreadyExists => "- README: an existing `README.md` was kept",
        ReadmeOutcome::Failed => "- README: **could not be created**",
    };

    let protection_line = match (default_branch, branch_protection) {
        (Some(branch), true) => format!("- Branch protection: enabled on `{}`", branch),
        (Some(branch), false) => format!("- Branch protection: **failed** on `{}`", branch),
        (None, _) => {
            "- Branch protection: **skipped**, the default branch could not be resolved"
                .to_string()
        }
    };

    let body = format!(
        "Automated setup ran for `{}` after it was created.\n\n{}\n{}\n",
        repository.full_name(),
        readme_line,
        protection_line
    );

    CreateIssuePayload {
        title: NOTIFICATION_ISSUE_TITLE.to_string(),
        body: Some(body),
        labels: Vec::new(),
    }
}
