use super::*;
use serde_json::{from_str, json, to_value};

fn sample_rules() -> BranchProtectionRules {
    BranchProtectionRules {
        required_status_checks: Some(RequiredStatusChecks {
            strict: true,
            contexts: vec![],
        }),
        enforce_admins: Some(true),
        required_pull_request_reviews: Some(RequiredPullRequestReviews {
            dismissal_restrictions: Some(DismissalRestrictions::default()),
            dismiss_stale_reviews: true,
            require_code_owner_reviews: true,
            required_approving_review_count: 1,
        }),
        restrictions: None,
    }
}

#[test]
fn test_branch_protection_serialization() {
    let body = to_value(sample_rules()).expect("Failed to serialize BranchProtectionRules");

    assert_eq!(
        body,
        json!({
            "required_status_checks": { "strict": true, "contexts": [] },
            "enforce_admins": true,
            "required_pull_request_reviews": {
                "dismissal_restrictions": {},
                "dismiss_stale_reviews": true,
                "require_code_owner_reviews": true,
                "required_approving_review_count": 1
            },
            "restrictions": null
        })
    );
}

#[test]
fn test_disabled_rules_serialize_as_null() {
    let rules = BranchProtectionRules {
        required_status_checks: None,
        enforce_admins: None,
        required_pull_request_reviews: None,
        restrictions: None,
    };

    let body = to_value(&rules).expect("Failed to serialize BranchProtectionRules");
    let object = body.as_object().expect("Body should be a JSON object");

    assert_eq!(object.len(), 4, "GitHub requires all four keys");
    assert!(object.values().all(|v| v.is_null()));
}

#[test]
fn test_push_restrictions_serialization() {
    let restrictions = PushRestrictions {
        users: vec!["octocat".to_string()],
        teams: vec![],
        apps: vec![],
    };

    let body = to_value(&restrictions).expect("Failed to serialize PushRestrictions");

    assert_eq!(body, json!({ "users": ["octocat"], "teams": [] }));
}

#[test]
fn test_branch_protection_deserialization() {
    let json_str = r#"{
        "required_status_checks": { "strict": false, "contexts": ["ci"] },
        "enforce_admins": false,
        "required_pull_request_reviews": {
            "dismiss_stale_reviews": false,
            "require_code_owner_reviews": false,
            "required_approving_review_count": 2
        },
        "restrictions": null
    }"#;

    let rules: BranchProtectionRules =
        from_str(json_str).expect("Failed to deserialize BranchProtectionRules");

    let checks = rules.required_status_checks.expect("status checks present");
    assert!(!checks.strict);
    assert_eq!(checks.contexts, vec!["ci".to_string()]);
    let reviews = rules
        .required_pull_request_reviews
        .expect("review settings present");
    assert_eq!(reviews.required_approving_review_count, 2);
    assert!(reviews.dismissal_restrictions.is_none());
    assert!(rules.restrictions.is_none());
}
