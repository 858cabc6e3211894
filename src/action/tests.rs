use super::graphql::{self, PullRequest, RequestVariables};
use super::*;
use crate::Error;
use std::io::Write;

const PULL_REQUEST_EVENT: &str = r#"{
    "action": "synchronize",
    "number": 7,
    "pull_request": { "number": 7, "head": { "ref": "feature/timer" } },
    "repository": { "name": "widgets", "owner": { "login": "acme" } }
}"#;

const PUSH_EVENT: &str = r#"{
    "ref": "refs/heads/feature/timer",
    "repository": { "name": "widgets", "owner": { "name": "acme", "login": "acme-login" } }
}"#;

const COMMENT_EVENT: &str = r#"{
    "issue": { "number": 12 },
    "repository": { "name": "widgets", "owner": { "login": "acme" } }
}"#;

const RESPONSE: &str = r#"{
    "data": {
        "repository": {
            "pullRequest": {
                "id": "PR_kwDOA",
                "title": "[0h30m] • add timer",
                "bodyText": "Estimate: 3h",
                "comments": { "nodes": [ { "bodyText": "reviewed in 15m" }, null ] },
                "commits": { "nodes": [
                    { "commit": { "message": "scaffold timer 1h" } },
                    { "commit": { "message": "fix typo" } },
                    { "commit": { "message": "tests 30m" } }
                ] }
            }
        }
    }
}"#;

fn pull_request() -> PullRequest {
    graphql::parse_response(RESPONSE).unwrap()
}

#[test]
fn event_kinds() {
    assert_eq!(EventKind::from_name("pull_request"), Some(EventKind::PullRequest));
    assert_eq!(EventKind::from_name("issue_comment"), Some(EventKind::IssueComment));
    assert_eq!(EventKind::from_name("push"), Some(EventKind::Push));
    assert_eq!(EventKind::from_name("release"), None);
    assert_eq!(EventKind::Push.name(), "push");
}

#[test]
fn pull_request_event_exposes_number_and_branch() {
    let event = Event::from_json("pull_request", PULL_REQUEST_EVENT).unwrap();

    assert_eq!(event.pull_request_number(), Some(7));
    assert_eq!(event.branch_name(), Some("feature/timer"));
    assert_eq!(event.repository(), Some(Repository { name: "widgets".into(), owner: "acme".into() }));
}

#[test]
fn push_event_strips_the_ref_prefix() {
    let event = Event::from_json("push", PUSH_EVENT).unwrap();

    assert_eq!(event.pull_request_number(), None);
    assert_eq!(event.branch_name(), Some("feature/timer"));
    // Owner name wins over login.
    assert_eq!(event.repository().unwrap().owner, "acme");
}

#[test]
fn issue_comment_event_uses_the_issue_number() {
    let event = Event::from_json("issue_comment", COMMENT_EVENT).unwrap();

    assert_eq!(event.pull_request_number(), Some(12));
    assert_eq!(event.branch_name(), None);
}

#[test]
fn unsupported_events_are_rejected_before_parsing() {
    let err = Event::from_json("release", "not json").unwrap_err();
    assert!(matches!(err, Error::UnsupportedEvent(ref name) if name == "release"));
}

#[test]
fn load_reads_the_payload_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PULL_REQUEST_EVENT.as_bytes()).unwrap();

    let event = Event::load("pull_request", file.path()).unwrap();
    assert_eq!(event.kind, EventKind::PullRequest);
    assert_eq!(event.pull_request_number(), Some(7));
}

#[test]
fn load_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let err = Event::load("push", dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.exit_code(), crate::EXIT_INTERNAL);
}

#[test]
fn load_checks_the_event_name_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let err = Event::load("release", dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, Error::UnsupportedEvent(ref name) if name == "release"));
    assert_eq!(err.exit_code(), crate::EXIT_SUCCESS);
}

#[test]
fn lookup_prefers_the_pull_request_number() {
    let event = Event::from_json("pull_request", PULL_REQUEST_EVENT).unwrap();
    let request = graphql::lookup_request(&event).unwrap();

    assert_eq!(request.query, graphql::GET_PULL_REQUEST);
    assert_eq!(
        request.variables,
        RequestVariables::ByNumber { number: 7, name: "widgets".into(), owner: "acme".into() }
    );
}

#[test]
fn lookup_falls_back_to_the_branch() {
    let event = Event::from_json("push", PUSH_EVENT).unwrap();
    let request = graphql::lookup_request(&event).unwrap();

    assert_eq!(request.query, graphql::GET_PULL_REQUESTS);
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["variables"]["branch"], "feature/timer");
    assert_eq!(body["variables"]["owner"], "acme");
}

#[test]
fn lookup_needs_a_repository() {
    let event = Event::from_json("push", r#"{ "ref": "refs/heads/main" }"#).unwrap();
    assert!(matches!(graphql::lookup_request(&event), Err(Error::MissingPayloadField("repository"))));
}

#[test]
fn queries_select_the_scanned_fields() {
    for query in [graphql::GET_PULL_REQUEST, graphql::GET_PULL_REQUESTS] {
        assert!(query.contains("bodyText"));
        assert!(query.contains("comments(first: 100)"));
        assert!(query.contains("commits(first: 250)"));
    }
    assert!(graphql::GET_PULL_REQUESTS.contains("headRefName: $branch"));
}

#[test]
fn parse_response_accepts_bare_and_connection_shapes() {
    let bare = r#"{ "repository": { "pullRequests": { "nodes": [ { "id": "PR_1", "title": "t" } ] } } }"#;
    let pr = graphql::parse_response(bare).unwrap();

    assert_eq!(pr.id, "PR_1");
    assert_eq!(pr.body_text, "");
    assert!(pr.commits.nodes.is_empty());
}

#[test]
fn parse_response_defaults_missing_connections() {
    let json = r#"{ "data": { "repository": { "pullRequest": { "id": "PR_2", "title": "[1h0m] • t" } } } }"#;
    let pr = graphql::parse_response(json).unwrap();

    assert_eq!(pr.title, "[1h0m] • t");
    assert!(pr.comments.nodes.is_empty());
    assert!(pr.commits.nodes.is_empty());

    let everything = Inputs { scan_comments: true, scan_pull_request_body: true, ..Inputs::default() };
    assert_eq!(messages(&pr, &everything), vec![""]);
    assert_eq!(retitle(&pr, &Inputs::default()).title, "[0h0m] • t");
}

#[test]
fn parse_response_without_pull_request() {
    let empty = r#"{ "data": { "repository": { "pullRequests": { "nodes": [] } } } }"#;
    assert!(matches!(graphql::parse_response(empty), Err(Error::MissingPullRequest)));
    assert!(matches!(graphql::parse_response("[]"), Err(Error::Json(_))));
}

#[test]
fn messages_follow_the_scan_flags() {
    let pr = pull_request();

    let commits_only = messages(&pr, &Inputs::default());
    assert_eq!(commits_only, vec!["scaffold timer 1h", "fix typo", "tests 30m"]);

    let everything = Inputs { scan_comments: true, scan_pull_request_body: true, ..Inputs::default() };
    assert_eq!(
        messages(&pr, &everything),
        vec!["scaffold timer 1h", "fix typo", "tests 30m", "reviewed in 15m", "Estimate: 3h"]
    );
}

#[test]
fn total_counts_missing_durations_as_zero() {
    assert_eq!(total_duration(["1h", "nothing", "30m"]), TimeDelta::minutes(90));
    assert_eq!(total_duration(Vec::<&str>::new()), TimeDelta::zero());
}

#[test]
fn retitle_replaces_the_previous_duration() {
    let retitle = retitle(&pull_request(), &Inputs::default());

    assert_eq!(retitle.pull_request_id, "PR_kwDOA");
    assert_eq!(retitle.previous_title, "[0h30m] • add timer");
    assert_eq!(retitle.total, TimeDelta::minutes(90));
    assert_eq!(retitle.title, "[1h30m] • add timer");
    assert!(retitle.is_changed());
}

#[test]
fn retitle_with_comments_body_and_custom_patterns() {
    let inputs = Inputs {
        duration_pattern: "h'h'm'm'".to_string(),
        title_pattern: ":title (:duration)".to_string(),
        scan_comments: true,
        scan_pull_request_body: true,
    };
    let mut pr = pull_request();
    pr.title = "add timer".to_string();

    let retitle = retitle(&pr, &inputs);
    assert_eq!(retitle.total, TimeDelta::minutes(4 * 60 + 45));
    assert_eq!(retitle.title, "add timer (4h45m)");
}

#[test]
fn retitle_is_stable_when_nothing_changed() {
    let mut pr = pull_request();
    pr.title = "[1h30m] • add timer".to_string();

    let retitle = retitle(&pr, &Inputs::default());
    assert_eq!(retitle.title, pr.title);
    assert!(!retitle.is_changed());
}

#[test]
fn update_request_body() {
    let retitle = retitle(&pull_request(), &Inputs::default());
    let body = serde_json::to_value(retitle.request()).unwrap();

    assert_eq!(body["query"], graphql::UPDATE_PULL_REQUEST_TITLE);
    assert_eq!(body["variables"]["title"], "[1h30m] • add timer");
    assert_eq!(body["variables"]["pullRequestId"], "PR_kwDOA");
}

#[test]
fn flags_are_true_only_for_true() {
    assert!(parse_flag("true"));
    assert!(!parse_flag("TRUE"));
    assert!(!parse_flag("yes"));
    assert!(!parse_flag(""));
}
