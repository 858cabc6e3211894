//! GraphQL documents, request bodies and response types.
//!
//! Requests are built as `{"query": ..., "variables": {...}}` bodies; sending
//! them is up to the caller.

use super::event::Event;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};

macro_rules! pull_request_fields {
    () => {
        "
    id
    title
    bodyText
    comments(first: 100) {
        nodes {
            bodyText
        }
    }
    commits(first: 250) {
        nodes {
            commit {
                message
            }
        }
    }
"
    };
}

/// Look up one pull request by number.
pub const GET_PULL_REQUEST: &str = concat!(
    "
query ($number: Int!, $name: String!, $owner: String!) {
    repository(name: $name, owner: $owner) {
        pullRequest(number: $number) {",
    pull_request_fields!(),
    "        }
    }
}
"
);

/// Look up the first pull request whose head is `$branch`.
pub const GET_PULL_REQUESTS: &str = concat!(
    "
query ($branch: String!, $name: String!, $owner: String!) {
    repository(name: $name, owner: $owner) {
        pullRequests(headRefName: $branch, first: 1) {
            nodes {",
    pull_request_fields!(),
    "            }
        }
    }
}
"
);

pub const UPDATE_PULL_REQUEST_TITLE: &str = "
mutation ($title: String!, $pullRequestId: String!) {
    updatePullRequest(input: { title: $title, pullRequestId: $pullRequestId }) {
        __typename
    }
}
";

/// A GraphQL request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    pub query: &'static str,
    pub variables: RequestVariables,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestVariables {
    ByNumber {
        number: u64,
        name: String,
        owner: String,
    },
    ByBranch {
        branch: String,
        name: String,
        owner: String,
    },
    UpdateTitle {
        title: String,
        #[serde(rename = "pullRequestId")]
        pull_request_id: String,
    },
}

/// The query that finds the pull request `event` refers to: by number when the
/// event carries one, otherwise by head branch.
pub fn lookup_request(event: &Event) -> Result<Request> {
    let repository = event.repository().ok_or(Error::MissingPayloadField("repository"))?;

    if let Some(number) = event.pull_request_number() {
        debug!("looking up pull request #{number} in {}/{}", repository.owner, repository.name);
        return Ok(Request {
            query: GET_PULL_REQUEST,
            variables: RequestVariables::ByNumber { number, name: repository.name, owner: repository.owner },
        });
    }

    let branch = event.branch_name().ok_or(Error::MissingPayloadField("pull request number or branch"))?;
    debug!("looking up pull request for branch {branch} in {}/{}", repository.owner, repository.name);
    Ok(Request {
        query: GET_PULL_REQUESTS,
        variables: RequestVariables::ByBranch {
            branch: branch.to_string(),
            name: repository.name,
            owner: repository.owner,
        },
    })
}

pub fn update_title_request(pull_request_id: &str, title: &str) -> Request {
    Request {
        query: UPDATE_PULL_REQUEST_TITLE,
        variables: RequestVariables::UpdateTitle {
            title: title.to_string(),
            pull_request_id: pull_request_id.to_string(),
        },
    }
}

// --- Response ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body_text: String,
    #[serde(default)]
    pub comments: Connection<Comment>,
    #[serde(default)]
    pub commits: Connection<CommitNode>,
}

/// A GraphQL connection; `null` nodes are kept as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub nodes: Vec<Option<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Connection { nodes: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub body_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitNode {
    pub commit: Commit,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Commit {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    pull_request: Option<PullRequest>,
    pull_requests: Option<Connection<PullRequest>>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    repository: RepositoryNode,
}

/// Responses arrive either as a full GraphQL envelope or as the bare `data`
/// object some clients unwrap to.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped { data: QueryData },
    Bare(QueryData),
}

/// Extract the pull request from a lookup response.
pub fn parse_response(json: &str) -> Result<PullRequest> {
    let data = match serde_json::from_str::<Envelope>(json)? {
        Envelope::Wrapped { data } | Envelope::Bare(data) => data,
    };
    let repository = data.repository;

    repository
        .pull_request
        .or_else(|| repository.pull_requests.and_then(|connection| connection.nodes.into_iter().next().flatten()))
        .ok_or(Error::MissingPullRequest)
}
