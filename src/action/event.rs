use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Events a retitle reacts to. Anything else is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PullRequest,
    IssueComment,
    Push,
}

impl EventKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pull_request" => Some(EventKind::PullRequest),
            "issue_comment" => Some(EventKind::IssueComment),
            "push" => Some(EventKind::Push),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EventKind::PullRequest => "pull_request",
            EventKind::IssueComment => "issue_comment",
            EventKind::Push => "push",
        }
    }
}

/// The subset of a webhook payload this tool reads. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Payload {
    pub pull_request: Option<PullRequestRef>,
    pub issue: Option<IssueRef>,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub repository: Option<RepositoryRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestRef {
    pub number: Option<u64>,
    pub head: Option<HeadRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadRef {
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueRef {
    pub number: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryRef {
    pub name: Option<String>,
    pub owner: Option<OwnerRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerRef {
    pub name: Option<String>,
    pub login: Option<String>,
}

/// Repository coordinates for GraphQL lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub owner: String,
}

/// A supported event and its payload.
#[derive(Debug, Clone)]
pub struct Event {
    pub kind: EventKind,
    pub payload: Payload,
}

impl Event {
    fn kind(name: &str) -> Result<EventKind> {
        EventKind::from_name(name).ok_or_else(|| Error::UnsupportedEvent(name.to_string()))
    }

    /// Build an event from its name and JSON payload. The name is checked
    /// first, so unsupported events never need a valid payload.
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        let kind = Self::kind(name)?;
        let payload = serde_json::from_str(json)?;
        Ok(Event { kind, payload })
    }

    /// Read the payload from `path` (what `GITHUB_EVENT_PATH` points to).
    pub fn load(name: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Self::kind(name)?;
        let json = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        Self::from_json(name, &json)
    }

    /// Head branch of the pull request, or the pushed branch.
    pub fn branch_name(&self) -> Option<&str> {
        match self.kind {
            EventKind::PullRequest => self.payload.pull_request.as_ref()?.head.as_ref()?.git_ref.as_deref(),
            EventKind::Push => {
                let git_ref = self.payload.git_ref.as_deref()?;
                Some(git_ref.strip_prefix("refs/heads/").unwrap_or(git_ref))
            }
            EventKind::IssueComment => None,
        }
    }

    /// Pull-request number, when the event carries one.
    pub fn pull_request_number(&self) -> Option<u64> {
        match self.kind {
            EventKind::PullRequest => self.payload.pull_request.as_ref()?.number,
            EventKind::IssueComment => self.payload.issue.as_ref()?.number,
            EventKind::Push => None,
        }
    }

    /// Repository name and owner; the owner falls back from `name` to `login`.
    pub fn repository(&self) -> Option<Repository> {
        let repository = self.payload.repository.as_ref()?;
        let owner = repository.owner.as_ref()?;
        Some(Repository {
            name: repository.name.clone()?,
            owner: owner.name.clone().or_else(|| owner.login.clone())?,
        })
    }
}
