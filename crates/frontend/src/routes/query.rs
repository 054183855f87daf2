//! Query string schemas for the routes that accept query parameters.

use serde::{Deserialize, Deserializer, Serialize};

/// Which query shape a route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySchema {
    /// The route takes no query parameters; validation always yields `None`.
    NoQuery,
    Agent,
    ThreadsList,
    Workflow,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Where the threads list was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadsFrom {
    Workflows,
    Agents,
    Users,
}

impl ThreadsFrom {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "workflows" => Some(ThreadsFrom::Workflows),
            "agents" => Some(ThreadsFrom::Agents),
            "users" => Some(ThreadsFrom::Users),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadsListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    /// An unrecognized value degrades to `None` instead of failing the query.
    #[serde(
        default,
        deserialize_with = "lenient_threads_from",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<ThreadsFrom>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

/// A validated query, tagged by the schema that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RouteQuery {
    Agent(AgentQuery),
    ThreadsList(ThreadsListQuery),
    Workflow(WorkflowQuery),
}

impl RouteQuery {
    pub fn as_agent(&self) -> Option<&AgentQuery> {
        match self {
            RouteQuery::Agent(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_threads_list(&self) -> Option<&ThreadsListQuery> {
        match self {
            RouteQuery::ThreadsList(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_workflow(&self) -> Option<&WorkflowQuery> {
        match self {
            RouteQuery::Workflow(q) => Some(q),
            _ => None,
        }
    }

    /// Serializes back to a query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(qs) => qs,
            Err(e) => {
                log::error!("Failed to serialize query params {:?}: {}", self, e);
                String::new()
            }
        }
    }
}

impl QuerySchema {
    /// Validates `search` (with or without the leading `?`) against the
    /// schema. Failures are logged and yield `None`, so callers must read
    /// `None` as "absent or invalid".
    pub fn parse(self, search: &str) -> Option<RouteQuery> {
        let query = search.trim_start_matches('?');
        let parsed = match self {
            QuerySchema::NoQuery => return None,
            QuerySchema::Agent => serde_qs::from_str(query).map(RouteQuery::Agent),
            QuerySchema::ThreadsList => serde_qs::from_str(query).map(RouteQuery::ThreadsList),
            QuerySchema::Workflow => serde_qs::from_str(query).map(RouteQuery::Workflow),
        };

        match parsed {
            Ok(q) => Some(q),
            Err(e) => {
                log::error!("Failed to parse query params {}: {}", search, e);
                None
            }
        }
    }
}

/// Maps an unknown single `from` value to `None`. A repeated `from` key is
/// rejected by `serde_qs` before this runs, so the whole query fails and
/// `parse` yields `None` rather than an object with `from: None`.
fn lenient_threads_from<'de, D>(deserializer: D) -> Result<Option<ThreadsFrom>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ThreadsFrom::from_code))
}
