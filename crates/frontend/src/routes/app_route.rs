//! Closed set of route identifiers known to the console.
//!
//! Every screen of the client has exactly one [`AppRoute`] variant. Its path
//! template and permitted query shape are given by exhaustive matches, so a
//! new variant does not compile until both are declared.

use super::query::QuerySchema;
use contracts::enums::trigger_type::TriggerType;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AppRoute {
    /// Empty pathname, the index route before normalization to `/`.
    Index,
    Root,
    Agents,
    Agent,
    Debug,
    Home,
    ModelProviders,
    Thread,
    Threads,
    Tools,
    Users,
    WorkflowTriggers,
    ScheduleTriggerCreate,
    ScheduleTrigger,
    WebhookCreate,
    Webhook,
    EmailReceiverCreate,
    EmailReceiver,
    Workflows,
    Workflow,
}

impl AppRoute {
    /// All routes in table declaration order. Resolution of an unknown URL
    /// walks this order and stops at the first match, so static templates
    /// (`.../create`) must precede the parameterized sibling.
    pub const ALL: [AppRoute; 20] = [
        AppRoute::Index,
        AppRoute::Root,
        AppRoute::Agents,
        AppRoute::Agent,
        AppRoute::Debug,
        AppRoute::Home,
        AppRoute::ModelProviders,
        AppRoute::Thread,
        AppRoute::Threads,
        AppRoute::Tools,
        AppRoute::Users,
        AppRoute::WorkflowTriggers,
        AppRoute::ScheduleTriggerCreate,
        AppRoute::ScheduleTrigger,
        AppRoute::WebhookCreate,
        AppRoute::Webhook,
        AppRoute::EmailReceiverCreate,
        AppRoute::EmailReceiver,
        AppRoute::Workflows,
        AppRoute::Workflow,
    ];

    pub fn template(&self) -> &'static str {
        match self {
            AppRoute::Index => "",
            AppRoute::Root => "/",
            AppRoute::Agents => "/agents",
            AppRoute::Agent => "/agents/:agent",
            AppRoute::Debug => "/debug",
            AppRoute::Home => "/home",
            AppRoute::ModelProviders => "/model-providers",
            AppRoute::Thread => "/threads/:id",
            AppRoute::Threads => "/threads",
            AppRoute::Tools => "/tools",
            AppRoute::Users => "/users",
            AppRoute::WorkflowTriggers => "/workflow-triggers",
            AppRoute::ScheduleTriggerCreate => "/workflow-triggers/schedule/create",
            AppRoute::ScheduleTrigger => "/workflow-triggers/schedule/:trigger",
            AppRoute::WebhookCreate => "/workflow-triggers/webhooks/create",
            AppRoute::Webhook => "/workflow-triggers/webhooks/:webhook",
            AppRoute::EmailReceiverCreate => "/workflow-triggers/email/create",
            AppRoute::EmailReceiver => "/workflow-triggers/email/:receiver",
            AppRoute::Workflows => "/workflows",
            AppRoute::Workflow => "/workflows/:workflow",
        }
    }

    pub fn query_schema(&self) -> QuerySchema {
        match self {
            AppRoute::Agent => QuerySchema::Agent,
            AppRoute::Threads => QuerySchema::ThreadsList,
            AppRoute::Workflow => QuerySchema::Workflow,
            AppRoute::Index
            | AppRoute::Root
            | AppRoute::Agents
            | AppRoute::Debug
            | AppRoute::Home
            | AppRoute::ModelProviders
            | AppRoute::Thread
            | AppRoute::Tools
            | AppRoute::Users
            | AppRoute::WorkflowTriggers
            | AppRoute::ScheduleTriggerCreate
            | AppRoute::ScheduleTrigger
            | AppRoute::WebhookCreate
            | AppRoute::Webhook
            | AppRoute::EmailReceiverCreate
            | AppRoute::EmailReceiver
            | AppRoute::Workflows => QuerySchema::NoQuery,
        }
    }

    /// Page title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Index | AppRoute::Root | AppRoute::Home => "Home",
            AppRoute::Agents => "Agents",
            AppRoute::Agent => "Agent",
            AppRoute::Debug => "Debug",
            AppRoute::ModelProviders => "Model Providers",
            AppRoute::Thread => "Thread",
            AppRoute::Threads => "Threads",
            AppRoute::Tools => "Tools",
            AppRoute::Users => "Users",
            AppRoute::WorkflowTriggers => "Workflow Triggers",
            AppRoute::ScheduleTriggerCreate => "Create Schedule",
            AppRoute::ScheduleTrigger => "Schedule",
            AppRoute::WebhookCreate => "Create Webhook",
            AppRoute::Webhook => "Webhook",
            AppRoute::EmailReceiverCreate => "Create Email Trigger",
            AppRoute::EmailReceiver => "Email Trigger",
            AppRoute::Workflows => "Workflows",
            AppRoute::Workflow => "Workflow",
        }
    }

    /// Names of the `:param` segments of the template, in order.
    pub fn param_names(&self) -> Vec<&'static str> {
        self.template()
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .collect()
    }

    pub fn from_template(template: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.template() == template)
    }

    /// Screen listing triggers of the given type.
    pub fn trigger_list(trigger_type: TriggerType) -> Self {
        match trigger_type {
            TriggerType::Email | TriggerType::Schedule | TriggerType::Webhook => {
                AppRoute::WorkflowTriggers
            }
        }
    }

    /// Screen creating a trigger of the given type.
    pub fn trigger_create(trigger_type: TriggerType) -> Self {
        match trigger_type {
            TriggerType::Email => AppRoute::EmailReceiverCreate,
            TriggerType::Schedule => AppRoute::ScheduleTriggerCreate,
            TriggerType::Webhook => AppRoute::WebhookCreate,
        }
    }

    /// Screen of one existing trigger of the given type.
    pub fn trigger_details(trigger_type: TriggerType) -> Self {
        match trigger_type {
            TriggerType::Email => AppRoute::EmailReceiver,
            TriggerType::Schedule => AppRoute::ScheduleTrigger,
            TriggerType::Webhook => AppRoute::Webhook,
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

impl FromStr for AppRoute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_template(s).ok_or_else(|| format!("Unknown route: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_templates_are_unique() {
        let templates: HashSet<_> = AppRoute::ALL.iter().map(|r| r.template()).collect();
        assert_eq!(templates.len(), AppRoute::ALL.len());
    }

    #[test]
    fn test_from_str() {
        for route in AppRoute::ALL {
            assert_eq!(route.to_string().parse::<AppRoute>(), Ok(route));
        }
        assert!("/nope".parse::<AppRoute>().is_err());
    }

    #[test]
    fn test_param_names() {
        assert_eq!(AppRoute::Workflow.param_names(), vec!["workflow"]);
        assert_eq!(AppRoute::ScheduleTrigger.param_names(), vec!["trigger"]);
        assert!(AppRoute::Threads.param_names().is_empty());
        assert!(AppRoute::Index.param_names().is_empty());
    }

    #[test]
    fn test_query_routes() {
        let with_query: Vec<_> = AppRoute::ALL
            .into_iter()
            .filter(|r| r.query_schema() != QuerySchema::NoQuery)
            .collect();
        assert_eq!(
            with_query,
            vec![AppRoute::Agent, AppRoute::Threads, AppRoute::Workflow]
        );
    }
}
