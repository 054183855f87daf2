//! Route resolution over the static route table.
//!
//! The table maps every [`AppRoute`] to a compiled [`RouteMatcher`]; query
//! shapes come from [`AppRoute::query_schema`]. The table is built lazily
//! once and never mutated.

use super::app_route::AppRoute;
use super::matcher::{PathParams, RouteMatcher};
use super::query::RouteQuery;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use url::Url;

/// Path parameters as handed over by the caller's router; a parameter that
/// did not bind is `None`.
pub type RawPathParams = BTreeMap<String, Option<String>>;

#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub route: AppRoute,
    pub matcher: RouteMatcher,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub path: AppRoute,
    /// `None` when the route takes no query or validation failed.
    pub query: Option<RouteQuery>,
    pub path_params: PathParams,
}

impl RouteInfo {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }
}

static ROUTE_TABLE: Lazy<Vec<RouteEntry>> = Lazy::new(|| {
    AppRoute::ALL
        .into_iter()
        .filter_map(|route| match RouteMatcher::compile(route.template()) {
            Ok(matcher) => Some(RouteEntry { route, matcher }),
            Err(e) => {
                log::error!("route table: skipping {:?}: {}", route, e);
                None
            }
        })
        .collect()
});

pub fn route_table() -> &'static [RouteEntry] {
    &ROUTE_TABLE
}

fn matcher_for(route: AppRoute) -> Option<&'static RouteMatcher> {
    route_table()
        .iter()
        .find(|entry| entry.route == route)
        .map(|entry| &entry.matcher)
}

/// Drops unbound parameters; bound values pass through unchanged.
pub fn coerce_path_params(params: &RawPathParams) -> PathParams {
    params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.clone(), v.clone())))
        .collect()
}

/// Resolves a URL whose route is already known.
pub fn get_route_info(route: AppRoute, url: &Url, params: &RawPathParams) -> RouteInfo {
    RouteInfo {
        path: route,
        query: get_query_params(route, url.query().unwrap_or_default()),
        path_params: coerce_path_params(params),
    }
}

/// Resolves an arbitrary URL against the table. The first route in
/// declaration order whose matcher accepts the pathname wins.
pub fn get_unknown_route_info(url: &Url, params: &RawPathParams) -> Option<RouteInfo> {
    resolve_pathname(url.path(), url.query().unwrap_or_default(), params)
}

/// Same as [`get_unknown_route_info`] over a bare pathname and query string.
/// Captured parameters are overlaid by the caller's bound parameters.
pub fn resolve_pathname(pathname: &str, search: &str, params: &RawPathParams) -> Option<RouteInfo> {
    route_table().iter().find_map(|entry| {
        let mut path_params = entry.matcher.captures(pathname)?;
        path_params.extend(coerce_path_params(params));
        Some(RouteInfo {
            path: entry.route,
            query: get_query_params(entry.route, search),
            path_params,
        })
    })
}

/// Validates a query string against the route's schema, ignoring the path.
pub fn get_query_params(route: AppRoute, search: &str) -> Option<RouteQuery> {
    route.query_schema().parse(search)
}

/// Builds a concrete pathname for `route`.
pub fn build_path(route: AppRoute, params: &PathParams) -> String {
    match matcher_for(route) {
        Some(matcher) => matcher.build(params),
        None => route.template().to_string(),
    }
}

/// Builds a pathname plus query string suitable for navigation.
pub fn href(route: AppRoute, params: &PathParams, query: Option<&RouteQuery>) -> String {
    let path = build_path(route, params);
    match query.map(RouteQuery::to_query_string) {
        Some(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::query::{QuerySchema, ThreadsFrom, ThreadsListQuery, WorkflowQuery};
    use contracts::enums::trigger_type::TriggerType;

    fn url(path_and_query: &str) -> Url {
        Url::parse(&format!("http://localhost:8080{}", path_and_query)).unwrap()
    }

    fn raw(pairs: &[(&str, Option<&str>)]) -> RawPathParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    fn params(pairs: &[(&str, &str)]) -> PathParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_table_covers_every_route() {
        let routes: Vec<_> = route_table().iter().map(|e| e.route).collect();
        assert_eq!(routes, AppRoute::ALL.to_vec());
    }

    #[test]
    fn test_every_template_resolves_to_itself() {
        for route in AppRoute::ALL {
            let concrete: PathParams = route
                .param_names()
                .into_iter()
                .map(|name| (name.to_string(), "42".to_string()))
                .collect();
            let pathname = build_path(route, &concrete);
            let info = resolve_pathname(&pathname, "", &RawPathParams::new())
                .unwrap_or_else(|| panic!("{} did not resolve", pathname));
            assert_eq!(info.path, route, "pathname {}", pathname);
            assert_eq!(info.path_params, concrete);
        }
    }

    #[test]
    fn test_unknown_workflow_url() {
        let info = get_unknown_route_info(&url("/workflows/42"), &RawPathParams::new()).unwrap();
        assert_eq!(info.path, AppRoute::Workflow);
        assert_eq!(info.path_params, params(&[("workflow", "42")]));
        assert_eq!(info.param("workflow"), Some("42"));
        assert_eq!(info.query, Some(RouteQuery::Workflow(WorkflowQuery::default())));
    }

    #[test]
    fn test_unknown_url_with_query() {
        let info = get_unknown_route_info(
            &url("/threads?workflowId=w1&from=workflows"),
            &RawPathParams::new(),
        )
        .unwrap();
        assert_eq!(info.path, AppRoute::Threads);
        let q = info.query.as_ref().and_then(RouteQuery::as_threads_list).unwrap();
        assert_eq!(q.workflow_id.as_deref(), Some("w1"));
        assert_eq!(q.from, Some(ThreadsFrom::Workflows));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(
            get_unknown_route_info(&url("/does-not-exist"), &RawPathParams::new()),
            None
        );
        assert_eq!(
            get_unknown_route_info(&url("/workflows/"), &RawPathParams::new()),
            None
        );
    }

    #[test]
    fn test_static_sibling_wins_over_param() {
        let info = resolve_pathname(
            "/workflow-triggers/schedule/create",
            "",
            &RawPathParams::new(),
        )
        .unwrap();
        assert_eq!(info.path, AppRoute::ScheduleTriggerCreate);
        assert!(info.path_params.is_empty());

        let info = resolve_pathname("/workflow-triggers/email/er1", "", &RawPathParams::new())
            .unwrap();
        assert_eq!(info.path, AppRoute::EmailReceiver);
        assert_eq!(info.param("receiver"), Some("er1"));
    }

    #[test]
    fn test_trigger_routes_resolve_to_themselves() {
        for trigger_type in TriggerType::all() {
            let create = AppRoute::trigger_create(trigger_type);
            let info = resolve_pathname(
                &build_path(create, &PathParams::new()),
                "",
                &RawPathParams::new(),
            )
            .unwrap();
            assert_eq!(info.path, create, "{} create route", trigger_type);
            assert!(info.path_params.is_empty());

            let details = AppRoute::trigger_details(trigger_type);
            let name = details.param_names()[0];
            let info = resolve_pathname(
                &build_path(details, &params(&[(name, "t1")])),
                "",
                &RawPathParams::new(),
            )
            .unwrap();
            assert_eq!(info.path, details, "{} details route", trigger_type);
            assert_eq!(info.param(name), Some("t1"));

            let list = AppRoute::trigger_list(trigger_type);
            let info = resolve_pathname(list.template(), "", &RawPathParams::new()).unwrap();
            assert_eq!(info.path, AppRoute::WorkflowTriggers);
        }
    }

    #[test]
    fn test_root_url() {
        let info = get_unknown_route_info(&url("/"), &RawPathParams::new()).unwrap();
        assert_eq!(info.path, AppRoute::Root);
        assert_eq!(info.query, None);
    }

    #[test]
    fn test_caller_params_overlay_captures() {
        let info = resolve_pathname(
            "/agents/a1",
            "",
            &raw(&[("agent", Some("a1-router")), ("unbound", None)]),
        )
        .unwrap();
        assert_eq!(info.path_params, params(&[("agent", "a1-router")]));
    }

    #[test]
    fn test_get_route_info_known_path() {
        let info = get_route_info(
            AppRoute::Workflow,
            &url("/workflows/42?threadId=t9"),
            &raw(&[("workflow", Some("42"))]),
        );
        assert_eq!(info.path, AppRoute::Workflow);
        assert_eq!(info.path_params, params(&[("workflow", "42")]));
        assert_eq!(
            info.query,
            Some(RouteQuery::Workflow(WorkflowQuery {
                thread_id: Some("t9".into())
            }))
        );
    }

    #[test]
    fn test_get_route_info_drops_unbound_params() {
        let info = get_route_info(
            AppRoute::Users,
            &url("/users?page=2"),
            &raw(&[("user", None)]),
        );
        assert!(info.path_params.is_empty());
        assert_eq!(info.query, None);
    }

    #[test]
    fn test_get_query_params() {
        for route in AppRoute::ALL {
            if route.query_schema() == QuerySchema::NoQuery {
                assert_eq!(get_query_params(route, "?agentId=1&threadId=2"), None);
            }
        }
        assert_eq!(
            get_query_params(AppRoute::Threads, "agentId=123&from=agents"),
            Some(RouteQuery::ThreadsList(ThreadsListQuery {
                agent_id: Some("123".into()),
                from: Some(ThreadsFrom::Agents),
                ..Default::default()
            }))
        );
        let bogus = get_query_params(AppRoute::Threads, "from=bogus").unwrap();
        assert_eq!(bogus.as_threads_list().unwrap().from, None);
    }

    #[test]
    fn test_href() {
        let q = RouteQuery::Workflow(WorkflowQuery {
            thread_id: Some("t1".into()),
        });
        assert_eq!(
            href(AppRoute::Workflow, &params(&[("workflow", "w1")]), Some(&q)),
            "/workflows/w1?threadId=t1"
        );
        let empty = RouteQuery::Workflow(WorkflowQuery::default());
        assert_eq!(
            href(AppRoute::Workflow, &params(&[("workflow", "w1")]), Some(&empty)),
            "/workflows/w1"
        );
        assert_eq!(href(AppRoute::Tools, &PathParams::new(), None), "/tools");
    }
}
