use crate::domain::a001_email_receiver::ui::list::WorkflowEmailTriggers;
use crate::layout::navbar::Navbar;
use crate::layout::navigation::{use_navigation, NavigationContext};
use crate::layout::Shell;
use crate::routes::app_route::AppRoute;
use crate::routes::matcher::PathParams;
use crate::routes::route_service::RouteInfo;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let nav = use_navigation();

    // Initialize router integration. This runs once when the component is created.
    nav.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=move || view! { <RoutedPage nav=nav /> }.into_any()
        />
    }
}

#[component]
fn RoutedPage(nav: NavigationContext) -> impl IntoView {
    move || match nav.current.get() {
        Some(info) => page_for(info),
        None => view! { <NotFound /> }.into_any(),
    }
}

fn page_for(info: RouteInfo) -> AnyView {
    match info.path {
        AppRoute::Workflow => view! { <WorkflowPage info=info /> }.into_any(),
        route => view! { <PlaceholderPage route=route /> }.into_any(),
    }
}

#[component]
fn WorkflowPage(info: RouteInfo) -> impl IntoView {
    let workflow_id = info.param("workflow").unwrap_or_default().to_string();
    let thread_id = info
        .query
        .as_ref()
        .and_then(|q| q.as_workflow())
        .and_then(|q| q.thread_id.clone());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{format!("Workflow {}", workflow_id)}</h1>
                </div>
            </div>
            {thread_id.map(|t| view! { <p class="text-muted">{format!("Thread: {}", t)}</p> })}
            <WorkflowEmailTriggers workflow_id=workflow_id />
        </div>
    }
}

#[component]
fn PlaceholderPage(route: AppRoute) -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{route.title()}</h1>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let nav = use_navigation();
    view! {
        <div class="page">
            <h1 class="header__title">"Page not found"</h1>
            <button class="button button--secondary" on:click=move |_| nav.navigate_to(AppRoute::Root, &PathParams::new(), None)>
                "Go home"
            </button>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
