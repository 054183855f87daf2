use crate::layout::navigation::use_navigation;
use crate::routes::app_route::AppRoute;
use crate::routes::matcher::PathParams;
use crate::shared::icons;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_navigation();

    let items = vec![
        ("agents", AppRoute::Agents),
        ("threads", AppRoute::Threads),
        ("workflows", AppRoute::Workflows),
        ("triggers", AppRoute::WorkflowTriggers),
        ("users", AppRoute::Users),
    ];

    view! {
        <nav class="main-nav-bar">
            <ul>
                {items.into_iter().map(|(icon_key, route)| {
                    let is_active = move || {
                        nav.current.with(|c| c.as_ref().map(|i| i.path) == Some(route))
                    };
                    view! {
                        <li
                            class:active=is_active
                            on:click=move |_| nav.navigate_to(route, &PathParams::new(), None)
                        >
                            {icons::icon(icon_key)}
                            <span>{route.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
