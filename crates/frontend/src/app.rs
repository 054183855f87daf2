use crate::layout::navigation::NavigationContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Current route, resolved from the browser location.
    provide_context(NavigationContext::new());

    view! {
        <AppRoutes />
    }
}
