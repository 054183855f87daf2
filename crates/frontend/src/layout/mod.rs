pub mod navbar;
pub mod navigation;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +----------+------------------------------+
/// |  Navbar  |           Content            |
/// |  (Left)  |          (Center)            |
/// +----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside class="app-left">
                    {left()}
                </aside>
                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
