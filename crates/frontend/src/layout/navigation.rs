use crate::routes::app_route::AppRoute;
use crate::routes::matcher::PathParams;
use crate::routes::query::RouteQuery;
use crate::routes::route_service::{self, RawPathParams, RouteInfo};
use leptos::prelude::*;
use url::Url;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Current route of the console, kept in sync with the browser location.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    /// `None` when the location matches no known route.
    pub current: RwSignal<Option<RouteInfo>>,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// Resolves the initial location and follows back/forward navigation.
    pub fn init_router_integration(&self) {
        self.sync_from_location();

        let this = *self;
        let on_popstate = Closure::wrap(Box::new(move |_: web_sys::Event| {
            this.sync_from_location();
        }) as Box<dyn FnMut(_)>);

        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "popstate",
                on_popstate.as_ref().unchecked_ref(),
            );
            on_popstate.forget();
        }
    }

    pub fn navigate(&self, href: &str) {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if let Err(e) =
                    history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))
                {
                    log::warn!("navigate {}: {:?}", href, e);
                }
            }
        }
        self.sync_from_location();
    }

    pub fn navigate_to(&self, route: AppRoute, params: &PathParams, query: Option<&RouteQuery>) {
        self.navigate(&route_service::href(route, params, query));
    }

    fn sync_from_location(&self) {
        let info = current_url()
            .and_then(|url| route_service::get_unknown_route_info(&url, &RawPathParams::new()));
        match &info {
            Some(i) => log::debug!("route resolved: {} {:?}", i.path, i.path_params),
            None => log::debug!("route not found"),
        }
        self.current.set(info);
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext not found in context")
}

fn current_url() -> Option<Url> {
    let href = window()?.location().href().ok()?;
    match Url::parse(&href) {
        Ok(url) => Some(url),
        Err(e) => {
            log::error!("bad location {}: {}", href, e);
            None
        }
    }
}
