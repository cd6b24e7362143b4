#![recursion_limit = "256"]
pub mod settings;
mod navigator;
mod components;

use std::rc::Rc;
use gloo_console::info;
use yew::prelude::*;
use wasm_bindgen::{
    JsCast,
    UnwrapThrowExt,
    closure::Closure,
};
use mandap_query::{Navigator, SearchParams, build_search_url, parse_search_query};

use navigator::BrowserNavigator;
use components::{SearchBar, VendorsPage};


/// Views of the application, derived from the location path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Vendors,
}

impl Route {
    /// Map a location path to its view, falling back to the home page
    fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/') == settings::VENDORS_PATH {
            Self::Vendors
        } else {
            Self::Home
        }
    }
}


pub enum AppAction {
    /// Navigate to the vendor listing with the given criteria
    SubmitSearch(SearchParams),
    /// Load given history state
    LoadHistoryState,
}

#[derive(Clone)]
pub struct AppState {
    /// Navigation service, injected once at startup
    navigator: Rc<dyn Navigator>,
    /// Current view
    route: Route,
    /// Search criteria of the current location
    params: SearchParams,
}

impl AppState {
    fn new(navigator: Rc<dyn Navigator>) -> Self {
        Self {
            navigator,
            route: Route::Home,
            params: SearchParams::default(),
        }
    }

    /// Derive route and criteria from the current location
    fn from_location(navigator: Rc<dyn Navigator>) -> Self {
        let route = Route::from_path(&navigator.current_path());
        let params = parse_search_query(&navigator.current_query());
        Self { navigator, route, params }
    }

    /// Push the search URL to history and switch to the vendor listing
    fn submit_and_push(self: Rc<Self>, params: SearchParams) -> Rc<Self> {
        let url = build_search_url(settings::VENDORS_PATH, &params);
        self.navigator.navigate(&url);
        Self {
            navigator: self.navigator.clone(),
            route: Route::Vendors,
            params,
        }.into()
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        match action {
            AppAction::SubmitSearch(params) => self.submit_and_push(params),
            AppAction::LoadHistoryState => Self::from_location(self.navigator.clone()).into(),
        }
    }
}


/// Context shared with sub-components
#[derive(Clone)]
pub struct AppContext {
    pub navigator: Rc<dyn Navigator>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.navigator, &other.navigator)
    }
}


#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(|| AppState::new(Rc::new(BrowserNavigator)));

    // Load the location once the view is attached
    use_effect_with((), {
        let state = state.clone();
        move |_| state.dispatch(AppAction::LoadHistoryState)
    });

    // Setup listener for history change
    use_effect_with((), {
        let state = state.clone();
        move |_| {
            let window = web_sys::window().unwrap_throw();
            let listener: Closure<dyn FnMut()> = Closure::new(move || state.dispatch(AppAction::LoadHistoryState));
            window.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()).unwrap_throw();

            move || drop(listener)
        }
    });

    let on_search = Callback::from({
        let state = state.clone();
        move |params: SearchParams| {
            info!(format!("search vendors: {:?}", params));
            state.dispatch(AppAction::SubmitSearch(params));
        }
    });

    let context = AppContext { navigator: state.navigator.clone() };

    html! {
        <ContextProvider<AppContext> {context}>
            {
                match state.route {
                    Route::Home => html! {
                        <div id="home">
                            <h1>{ "Find vendors for your wedding" }</h1>
                            <SearchBar on_search={on_search.clone()} />
                        </div>
                    },
                    Route::Vendors => html! {
                        <VendorsPage params={state.params.clone()} {on_search} />
                    },
                }
            }
        </ContextProvider<AppContext>>
    }
}
