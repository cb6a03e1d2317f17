//! Root component and boot sequence.
//!
//! # Design
//! - `run_app` reads router settings from the mount element once and passes them down
//!   as props; nothing else holds router state.
//! - `RouterHost` picks the history flavour and maps each route to its page.

use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::recipes::RecipesPage;
use crate::components::register::RegisterPage;
use crate::components::shell::AppShell;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use crate::router::{ConfigError, HistoryStrategy, RouterConfig};
use crate::routes::Route;
use gloo::console;
use gloo::utils::{document, window};
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

const ROOT_ID: &str = "root";
const HISTORY_ATTR: &str = "data-history";
const BASENAME_ATTR: &str = "data-basename";

#[derive(Properties, PartialEq)]
pub(crate) struct RecipesAppProps {
    pub(crate) config: RouterConfig,
}

#[function_component(RecipesApp)]
pub(crate) fn recipes_app(props: &RecipesAppProps) -> Html {
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| locale.set(next))
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <RouterHost config={props.config.clone()} locale={*locale} on_locale_change={set_locale} />
        </ContextProvider<TranslationBundle>>
    }
}

#[derive(Properties, PartialEq)]
struct RouterHostProps {
    config: RouterConfig,
    locale: LocaleCode,
    on_locale_change: Callback<LocaleCode>,
}

#[function_component(RouterHost)]
fn router_host(props: &RouterHostProps) -> Html {
    let basename = props.config.basename.clone().map(AttrValue::from);
    let body = html! {
        <AppShell locale={props.locale} on_locale_change={props.on_locale_change.clone()}>
            <Switch<Route> render={switch} />
        </AppShell>
    };
    match props.config.history {
        HistoryStrategy::Browser => html! {
            <BrowserRouter basename={basename}>{body}</BrowserRouter>
        },
        HistoryStrategy::Hash => html! {
            <HashRouter basename={basename}>{body}</HashRouter>
        },
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Recipes => html! { <RecipesPage /> },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let root = document().get_element_by_id(ROOT_ID);
    let config = root
        .as_ref()
        .map_or_else(RouterConfig::default, load_router_config);
    console::info!(
        "router configured",
        config.history.as_str(),
        config.href(Route::Home)
    );
    let props = RecipesAppProps { config };
    if let Some(root) = root {
        yew::Renderer::<RecipesApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<RecipesApp>::with_props(props).render();
    }
}

fn load_router_config(root: &Element) -> RouterConfig {
    let history = root.get_attribute(HISTORY_ATTR);
    let basename = root.get_attribute(BASENAME_ATTR);
    RouterConfig::from_attrs(history.as_deref(), basename.as_deref()).unwrap_or_else(|err| {
        log_config_error(&err);
        RouterConfig::default()
    })
}

fn log_config_error(err: &ConfigError) {
    console::error!("router config rejected, using defaults", err.to_string());
}

fn load_locale() -> LocaleCode {
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}
