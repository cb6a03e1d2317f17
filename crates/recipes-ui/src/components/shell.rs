use crate::components::use_bundle;
use crate::i18n::LocaleCode;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) locale: LocaleCode,
    pub(crate) on_locale_change: Callback<LocaleCode>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_bundle();
    let active = use_route::<Route>();

    html! {
        <div class="app-shell">
            <header class="topbar">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    <strong>{bundle.text("brand", "Recipes")}</strong>
                </Link<Route>>
                <nav>
                    {for Route::all().into_iter().map(|route| {
                        let label = bundle.text(route.view().label_key(), "");
                        nav_item(route, &label, active)
                    })}
                </nav>
                <div class="locale-toggle">
                    {for LocaleCode::all().into_iter().map(|locale| {
                        let on_locale_change = props.on_locale_change.clone();
                        html! {
                            <button
                                class={classes!("ghost", (locale == props.locale).then_some("active"))}
                                onclick={Callback::from(move |_| on_locale_change.emit(locale))}
                            >
                                {locale.code().to_ascii_uppercase()}
                            </button>
                        }
                    })}
                </div>
            </header>
            <main>
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: Option<Route>) -> Html {
    let classes = classes!(
        "nav-item",
        if active == Some(route) {
            Some("active")
        } else {
            None
        }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
