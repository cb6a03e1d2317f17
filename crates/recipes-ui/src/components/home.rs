use crate::components::use_bundle;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let bundle = use_bundle();
    html! {
        <section class="hero">
            <h1>{bundle.text("home.title", "")}</h1>
            <p class="muted">{bundle.text("home.body", "")}</p>
            <div class="actions">
                <Link<Route> to={Route::Recipes} classes={classes!("btn", "primary")}>
                    {bundle.text("home.cta_recipes", "Browse recipes")}
                </Link<Route>>
                <Link<Route> to={Route::Register} classes={classes!("btn", "ghost")}>
                    {bundle.text("home.cta_register", "Create an account")}
                </Link<Route>>
            </div>
        </section>
    }
}
