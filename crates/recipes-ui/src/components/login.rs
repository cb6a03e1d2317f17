use crate::components::form::{TextField, bind, error_notice};
use crate::components::use_bundle;
use crate::logic::{FormError, validate_login};
use crate::routes::Route;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let bundle = use_bundle();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<FormError>);
    let accepted = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let accepted = accepted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_login(&email, &password) {
                Ok(input) => {
                    console::info!("login form validated", input.email);
                    error.set(None);
                    accepted.set(true);
                }
                Err(err) => {
                    error.set(Some(err));
                    accepted.set(false);
                }
            }
        })
    };

    html! {
        <section class="auth-page">
            <h2>{bundle.text("login.title", "Log in")}</h2>
            <p class="muted">{bundle.text("login.body", "")}</p>
            <form class="auth-form" {onsubmit}>
                <TextField
                    label={bundle.text("form.email", "Email")}
                    kind="email"
                    autocomplete="username"
                    value={(*email).clone()}
                    on_input={bind(&email)}
                />
                <TextField
                    label={bundle.text("form.password", "Password")}
                    kind="password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    on_input={bind(&password)}
                />
                {error_notice(&bundle, *error)}
                <button type="submit" class="btn primary">{bundle.text("login.submit", "Log in")}</button>
            </form>
            {if *accepted {
                html! { <p class="notice success">{bundle.text("login.done", "")}</p> }
            } else { html! {} }}
            <Link<Route> to={Route::Register} classes={classes!("muted")}>
                {bundle.text("login.to_register", "Need an account?")}
            </Link<Route>>
        </section>
    }
}
