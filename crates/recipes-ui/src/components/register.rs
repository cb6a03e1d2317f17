use crate::components::form::{TextField, bind, error_notice};
use crate::components::use_bundle;
use crate::logic::{FormError, validate_register};
use crate::routes::Route;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(RegisterPage)]
pub(crate) fn register_page() -> Html {
    let bundle = use_bundle();
    let email = use_state(String::new);
    let name = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<FormError>);
    let accepted = use_state(|| None::<String>);

    let onsubmit = {
        let email = email.clone();
        let name = name.clone();
        let password = password.clone();
        let error = error.clone();
        let accepted = accepted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_register(&email, &name, &password) {
                Ok(input) => {
                    console::info!("registration form validated", input.email);
                    error.set(None);
                    accepted.set(Some(input.name));
                }
                Err(err) => {
                    error.set(Some(err));
                    accepted.set(None);
                }
            }
        })
    };

    html! {
        <section class="auth-page">
            <h2>{bundle.text("register.title", "Create an account")}</h2>
            <p class="muted">{bundle.text("register.body", "")}</p>
            <form class="auth-form" {onsubmit}>
                <TextField
                    label={bundle.text("form.email", "Email")}
                    kind="email"
                    autocomplete="email"
                    value={(*email).clone()}
                    on_input={bind(&email)}
                />
                <TextField
                    label={bundle.text("form.name", "Name")}
                    kind="text"
                    autocomplete="name"
                    value={(*name).clone()}
                    on_input={bind(&name)}
                />
                <TextField
                    label={bundle.text("form.password", "Password")}
                    kind="password"
                    autocomplete="new-password"
                    value={(*password).clone()}
                    on_input={bind(&password)}
                />
                {error_notice(&bundle, *error)}
                <button type="submit" class="btn primary">{bundle.text("register.submit", "Register")}</button>
            </form>
            {if let Some(name) = (*accepted).as_deref() {
                html! {
                    <div class="notice success">
                        <p>{bundle.text("register.done", "").replace("{name}", name)}</p>
                        <Link<Route> to={Route::Login}>{bundle.text("register.to_login", "Log in")}</Link<Route>>
                    </div>
                }
            } else { html! {} }}
        </section>
    }
}
