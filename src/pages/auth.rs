//! Login / register page with role selection.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{RegisterRequest, Role};
use crate::state::auth::{AuthMode, AuthState};
use crate::state::session::SessionStore;
use crate::state::view::View;

/// Login and register forms. A successful login saves `(token, role)` to the
/// session store and switches to the dashboard for the selected role.
/// Registration is followed by an implicit login with the same credentials.
#[component]
pub fn AuthPage() -> impl IntoView {
    let store = expect_context::<Arc<dyn SessionStore>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let view = expect_context::<RwSignal<View>>();

    let mode = RwSignal::new(AuthMode::Login);
    let role = RwSignal::new(Role::Farmer);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    // Shared tail of both flows: persist the session and enter the dashboard.
    let finish_login = {
        let store = store.clone();
        move |token: &str, selected: Role| {
            store.save(token, selected);
            auth.update(|a| a.session = store.read());
            view.set(View::Dashboard(selected));
        }
    };

    let do_login = {
        let finish_login = finish_login.clone();
        move || {
            let finish_login = finish_login.clone();
            let username = {
                let email = email.get();
                if email.is_empty() { phone.get() } else { email }
            };
            let password = password.get();
            let selected = role.get();
            auth.update(|a| a.loading = true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                match api::login(&username, &password).await {
                    Ok(resp) => finish_login(&resp.access_token, selected),
                    Err(e) => error.set(e.to_string()),
                }
                auth.update(|a| a.loading = false);
            });
        }
    };

    let do_register = {
        let finish_login = finish_login.clone();
        move || {
            let finish_login = finish_login.clone();
            let account = RegisterRequest {
                name: name.get(),
                email: email.get(),
                phone: phone.get(),
                password: password.get(),
                role: role.get(),
            };
            auth.update(|a| a.loading = true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                let username = if account.email.is_empty() {
                    account.phone.clone()
                } else {
                    account.email.clone()
                };
                let selected = account.role;
                // Register, then log in with the same credentials.
                let outcome = match api::register(&account).await {
                    Ok(()) => api::login(&username, &account.password).await,
                    Err(e) => Err(e),
                };
                match outcome {
                    Ok(resp) => finish_login(&resp.access_token, selected),
                    Err(e) => error.set(e.to_string()),
                }
                auth.update(|a| a.loading = false);
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match mode.get() {
            AuthMode::Login => do_login(),
            AuthMode::Register => do_register(),
        }
    };

    let tab_class = move |m: AuthMode| {
        if mode.get() == m {
            "auth-page__tab auth-page__tab--active"
        } else {
            "auth-page__tab"
        }
    };

    let button_label = move || {
        if auth.get().loading {
            "Please wait..."
        } else if mode.get() == AuthMode::Login {
            "Login"
        } else {
            "Create account"
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <div class="auth-page__tabs">
                    <button class=move || tab_class(AuthMode::Login) on:click=move |_| mode.set(AuthMode::Login)>
                        "Login"
                    </button>
                    <button class=move || tab_class(AuthMode::Register) on:click=move |_| mode.set(AuthMode::Register)>
                        "Register"
                    </button>
                </div>

                <Show when=move || mode.get() == AuthMode::Register>
                    <div class="auth-page__roles">
                        {Role::ALL
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <button
                                        class=move || {
                                            if role.get() == r { "role-btn role-btn--active" } else { "role-btn" }
                                        }
                                        on:click=move |_| role.set(r)
                                    >
                                        {r.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Show>

                <form class="auth-page__form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <input
                            class="auth-page__input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="auth-page__input"
                        type="text"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-page__input"
                        type="text"
                        placeholder="Phone"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-page__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-page__error">{move || error.get()}</div>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || auth.get().loading>
                        {button_label}
                    </button>
                </form>
            </div>
        </div>
    }
}
