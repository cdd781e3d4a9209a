//! Root application component with view routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::topbar::Topbar;
use crate::net::types::Role;
use crate::pages::admin::AdminDashboard;
use crate::pages::auth::AuthPage;
use crate::pages::banker::BankerDashboard;
use crate::pages::farmer::FarmerDashboard;
use crate::pages::landing::LandingPage;
use crate::pages::operator::OperatorDashboard;
use crate::state::auth::AuthState;
use crate::state::session::{BrowserSession, SessionStore};
use crate::state::view::View;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Reads the persisted session once at startup to pick the initial view,
/// provides the session store and shared state contexts, and matches the
/// view variant exhaustively.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: Arc<dyn SessionStore> = Arc::new(BrowserSession);
    let session = store.read();

    let view = RwSignal::new(View::for_session(&session));
    let auth = RwSignal::new(AuthState {
        session,
        loading: false,
    });

    provide_context(store);
    provide_context(view);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/agrovault-ui.css"/>
        <Title text="AgroVault"/>

        {move || match view.get() {
            View::Landing => view! { <LandingPage/> }.into_any(),
            View::Authenticating => view! { <AuthPage/> }.into_any(),
            View::Dashboard(role) => view! { <DashboardShell role=role/> }.into_any(),
        }}
    }
}

/// Dashboard chrome: topbar plus the page matching the session role.
#[component]
fn DashboardShell(role: Role) -> impl IntoView {
    view! {
        <div class="dashboard">
            <Topbar role=role/>
            {match role {
                Role::Farmer => view! { <FarmerDashboard/> }.into_any(),
                Role::Operator => view! { <OperatorDashboard/> }.into_any(),
                Role::Banker => view! { <BankerDashboard/> }.into_any(),
                Role::Admin => view! { <AdminDashboard/> }.into_any(),
            }}
        </div>
    }
}
