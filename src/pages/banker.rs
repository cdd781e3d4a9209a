//! Banker dashboard: receipt search and loan pledging.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Receipt;
use crate::state::auth::AuthState;

/// Search pledgeable receipts by code or farmer phone, then pledge one
/// against a new loan. Loan creation re-runs the search so the pledged flag
/// refreshes.
#[component]
pub fn BankerDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let token = move || auth.get().session.token.unwrap_or_default();

    let receipt_code = RwSignal::new(String::new());
    let farmer_phone = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Receipt>::new());
    let principal = RwSignal::new(String::new());
    let interest = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let run_search = Callback::new(move |(): ()| {
        let token = token();
        let code = receipt_code.get();
        let phone = farmer_phone.get();
        leptos::task::spawn_local(async move {
            match api::search_receipts(&code, &phone, &token).await {
                Ok(rows) => results.set(rows),
                Err(e) => error.set(e.to_string()),
            }
        });
    });

    let pledge = Callback::new(move |id: String| {
        error.set(String::new());
        let Ok(principal_amount) = principal.get().trim().parse::<f64>() else {
            error.set("Principal must be a number".to_owned());
            return;
        };
        let Ok(interest_rate) = interest.get().trim().parse::<f64>() else {
            error.set("Interest rate must be a number".to_owned());
            return;
        };
        let token = token();
        leptos::task::spawn_local(async move {
            match api::create_loan(&id, principal_amount, interest_rate, &token).await {
                Ok(()) => run_search.run(()),
                Err(e) => error.set(e.to_string()),
            }
        });
    });

    view! {
        <div class="banker-page">
            <div class="banker-page__search">
                <input
                    placeholder="Receipt code"
                    prop:value=move || receipt_code.get()
                    on:input=move |ev| receipt_code.set(event_target_value(&ev))
                />
                <input
                    placeholder="Farmer phone"
                    prop:value=move || farmer_phone.get()
                    on:input=move |ev| farmer_phone.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| run_search.run(())>
                    "Search"
                </button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <div class="banker-page__error">{move || error.get()}</div>
            </Show>

            <div class="banker-page__results">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|r| {
                            let id = r.id.clone();
                            let summary = format!(
                                "{} \u{2022} {} \u{2022} {}",
                                r.crop.unwrap_or_default(),
                                r.quantity.map(|q| q.to_string()).unwrap_or_default(),
                                r.warehouse.unwrap_or_default(),
                            );
                            view! {
                                <div class="receipt-card">
                                    <div class="receipt-card__head">
                                        <span class="receipt-card__code">{r.receipt_code.clone()}</span>
                                        <span class="receipt-card__status">{r.status.as_str()}</span>
                                    </div>
                                    <div class="receipt-card__summary">{summary}</div>
                                    <div class="receipt-card__loan">
                                        <input
                                            placeholder="Principal"
                                            prop:value=move || principal.get()
                                            on:input=move |ev| principal.set(event_target_value(&ev))
                                        />
                                        <input
                                            placeholder="Interest %"
                                            prop:value=move || interest.get()
                                            on:input=move |ev| interest.set(event_target_value(&ev))
                                        />
                                        <button
                                            class="btn btn--primary"
                                            disabled=r.pledged
                                            on:click=move |_| pledge.run(id.clone())
                                        >
                                            {if r.pledged { "Already pledged" } else { "Create Loan" }}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
