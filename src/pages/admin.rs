//! Admin dashboard: analytics plus crop and warehouse reference data.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::NewWarehouse;
use crate::state::auth::AuthState;

/// Analytics stat cards plus CRUD for crop types and warehouses. Adds
/// refetch the affected list.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let token = move || auth.get().session.token.unwrap_or_default();

    let analytics = LocalResource::new(move || {
        let token = token();
        async move {
            match api::analytics(&token).await {
                Ok(totals) => totals,
                Err(e) => {
                    leptos::logging::warn!("analytics fetch failed: {e}");
                    crate::net::types::Analytics::default()
                }
            }
        }
    });
    let crops = LocalResource::new(move || {
        let token = token();
        async move {
            match api::crops(&token).await {
                Ok(list) => list,
                Err(e) => {
                    leptos::logging::warn!("crop fetch failed: {e}");
                    Vec::new()
                }
            }
        }
    });
    let warehouses = LocalResource::new(move || {
        let token = token();
        async move {
            match api::warehouses(&token).await {
                Ok(list) => list,
                Err(e) => {
                    leptos::logging::warn!("warehouse fetch failed: {e}");
                    Vec::new()
                }
            }
        }
    });

    let new_crop = RwSignal::new(String::new());
    let wh_name = RwSignal::new(String::new());
    let wh_location = RwSignal::new(String::new());
    let wh_contact = RwSignal::new(String::new());
    let wh_phone = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let add_crop = {
        let crops = crops.clone();
        move |_| {
            let name = new_crop.get();
            if name.trim().is_empty() {
                return;
            }
            let token = token();
            let crops = crops.clone();
            leptos::task::spawn_local(async move {
                match api::create_crop(&name, &token).await {
                    Ok(()) => {
                        new_crop.set(String::new());
                        crops.refetch();
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
    };

    let add_warehouse = {
        let warehouses = warehouses.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let warehouse = NewWarehouse {
                name: wh_name.get(),
                location_text: wh_location.get(),
                contact_person: wh_contact.get(),
                phone: wh_phone.get(),
            };
            let token = token();
            let warehouses = warehouses.clone();
            leptos::task::spawn_local(async move {
                match api::create_warehouse(&warehouse, &token).await {
                    Ok(()) => {
                        wh_name.set(String::new());
                        wh_location.set(String::new());
                        wh_contact.set(String::new());
                        wh_phone.set(String::new());
                        warehouses.refetch();
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
    };

    view! {
        <div class="admin-page">
            {move || {
                let totals = analytics.get().unwrap_or_default();
                view! {
                    <div class="admin-page__stats">
                        <StatCard title="Total receipts" value=totals.total_receipts.to_string()/>
                        <StatCard title="Pledged receipts" value=totals.total_pledged.to_string()/>
                        <StatCard
                            title="Active loan amount"
                            value=format!("\u{20b9} {}", totals.total_loan_amount)
                        />
                    </div>
                }
            }}

            <Show when=move || !error.get().is_empty()>
                <div class="admin-page__error">{move || error.get()}</div>
            </Show>

            <div class="admin-page__reference">
                <div class="admin-page__panel">
                    <h2>"Crop Types"</h2>
                    <div class="admin-page__add-crop">
                        <input
                            placeholder="New crop name"
                            prop:value=move || new_crop.get()
                            on:input=move |ev| new_crop.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" on:click=add_crop>
                            "Add"
                        </button>
                    </div>
                    <ul class="admin-page__list">
                        {move || {
                            crops
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|c| view! { <li>{c.name}</li> })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </ul>
                </div>

                <div class="admin-page__panel">
                    <h2>"Warehouses"</h2>
                    <form class="admin-page__wh-form" on:submit=add_warehouse>
                        <input
                            placeholder="Name"
                            prop:value=move || wh_name.get()
                            on:input=move |ev| wh_name.set(event_target_value(&ev))
                        />
                        <input
                            placeholder="Location"
                            prop:value=move || wh_location.get()
                            on:input=move |ev| wh_location.set(event_target_value(&ev))
                        />
                        <input
                            placeholder="Contact person"
                            prop:value=move || wh_contact.get()
                            on:input=move |ev| wh_contact.set(event_target_value(&ev))
                        />
                        <input
                            placeholder="Phone"
                            prop:value=move || wh_phone.get()
                            on:input=move |ev| wh_phone.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">
                            "Add"
                        </button>
                    </form>
                    <ul class="admin-page__list">
                        {move || {
                            warehouses
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|w| {
                                            view! {
                                                <li>{format!("{} \u{2013} {}", w.name, w.location_text)}</li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </ul>
                </div>
            </div>
        </div>
    }
}
