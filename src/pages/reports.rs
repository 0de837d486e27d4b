//! Reports Page
//!
//! Tabular income/expense/balance summaries with a period selector.

use leptos::*;

use crate::api::summary::{fetch_summary, Period, SummaryRow};
use crate::api::ApiClient;
use crate::components::Loading;

/// Reports page component
#[component]
pub fn Reports() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let rows = create_rw_signal(Vec::<SummaryRow>::new());
    let (loading, set_loading) = create_signal(true);
    let (period, set_period) = create_signal(Period::Overall);
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());

    // Refetch whenever the period changes; custom ranges wait for both dates
    let load_client = client.clone();
    create_effect(move |_| {
        let selected = period.get();
        let start = start_date.get();
        let end = end_date.get();

        if selected == Period::Custom && (start.is_empty() || end.is_empty()) {
            return;
        }

        let client = load_client.clone();
        spawn_local(async move {
            set_loading.set(true);
            let range = if selected == Period::Custom {
                Some((start.as_str(), end.as_str()))
            } else {
                None
            };
            match fetch_summary(&client, selected, range).await {
                Ok(summary) => rows.set(summary),
                Err(e) => {
                    // 401 already triggered the expiry toast and redirect
                    if !e.is_unauthorized() {
                        web_sys::console::error_1(&format!("Failed to fetch summary: {}", e).into());
                    }
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Reports"</h1>
                <p class="text-gray-400 mt-1">"Totals by year, month, day, or a range of your choosing"</p>
            </div>

            // Period selector
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex flex-wrap items-end gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Period"</label>
                        <select
                            prop:value=move || period.get().as_str()
                            on:change=move |ev| set_period.set(period_from_str(&event_target_value(&ev)))
                            class="bg-gray-700 rounded-lg px-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="overall">"Overall"</option>
                            <option value="year">"By year"</option>
                            <option value="month">"By month"</option>
                            <option value="day">"By day"</option>
                            <option value="custom">"Custom range"</option>
                        </select>
                    </div>

                    {move || {
                        (period.get() == Period::Custom).then(|| view! {
                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"From"</label>
                                <input
                                    type="date"
                                    prop:value=move || start_date.get()
                                    on:input=move |ev| set_start_date.set(event_target_value(&ev))
                                    class="bg-gray-700 rounded-lg px-3 py-2
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                            </div>
                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"To"</label>
                                <input
                                    type="date"
                                    prop:value=move || end_date.get()
                                    on:input=move |ev| set_end_date.set(event_target_value(&ev))
                                    class="bg-gray-700 rounded-lg px-3 py-2
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                            </div>
                        })
                    }}
                </div>
            </section>

            // Summary table
            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else if rows.get().is_empty() {
                        view! {
                            <p class="text-gray-400 py-8 text-center">"No data for this period."</p>
                        }.into_view()
                    } else {
                        view! {
                            <table class="w-full text-left">
                                <thead>
                                    <tr class="text-sm text-gray-400 border-b border-gray-700">
                                        <th class="py-3 pr-4 font-medium">"Period"</th>
                                        <th class="py-3 pr-4 font-medium text-right">"Income"</th>
                                        <th class="py-3 pr-4 font-medium text-right">"Expense"</th>
                                        <th class="py-3 font-medium text-right">"Balance"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.get().into_iter().map(|row| view! {
                                        <tr class="border-b border-gray-700 last:border-0">
                                            <td class="py-3 pr-4">{row.label()}</td>
                                            <td class="py-3 pr-4 text-right text-green-400">
                                                {format!("{:.2}", row.total_income)}
                                            </td>
                                            <td class="py-3 pr-4 text-right text-red-400">
                                                {format!("{:.2}", row.total_expense)}
                                            </td>
                                            <td class=format!(
                                                "py-3 text-right font-semibold {}",
                                                if row.balance >= 0.0 { "text-green-400" } else { "text-red-400" }
                                            )>
                                                {format!("{:+.2}", row.balance)}
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

fn period_from_str(value: &str) -> Period {
    match value {
        "year" => Period::Year,
        "month" => Period::Month,
        "day" => Period::Day,
        "custom" => Period::Custom,
        _ => Period::Overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_parses_selector_values() {
        assert_eq!(period_from_str("year"), Period::Year);
        assert_eq!(period_from_str("month"), Period::Month);
        assert_eq!(period_from_str("day"), Period::Day);
        assert_eq!(period_from_str("custom"), Period::Custom);
        assert_eq!(period_from_str("overall"), Period::Overall);
        assert_eq!(period_from_str("anything else"), Period::Overall);
    }
}
