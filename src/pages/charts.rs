//! Charts Page
//!
//! Monthly income/expense bars built from the summary endpoint.

use leptos::*;

use crate::api::summary::{fetch_summary, Period, SummaryRow};
use crate::api::ApiClient;
use crate::components::ChartSkeleton;

/// Charts page component
#[component]
pub fn Charts() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let rows = create_rw_signal(Vec::<SummaryRow>::new());
    let (loading, set_loading) = create_signal(true);

    // Fetch monthly summary on mount
    let load_client = client.clone();
    create_effect(move |_| {
        let client = load_client.clone();
        spawn_local(async move {
            set_loading.set(true);
            match fetch_summary(&client, Period::Month, None).await {
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
                <h1 class="text-3xl font-bold">"Charts"</h1>
                <p class="text-gray-400 mt-1">"Income and spending, month by month"</p>
            </div>

            {move || {
                if loading.get() {
                    view! { <ChartSkeleton /> }.into_view()
                } else if rows.get().is_empty() {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-6">
                            <p class="text-gray-400 py-12 text-center">
                                "Nothing to chart yet. Add some records first."
                            </p>
                        </div>
                    }.into_view()
                } else {
                    view! { <MonthlyBars rows=rows.get() /> }.into_view()
                }
            }}
        </div>
    }
}

/// Grouped bar chart, one income/expense pair per month
#[component]
fn MonthlyBars(rows: Vec<SummaryRow>) -> impl IntoView {
    let max = series_max(&rows);
    let total_balance: f64 = rows.iter().map(|r| r.balance).sum();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-semibold">"Monthly totals"</h2>
                <div class="flex items-center space-x-4 text-sm">
                    <span class="flex items-center space-x-1">
                        <span class="w-3 h-3 bg-green-500 rounded-sm" />
                        <span class="text-gray-400">"Income"</span>
                    </span>
                    <span class="flex items-center space-x-1">
                        <span class="w-3 h-3 bg-red-500 rounded-sm" />
                        <span class="text-gray-400">"Expense"</span>
                    </span>
                </div>
            </div>

            <div class="flex items-end space-x-4 h-64 overflow-x-auto">
                {rows.iter().map(|row| view! {
                    <div class="flex-1 min-w-[4rem] flex flex-col items-center space-y-2">
                        <div class="flex items-end space-x-1 h-48 w-full justify-center">
                            <div
                                class="w-4 bg-green-500 rounded-t"
                                style=format!("height: {:.1}%", bar_height_pct(row.total_income, max))
                                title=format!("Income {:.2}", row.total_income)
                            />
                            <div
                                class="w-4 bg-red-500 rounded-t"
                                style=format!("height: {:.1}%", bar_height_pct(row.total_expense, max))
                                title=format!("Expense {:.2}", row.total_expense)
                            />
                        </div>
                        <span class="text-xs text-gray-400 whitespace-nowrap">{row.label()}</span>
                        <span class={if row.balance >= 0.0 {
                            "text-xs text-green-400"
                        } else {
                            "text-xs text-red-400"
                        }}>
                            {format!("{:+.2}", row.balance)}
                        </span>
                    </div>
                }).collect_view()}
            </div>

            <div class="mt-6 pt-4 border-t border-gray-700 text-sm text-gray-400">
                {format!("Balance over the shown months: {:+.2}", total_balance)}
            </div>
        </section>
    }
}

/// Largest single bar value, used to scale the chart
fn series_max(rows: &[SummaryRow]) -> f64 {
    rows.iter()
        .flat_map(|r| [r.total_income, r.total_expense])
        .fold(0.0_f64, f64::max)
}

/// Bar height as a percentage of the tallest bar
fn bar_height_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(income: f64, expense: f64) -> SummaryRow {
        SummaryRow {
            year: Some(2021),
            month: Some(1),
            day: None,
            total_income: income,
            total_expense: expense,
            balance: income - expense,
        }
    }

    #[test]
    fn bars_scale_to_the_tallest_value() {
        let rows = vec![row(100.0, 40.0), row(50.0, 200.0)];
        let max = series_max(&rows);
        assert_eq!(max, 200.0);
        assert_eq!(bar_height_pct(200.0, max), 100.0);
        assert_eq!(bar_height_pct(50.0, max), 25.0);
    }

    #[test]
    fn empty_series_renders_flat() {
        assert_eq!(series_max(&[]), 0.0);
        assert_eq!(bar_height_pct(10.0, 0.0), 0.0);
    }
}
