//! Records Page
//!
//! Record list with an entry form covering add, edit, and delete.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::records::{Record, RecordDraft, RecordKind};
use crate::api::{self, ApiClient};
use crate::components::ListSkeleton;
use crate::state::global::GlobalState;

/// Categories offered in the entry form
const CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Entertainment",
    "Shopping",
    "Health",
    "Salary",
    "Other",
];

/// Records page component
#[component]
pub fn Records() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let records = create_rw_signal(Vec::<Record>::new());
    let (loading, set_loading) = create_signal(true);

    // Entry form state; `editing` holds the id of the record being updated
    let (editing, set_editing) = create_signal(None::<u32>);
    let (amount, set_amount) = create_signal(String::new());
    let (category, set_category) = create_signal(CATEGORIES[0].to_string());
    let (kind, set_kind) = create_signal(RecordKind::Expense);
    let (note, set_note) = create_signal(String::new());
    let (when, set_when) = create_signal(String::new());

    let reset_form = move || {
        set_editing.set(None);
        set_amount.set(String::new());
        set_category.set(CATEGORIES[0].to_string());
        set_kind.set(RecordKind::Expense);
        set_note.set(String::new());
        set_when.set(String::new());
    };

    let load_client = client.clone();
    let reload = move || {
        let client = load_client.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::records::fetch_records(&client).await {
                Ok(mut list) => {
                    list.sort_by_key(|r| std::cmp::Reverse(r.timestamp_ms));
                    records.set(list);
                }
                Err(e) => {
                    // 401 already triggered the expiry toast and redirect
                    if !e.is_unauthorized() {
                        web_sys::console::error_1(&format!("Failed to fetch records: {}", e).into());
                    }
                }
            }
            set_loading.set(false);
        });
    };

    // Fetch on mount
    let reload_on_mount = reload.clone();
    create_effect(move |_| reload_on_mount());

    let submit_state = state.clone();
    let submit_client = client.clone();
    let submit_reload = reload.clone();
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let parsed = amount.get_untracked().trim().parse::<f64>();
        let value = match parsed {
            Ok(v) if v > 0.0 => v,
            _ => {
                submit_state.show_error("Enter an amount greater than zero");
                return;
            }
        };

        let draft = RecordDraft {
            amount: value,
            category: category.get_untracked(),
            kind: kind.get_untracked(),
            note: Some(note.get_untracked().trim().to_string()).filter(|n| !n.is_empty()),
            timestamp_ms: parse_entry_timestamp(&when.get_untracked()),
        };

        let state = submit_state.clone();
        let client = submit_client.clone();
        let reload = submit_reload.clone();
        spawn_local(async move {
            let result = match editing.get_untracked() {
                Some(id) => api::records::update_record(&client, id, &draft).await,
                None => api::records::add_record(&client, &draft).await,
            };

            match result {
                Ok(()) => {
                    state.show_success(if editing.get_untracked().is_some() {
                        "Record updated"
                    } else {
                        "Record added"
                    });
                    reset_form();
                    reload();
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let delete_state = state.clone();
    let delete_client = client.clone();
    let delete_reload = reload.clone();
    let delete = move |id: u32| {
        let state = delete_state.clone();
        let client = delete_client.clone();
        let reload = delete_reload.clone();
        spawn_local(async move {
            match api::records::delete_record(&client, id).await {
                Ok(()) => {
                    state.show_success("Record deleted");
                    reload();
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    // Excel import: hand the picked file to the backend as multipart form data
    let (importing, set_importing) = create_signal(false);
    let import_state = state.clone();
    let import_client = client.clone();
    let import_reload = reload.clone();
    let import_file = move |ev: web_sys::Event| {
        let input = match ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            Some(input) => input,
            None => return,
        };
        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };
        // Allow re-picking the same file later
        input.set_value("");

        set_importing.set(true);

        let state = import_state.clone();
        let client = import_client.clone();
        let reload = import_reload.clone();
        spawn_local(async move {
            match api::records::import_records(&client, &file).await {
                Ok(count) => {
                    state.show_success(&format!("Imported {} records", count));
                    reload();
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_importing.set(false);
        });
    };

    let start_editing = move |record: Record| {
        set_editing.set(Some(record.id));
        set_amount.set(format!("{}", record.amount));
        set_category.set(record.category);
        set_kind.set(record.kind);
        set_note.set(record.note.unwrap_or_default());
        set_when.set(entry_value_from_timestamp(record.timestamp_ms));
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Records"</h1>
                <p class="text-gray-400 mt-1">"Every income and expense in one place"</p>
            </div>

            // Entry form
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || if editing.get().is_some() { "Edit record" } else { "New record" }}
                </h2>

                <form on:submit=submit class="grid md:grid-cols-6 gap-4 items-end">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                        <select
                            prop:value=move || category.get()
                            on:change=move |ev| set_category.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            {CATEGORIES.iter().map(|c| view! {
                                <option value=*c>{*c}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Type"</label>
                        <select
                            prop:value=move || kind.get().as_str()
                            on:change=move |ev| {
                                set_kind.set(match event_target_value(&ev).as_str() {
                                    "income" => RecordKind::Income,
                                    _ => RecordKind::Expense,
                                });
                            }
                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="expense">"Expense"</option>
                            <option value="income">"Income"</option>
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"When (optional)"</label>
                        <input
                            type="datetime-local"
                            prop:value=move || when.get()
                            on:input=move |ev| set_when.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Note (optional)"</label>
                        <input
                            type="text"
                            prop:value=move || note.get()
                            on:input=move |ev| set_note.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div class="flex space-x-2">
                        <button
                            type="submit"
                            class="flex-1 px-4 py-2 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if editing.get().is_some() { "Save" } else { "Add" }}
                        </button>
                        {move || {
                            editing.get().map(|_| view! {
                                <button
                                    type="button"
                                    on:click=move |_| reset_form()
                                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500
                                           rounded-lg font-medium transition-colors"
                                >
                                    "Cancel"
                                </button>
                            })
                        }}
                    </div>
                </form>
            </section>

            // Record list
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"History"</h2>

                    // Excel import (.xls/.xlsx with time/category/amount/type/note columns)
                    <label class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg
                                  text-sm font-medium transition-colors cursor-pointer">
                        {move || if importing.get() { "Importing..." } else { "Import from Excel" }}
                        <input
                            type="file"
                            accept=".xls,.xlsx"
                            class="hidden"
                            disabled=move || importing.get()
                            on:change=import_file
                        />
                    </label>
                </div>

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=5 /> }.into_view()
                    } else if records.get().is_empty() {
                        view! {
                            <p class="text-gray-400 py-8 text-center">
                                "No records yet. Add your first one above."
                            </p>
                        }.into_view()
                    } else {
                        let delete = delete.clone();
                        records.get().into_iter().map(|record| {
                            let id = record.id;
                            let delete = delete.clone();
                            let edit_record = record.clone();
                            view! {
                                <div class="flex items-center justify-between py-3 border-b border-gray-700 last:border-0">
                                    <div class="flex items-center space-x-4">
                                        <span class=move || format!(
                                            "px-2 py-1 rounded text-xs font-medium {}",
                                            match record.kind {
                                                RecordKind::Income => "bg-green-900 text-green-300",
                                                RecordKind::Expense => "bg-red-900 text-red-300",
                                            }
                                        )>
                                            {record.kind.label()}
                                        </span>
                                        <div>
                                            <div class="font-medium">{record.category.clone()}</div>
                                            <div class="text-sm text-gray-400">
                                                {record.date.clone()}
                                                {record.note.clone().map(|n| format!(" · {}", n)).unwrap_or_default()}
                                            </div>
                                        </div>
                                    </div>
                                    <div class="flex items-center space-x-4">
                                        <span class=move || match record.kind {
                                            RecordKind::Income => "text-green-400 font-semibold",
                                            RecordKind::Expense => "text-red-400 font-semibold",
                                        }>
                                            {format_amount(record.amount, record.kind)}
                                        </span>
                                        <button
                                            on:click=move |_| start_editing(edit_record.clone())
                                            class="text-sm text-gray-400 hover:text-white transition-colors"
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            on:click=move |_| delete(id)
                                            class="text-sm text-gray-400 hover:text-red-400 transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Signed display amount, e.g. "+100.00" / "-42.50"
fn format_amount(amount: f64, kind: RecordKind) -> String {
    match kind {
        RecordKind::Income => format!("+{:.2}", amount),
        RecordKind::Expense => format!("-{:.2}", amount),
    }
}

/// Convert a `datetime-local` input value to epoch milliseconds.
/// Empty or unparseable input means "let the backend use now".
fn parse_entry_timestamp(value: &str) -> Option<i64> {
    if value.is_empty() {
        return None;
    }
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Inverse of [`parse_entry_timestamp`], for pre-filling the edit form
fn entry_value_from_timestamp(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.naive_utc().format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_timestamp_round_trip() {
        let ms = parse_entry_timestamp("2021-10-01T12:30").unwrap();
        assert_eq!(entry_value_from_timestamp(ms), "2021-10-01T12:30");
    }

    #[test]
    fn empty_entry_defers_to_backend_clock() {
        assert_eq!(parse_entry_timestamp(""), None);
        assert_eq!(parse_entry_timestamp("not a date"), None);
    }

    #[test]
    fn amounts_are_signed_by_kind() {
        assert_eq!(format_amount(100.0, RecordKind::Income), "+100.00");
        assert_eq!(format_amount(42.5, RecordKind::Expense), "-42.50");
    }
}
