use crate::shared::icons::icon;
use contracts::domain::a003_data_table::config::page_length_label;
use leptos::prelude::*;

/// PaginationControls component - first/previous/next/last buttons with page counter
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=is_first
                title="First"
            >
                {icon("chevrons-left")}
            </button>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Previous"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get() + 1, total_pages.get().max(1))}
            </span>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Next"
            >
                {icon("chevron-right")}
            </button>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=is_last
                title="Last"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

/// "Show [N] entries" menu; `-1` in `options` is rendered as "All"
#[component]
pub fn PageLengthSelect(
    /// Selected menu entry
    #[prop(into)]
    page_length: Signal<i64>,
    options: Vec<i64>,
    on_change: Callback<i64>,
) -> impl IntoView {
    view! {
        <label class="page-size">
            "Show "
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(length) = event_target_value(&ev).parse::<i64>() {
                        on_change.run(length);
                    }
                }
            >
                {options.into_iter().map(|length| {
                    view! {
                        <option value=length.to_string() prop:selected=move || page_length.get() == length>
                            {page_length_label(length)}
                        </option>
                    }
                }).collect_view()}
            </select>
            " entries"
        </label>
    }
}
