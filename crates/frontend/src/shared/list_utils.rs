/// Утилиты для таблиц: поле поиска и индикатор сортировки
use contracts::domain::a003_data_table::SortDirection;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and the search callback
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Dropping the stored timeout cancels it
    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debounce.set_value(Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        })));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="data-grid__search" style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="search"
                placeholder=placeholder
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button
                    type="button"
                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                    on:click=clear_filter
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(order: Option<(usize, SortDirection)>, column: usize) -> &'static str {
    match order {
        Some((current, SortDirection::Asc)) if current == column => " ▲",
        Some((current, SortDirection::Desc)) if current == column => " ▼",
        _ => " ⇅",
    }
}

/// CSS class of the indicator: active when the grid is ordered by this column
pub fn get_sort_class(order: Option<(usize, SortDirection)>, column: usize) -> &'static str {
    match order {
        Some((current, _)) if current == column => "sort-indicator sort-indicator--active",
        _ => "sort-indicator",
    }
}
