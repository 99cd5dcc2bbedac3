//! Ячейка заголовка таблицы с сортировкой по клику
//!
//! ```text
//! <SortableHeaderCell
//!     label="Depth"
//!     column=1
//!     order=Signal::derive(move || query.with(|q| q.order))
//!     sortable=true
//!     on_sort=Callback::new(move |column| toggle_order(column))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::a003_data_table::SortDirection;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Индекс колонки в строке данных
    column: usize,

    /// Текущая сортировка таблицы
    #[prop(into)]
    order: Signal<Option<(usize, SortDirection)>>,

    /// Hidden navigation columns are never sortable
    #[prop(optional)]
    sortable: bool,

    /// Callback при клике на заголовок
    on_sort: Callback<usize>,
) -> impl IntoView {
    if !sortable {
        return view! {
            <TableHeaderCell>{label}</TableHeaderCell>
        }
        .into_any();
    }

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style="cursor: pointer; user-select: none;"
                on:click=move |_| on_sort.run(column)
            >
                {label}
                <span class=move || get_sort_class(order.get(), column)>
                    {move || get_sort_indicator(order.get(), column)}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
