use super::view_model::DataGridViewModel;
use crate::layout::global_context::PageContext;
use crate::shared::components::pagination_controls::{PageLengthSelect, PaginationControls};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a003_data_table::TableData;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DataGrid(ctx: PageContext, table: TableData) -> impl IntoView {
    let vm = DataGridViewModel::new(ctx, table);
    let config = vm.config.get_value();
    let layout = config.layout();
    let table_id = vm.table_id.get_value();
    let visible_columns = StoredValue::new(vm.columns.with_value(|c| c.visible_columns()));

    let buttons = (layout.buttons && config.selectable).then(|| {
        view! {
            <ButtonGroup>
                <Button size=ButtonSize::Small on_click=move |_| vm.select_all_command()>
                    "Select All"
                </Button>
                <Button size=ButtonSize::Small on_click=move |_| vm.select_page_command()>
                    "Select Page"
                </Button>
                <Button size=ButtonSize::Small on_click=move |_| vm.select_none_command()>
                    "Select None"
                </Button>
            </ButtonGroup>
        }
    });

    let length_menu = (layout.length && config.paging).then(|| {
        view! {
            <PageLengthSelect
                page_length=Signal::derive(move || vm.page_length())
                options=config.length_menu.clone()
                on_change=Callback::new(move |length| vm.page_length_command(length))
            />
        }
    });

    let search = layout.filter.then(|| {
        view! {
            <SearchInput
                value=Signal::derive(move || vm.query.with(|q| q.search.clone()))
                on_change=Callback::new(move |search| vm.search_command(search))
            />
        }
    });

    let processing = layout.processing.then(|| {
        view! {
            <Show when=move || vm.loading.get()>
                <div class="data-grid__processing">{icon("loader")}" Processing..."</div>
            </Show>
        }
    });

    let info = layout.info.then(|| {
        view! {
            <div class="data-grid__info">{move || vm.result.with(|r| r.info.text())}</div>
        }
    });

    let pagination = (layout.pagination && config.paging).then(|| {
        view! {
            <PaginationControls
                current_page=Signal::derive(move || vm.result.with(|r| r.page))
                total_pages=Signal::derive(move || vm.result.with(|r| r.info.page_count))
                on_page_change=Callback::new(move |page| vm.page_command(page))
            />
        }
    });

    let header_cells = visible_columns
        .get_value()
        .into_iter()
        .map(|column| {
            let label = vm.columns.with_value(|c| c.headers()[column].clone());
            view! {
                <SortableHeaderCell
                    label=label
                    column=column
                    order=Signal::derive(move || vm.query.with(|q| q.order))
                    sortable=vm.columns.with_value(|c| c.is_sortable(column))
                    on_sort=Callback::new(move |column| vm.sort_command(column))
                />
            }
        })
        .collect_view();

    let row_view = move |row: usize| {
        let cells = visible_columns
            .get_value()
            .into_iter()
            .map(|column| {
                view! {
                    <td
                        class=move || vm.cell_class(row)
                        on:mouseenter=move |_| vm.hover_command(Some(row))
                        on:mouseleave=move |_| vm.hover_command(None)
                        on:click=move |_| vm.click_command(row, column)
                    >
                        {move || vm.cell_text(row, column)}
                    </td>
                }
            })
            .collect_view();
        view! { <TableRow>{cells}</TableRow> }
    };

    view! {
        <div class="data-grid">
            <div class="data-grid__toolbar">
                {buttons}
                {length_menu}
                {search}
            </div>
            {processing}
            {move || vm.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border: 1px solid var(--color-error-100);">
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}
            <div class="data-grid__body" style=(!layout.table).then_some("display: none;")>
                <Table attr:id=table_id>
                    <TableHeader attr:style=(!config.show_header).then_some("display: none;")>
                        <TableRow>{header_cells}</TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || vm.result.with(|r| r.page_rows.clone())
                            key=|row| *row
                            children=row_view
                        />
                    </TableBody>
                </Table>
            </div>
            <div class="data-grid__footer">
                {info}
                {pagination}
            </div>
        </div>
    }
}
