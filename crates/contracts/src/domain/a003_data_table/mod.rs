//! Таблицы данных: конфигурация, колонки-ссылки, поиск/сортировка/пагинация
//! и протокол серверной подгрузки страниц.

pub mod columns;
pub mod config;
pub mod query;
pub mod server_side;

pub use columns::ColumnLayout;
pub use config::{DomLayout, TableConfig, TableData};
pub use query::{PageInfo, QueryResult, SortDirection, TableQuery};
pub use server_side::{ServerRow, ServerSidePage, ServerSideRequest};
