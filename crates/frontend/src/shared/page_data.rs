use contracts::shared::page_data::{PageData, PageDataError};

/// Read and validate the page data embedded by the server.
///
/// `Ok(None)` when the page has no data element.
pub fn read_page_data(element_id: &str) -> Result<Option<PageData>, PageDataError> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(|el| el.text_content());
    match text {
        Some(json) if !json.trim().is_empty() => PageData::parse(&json).map(Some),
        _ => Ok(None),
    }
}
