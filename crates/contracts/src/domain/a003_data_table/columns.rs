/// Header label of the hidden navigation column
pub const URL_COLUMN: &str = "url";
/// Header label of the optional secondary navigation column
pub const UNLINK_COLUMN: &str = "unlink";

/// Column policy derived from a table's header labels.
///
/// A trailing `url` column (or `url, unlink` pair) is hidden, excluded from
/// sorting and searching, and turns every body cell into a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    headers: Vec<String>,
    url: bool,
    unlink: bool,
}

impl ColumnLayout {
    pub fn from_headers(headers: Vec<String>) -> Self {
        let n = headers.len();
        let last = headers.last().map(String::as_str);
        // `unlink` only counts directly after a `url` column
        let unlink = last == Some(UNLINK_COLUMN) && n >= 2 && headers[n - 2] == URL_COLUMN;
        let url = last == Some(URL_COLUMN) || unlink;
        Self {
            headers,
            url,
            unlink,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn has_url(&self) -> bool {
        self.url
    }

    pub fn has_unlink(&self) -> bool {
        self.unlink
    }

    /// Whether clicking body cells can navigate at all
    pub fn navigates(&self) -> bool {
        self.url
    }

    fn hidden_count(&self) -> usize {
        usize::from(self.url) + usize::from(self.unlink)
    }

    pub fn is_hidden(&self, column: usize) -> bool {
        column >= self.len() - self.hidden_count().min(self.len())
    }

    pub fn is_sortable(&self, column: usize) -> bool {
        column < self.len() && !self.is_hidden(column)
    }

    pub fn is_searchable(&self, column: usize) -> bool {
        self.is_sortable(column)
    }

    /// Indices of displayed columns, in order
    pub fn visible_columns(&self) -> Vec<usize> {
        (0..self.len()).filter(|&c| !self.is_hidden(c)).collect()
    }

    /// URL to navigate to when `column` of `row` is clicked.
    ///
    /// - url only: the last field.
    /// - url + unlink: the url field, except for column `n-3` which follows unlink.
    pub fn click_target<'a>(&self, column: usize, row: &'a [String]) -> Option<&'a str> {
        let n = self.len();
        let field = match (self.url, self.unlink) {
            (true, true) if column + 3 == n => n - 1,
            (true, true) => n - 2,
            (true, false) => n - 1,
            (false, _) => return None,
        };
        row.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(headers: &[&str]) -> ColumnLayout {
        ColumnLayout::from_headers(headers.iter().map(|h| h.to_string()).collect())
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_trailing_url_column_is_hidden_and_links() {
        let columns = layout(&["Name", "Country", "url"]);
        assert!(columns.has_url());
        assert_eq!(columns.visible_columns(), vec![0, 1]);
        assert!(!columns.is_sortable(2));
        assert!(!columns.is_searchable(2));

        let data = row(&["NOAA", "US", "/organization/details/3"]);
        assert_eq!(columns.click_target(0, &data), Some("/organization/details/3"));
        assert_eq!(columns.click_target(1, &data), Some("/organization/details/3"));
    }

    #[test]
    fn test_url_must_match_exactly() {
        let columns = layout(&["Name", "URL"]);
        assert!(!columns.navigates());
        assert_eq!(columns.visible_columns(), vec![0, 1]);
        assert_eq!(columns.click_target(0, &row(&["a", "/x"])), None);

        let columns = layout(&["url", "Name"]);
        assert!(!columns.has_url());
    }

    #[test]
    fn test_url_and_unlink_columns() {
        let columns = layout(&["File", "Owner", "url", "unlink"]);
        assert!(columns.has_url() && columns.has_unlink());
        assert_eq!(columns.visible_columns(), vec![0, 1]);

        let data = row(&["a.wav", "NOAA", "/file/details/1", "/file/unlink/1"]);
        assert_eq!(columns.click_target(1, &data), Some("/file/unlink/1"));
        assert_eq!(columns.click_target(0, &data), Some("/file/details/1"));
    }

    #[test]
    fn test_unlink_without_url_does_not_navigate() {
        let columns = layout(&["File", "Remove", "unlink"]);
        assert!(!columns.has_url());
        assert!(!columns.has_unlink());
        assert!(!columns.navigates());
        assert_eq!(columns.visible_columns(), vec![0, 1, 2]);
        assert!(columns.is_sortable(2));

        let data = row(&["a.wav", "x", "/file/unlink/1"]);
        for column in 0..3 {
            assert_eq!(columns.click_target(column, &data), None);
        }
    }

    #[test]
    fn test_empty_headers() {
        let columns = layout(&[]);
        assert!(columns.is_empty());
        assert!(columns.visible_columns().is_empty());
    }
}
