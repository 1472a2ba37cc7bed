//! Filtering and pagination of the authoritative list
//!
//! The derived view is a pure function of three inputs: the authoritative
//! list, the search query and the group selector. Nothing here keeps state
//! between calls.

use crate::core::student::{Group, StudentRecord};
use serde::{Deserialize, Serialize};

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Group selector; `All` is the empty selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupFilter {
    #[default]
    All,
    Only(Group),
}

impl GroupFilter {
    pub fn matches(&self, group: Group) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Only(selected) => *selected == group,
        }
    }
}

impl From<Option<Group>> for GroupFilter {
    fn from(group: Option<Group>) -> Self {
        group.map_or(GroupFilter::All, GroupFilter::Only)
    }
}

impl From<Group> for GroupFilter {
    fn from(group: Group) -> Self {
        GroupFilter::Only(group)
    }
}

/// Search text and group selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub selected_group: GroupFilter,
}

impl FilterState {
    pub fn new(search_query: impl Into<String>, selected_group: impl Into<GroupFilter>) -> Self {
        Self {
            search_query: search_query.into(),
            selected_group: selected_group.into(),
        }
    }

    /// Whether a record passes both predicates
    pub fn matches(&self, record: &StudentRecord) -> bool {
        self.matches_search(record) && self.selected_group.matches(record.group)
    }

    fn matches_search(&self, record: &StudentRecord) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let needle = self.search_query.to_lowercase();
        StudentRecord::SEARCHABLE_FIELDS
            .iter()
            .filter_map(|field| record.field_value(field))
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

/// Records of `records` matching `filter`, in their original order
pub fn filter(records: &[StudentRecord], filter: &FilterState) -> Vec<StudentRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Filtered projection of the authoritative list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    records: Vec<StudentRecord>,
    page_size: usize,
}

impl DerivedView {
    pub fn compute(records: &[StudentRecord], state: &FilterState, page_size: usize) -> Self {
        Self {
            records: filter(records, state),
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<StudentRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        PaginationMeta::new(1, self.page_size, self.records.len()).total_pages
    }

    /// One page of the view (pages start at 1)
    ///
    /// Pages past the end are empty rather than an error.
    pub fn page(&self, page: usize) -> Page<'_> {
        let page = page.max(1);
        let meta = PaginationMeta::new(page, self.page_size, self.records.len());
        let start = ((page - 1) * self.page_size).min(self.records.len());
        let end = (start + self.page_size).min(self.records.len());
        Page {
            records: &self.records[start..end],
            pagination: meta,
        }
    }
}

/// A page of the derived view
#[derive(Debug, Serialize)]
pub struct Page<'a> {
    /// The rows of this page
    pub records: &'a [StudentRecord],

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of rows per page
    pub page_size: usize,

    /// Total number of rows (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(page_size) };
        let start = (page - 1) * page_size;

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: start + page_size < total,
            has_prev: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::student::StudentFields;

    fn record(id: &str, firstname: &str, lastname: &str, group: Group) -> StudentRecord {
        StudentRecord::new(
            id,
            StudentFields {
                firstname: firstname.into(),
                lastname: lastname.into(),
                group,
            },
        )
    }

    fn roster(n: usize) -> Vec<StudentRecord> {
        (0..n)
            .map(|i| record(&i.to_string(), &format!("First{i}"), "Last", Group::A1))
            .collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let list = vec![
            record("1", "Ann", "Lee", Group::A1),
            record("2", "Bob", "Ray", Group::B2),
        ];
        assert_eq!(filter(&list, &FilterState::default()), list);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let list = vec![
            record("1", "Ann", "Lee", Group::A1),
            record("2", "Bob", "Hanna", Group::B2),
            record("3", "Cy", "Ode", Group::B1),
        ];
        let ids: Vec<String> = filter(&list, &FilterState::new("ANN", GroupFilter::All))
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_search_matches_group_code() {
        let list = vec![
            record("1", "Ann", "Lee", Group::A1),
            record("2", "Bob", "Ray", Group::B2),
        ];
        let hits = filter(&list, &FilterState::new("b2", GroupFilter::All));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "2");
    }

    #[test]
    fn test_search_ignores_id() {
        let list = vec![record("42", "Ann", "Lee", Group::A1)];
        assert!(filter(&list, &FilterState::new("42", GroupFilter::All)).is_empty());
    }

    #[test]
    fn test_both_predicates_apply() {
        let list = vec![
            record("1", "Ann", "Lee", Group::A1),
            record("2", "Anna", "Ray", Group::B1),
        ];
        let hits = filter(&list, &FilterState::new("ann", Group::B1));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "2");
    }

    #[test]
    fn test_group_filter_from_option() {
        assert_eq!(GroupFilter::from(None), GroupFilter::All);
        assert_eq!(GroupFilter::from(Some(Group::A2)), GroupFilter::Only(Group::A2));
    }

    #[test]
    fn test_pages_of_ten() {
        let view = DerivedView::compute(&roster(23), &FilterState::default(), DEFAULT_PAGE_SIZE);
        assert_eq!(view.total_pages(), 3);

        let first = view.page(1);
        assert_eq!(first.records.len(), 10);
        assert!(first.pagination.has_next);
        assert!(!first.pagination.has_prev);

        let last = view.page(3);
        assert_eq!(last.records.len(), 3);
        assert_eq!(last.records[0].id.as_str(), "20");
        assert!(!last.pagination.has_next);
        assert!(last.pagination.has_prev);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let view = DerivedView::compute(&roster(5), &FilterState::default(), 10);
        assert!(view.page(4).records.is_empty());
        assert_eq!(view.page(0).records.len(), 5);
    }

    #[test]
    fn test_pagination_meta_empty() {
        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
    }
}
