use crate::models::User;

/// Fixed page size for the directory table.
pub const PAGE_SIZE: usize = 10;

/// What the user is currently asking for: a free-text search term and
/// a 1-based page number. Owned by the single interactive session and
/// updated synchronously through [`QueryEvent`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub term: String,
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            term: String::new(),
            page: 1,
        }
    }
}

/// Discrete user actions that move the query state. Submitting a new
/// search always resets the page to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    SearchSubmitted(String),
    PageSelected(usize),
}

impl QueryState {
    pub fn apply(&mut self, event: QueryEvent) {
        match event {
            QueryEvent::SearchSubmitted(term) => {
                self.term = term;
                self.page = 1;
            }
            QueryEvent::PageSelected(page) => {
                // Page numbers are 1-based; 0 is a caller bug we absorb.
                self.page = page.max(1);
            }
        }
    }
}

/// One page of filtered results, derived from the loaded records.
/// Never stored; recomputed on every input change.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage<'a> {
    /// The visible window, at most [`PAGE_SIZE`] records.
    pub users: Vec<&'a User>,
    /// Total records matching the query across all pages.
    pub matching: usize,
    /// ceil(matching / PAGE_SIZE); 0 when nothing matches.
    pub total_pages: usize,
}

/// Derive the page window for `(records, query, page)`.
///
/// Matching is a case-insensitive substring test against name or
/// email; an empty query matches everything. The filter is stable,
/// preserving the source order. Out-of-range pages yield an empty
/// window rather than an error — clamping page controls is the
/// caller's job.
pub fn project<'a>(records: &'a [User], query: &str, page: usize) -> ResultPage<'a> {
    let needle = query.to_lowercase();
    let matching: Vec<&User> = records
        .iter()
        .filter(|user| matches_query(user, &needle))
        .collect();

    let count = matching.len();
    let total_pages = count.div_ceil(PAGE_SIZE);
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);

    let users = if start >= count {
        Vec::new()
    } else {
        matching[start..(start + PAGE_SIZE).min(count)].to_vec()
    };

    ResultPage {
        users,
        matching: count,
        total_pages,
    }
}

fn matches_query(user: &User, needle: &str) -> bool {
    needle.is_empty()
        || user.name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
}
