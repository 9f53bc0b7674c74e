//! Listing window and sort order.

use std::fmt;

use crate::constants::{SORT_ASC, SORT_DESC};

/// Creation-time ordering for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Normalize a raw sort keyword.
    ///
    /// Only the exact keywords `"asc"` and `"desc"` are recognized; anything
    /// else, including an empty string, means ascending.
    pub fn parse(raw: &str) -> Self {
        match raw {
            SORT_DESC => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => SORT_ASC,
            SortOrder::Desc => SORT_DESC,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested page of a listing.
///
/// Pages are 1-based. A zero page or zero limit means "no pagination".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Offset and length of the requested window, or `None` for the whole
    /// collection.
    pub fn window(&self) -> Option<(u64, u64)> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }
        let offset = (self.page - 1).saturating_mul(self.limit);
        Some((offset, self.limit))
    }
}
