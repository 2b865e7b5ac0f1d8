//! Reference string - the ordered page requests driving a simulation.

use std::ops::Deref;

use crate::common::{Error, PageId, Result};

/// A validated, non-empty sequence of page requests.
///
/// Immutable once constructed. Dereferences to `[PageId]` so it can be
/// handed straight to [`PolicyEngine`](super::PolicyEngine).
///
/// # Example
/// ```
/// use pagesim::ReferenceString;
///
/// let refs = ReferenceString::from_ids([7, 0, 1, 2]).unwrap();
/// assert_eq!(refs.len(), 4);
/// assert!(ReferenceString::from_ids([]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceString(Vec<PageId>);

impl ReferenceString {
    /// Wrap a page sequence.
    ///
    /// # Errors
    /// `Error::InvalidInput` if `pages` is empty.
    pub fn new(pages: Vec<PageId>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::InvalidInput("reference string is empty".into()));
        }
        Ok(Self(pages))
    }

    /// Build from raw page numbers.
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Result<Self> {
        Self::new(ids.into_iter().map(PageId::new).collect())
    }
}

impl Deref for ReferenceString {
    type Target = [PageId];

    fn deref(&self) -> &[PageId] {
        &self.0
    }
}
