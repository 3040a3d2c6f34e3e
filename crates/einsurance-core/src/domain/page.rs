//! Pagination model
//!
//! A page is a bounded slice of a larger ordered result set: zero-based
//! index, fixed size, total page count from the backend.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// One page of results plus the position it sits at.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based index of this page. Invariant once loaded:
    /// `page < total_pages` (unless the result set is empty).
    pub page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: u32, total_pages: u32) -> Self {
        Self {
            content,
            page,
            total_pages,
        }
    }

    /// The one-row page produced by an id lookup: always page 0 of 1,
    /// regardless of the pagination state it replaces.
    pub fn singleton(item: T) -> Self {
        Self {
            content: vec![item],
            page: 0,
            total_pages: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}

/// The fixed set of page sizes the listing offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    One,
    Five,
    Ten,
    Twenty,
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Ten
    }
}

impl PageSize {
    pub fn as_u32(self) -> u32 {
        match self {
            PageSize::One => 1,
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PageSize::One),
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            other => Err(DomainError::InvalidPageSize(other)),
        }
    }
}
