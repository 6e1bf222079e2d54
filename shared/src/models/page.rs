//! Paginated employee listing

use super::employee::Employee;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw `?page=&limit=` query parameters
///
/// Kept as text so that unparseable values fall back to the defaults
/// instead of failing the request.
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    /// Pick `page` and `limit` out of decoded query pairs
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Resolved paging window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Resolve raw parameters, defaulting anything that is not a positive integer
    pub fn from_params(params: &PageParams) -> Self {
        Self {
            page: parse_positive(params.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(params.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Number of records to skip: `(page - 1) * limit`
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit.max(1))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Parse the leading integer of `raw`, keeping only positive results
///
/// Mirrors lenient integer parsing: surrounding whitespace and a sign are
/// accepted, trailing garbage is ignored (`"3abc"` → 3). Values too large
/// for u64 saturate. Zero and negative values are rejected here, so they
/// take the defaults rather than reaching the store as a negative skip or
/// limit.
fn parse_positive(raw: Option<&str>) -> Option<u64> {
    let s = raw?.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });

    if negative || value == 0 { None } else { Some(value) }
}

/// Listing response: `{ totalPages, currentPage, employees }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    pub total_pages: u64,
    pub current_page: u64,
    pub employees: Vec<Employee>,
}

impl EmployeePage {
    pub fn new(employees: Vec<Employee>, total: u64, request: PageRequest) -> Self {
        Self {
            total_pages: request.total_pages(total),
            current_page: request.page,
            employees,
        }
    }
}
