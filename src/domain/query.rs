//! Restaurant query engine: filtering, pagination and filter options.
//!
//! Everything here is a pure transform over a borrowed restaurant slice. The
//! input is never mutated and results keep the input order.

use crate::domain::restaurant::{BudgetRange, Restaurant, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

/// Category value that disables the cuisine filter.
pub const ALL_CATEGORIES: &str = "All";

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Transient query descriptor. Every field is optional; unset fields do not filter.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub budgets: Option<Vec<BudgetRange>>,
    #[serde(default)]
    pub sides: Option<Vec<String>>,
}

impl FilterCriteria {
    fn search(&self) -> Option<String> {
        self.search_query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    fn budgets(&self) -> Option<&[BudgetRange]> {
        self.budgets.as_deref().filter(|b| !b.is_empty())
    }

    fn sides(&self) -> Option<Vec<String>> {
        self.sides
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.iter().map(|side| side.to_lowercase()).collect())
    }
}

/// Returns the restaurants that satisfy every active criterion, in input order.
///
/// - search: case-insensitive substring of name, cuisine or location
/// - category: exact, case-sensitive cuisine match (`"All"` disables it)
/// - budgets: budget band membership
/// - sides: the restaurant's side contains any requested side, case-insensitively
pub fn filter_restaurants(all: &[Restaurant], criteria: &FilterCriteria) -> Vec<Restaurant> {
    let search = criteria.search();
    let category = criteria.category();
    let budgets = criteria.budgets();
    let sides = criteria.sides();

    all.iter()
        .filter(|r| match &search {
            Some(q) => {
                r.name.to_lowercase().contains(q)
                    || r.cuisine.to_lowercase().contains(q)
                    || r.location.to_lowercase().contains(q)
            }
            None => true,
        })
        .filter(|r| category.map_or(true, |c| r.cuisine == c))
        .filter(|r| budgets.map_or(true, |b| b.contains(&r.budget_range)))
        .filter(|r| match &sides {
            Some(wanted) => {
                let side = r.sides.as_str().to_lowercase();
                wanted.iter().any(|w| side.contains(w.as_str()))
            }
            None => true,
        })
        .cloned()
        .collect()
}

/// One page of a filtered result.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, already clamped.
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slices `items` into the requested page.
///
/// `page` is clamped to `[1, total_pages]`; an empty input has a single empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub budgets: Vec<BudgetRange>,
    pub sides: Vec<Side>,
}

/// `"All"` plus each distinct cuisine in first-seen order, and the fixed band/side lists.
pub fn filter_options(restaurants: &[Restaurant]) -> FilterOptions {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for r in restaurants {
        if seen.insert(r.cuisine.as_str()) {
            categories.push(r.cuisine.clone());
        }
    }

    FilterOptions {
        categories,
        budgets: BudgetRange::ALL.to_vec(),
        sides: Side::ALL.to_vec(),
    }
}
