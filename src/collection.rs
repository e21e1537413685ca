// ============================================================================
// COLLECTION VIEW - Search/category/status filtering over an item list
// ============================================================================
//! One predicate combinator shared by every dashboard area.
//!
//! An area describes its items through [`Searchable`]; a [`Filter`] holds the
//! active predicates and yields the visible subset in store order.

use crate::store::StoreError;
use std::str::FromStr;

/// Sentinel accepted by every category and status selector.
pub const ALL: &str = "all";

/// What the filter needs to know about an item.
pub trait Searchable {
    type Category: FromStr + PartialEq;
    type Status: FromStr + PartialEq;

    /// Text fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn in_category(&self, category: &Self::Category) -> bool;

    fn has_status(&self, status: &Self::Status) -> bool;

    /// Identity of whoever created the item, `None` for seeded items.
    fn owner(&self) -> Option<&str>;

    /// Whether the user has signed up for the item. Only events take
    /// registrations.
    fn registered(&self) -> bool {
        false
    }
}

/// Status type for areas without a status filter. It has no values, so only
/// the `all` sentinel parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unfiltered {}

impl FromStr for Unfiltered {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Err(format!("status filtering is not supported (got `{}`)", s))
    }
}

/// Either the `all` sentinel or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<V> {
    All,
    Only(V),
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Selection::All
    }
}

impl<V: FromStr> Selection<V> {
    /// Parse a raw selector. Missing, empty and `all` select everything;
    /// anything else must name a known value.
    pub fn parse(raw: Option<&str>, what: &str) -> Result<Self, StoreError> {
        match raw {
            None | Some("") | Some(ALL) => Ok(Selection::All),
            Some(value) => value
                .parse()
                .map(Selection::Only)
                .map_err(|_| StoreError::Validation(format!("unknown {} `{}`", what, value))),
        }
    }

    fn admits(&self, check: impl FnOnce(&V) -> bool) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => check(value),
        }
    }
}

/// Active filter state for one area.
///
/// The query is lowercased once on construction. Whitespace is kept as
/// typed, so a query of `" "` only matches fields containing a space.
pub struct Filter<T: Searchable> {
    needle: String,
    category: Selection<T::Category>,
    status: Selection<T::Status>,
    owner: Option<String>,
    registered_only: bool,
}

impl<T: Searchable> Default for Filter<T> {
    fn default() -> Self {
        Self {
            needle: String::new(),
            category: Selection::All,
            status: Selection::All,
            owner: None,
            registered_only: false,
        }
    }
}

impl<T: Searchable> Filter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: &str) -> Self {
        self.needle = query.to_lowercase();
        self
    }

    pub fn category(mut self, category: Selection<T::Category>) -> Self {
        self.category = category;
        self
    }

    pub fn status(mut self, status: Selection<T::Status>) -> Self {
        self.status = status;
        self
    }

    /// Restrict to items created by `identity`.
    pub fn owned_by(mut self, identity: impl Into<String>) -> Self {
        self.owner = Some(identity.into());
        self
    }

    /// Restrict to items the user has registered for.
    pub fn registered_only(mut self) -> Self {
        self.registered_only = true;
        self
    }

    pub fn matches_search(&self, item: &T) -> bool {
        self.needle.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }

    pub fn matches_category(&self, item: &T) -> bool {
        self.category.admits(|category| item.in_category(category))
    }

    pub fn matches_status(&self, item: &T) -> bool {
        self.status.admits(|status| item.has_status(status))
    }

    pub fn matches_owner(&self, item: &T) -> bool {
        match &self.owner {
            None => true,
            Some(identity) => item.owner() == Some(identity.as_str()),
        }
    }

    pub fn matches_registration(&self, item: &T) -> bool {
        !self.registered_only || item.registered()
    }

    pub fn matches(&self, item: &T) -> bool {
        self.matches_search(item)
            && self.matches_category(item)
            && self.matches_status(item)
            && self.matches_owner(item)
            && self.matches_registration(item)
    }

    /// Lazily yield the matching items, preserving their relative order.
    /// The iterator is `Clone`, so a view can walk the result more than once.
    pub fn apply<'a>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + Clone + 'a {
        items.iter().filter(move |item| self.matches(item))
    }
}
