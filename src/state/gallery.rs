//! Gallery and filter-bar state.
//!
//! DESIGN
//! ======
//! The rendered gallery is a pure projection of the last-fetched work list and
//! the current filter selection. Works are only replaced wholesale by a fetch
//! result; nothing here edits individual records.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::config::ALL_FILTER_LABEL;
use crate::error::ApiError;
use crate::net::types::{Category, Work};

/// Filter selection: the implicit "all" wildcard or one category id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterKey {
    #[default]
    All,
    Category(i64),
}

impl FilterKey {
    /// DOM id of the filter button (`"all"` or the category id).
    pub fn dom_id(self) -> String {
        match self {
            Self::All => "all".to_owned(),
            Self::Category(id) => id.to_string(),
        }
    }

    pub fn matches(self, category_id: i64) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => id == category_id,
        }
    }
}

/// One button in the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterButton {
    pub key: FilterKey,
    pub label: String,
}

/// Filter buttons for `categories`, with "all" prepended.
pub fn filter_buttons(categories: &[Category]) -> Vec<FilterButton> {
    std::iter::once(FilterButton { key: FilterKey::All, label: ALL_FILTER_LABEL.to_owned() })
        .chain(categories.iter().map(|c| FilterButton {
            key: FilterKey::Category(c.id),
            label: c.name.clone(),
        }))
        .collect()
}

/// A rendered gallery entry, tagged with the category it filters by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub work_id: i64,
    pub title: String,
    pub image_url: String,
    pub tag: i64,
}

/// One tile per work, in input order.
pub fn tiles(works: &[Work]) -> Vec<Tile> {
    works
        .iter()
        .map(|w| Tile {
            work_id: w.id,
            title: w.title.clone(),
            image_url: w.image_url.clone(),
            tag: w.category_id,
        })
        .collect()
}

/// Page-owned gallery store.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub works: Vec<Work>,
    pub categories: Vec<Category>,
    pub selected: FilterKey,
    pub loading: bool,
}

impl GalleryState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Select a filter. Re-selecting the current one keeps it selected.
    pub fn select(&mut self, key: FilterKey) {
        self.selected = key;
    }

    pub fn is_selected(&self, key: FilterKey) -> bool {
        self.selected == key
    }

    pub fn tiles(&self) -> Vec<Tile> {
        tiles(&self.works)
    }

    pub fn is_visible(&self, tile: &Tile) -> bool {
        self.selected.matches(tile.tag)
    }

    pub fn visible_tiles(&self) -> Vec<Tile> {
        self.tiles().into_iter().filter(|t| self.is_visible(t)).collect()
    }

    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        filter_buttons(&self.categories)
    }

    /// Replace the work list with a fetch result. A failed fetch keeps the
    /// previous list; callers surface the failure as a notice.
    pub fn apply_works(&mut self, result: Result<Vec<Work>, ApiError>) {
        self.loading = false;
        if let Ok(works) = result {
            self.works = works;
        }
    }

    pub fn apply_categories(&mut self, result: Result<Vec<Category>, ApiError>) {
        if let Ok(categories) = result {
            self.categories = categories;
        }
    }
}
