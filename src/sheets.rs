//! Sheet tab strip - the ordered tabs above the grid editor
//!
//! Tabs reorder through the same drag engine and shift-aware semantics as
//! tool lists.

use serde::{Deserialize, Serialize};

use crate::layout::reorder_vec;

/// Identifier for a sheet, unique within a tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SheetId(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetTab {
    pub id: SheetId,
    pub name: String,
}

/// Ordered sheet tabs with an active selection
#[derive(Debug, Clone, Default)]
pub struct SheetTabs {
    tabs: Vec<SheetTab>,
    active: Option<SheetId>,
    next_id: u64,
}

impl SheetTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[SheetTab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active(&self) -> Option<SheetId> {
        self.active
    }

    pub fn index_of(&self, id: SheetId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    pub fn ids(&self) -> Vec<SheetId> {
        self.tabs.iter().map(|tab| tab.id).collect()
    }

    /// Append a tab and make it active
    pub fn add(&mut self, name: impl Into<String>) -> SheetId {
        let id = SheetId(self.next_id);
        self.next_id += 1;
        self.tabs.push(SheetTab {
            id,
            name: name.into(),
        });
        self.active = Some(id);
        id
    }

    /// Remove a tab; the active selection moves to the tab now at its index
    pub fn remove(&mut self, id: SheetId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.tabs.remove(index);
        if self.active == Some(id) {
            self.active = self
                .tabs
                .get(index)
                .or_else(|| self.tabs.last())
                .map(|tab| tab.id);
        }
        true
    }

    pub fn select(&mut self, id: SheetId) -> bool {
        if self.index_of(id).is_some() && self.active != Some(id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Shift-aware reorder, see [`reorder_vec`]
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        reorder_vec(&mut self.tabs, from, to)
    }
}
