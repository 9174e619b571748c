// src/session.rs
//! Presentation-side state: search text, active category, selection,
//! detail tab, theme and the demo for the selected algorithm.
//!
//! The query engine stays stateless; this is the one place that
//! remembers the last filter result, keyed on [`FilterKey`].

use tracing::debug;

use crate::catalog::Catalog;
use crate::demo::DemoRun;
use crate::enums::{DetailTab, Theme};
use crate::query::{self, FilterKey};
use crate::record::AlgorithmRecord;

/// What the presentation layer should draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'c> {
    Grid,
    Detail(&'c AlgorithmRecord),
}

#[derive(Debug)]
struct Memo<'c> {
    key: FilterKey,
    results: Vec<&'c AlgorithmRecord>,
}

#[derive(Debug)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    filter: FilterKey,
    selected: Option<String>,
    tab: DetailTab,
    theme: Theme,
    demo: Option<DemoRun>,
    memo: Option<Memo<'c>>,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog, theme: Theme) -> Self {
        Self {
            catalog,
            filter: FilterKey::default(),
            selected: None,
            tab: DetailTab::default(),
            theme,
            demo: None,
            memo: None,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn query(&self) -> &str {
        &self.filter.query
    }

    pub fn category(&self) -> &str {
        &self.filter.category
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    /// Filtered records for the current inputs, recomputed only when they changed
    pub fn visible(&mut self) -> &[&'c AlgorithmRecord] {
        let stale = self.memo.as_ref().map_or(true, |m| m.key != self.filter);
        if stale {
            let results = self.filter.apply(self.catalog);
            debug!(
                query = %self.filter.query,
                category = %self.filter.category,
                hits = results.len(),
                "recomputed filter"
            );
            self.memo = Some(Memo {
                key: self.filter.clone(),
                results,
            });
        }
        self.memo.as_ref().map(|m| m.results.as_slice()).unwrap_or_default()
    }

    /// Last computed result; `None` until [`Session::visible`] has run once
    pub fn last_results(&self) -> Option<&[&'c AlgorithmRecord]> {
        self.memo.as_ref().map(|m| m.results.as_slice())
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select an algorithm by name. Switching to a different record resets
    /// the tab and the demo.
    pub fn select(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.selected.as_deref() == Some(name.as_str()) {
            return;
        }
        self.demo = self
            .catalog
            .get_by_name(&name)
            .map(|r| DemoRun::new(r.category));
        self.tab = DetailTab::Overview;
        self.selected = Some(name);
    }

    /// Back to the grid
    pub fn go_home(&mut self) {
        self.selected = None;
        self.demo = None;
        self.tab = DetailTab::Overview;
    }

    /// Resolve the current selection. An unknown name is treated as no selection.
    pub fn view(&self) -> View<'c> {
        match self.selected.as_deref() {
            None => View::Grid,
            Some(name) => match query::find_by_name(self.catalog, name) {
                Ok(record) => View::Detail(record),
                Err(err) => {
                    debug!(%err, "selection fell back to grid");
                    View::Grid
                }
            },
        }
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn demo(&self) -> Option<&DemoRun> {
        self.demo.as_ref()
    }

    pub fn demo_mut(&mut self) -> Option<&mut DemoRun> {
        self.demo.as_mut()
    }
}
