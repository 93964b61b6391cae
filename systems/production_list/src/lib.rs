#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure production-list screen that offers manufacturing projects for a base.
//!
//! The screen queries the catalog once per activation, renders each offered
//! rule as a two-column row, validates a selection against the base's
//! facility capacities, and either reports the refusal through the notifier
//! or asks the host to open the production configurator. It never mutates
//! base or catalog state.

use basecraft_core::{
    validate_start, BaseId, BaseSnapshot, ManufactureRule, Notifier, ProductionCatalog,
    RowIndex, ScreenRequest, Translator,
};

/// Lifecycle state of the production-list screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    /// The screen is presenting the current catalog rows.
    Listing,
    /// The screen was confirmed closed and awaits removal by the host.
    Closed,
}

/// Rendered two-column row paired with one backing-list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductionRow {
    /// Translated display name of the rule.
    pub name: String,
    /// Translated display name of the rule's category.
    pub category: String,
}

/// Production-list screen system.
///
/// The backing list and the rendered rows are rebuilt together on every
/// activation and discarded together on the next one; row *i* always pairs
/// with backing entry *i*.
#[derive(Debug, Default)]
pub struct ProductionList {
    base: Option<BaseId>,
    backing: Vec<ManufactureRule>,
    rows: Vec<ProductionRow>,
    closed: bool,
}

impl ProductionList {
    /// Creates a new, empty production-list screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the listing state and rebuilds the rows for the provided base.
    ///
    /// Performs exactly one catalog query and preserves its order; an empty
    /// answer renders an empty list. Re-activation discards the previous
    /// backing list and rows as a pair, so the screen tolerates the catalog
    /// shrinking, growing, or reordering between activations.
    pub fn activate<C, T>(&mut self, base: &BaseSnapshot, catalog: &C, translator: &T)
    where
        C: ProductionCatalog + ?Sized,
        T: Translator + ?Sized,
    {
        self.closed = false;
        self.base = Some(base.id());

        let backing = catalog.available_productions(base.id());
        let rows = backing
            .iter()
            .map(|rule| ProductionRow {
                name: translator.translate(rule.name()),
                category: translator.translate(rule.category().message_key()),
            })
            .collect();

        self.backing = backing;
        self.rows = rows;
    }

    /// Validates the rule behind the clicked row and routes or reports.
    ///
    /// The checks run in fixed order and the first failure wins: craft
    /// production with every hangar occupied is refused before workshop
    /// capacity is examined. Exactly one effect occurs per call: either the
    /// notifier shows a refusal or an open-configurator request is emitted,
    /// never both. The caller must pass a current snapshot of the base this
    /// screen was activated for; a stale index (beyond the backing list) or a
    /// call outside the listing state is a caller bug and has no effect.
    pub fn select_row<N>(
        &self,
        row: RowIndex,
        base: &BaseSnapshot,
        notifier: &mut N,
        out: &mut Vec<ScreenRequest>,
    ) where
        N: Notifier + ?Sized,
    {
        if self.closed {
            return;
        }

        let Ok(index) = usize::try_from(row.get()) else {
            return;
        };
        let Some(rule) = self.backing.get(index) else {
            return;
        };

        match validate_start(rule, base) {
            Err(reason) => notifier.show_error(reason.message_key()),
            Ok(()) => out.push(ScreenRequest::OpenConfigurator {
                base: base.id(),
                rule: rule.clone(),
            }),
        }
    }

    /// Acknowledges the screen, asking the host to return to the previous one.
    pub fn confirm(&mut self, out: &mut Vec<ScreenRequest>) {
        if self.closed {
            return;
        }

        self.closed = true;
        out.push(ScreenRequest::Close);
    }

    /// Base the screen was last activated for, if any.
    #[must_use]
    pub fn base(&self) -> Option<BaseId> {
        self.base
    }

    /// Rendered rows, in catalog order.
    #[must_use]
    pub fn rows(&self) -> &[ProductionRow] {
        &self.rows
    }

    /// Backing-list entries, index-aligned with [`ProductionList::rows`].
    #[must_use]
    pub fn entries(&self) -> &[ManufactureRule] {
        &self.backing
    }

    /// Current lifecycle state of the screen.
    #[must_use]
    pub fn state(&self) -> ScreenState {
        if self.closed {
            ScreenState::Closed
        } else {
            ScreenState::Listing
        }
    }
}
