#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares world data for adapters.

use basecraft_core::{BaseId, BaseSnapshot, ManufactureRule, ProductionCatalog};
use basecraft_world::{query, World};

/// Produces the data adapters need to host the manufacturing screens.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Identifier of the base a freshly booted session should open with.
    #[must_use]
    pub fn home_base(&self, world: &World) -> Option<BaseId> {
        query::base_ids(world).first().copied()
    }

    /// Captures the overview an adapter shows above the production list.
    #[must_use]
    pub fn base_overview(&self, world: &World, base: BaseId) -> Option<BaseOverview> {
        query::base_snapshot(world, base).map(|snapshot| BaseOverview {
            capacities: snapshot,
            active_productions: query::active_productions(world, base).len(),
        })
    }
}

/// Facility summary presented alongside the production list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseOverview {
    /// Capacity snapshot of the base.
    pub capacities: BaseSnapshot,
    /// Number of productions currently running at the base.
    pub active_productions: usize,
}

/// World-backed catalog handed to the list screen on each activation.
#[derive(Clone, Copy, Debug)]
pub struct WorldCatalog<'world> {
    world: &'world World,
}

impl<'world> WorldCatalog<'world> {
    /// Creates a catalog view over the provided world.
    #[must_use]
    pub fn new(world: &'world World) -> Self {
        Self { world }
    }
}

impl ProductionCatalog for WorldCatalog<'_> {
    fn available_productions(&self, base: BaseId) -> Vec<ManufactureRule> {
        query::available_productions(self.world, base)
    }
}

#[cfg(test)]
mod tests {
    use super::{Bootstrap, WorldCatalog};
    use basecraft_core::ProductionCatalog;
    use basecraft_world::{World, STARTER_BASE};

    #[test]
    fn home_base_is_the_seeded_starter_base() {
        let world = World::new();
        assert_eq!(Bootstrap.home_base(&world), Some(STARTER_BASE));
    }

    #[test]
    fn world_catalog_answers_from_world_queries() {
        let world = World::new();
        let catalog = WorldCatalog::new(&world);

        let offered = catalog.available_productions(STARTER_BASE);

        assert_eq!(
            offered,
            basecraft_world::query::available_productions(&world, STARTER_BASE)
        );
    }

    #[test]
    fn overview_counts_running_productions() {
        let world = World::new();
        let overview = Bootstrap
            .base_overview(&world, STARTER_BASE)
            .expect("starter base exists");

        assert_eq!(overview.active_productions, 0);
        assert_eq!(overview.capacities.id(), STARTER_BASE);
    }
}
