#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game state management for Basecraft.
//!
//! The world owns the ruleset, the discovered-technology set, and every
//! player base with its running productions. Mutations happen exclusively
//! through [`apply`], which validates each [`Command`] and broadcasts the
//! resulting [`Event`] values; reads happen through the [`query`] module.

use basecraft_core::{
    validate_start, BaseId, BaseSnapshot, Command, Event, ManufactureRule, MessageKey,
    RuleCategory, RuleId, StartDenied, TechId,
};

const DEFAULT_BASE_HANGARS: u32 = 2;
const DEFAULT_BASE_STATIONED_CRAFT: u32 = 1;
const DEFAULT_BASE_WORKSHOP_CAPACITY: u32 = 24;

/// Technologies referenced by the starter ruleset.
pub mod techs {
    use basecraft_core::TechId;

    /// Unlocks gauss weaponry and its ammunition.
    pub const GAUSS_PHYSICS: TechId = TechId::new(0);
    /// Unlocks the strike-interceptor airframe.
    pub const FLIGHT_SYSTEMS: TechId = TechId::new(1);
}

/// Rules contained in the starter ruleset, in catalog order.
pub mod rules {
    use basecraft_core::RuleId;

    /// Craft available from the first day.
    pub const PATROL_CORVETTE: RuleId = RuleId::new(0);
    /// Weapon gated behind [`super::techs::GAUSS_PHYSICS`].
    pub const GAUSS_RIFLE: RuleId = RuleId::new(1);
    /// Ammunition gated behind [`super::techs::GAUSS_PHYSICS`].
    pub const GAUSS_CLIP: RuleId = RuleId::new(2);
    /// Equipment available from the first day.
    pub const COMPOSITE_VEST: RuleId = RuleId::new(3);
    /// Craft gated behind [`super::techs::FLIGHT_SYSTEMS`].
    pub const STRIKE_INTERCEPTOR: RuleId = RuleId::new(4);
}

/// Identifier of the base seeded by [`World::new`].
pub const STARTER_BASE: BaseId = BaseId::new(0);

/// Represents the authoritative Basecraft game state.
#[derive(Debug)]
pub struct World {
    ruleset: Vec<RulesetEntry>,
    discovered: Vec<TechId>,
    bases: Vec<Base>,
}

impl World {
    /// Creates a new world seeded with the starter ruleset and one base.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ruleset: starter_ruleset(),
            discovered: vec![techs::GAUSS_PHYSICS],
            bases: vec![Base::new(
                STARTER_BASE,
                DEFAULT_BASE_HANGARS,
                DEFAULT_BASE_STATIONED_CRAFT,
                DEFAULT_BASE_WORKSHOP_CAPACITY,
            )],
        }
    }

    fn base(&self, id: BaseId) -> Option<&Base> {
        self.bases.iter().find(|base| base.id == id)
    }

    fn base_mut(&mut self, id: BaseId) -> Option<&mut Base> {
        self.bases.iter_mut().find(|base| base.id == id)
    }

    fn entry(&self, id: RuleId) -> Option<&RulesetEntry> {
        self.ruleset.iter().find(|entry| entry.rule.id() == id)
    }

    fn is_discovered(&self, tech: Option<TechId>) -> bool {
        match tech {
            Some(tech) => self.discovered.contains(&tech),
            None => true,
        }
    }

    fn is_offered(&self, entry: &RulesetEntry, base: &Base) -> bool {
        self.is_discovered(entry.prerequisite) && !base.is_producing(entry.rule.id())
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureBase {
            base,
            hangars,
            stationed_craft,
            workshop_capacity,
        } => {
            match world.base_mut(base) {
                Some(existing) => {
                    existing.hangars = hangars;
                    existing.stationed_craft = stationed_craft;
                    existing.workshop_capacity = workshop_capacity;
                    existing.productions.clear();
                }
                None => {
                    world
                        .bases
                        .push(Base::new(base, hangars, stationed_craft, workshop_capacity));
                }
            }
            out_events.push(Event::BaseConfigured { base });
        }
        Command::RecordDiscovery { tech } => {
            if !world.discovered.contains(&tech) {
                world.discovered.push(tech);
                out_events.push(Event::DiscoveryRecorded { tech });
            }
        }
        Command::BeginProduction { base, rule } => {
            let offered = match (world.base(base), world.entry(rule)) {
                (Some(base_state), Some(entry)) => world.is_offered(entry, base_state),
                _ => false,
            };
            if !offered {
                out_events.push(Event::ProductionRejected {
                    base,
                    rule,
                    reason: StartDenied::Unavailable,
                });
                return;
            }

            let Some(entry) = world.entry(rule) else {
                return;
            };
            let rule_template = entry.rule.clone();
            let Some(base_state) = world.base_mut(base) else {
                return;
            };

            if let Err(reason) = validate_start(&rule_template, &base_state.snapshot()) {
                out_events.push(Event::ProductionRejected { base, rule, reason });
                return;
            }

            base_state.productions.push(ActiveProduction {
                rule,
                workspace: rule_template.required_workspace(),
                craft: rule_template.category().is_craft(),
            });
            out_events.push(Event::ProductionStarted { base, rule });
        }
        Command::CancelProduction { base, rule } => {
            let Some(base_state) = world.base_mut(base) else {
                out_events.push(Event::ProductionRejected {
                    base,
                    rule,
                    reason: StartDenied::Unavailable,
                });
                return;
            };

            match base_state
                .productions
                .iter()
                .position(|production| production.rule == rule)
            {
                Some(index) => {
                    let _ = base_state.productions.remove(index);
                    out_events.push(Event::ProductionCancelled { base, rule });
                }
                None => out_events.push(Event::ProductionRejected {
                    base,
                    rule,
                    reason: StartDenied::Unavailable,
                }),
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use basecraft_core::{BaseId, BaseSnapshot, ManufactureRule, RuleId};

    /// Returns the rules the base may currently start producing.
    ///
    /// The answer preserves ruleset order exactly; a rule is offered once its
    /// prerequisite technology is discovered and for as long as the base is
    /// not already producing it. An unknown base yields an empty catalog.
    #[must_use]
    pub fn available_productions(world: &World, base: BaseId) -> Vec<ManufactureRule> {
        let Some(base_state) = world.base(base) else {
            return Vec::new();
        };

        world
            .ruleset
            .iter()
            .filter(|entry| world.is_offered(entry, base_state))
            .map(|entry| entry.rule.clone())
            .collect()
    }

    /// Captures the facility-capacity snapshot of the provided base.
    #[must_use]
    pub fn base_snapshot(world: &World, base: BaseId) -> Option<BaseSnapshot> {
        world.base(base).map(super::Base::snapshot)
    }

    /// Enumerates the identifiers of every base, in creation order.
    #[must_use]
    pub fn base_ids(world: &World) -> Vec<BaseId> {
        world.bases.iter().map(|base| base.id).collect()
    }

    /// Lists the rules the base is currently producing, in start order.
    #[must_use]
    pub fn active_productions(world: &World, base: BaseId) -> Vec<RuleId> {
        world
            .base(base)
            .map(|base_state| {
                base_state
                    .productions
                    .iter()
                    .map(|production| production.rule)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug)]
struct RulesetEntry {
    rule: ManufactureRule,
    prerequisite: Option<TechId>,
}

#[derive(Debug)]
struct Base {
    id: BaseId,
    hangars: u32,
    stationed_craft: u32,
    workshop_capacity: u32,
    productions: Vec<ActiveProduction>,
}

impl Base {
    fn new(id: BaseId, hangars: u32, stationed_craft: u32, workshop_capacity: u32) -> Self {
        Self {
            id,
            hangars,
            stationed_craft,
            workshop_capacity,
            productions: Vec::new(),
        }
    }

    fn used_hangars(&self) -> u32 {
        let building = self
            .productions
            .iter()
            .filter(|production| production.craft)
            .count();
        self.stationed_craft
            .saturating_add(u32::try_from(building).unwrap_or(u32::MAX))
    }

    fn free_workshop_capacity(&self) -> u32 {
        let claimed = self
            .productions
            .iter()
            .fold(0u32, |sum, production| {
                sum.saturating_add(production.workspace)
            });
        self.workshop_capacity.saturating_sub(claimed)
    }

    fn is_producing(&self, rule: RuleId) -> bool {
        self.productions
            .iter()
            .any(|production| production.rule == rule)
    }

    fn snapshot(&self) -> BaseSnapshot {
        BaseSnapshot::new(
            self.id,
            self.hangars,
            self.used_hangars(),
            self.free_workshop_capacity(),
        )
    }
}

#[derive(Debug)]
struct ActiveProduction {
    rule: RuleId,
    workspace: u32,
    craft: bool,
}

fn starter_ruleset() -> Vec<RulesetEntry> {
    vec![
        RulesetEntry {
            rule: ManufactureRule::new(
                rules::PATROL_CORVETTE,
                MessageKey::new("rule/patrol-corvette"),
                RuleCategory::Craft,
                12,
                360,
                900,
            ),
            prerequisite: None,
        },
        RulesetEntry {
            rule: ManufactureRule::new(
                rules::GAUSS_RIFLE,
                MessageKey::new("rule/gauss-rifle"),
                RuleCategory::Weapon,
                3,
                80,
                120,
            ),
            prerequisite: Some(techs::GAUSS_PHYSICS),
        },
        RulesetEntry {
            rule: ManufactureRule::new(
                rules::GAUSS_CLIP,
                MessageKey::new("rule/gauss-clip"),
                RuleCategory::Ammunition,
                2,
                16,
                25,
            ),
            prerequisite: Some(techs::GAUSS_PHYSICS),
        },
        RulesetEntry {
            rule: ManufactureRule::new(
                rules::COMPOSITE_VEST,
                MessageKey::new("rule/composite-vest"),
                RuleCategory::Equipment,
                4,
                60,
                150,
            ),
            prerequisite: None,
        },
        RulesetEntry {
            rule: ManufactureRule::new(
                rules::STRIKE_INTERCEPTOR,
                MessageKey::new("rule/strike-interceptor"),
                RuleCategory::Craft,
                14,
                520,
                1400,
            ),
            prerequisite: Some(techs::FLIGHT_SYSTEMS),
        },
    ]
}
