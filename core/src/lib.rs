#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Basecraft front end.
//!
//! This crate defines the vocabulary that connects adapters, the
//! authoritative world, and pure screen systems. Adapters submit [`Command`]
//! values describing desired mutations, the world executes those commands via
//! its `apply` entry point and broadcasts [`Event`] values, and screen systems
//! emit [`ScreenRequest`] values that the navigation host turns into pushes
//! and pops. The collaborator traits at the bottom of the crate are the seams
//! screens consume instead of reaching into a global game session.

use serde::{Deserialize, Serialize};

/// Unique identifier assigned to a player base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BaseId(u32);

impl BaseId {
    /// Creates a new base identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a manufacturing rule within the ruleset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleId(u32);

impl RuleId {
    /// Creates a new rule identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a researchable technology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TechId(u32);

impl TechId {
    /// Creates a new technology identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Zero-based position of a rendered row within a list screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex(u32);

impl RowIndex {
    /// Creates a new row index with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the index.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Key into the language table used to resolve display strings.
///
/// Keys are resolved by a [`Translator`]; unknown-key behavior belongs to the
/// translator implementation, not to the code holding the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageKey(&'static str);

impl MessageKey {
    /// Creates a new message key from its canonical identifier.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// Retrieves the canonical identifier of the key.
    #[must_use]
    pub const fn get(&self) -> &'static str {
        self.0
    }
}

/// Category a manufacturing rule belongs to.
///
/// [`RuleCategory::Craft`] is the distinguished value: craft production
/// occupies a hangar for the duration of the build, so it is validated
/// against hangar capacity rather than workshop capacity alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    /// Airframes and other vehicles that occupy a hangar while built.
    Craft,
    /// Hand-held weaponry.
    Weapon,
    /// Ammunition for manufactured weaponry.
    Ammunition,
    /// Armor and miscellaneous field equipment.
    Equipment,
}

impl RuleCategory {
    /// Reports whether production in this category occupies a hangar.
    #[must_use]
    pub const fn is_craft(self) -> bool {
        matches!(self, Self::Craft)
    }

    /// Key resolving to the category's display name.
    #[must_use]
    pub const fn message_key(self) -> MessageKey {
        match self {
            Self::Craft => MessageKey::new("category/craft"),
            Self::Weapon => MessageKey::new("category/weapon"),
            Self::Ammunition => MessageKey::new("category/ammunition"),
            Self::Equipment => MessageKey::new("category/equipment"),
        }
    }
}

/// Template describing a producible item or craft.
///
/// Rules are owned by the ruleset and treated as read-only by every screen;
/// the list screen clones them into its backing list for the lifetime of one
/// activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManufactureRule {
    id: RuleId,
    name: MessageKey,
    category: RuleCategory,
    required_workspace: u32,
    build_hours: u32,
    cost: u32,
}

impl ManufactureRule {
    /// Creates a new manufacturing rule description.
    #[must_use]
    pub const fn new(
        id: RuleId,
        name: MessageKey,
        category: RuleCategory,
        required_workspace: u32,
        build_hours: u32,
        cost: u32,
    ) -> Self {
        Self {
            id,
            name,
            category,
            required_workspace,
            build_hours,
            cost,
        }
    }

    /// Identifier of the rule within the ruleset.
    #[must_use]
    pub const fn id(&self) -> RuleId {
        self.id
    }

    /// Key resolving to the rule's display name.
    #[must_use]
    pub const fn name(&self) -> MessageKey {
        self.name
    }

    /// Category the rule belongs to.
    #[must_use]
    pub const fn category(&self) -> RuleCategory {
        self.category
    }

    /// Workshop capacity occupied while the production runs.
    #[must_use]
    pub const fn required_workspace(&self) -> u32 {
        self.required_workspace
    }

    /// Hours of work required to complete one unit.
    #[must_use]
    pub const fn build_hours(&self) -> u32 {
        self.build_hours
    }

    /// Funds consumed when the production is started.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

/// Read-only capacity summary of a single base at one point in time.
///
/// Screens receive a fresh snapshot from the host whenever they need to
/// validate against facility state; they never hold a live reference into the
/// world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseSnapshot {
    id: BaseId,
    available_hangars: u32,
    used_hangars: u32,
    free_workshop_capacity: u32,
}

impl BaseSnapshot {
    /// Creates a new capacity snapshot for the provided base.
    #[must_use]
    pub const fn new(
        id: BaseId,
        available_hangars: u32,
        used_hangars: u32,
        free_workshop_capacity: u32,
    ) -> Self {
        Self {
            id,
            available_hangars,
            used_hangars,
            free_workshop_capacity,
        }
    }

    /// Identifier of the base the snapshot describes.
    #[must_use]
    pub const fn id(&self) -> BaseId {
        self.id
    }

    /// Total hangars built at the base.
    #[must_use]
    pub const fn available_hangars(&self) -> u32 {
        self.available_hangars
    }

    /// Hangars occupied by stationed craft and craft under construction.
    #[must_use]
    pub const fn used_hangars(&self) -> u32 {
        self.used_hangars
    }

    /// Workshop capacity not yet claimed by running productions.
    #[must_use]
    pub const fn free_workshop_capacity(&self) -> u32 {
        self.free_workshop_capacity
    }

    /// Hangars still free for new craft.
    #[must_use]
    pub const fn free_hangars(&self) -> u32 {
        self.available_hangars.saturating_sub(self.used_hangars)
    }
}

/// Reasons a production start may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartDenied {
    /// Craft production was requested while every hangar is occupied.
    NoFreeHangars,
    /// The rule demands more workshop capacity than the base has free.
    InsufficientWorkspace,
    /// The rule is not currently offered by the catalog for this base.
    Unavailable,
}

impl StartDenied {
    /// Key resolving to the user-facing message for the refusal.
    #[must_use]
    pub const fn message_key(self) -> MessageKey {
        match self {
            Self::NoFreeHangars => MessageKey::new("error/no-free-hangars"),
            Self::InsufficientWorkspace => MessageKey::new("error/not-enough-workspace"),
            Self::Unavailable => MessageKey::new("error/production-unavailable"),
        }
    }
}

/// Decides whether the provided rule may start at the snapshotted base.
///
/// Checks run in fixed order and the first failure wins: craft production
/// with no free hangar is refused before workshop capacity is examined.
/// The decision reads the snapshot only; it never mutates base or catalog
/// state.
pub fn validate_start(rule: &ManufactureRule, base: &BaseSnapshot) -> Result<(), StartDenied> {
    if rule.category().is_craft() && base.free_hangars() == 0 {
        return Err(StartDenied::NoFreeHangars);
    }

    if rule.required_workspace() > base.free_workshop_capacity() {
        return Err(StartDenied::InsufficientWorkspace);
    }

    Ok(())
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Creates or reshapes a base, clearing any productions it was running.
    ConfigureBase {
        /// Identifier of the base to create or reconfigure.
        base: BaseId,
        /// Total hangars built at the base.
        hangars: u32,
        /// Craft currently stationed in those hangars.
        stationed_craft: u32,
        /// Total workshop capacity installed at the base.
        workshop_capacity: u32,
    },
    /// Marks a technology as researched, widening the production catalog.
    RecordDiscovery {
        /// Technology that completed research.
        tech: TechId,
    },
    /// Requests that the base start producing the identified rule.
    BeginProduction {
        /// Base the production should run at.
        base: BaseId,
        /// Rule identifying what to produce.
        rule: RuleId,
    },
    /// Requests that a running production be abandoned.
    CancelProduction {
        /// Base the production is running at.
        base: BaseId,
        /// Rule identifying the production to abandon.
        rule: RuleId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a base was created or reconfigured.
    BaseConfigured {
        /// Identifier of the affected base.
        base: BaseId,
    },
    /// Confirms that a technology joined the discovered set.
    DiscoveryRecorded {
        /// Technology that was recorded.
        tech: TechId,
    },
    /// Confirms that a production started and now claims facility capacity.
    ProductionStarted {
        /// Base the production runs at.
        base: BaseId,
        /// Rule being produced.
        rule: RuleId,
    },
    /// Reports that a production start request was refused.
    ProductionRejected {
        /// Base the request targeted.
        base: BaseId,
        /// Rule the request named.
        rule: RuleId,
        /// Specific reason the start was refused.
        reason: StartDenied,
    },
    /// Confirms that a running production was abandoned.
    ProductionCancelled {
        /// Base the production ran at.
        base: BaseId,
        /// Rule that was being produced.
        rule: RuleId,
    },
}

/// Navigation effects a screen asks its host to perform.
///
/// Screens never push or pop other screens themselves; they emit requests
/// into a host-owned buffer and the navigation stack applies them in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenRequest {
    /// Opens the production-list screen for the provided base.
    OpenProductionList {
        /// Base whose catalog should be listed.
        base: BaseId,
    },
    /// Opens the production configurator with the selected rule.
    OpenConfigurator {
        /// Base the production would run at.
        base: BaseId,
        /// Rule handed off by the list screen.
        rule: ManufactureRule,
    },
    /// Closes the requesting screen, returning to the one beneath it.
    Close,
}

/// Catalog collaborator answering which rules a base may currently produce.
pub trait ProductionCatalog {
    /// Returns the rules currently offered to the base, in catalog order.
    ///
    /// An empty sequence is a valid answer and renders an empty list.
    fn available_productions(&self, base: BaseId) -> Vec<ManufactureRule>;
}

/// Language collaborator resolving message keys into display strings.
pub trait Translator {
    /// Resolves the provided key into a display string.
    fn translate(&self, key: MessageKey) -> String;
}

/// Notification collaborator surfacing user-facing, recoverable conditions.
pub trait Notifier {
    /// Presents the message identified by the provided key to the player.
    ///
    /// Fire-and-forget: presentation details are the implementation's
    /// concern, including how the key is translated.
    fn show_error(&mut self, message: MessageKey);
}

#[cfg(test)]
mod tests {
    use super::{
        validate_start, BaseId, BaseSnapshot, ManufactureRule, MessageKey, RuleCategory, RuleId,
        StartDenied, TechId,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn craft_rule(required_workspace: u32) -> ManufactureRule {
        ManufactureRule::new(
            RuleId::new(1),
            MessageKey::new("rule/test-craft"),
            RuleCategory::Craft,
            required_workspace,
            100,
            400,
        )
    }

    fn workshop_rule(required_workspace: u32) -> ManufactureRule {
        ManufactureRule::new(
            RuleId::new(2),
            MessageKey::new("rule/test-item"),
            RuleCategory::Weapon,
            required_workspace,
            40,
            120,
        )
    }

    #[test]
    fn free_hangars_derives_from_available_minus_used() {
        let snapshot = BaseSnapshot::new(BaseId::new(0), 3, 2, 10);
        assert_eq!(snapshot.free_hangars(), 1);
    }

    #[test]
    fn free_hangars_saturates_when_overbooked() {
        let snapshot = BaseSnapshot::new(BaseId::new(0), 2, 5, 10);
        assert_eq!(snapshot.free_hangars(), 0);
    }

    #[test]
    fn craft_rule_refused_without_free_hangar() {
        let base = BaseSnapshot::new(BaseId::new(0), 2, 2, 50);

        assert_eq!(
            validate_start(&craft_rule(5), &base),
            Err(StartDenied::NoFreeHangars)
        );
    }

    #[test]
    fn hangar_refusal_wins_over_workspace_refusal() {
        let base = BaseSnapshot::new(BaseId::new(0), 1, 1, 0);

        assert_eq!(
            validate_start(&craft_rule(10), &base),
            Err(StartDenied::NoFreeHangars),
            "craft check must short-circuit the workspace check",
        );
    }

    #[test]
    fn workspace_refusal_reported_for_oversized_rule() {
        let base = BaseSnapshot::new(BaseId::new(0), 2, 0, 5);

        assert_eq!(
            validate_start(&workshop_rule(10), &base),
            Err(StartDenied::InsufficientWorkspace)
        );
    }

    #[test]
    fn exact_workspace_fit_is_accepted() {
        let base = BaseSnapshot::new(BaseId::new(0), 2, 0, 10);

        assert_eq!(validate_start(&workshop_rule(10), &base), Ok(()));
    }

    #[test]
    fn craft_rule_accepted_with_free_hangar_and_workspace() {
        let base = BaseSnapshot::new(BaseId::new(0), 2, 1, 10);

        assert_eq!(validate_start(&craft_rule(3), &base), Ok(()));
    }

    #[test]
    fn refusal_keys_are_distinct() {
        assert_ne!(
            StartDenied::NoFreeHangars.message_key(),
            StartDenied::InsufficientWorkspace.message_key()
        );
    }

    #[test]
    fn craft_is_the_distinguished_category() {
        assert!(RuleCategory::Craft.is_craft());
        assert!(!RuleCategory::Weapon.is_craft());
        assert!(!RuleCategory::Ammunition.is_craft());
        assert!(!RuleCategory::Equipment.is_craft());
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn identifiers_round_trip_through_bincode() {
        assert_round_trip(&BaseId::new(3));
        assert_round_trip(&RuleId::new(17));
        assert_round_trip(&TechId::new(8));
    }

    #[test]
    fn start_denied_round_trips_through_bincode() {
        assert_round_trip(&StartDenied::NoFreeHangars);
    }
}
