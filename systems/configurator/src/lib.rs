#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure production-configurator screen that reviews a handed-off rule.
//!
//! The list screen routes here with a base and the selected rule. The
//! configurator presents the rule's demands and resolves in exactly one of
//! two ways: confirmation submits a begin-production command for the world to
//! validate and apply, cancellation walks away. Either way the screen then
//! asks the host to close it.

use basecraft_core::{BaseId, Command, ManufactureRule, ScreenRequest, Translator};

/// Lifecycle state of the configurator screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfiguratorState {
    /// The screen is presenting the handed-off rule.
    Reviewing,
    /// The screen resolved (confirmed or cancelled) and awaits removal.
    Closed,
}

/// Translated demands of the reviewed rule, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfiguratorSummary {
    /// Translated display name of the rule.
    pub name: String,
    /// Workshop capacity the production would claim.
    pub required_workspace: u32,
    /// Hours of work required to complete one unit.
    pub build_hours: u32,
    /// Funds consumed when the production starts.
    pub cost: u32,
}

/// Production-configurator screen system.
#[derive(Debug, Default)]
pub struct ProductionConfigurator {
    base: Option<BaseId>,
    rule: Option<ManufactureRule>,
    closed: bool,
}

impl ProductionConfigurator {
    /// Creates a new, empty configurator screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the reviewing state with the handed-off base and rule.
    pub fn open(&mut self, base: BaseId, rule: ManufactureRule) {
        self.base = Some(base);
        self.rule = Some(rule);
        self.closed = false;
    }

    /// Translated summary of the reviewed rule, if the screen is open.
    #[must_use]
    pub fn summary<T>(&self, translator: &T) -> Option<ConfiguratorSummary>
    where
        T: Translator + ?Sized,
    {
        self.rule.as_ref().map(|rule| ConfiguratorSummary {
            name: translator.translate(rule.name()),
            required_workspace: rule.required_workspace(),
            build_hours: rule.build_hours(),
            cost: rule.cost(),
        })
    }

    /// Submits the production start and asks the host to close the screen.
    ///
    /// The world's begin-production guard is authoritative; the configurator
    /// submits without re-validating. Only the first resolution of an open
    /// screen has any effect.
    pub fn confirm(&mut self, out_commands: &mut Vec<Command>, out_requests: &mut Vec<ScreenRequest>) {
        if self.closed {
            return;
        }
        let (Some(base), Some(rule)) = (self.base, self.rule.as_ref()) else {
            return;
        };

        self.closed = true;
        out_commands.push(Command::BeginProduction {
            base,
            rule: rule.id(),
        });
        out_requests.push(ScreenRequest::Close);
    }

    /// Walks away from the reviewed rule, closing the screen.
    pub fn cancel(&mut self, out_requests: &mut Vec<ScreenRequest>) {
        if self.closed {
            return;
        }

        self.closed = true;
        out_requests.push(ScreenRequest::Close);
    }

    /// Base the screen was opened for, if any.
    #[must_use]
    pub fn base(&self) -> Option<BaseId> {
        self.base
    }

    /// Current lifecycle state of the screen.
    #[must_use]
    pub fn state(&self) -> ConfiguratorState {
        if self.closed || self.rule.is_none() {
            ConfiguratorState::Closed
        } else {
            ConfiguratorState::Reviewing
        }
    }
}
