//! Navigation host owning the world and the screen stack.
//!
//! Screens emit [`ScreenRequest`] and [`Command`] values; the session drains
//! both after every input, applying commands to the world and turning
//! requests into pushes and pops. Returning to the production list after a
//! pop re-activates it, so the rows always reflect the current catalog.

use basecraft_core::{BaseId, Command, Event, MessageKey, Notifier, ScreenRequest, Translator};
use basecraft_rendering::{
    keys, Lexicon, ListPresentation, RowPresentation, ScreenFlow, ScreenInput, ScreenView,
    SummaryPresentation,
};
use basecraft_system_bootstrap::{Bootstrap, WorldCatalog};
use basecraft_system_configurator::ProductionConfigurator;
use basecraft_system_production_list::ProductionList;
use basecraft_world::{apply, query, World};

/// Notifier that translates refusals and prints them into the screen output.
pub(crate) struct TerminalNotifier {
    lexicon: Lexicon,
}

impl TerminalNotifier {
    /// Creates a notifier backed by the built-in lexicon.
    pub(crate) fn new() -> Self {
        Self { lexicon: Lexicon }
    }
}

impl Notifier for TerminalNotifier {
    fn show_error(&mut self, message: MessageKey) {
        println!("! {}", self.lexicon.translate(message));
    }
}

enum Screen {
    List(ProductionList),
    Configure(ProductionConfigurator),
}

/// Host that wires screens, world, and collaborators together.
pub(crate) struct Session<N: Notifier> {
    world: World,
    lexicon: Lexicon,
    notifier: N,
    stack: Vec<Screen>,
}

impl<N: Notifier> Session<N> {
    /// Creates a session over the provided world with an empty screen stack.
    pub(crate) fn new(world: World, notifier: N) -> Self {
        Self {
            world,
            lexicon: Lexicon,
            notifier,
            stack: Vec::new(),
        }
    }

    /// Pushes the production-list screen for the provided base.
    pub(crate) fn open_production_list(&mut self, base: BaseId) {
        let mut screen = ProductionList::new();
        if let Some(snapshot) = query::base_snapshot(&self.world, base) {
            screen.activate(&snapshot, &WorldCatalog::new(&self.world), &self.lexicon);
        }
        self.stack.push(Screen::List(screen));
        self.log_overview(base);
    }

    /// Routes one input to the top screen and applies its effects.
    pub(crate) fn handle_input(&mut self, input: ScreenInput) -> ScreenFlow {
        if matches!(input, ScreenInput::Quit) {
            log::info!("player quit the session");
            self.stack.clear();
            return ScreenFlow::Closed;
        }

        let mut requests = Vec::new();
        let mut commands = Vec::new();

        match self.stack.last_mut() {
            None => return ScreenFlow::Closed,
            Some(Screen::List(list)) => match input {
                ScreenInput::Select(row) => {
                    if let Some(snapshot) = list
                        .base()
                        .and_then(|base| query::base_snapshot(&self.world, base))
                    {
                        list.select_row(row, &snapshot, &mut self.notifier, &mut requests);
                    }
                }
                ScreenInput::Acknowledge | ScreenInput::Cancel => list.confirm(&mut requests),
                ScreenInput::Quit => {}
            },
            Some(Screen::Configure(configurator)) => match input {
                ScreenInput::Acknowledge => configurator.confirm(&mut commands, &mut requests),
                ScreenInput::Cancel => configurator.cancel(&mut requests),
                ScreenInput::Select(_) | ScreenInput::Quit => {}
            },
        }

        self.apply_commands(commands);
        self.process_requests(requests);

        if self.stack.is_empty() {
            ScreenFlow::Closed
        } else {
            ScreenFlow::Continue
        }
    }

    /// Presentation of whatever screen currently tops the stack.
    pub(crate) fn view(&self) -> Option<ScreenView> {
        match self.stack.last()? {
            Screen::List(list) => {
                let rows = list
                    .rows()
                    .iter()
                    .map(|row| RowPresentation::new(row.name.clone(), row.category.clone()))
                    .collect();
                Some(ScreenView::List(ListPresentation::new(
                    self.lexicon.translate(keys::LIST_TITLE),
                    self.lexicon.translate(keys::ITEM_HEADER),
                    self.lexicon.translate(keys::CATEGORY_HEADER),
                    rows,
                )))
            }
            Screen::Configure(configurator) => {
                let summary = configurator.summary(&self.lexicon)?;
                let lines = vec![
                    format!(
                        "{}: {}",
                        self.lexicon.translate(keys::WORKSPACE_LABEL),
                        summary.required_workspace
                    ),
                    format!(
                        "{}: {}",
                        self.lexicon.translate(keys::BUILD_HOURS_LABEL),
                        summary.build_hours
                    ),
                    format!(
                        "{}: ${}",
                        self.lexicon.translate(keys::COST_LABEL),
                        summary.cost
                    ),
                ];
                Some(ScreenView::Summary(SummaryPresentation::new(
                    format!(
                        "{}: {}",
                        self.lexicon.translate(keys::CONFIGURATOR_TITLE),
                        summary.name
                    ),
                    lines,
                )))
            }
        }
    }

    fn apply_commands(&mut self, commands: Vec<Command>) {
        for command in commands {
            log::info!("applying {command:?}");
            let mut events = Vec::new();
            apply(&mut self.world, command, &mut events);
            for event in &events {
                log::info!("world event: {event:?}");
                if let Event::ProductionRejected { reason, .. } = event {
                    // The world guard re-checks what the screens validated.
                    self.notifier.show_error(reason.message_key());
                }
            }
        }
    }

    fn process_requests(&mut self, requests: Vec<ScreenRequest>) {
        for request in requests {
            match request {
                ScreenRequest::OpenProductionList { base } => self.open_production_list(base),
                ScreenRequest::OpenConfigurator { base, rule } => {
                    log::info!("reviewing {:?} for base {}", rule.id(), base.get());
                    let mut screen = ProductionConfigurator::new();
                    screen.open(base, rule);
                    self.stack.push(Screen::Configure(screen));
                }
                ScreenRequest::Close => {
                    let _ = self.stack.pop();
                    self.reactivate_top();
                }
            }
        }
    }

    fn reactivate_top(&mut self) {
        let Some(Screen::List(list)) = self.stack.last_mut() else {
            return;
        };
        let Some(snapshot) = list
            .base()
            .and_then(|base| query::base_snapshot(&self.world, base))
        else {
            return;
        };
        list.activate(&snapshot, &WorldCatalog::new(&self.world), &self.lexicon);
    }

    fn log_overview(&self, base: BaseId) {
        if let Some(overview) = Bootstrap.base_overview(&self.world, base) {
            log::info!(
                "base {}: {} free hangar(s), {} free workspace, {} production(s) running",
                base.get(),
                overview.capacities.free_hangars(),
                overview.capacities.free_workshop_capacity(),
                overview.active_productions,
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn notifier(&self) -> &N {
        &self.notifier
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ScreenFlow, ScreenInput, ScreenView, Session};
    use basecraft_core::{Command, MessageKey, Notifier, RowIndex, StartDenied};
    use basecraft_world::{apply, query, rules, World, STARTER_BASE};

    #[derive(Default)]
    struct RecordingNotifier {
        errors: Vec<MessageKey>,
    }

    impl Notifier for RecordingNotifier {
        fn show_error(&mut self, message: MessageKey) {
            self.errors.push(message);
        }
    }

    fn session_with_base(
        hangars: u32,
        stationed_craft: u32,
        workshop_capacity: u32,
    ) -> Session<RecordingNotifier> {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::ConfigureBase {
                base: STARTER_BASE,
                hangars,
                stationed_craft,
                workshop_capacity,
            },
            &mut events,
        );
        let mut session = Session::new(world, RecordingNotifier::default());
        session.open_production_list(STARTER_BASE);
        session
    }

    #[test]
    fn selecting_a_valid_row_opens_the_configurator() {
        let mut session = session_with_base(2, 1, 24);

        // Starter catalog row 1 is the gauss rifle (workspace 3).
        let flow = session.handle_input(ScreenInput::Select(RowIndex::new(1)));

        assert_eq!(flow, ScreenFlow::Continue);
        assert_eq!(session.depth(), 2, "the configurator must sit on the list");
        assert!(matches!(session.view(), Some(ScreenView::Summary(_))));
    }

    #[test]
    fn confirming_the_configurator_starts_the_production() {
        let mut session = session_with_base(2, 1, 24);

        let _ = session.handle_input(ScreenInput::Select(RowIndex::new(1)));
        let flow = session.handle_input(ScreenInput::Acknowledge);

        assert_eq!(flow, ScreenFlow::Continue);
        assert_eq!(
            query::active_productions(session.world(), STARTER_BASE),
            vec![rules::GAUSS_RIFLE],
        );
        assert_eq!(session.depth(), 1, "the list must be topmost again");
        let Some(ScreenView::List(list)) = session.view() else {
            panic!("expected the reactivated list view");
        };
        assert_eq!(
            list.rows.len(),
            3,
            "the running production must leave the reactivated list",
        );
    }

    #[test]
    fn cancelling_the_configurator_changes_nothing() {
        let mut session = session_with_base(2, 1, 24);

        let _ = session.handle_input(ScreenInput::Select(RowIndex::new(1)));
        let _ = session.handle_input(ScreenInput::Cancel);

        assert!(query::active_productions(session.world(), STARTER_BASE).is_empty());
        assert_eq!(session.depth(), 1);
    }

    #[test]
    fn craft_selection_with_full_hangars_reports_and_stays() {
        let mut session = session_with_base(2, 2, 24);

        // Starter catalog row 0 is the patrol corvette.
        let flow = session.handle_input(ScreenInput::Select(RowIndex::new(0)));

        assert_eq!(flow, ScreenFlow::Continue);
        assert_eq!(session.depth(), 1, "a refused selection must not route");
        assert_eq!(
            session.notifier().errors,
            vec![StartDenied::NoFreeHangars.message_key()],
        );
        assert!(query::active_productions(session.world(), STARTER_BASE).is_empty());
    }

    #[test]
    fn acknowledging_the_list_ends_the_session() {
        let mut session = session_with_base(2, 1, 24);

        let flow = session.handle_input(ScreenInput::Acknowledge);

        assert_eq!(flow, ScreenFlow::Closed);
        assert_eq!(session.depth(), 0);
    }

    #[test]
    fn quit_closes_from_any_screen() {
        let mut session = session_with_base(2, 1, 24);

        let _ = session.handle_input(ScreenInput::Select(RowIndex::new(1)));
        let flow = session.handle_input(ScreenInput::Quit);

        assert_eq!(flow, ScreenFlow::Closed);
        assert!(session.view().is_none());
    }
}
