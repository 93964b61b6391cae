use basecraft_core::{
    BaseId, Command, ManufactureRule, MessageKey, RuleCategory, RuleId, ScreenRequest, Translator,
};
use basecraft_system_configurator::{ConfiguratorState, ProductionConfigurator};

const BASE: BaseId = BaseId::new(3);

struct EchoTranslator;

impl Translator for EchoTranslator {
    fn translate(&self, key: MessageKey) -> String {
        format!("<{}>", key.get())
    }
}

fn reviewed_rule() -> ManufactureRule {
    ManufactureRule::new(
        RuleId::new(4),
        MessageKey::new("rule/scout-craft"),
        RuleCategory::Craft,
        9,
        240,
        800,
    )
}

#[test]
fn confirm_submits_the_production_and_closes() {
    let mut screen = ProductionConfigurator::new();
    let mut commands = Vec::new();
    let mut requests = Vec::new();

    screen.open(BASE, reviewed_rule());
    screen.confirm(&mut commands, &mut requests);

    assert_eq!(
        commands,
        vec![Command::BeginProduction {
            base: BASE,
            rule: RuleId::new(4),
        }],
        "confirmation must submit exactly the reviewed base and rule",
    );
    assert_eq!(requests, vec![ScreenRequest::Close]);
    assert_eq!(screen.state(), ConfiguratorState::Closed);
}

#[test]
fn cancel_closes_without_submitting() {
    let mut screen = ProductionConfigurator::new();
    let mut requests = Vec::new();

    screen.open(BASE, reviewed_rule());
    screen.cancel(&mut requests);

    assert_eq!(requests, vec![ScreenRequest::Close]);
    assert_eq!(screen.state(), ConfiguratorState::Closed);
}

#[test]
fn only_the_first_resolution_counts() {
    let mut screen = ProductionConfigurator::new();
    let mut commands = Vec::new();
    let mut requests = Vec::new();

    screen.open(BASE, reviewed_rule());
    screen.cancel(&mut requests);
    screen.confirm(&mut commands, &mut requests);
    screen.cancel(&mut requests);

    assert!(
        commands.is_empty(),
        "a cancelled review must never reach the world",
    );
    assert_eq!(requests, vec![ScreenRequest::Close]);
}

#[test]
fn summary_translates_the_rule_name_and_carries_its_demands() {
    let mut screen = ProductionConfigurator::new();

    screen.open(BASE, reviewed_rule());
    let summary = screen
        .summary(&EchoTranslator)
        .expect("an open screen has a summary");

    assert_eq!(summary.name, "<rule/scout-craft>");
    assert_eq!(summary.required_workspace, 9);
    assert_eq!(summary.build_hours, 240);
    assert_eq!(summary.cost, 800);
}

#[test]
fn an_unopened_screen_has_no_summary() {
    let screen = ProductionConfigurator::new();

    assert!(screen.summary(&EchoTranslator).is_none());
    assert_eq!(screen.state(), ConfiguratorState::Closed);
}

#[test]
fn reopening_resolves_a_previously_closed_screen() {
    let mut screen = ProductionConfigurator::new();
    let mut commands = Vec::new();
    let mut requests = Vec::new();

    screen.open(BASE, reviewed_rule());
    screen.cancel(&mut requests);
    requests.clear();

    screen.open(BASE, reviewed_rule());
    screen.confirm(&mut commands, &mut requests);

    assert_eq!(commands.len(), 1, "the reopened review must submit again");
    assert_eq!(screen.state(), ConfiguratorState::Closed);
}
