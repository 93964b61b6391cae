#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Terminal adapter that hosts the Basecraft manufacturing screens.

mod session;
mod terminal;

use anyhow::{bail, Result};
use basecraft_core::{Command, TechId};
use basecraft_rendering::ScreenBackend;
use basecraft_system_bootstrap::Bootstrap;
use basecraft_world::{apply, World, STARTER_BASE};
use clap::Parser;

use session::{Session, TerminalNotifier};
use terminal::TerminalBackend;

/// Command-line arguments shaping the boot scenario.
#[derive(Debug, Parser)]
#[command(
    name = "basecraft",
    about = "Production-list front end of the Basecraft base-management game"
)]
struct Args {
    /// Total hangars built at the starter base.
    #[arg(long, default_value_t = 2)]
    hangars: u32,

    /// Craft currently stationed at the starter base.
    #[arg(long = "stationed-craft", default_value_t = 1)]
    stationed_craft: u32,

    /// Workshop capacity installed at the starter base.
    #[arg(long = "workshop-capacity", default_value_t = 24)]
    workshop_capacity: u32,

    /// Additional technologies to record as discovered, by numeric id.
    #[arg(long = "discover", value_name = "TECH_ID")]
    discover: Vec<u32>,

    /// Comma-separated inputs to replay instead of reading stdin.
    #[arg(long, value_name = "INPUTS")]
    script: Option<String>,
}

/// Entry point for the Basecraft terminal front end.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut world = World::new();
    let mut events = Vec::new();
    apply(
        &mut world,
        Command::ConfigureBase {
            base: STARTER_BASE,
            hangars: args.hangars,
            stationed_craft: args.stationed_craft,
            workshop_capacity: args.workshop_capacity,
        },
        &mut events,
    );
    for tech in &args.discover {
        apply(
            &mut world,
            Command::RecordDiscovery {
                tech: TechId::new(*tech),
            },
            &mut events,
        );
    }
    log::debug!("boot events: {events:?}");

    let Some(home) = Bootstrap.home_base(&world) else {
        bail!("the world has no bases to manage");
    };

    let mut session = Session::new(world, TerminalNotifier::new());
    session.open_production_list(home);
    let Some(view) = session.view() else {
        bail!("the production list failed to open");
    };

    let backend = match args.script.as_deref() {
        Some(script) => TerminalBackend::scripted(script),
        None => TerminalBackend::interactive(),
    };
    backend.run(view, move |input, view_slot| {
        let flow = session.handle_input(input);
        if let Some(next) = session.view() {
            *view_slot = next;
        }
        flow
    })
}
