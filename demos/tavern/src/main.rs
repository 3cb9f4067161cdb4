//! tavern — a small text world resolved from two points of view.
//!
//! Loads a tavern from CSV (embedded, or a path given as the first
//! argument), then prints what the innkeeper can see and reach under the
//! interactive policy, and what a room description of the common room
//! would mention under the descriptive policy.
//!
//! Set `RUST_LOG=cx_context=trace` to watch each resolution.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context as _, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use cx_context::{Context, ContextBuilder};
use cx_core::{AgentId, ContextPolicy, PlaceId};
use cx_world::{EntityRepository, WorldStore, load_world_csv, load_world_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const INNKEEPER:   AgentId = AgentId(10);
const COMMON_ROOM: PlaceId = PlaceId(1);

// ── World CSV ─────────────────────────────────────────────────────────────────

// Common room (1) opens onto the street (2) and down to the cellar (3).
// The cellar door only opens from above.
const WORLD_CSV: &str = "\
kind,subject,object,flags,name\n\
place,1,,,common room\n\
place,2,,,street\n\
place,3,,,cellar\n\
exit,1,2,,\n\
exit,2,1,,\n\
exit,1,3,,\n\
agent,10,1,carrier|wearer,innkeeper\n\
agent,11,1,carrier|wearer,traveller\n\
agent,12,2,carrier,urchin\n\
item,100,,,ledger\n\
held,100,10,,\n\
item,101,,,apron\n\
worn,101,10,visible,\n\
item,102,,,key ring\n\
item,103,,,strongbox key\n\
back,102,10,,\n\
packed,103,10,observable|accessible,\n\
item,110,,,walking staff\n\
held,110,11,,\n\
item,111,,,pack\n\
back,111,11,,\n\
item,112,,,letter of credit\n\
packed,112,11,observable|accessible,\n\
item,113,,,travelling cloak\n\
worn,113,11,visible,\n\
item,114,,,money belt\n\
worn,114,11,,\n\
item,120,,,hearth\n\
stored,120,1,observable,\n\
item,121,,,mug\n\
stored,121,1,observable|accessible,\n\
item,122,,,loose coin\n\
stored,122,1,accessible,\n\
item,130,,,apple\n\
held,130,12,,\n\
";

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let world = match std::env::args().nth(1) {
        Some(path) => load_world_csv(Path::new(&path))
            .with_context(|| format!("loading world from {path}"))?,
        None => load_world_reader(Cursor::new(WORLD_CSV))?,
    };
    tracing::info!(
        places = world.place_count(),
        agents = world.agent_count(),
        items = world.item_count(),
        "world ready"
    );

    let interactive = ContextBuilder::new(ContextPolicy::INTERACTIVE);
    let ctx = interactive.from_agent(INNKEEPER, &world)?;
    println!("── Innkeeper (interactive) ──");
    print_context(&ctx, &world);

    let descriptive = ContextBuilder::new(ContextPolicy::DESCRIPTIVE);
    let room = descriptive.from_place(COMMON_ROOM, &world)?;
    println!("── Common room (descriptive) ──");
    print_context(&room, &world);

    println!("── Innkeeper context as JSON ──");
    println!("{}", serde_json::to_string_pretty(&ctx)?);

    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn print_context(ctx: &Context, world: &WorldStore) {
    let mut places: Vec<&str> = ctx
        .destinations()
        .iter()
        .filter_map(|&id| world.place(id))
        .map(|p| p.name.as_str())
        .collect();
    let mut agents: Vec<&str> = ctx
        .others()
        .iter()
        .filter_map(|&id| world.agent(id))
        .map(|a| a.name.as_str())
        .collect();
    let mut items: Vec<&str> = ctx
        .items()
        .iter()
        .filter_map(|&id| world.item(id))
        .map(|i| i.name.as_str())
        .collect();
    places.sort_unstable();
    agents.sort_unstable();
    items.sort_unstable();

    println!("  focus:        {}", ctx.focus());
    println!("  destinations: {}", places.join(", "));
    println!("  others:       {}", agents.join(", "));
    println!("  items:        {}", items.join(", "));
    println!();
}
