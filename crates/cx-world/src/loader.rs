//! CSV world loader.
//!
//! # CSV format
//!
//! One row per fact.  Rows are applied in file order, so an entity must be
//! declared before a later row refers to it.
//!
//! ```csv
//! kind,subject,object,flags,name
//! place,1,,,Great Hall
//! place,2,,,Courtyard
//! exit,1,2,,
//! exit,2,1,,
//! agent,10,1,carrier|wearer,Bob
//! item,20,,,sword
//! held,20,10,,
//! item,21,,,rucksack
//! back,21,10,,
//! item,22,,,map
//! packed,22,10,observable|accessible,
//! item,23,,,cloak
//! worn,23,10,visible,
//! item,24,,,chandelier
//! stored,24,1,observable,
//! ```
//!
//! | `kind`   | `subject` | `object`          | `flags`                               |
//! |----------|-----------|-------------------|---------------------------------------|
//! | `place`  | place id  | —                 | —                                     |
//! | `agent`  | agent id  | location (opt.)   | `carrier`, `wearer`                   |
//! | `item`   | item id   | —                 | —                                     |
//! | `exit`   | from      | to                | —                                     |
//! | `stored` | item id   | place id          | `observable`, `accessible`            |
//! | `held`   | item id   | agent id          | —                                     |
//! | `back`   | item id   | agent id          | —                                     |
//! | `packed` | item id   | agent id          | `observable`, `accessible`            |
//! | `worn`   | item id   | agent id          | `visible`                             |
//!
//! Flags are `|`-separated.  `name` is only read for declarations.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use cx_core::{AgentId, CxError, CxResult, ItemId, PlaceId};

use crate::capability::Exposure;
use crate::{Agent, Item, Place, Placement, WorldStore};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WorldRecord {
    kind:    String,
    subject: u64,
    object:  Option<u64>,
    flags:   Option<String>,
    name:    Option<String>,
}

impl WorldRecord {
    fn object(&self) -> CxResult<u64> {
        self.object.ok_or_else(|| {
            CxError::Parse(format!("{} row for {} is missing its object", self.kind, self.subject))
        })
    }

    fn flags(&self) -> impl Iterator<Item = &str> + '_ {
        self.flags
            .as_deref()
            .unwrap_or("")
            .split('|')
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }

    fn name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a world from a CSV file.
pub fn load_world_csv(path: &Path) -> CxResult<WorldStore> {
    let file = std::fs::File::open(path)?;
    load_world_reader(file)
}

/// Like [`load_world_csv`] but accepts any `Read` source.
pub fn load_world_reader<R: Read>(reader: R) -> CxResult<WorldStore> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut world = WorldStore::new();

    for (line, result) in csv_reader.deserialize::<WorldRecord>().enumerate() {
        let row = result.map_err(|e| CxError::Parse(e.to_string()))?;
        apply(&mut world, &row).map_err(|e| match e {
            CxError::Parse(msg) => CxError::Parse(format!("row {}: {msg}", line + 1)),
            other => other,
        })?;
    }

    tracing::debug!(
        places = world.place_count(),
        agents = world.agent_count(),
        items = world.item_count(),
        "world loaded"
    );
    Ok(world)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn apply(world: &mut WorldStore, row: &WorldRecord) -> CxResult<()> {
    let subject = row.subject;
    match row.kind.trim() {
        "place" => world.insert_place(Place::new(PlaceId(subject), row.name())),
        "item" => world.insert_item(Item::new(ItemId(subject), row.name())),
        "agent" => {
            let mut agent = Agent::new(AgentId(subject), row.name());
            for flag in row.flags() {
                agent = match flag {
                    "carrier" => agent.with_carrier(),
                    "wearer" => agent.with_wearer(),
                    other => return Err(unknown_flag(other, "agent")),
                };
            }
            world.insert_agent(agent)?;
            match row.object {
                Some(place) => world.move_agent(AgentId(subject), PlaceId(place)),
                None => Ok(()),
            }
        }
        "exit" => world.add_exit(PlaceId(subject), PlaceId(row.object()?)),
        "stored" => {
            let placement = Placement::Place {
                place:    PlaceId(row.object()?),
                exposure: parse_exposure(row)?,
            };
            world.put_item(ItemId(subject), placement)
        }
        "held" => world.put_item(ItemId(subject), Placement::Held(AgentId(row.object()?))),
        "back" => world.put_item(ItemId(subject), Placement::Back(AgentId(row.object()?))),
        "packed" => {
            let placement = Placement::Packed {
                agent:    AgentId(row.object()?),
                exposure: parse_exposure(row)?,
            };
            world.put_item(ItemId(subject), placement)
        }
        "worn" => {
            let mut visible = false;
            for flag in row.flags() {
                match flag {
                    "visible" => visible = true,
                    other => return Err(unknown_flag(other, "worn")),
                }
            }
            world.put_item(
                ItemId(subject),
                Placement::Worn { agent: AgentId(row.object()?), visible },
            )
        }
        other => Err(CxError::Parse(format!("unknown row kind {other:?}"))),
    }
}

fn parse_exposure(row: &WorldRecord) -> CxResult<Exposure> {
    let mut exposure = Exposure::SEALED;
    for flag in row.flags() {
        match flag {
            "observable" => exposure.observable = true,
            "accessible" => exposure.accessible = true,
            other => return Err(unknown_flag(other, &row.kind)),
        }
    }
    Ok(exposure)
}

fn unknown_flag(flag: &str, kind: &str) -> CxError {
    CxError::Parse(format!("unknown flag {flag:?} on {kind} row"))
}
