//! `ContextBuilder` — resolves a focal point into a [`Context`].
//!
//! # Resolution order
//!
//! ```text
//! focus ──► anchor place          (agent: location_of; place: direct lookup)
//!       ──► destinations          (resolved exits, + anchor per AnchorPolicy)
//!       ──► others                (agents at anchor, minus the focal agent)
//!       ──► items from others     (carried everything + visible worn)
//!       ──► items at anchor       (filtered per ItemFilter)
//!       ──► focal agent's items   (carried everything + back contents + visible worn)
//! ```
//!
//! Only the focal agent's back container is unpacked.  Other agents
//! contribute the container itself (it is part of what they carry) but not
//! what is inside it.
//!
//! Every lookup goes through [`EntityRepository`], so references that no
//! longer resolve fall out at the point they are read.  The only failure is
//! a focus with no anchor.

use cx_core::{AgentId, ContextPolicy, IdSet, ItemId, PlaceId, id_set};
use cx_world::{Agent, EntityRepository, Place};

use crate::{Context, ContextError, ContextResult, Focus};

/// Builds [`Context`]s under a fixed [`ContextPolicy`].
///
/// The builder holds no world state and never mutates the repository; it is
/// `Copy`, `Send` and `Sync`, and one instance can serve any number of
/// callers.  Concurrent builds are safe whenever the repository is `Sync`,
/// but each build is an independent snapshot with no cross-build
/// consistency.
///
/// # Example
///
/// ```rust
/// use cx_context::ContextBuilder;
/// use cx_core::ContextPolicy;
/// use cx_world::{Placement, WorldBuilder};
///
/// let mut b = WorldBuilder::new();
/// let inn = b.place("inn");
/// let street = b.place("street");
/// b.passage(inn, street);
/// let me = b.agent("me", inn);
/// let barkeep = b.agent("barkeep", inn);
/// b.carrier(barkeep);
/// let rag = b.item("rag", Placement::Held(barkeep));
/// let world = b.build().unwrap();
///
/// let ctx = ContextBuilder::new(ContextPolicy::DESCRIPTIVE)
///     .from_agent(me, &world)
///     .unwrap();
/// assert!(ctx.destinations().contains(&street));
/// assert!(!ctx.destinations().contains(&inn));
/// assert!(ctx.others().contains(&barkeep));
/// assert!(!ctx.others().contains(&me));
/// assert!(ctx.items().contains(&rag));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextBuilder {
    policy: ContextPolicy,
}

impl ContextBuilder {
    pub fn new(policy: ContextPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ContextPolicy {
        self.policy
    }

    /// Context around `agent`, resolved through its current location.
    pub fn from_agent<R>(&self, agent: AgentId, repo: &R) -> ContextResult<Context>
    where
        R: EntityRepository + ?Sized,
    {
        self.build(Focus::Agent(agent), repo)
    }

    /// Context around `place`, as seen by no one in particular.
    pub fn from_place<R>(&self, place: PlaceId, repo: &R) -> ContextResult<Context>
    where
        R: EntityRepository + ?Sized,
    {
        self.build(Focus::Place(place), repo)
    }

    /// Resolve `focus` against the current state of `repo`.
    ///
    /// # Errors
    ///
    /// [`ContextError::UnresolvedLocation`] if the focal agent has no place,
    /// or the focal place does not exist.
    pub fn build<R>(&self, focus: Focus, repo: &R) -> ContextResult<Context>
    where
        R: EntityRepository + ?Sized,
    {
        let anchor = resolve_anchor(focus, repo)?;

        let destinations = self.destinations(anchor, repo);
        let others = resolve_others(focus, anchor, repo);

        let mut items: IdSet<ItemId> = id_set();
        for other in &others {
            absorb_others_items(&mut items, other, repo);
        }
        absorb(&mut items, anchor.items.filtered(self.policy.place_items), repo);
        if let Some(agent) = focus.agent() {
            match repo.agent(agent) {
                Some(main) => absorb_focal_items(&mut items, main, repo),
                None => tracing::debug!(%agent, "focal agent record missing; skipping its items"),
            }
        }

        let others: IdSet<AgentId> = others.iter().map(|a| a.id).collect();

        tracing::trace!(
            %focus,
            anchor = %anchor.id,
            destinations = destinations.len(),
            others = others.len(),
            items = items.len(),
            "context built"
        );

        Ok(Context::new(focus, anchor.id, destinations, others, items))
    }

    fn destinations<R>(&self, anchor: &Place, repo: &R) -> IdSet<PlaceId>
    where
        R: EntityRepository + ?Sized,
    {
        let mut destinations: IdSet<PlaceId> = repo
            .resolve_places(anchor.exits())
            .into_iter()
            .map(|p| p.id)
            .collect();
        if self.policy.includes_anchor() {
            destinations.insert(anchor.id);
        }
        destinations
    }
}

// ── Resolution steps ──────────────────────────────────────────────────────────

fn resolve_anchor<R>(focus: Focus, repo: &R) -> ContextResult<&Place>
where
    R: EntityRepository + ?Sized,
{
    let anchor = match focus {
        Focus::Agent(agent) => repo.location_of(agent),
        Focus::Place(place) => repo.place(place),
    };
    anchor.ok_or_else(|| {
        tracing::warn!(%focus, "cannot resolve a location for context focus");
        ContextError::UnresolvedLocation { focus }
    })
}

/// Agents at the anchor.  The focal agent, if any, is excluded by identity.
fn resolve_others<'r, R>(focus: Focus, anchor: &'r Place, repo: &'r R) -> Vec<&'r Agent>
where
    R: EntityRepository + ?Sized,
{
    match focus {
        Focus::Agent(me) => {
            let refs: Vec<AgentId> = anchor.others_than(me).collect();
            repo.resolve_agents(&refs)
        }
        Focus::Place(_) => repo.resolve_agents(anchor.agents()),
    }
}

/// What a bystander perceives on another agent: everything it carries
/// (back container included, contents not) and its visible clothing.
fn absorb_others_items<R>(items: &mut IdSet<ItemId>, other: &Agent, repo: &R)
where
    R: EntityRepository + ?Sized,
{
    if let Some(carrier) = &other.carrier {
        absorb(items, carrier.everything(), repo);
    }
    if let Some(wearer) = &other.wearer {
        absorb(items, wearer.visible(), repo);
    }
}

/// The focal agent additionally sees inside its own back container.
fn absorb_focal_items<R>(items: &mut IdSet<ItemId>, main: &Agent, repo: &R)
where
    R: EntityRepository + ?Sized,
{
    if let Some(carrier) = &main.carrier {
        absorb(items, carrier.everything(), repo);
        if let Some(back) = carrier.back() {
            absorb(items, back.inventory.observable(), repo);
        }
    }
    if let Some(wearer) = &main.wearer {
        absorb(items, wearer.visible(), repo);
    }
}

/// Materialize `refs` through the repository and add the survivors.
fn absorb<R>(items: &mut IdSet<ItemId>, refs: impl Iterator<Item = ItemId>, repo: &R)
where
    R: EntityRepository + ?Sized,
{
    let refs: Vec<ItemId> = refs.collect();
    items.extend(repo.resolve_items(&refs).into_iter().map(|i| i.id));
}
