//! Unit tests for cx-world.

#[cfg(test)]
mod inventory {
    use cx_core::{ItemFilter, ItemId};

    use crate::{Exposure, Inventory};

    fn sample() -> Inventory {
        let mut inv = Inventory::new();
        inv.store(ItemId(1), Exposure::OPEN);
        inv.store(ItemId(2), Exposure::DISPLAYED);
        inv.store(ItemId(3), Exposure::TUCKED);
        inv.store(ItemId(4), Exposure::SEALED);
        inv
    }

    #[test]
    fn observable_and_accessible_differ() {
        let inv = sample();
        let obs: Vec<_> = inv.observable().collect();
        let acc: Vec<_> = inv.accessible().collect();
        assert_eq!(obs, vec![ItemId(1), ItemId(2)]);
        assert_eq!(acc, vec![ItemId(1), ItemId(3)]);
        assert_eq!(inv.all().count(), 4);
    }

    #[test]
    fn filtered_matches_named_views() {
        let inv = sample();
        assert!(inv.filtered(ItemFilter::Observable).eq(inv.observable()));
        assert!(inv.filtered(ItemFilter::Accessible).eq(inv.accessible()));
    }

    #[test]
    fn store_twice_replaces_exposure() {
        let mut inv = Inventory::new();
        inv.store(ItemId(1), Exposure::SEALED);
        inv.store(ItemId(1), Exposure::OPEN);
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.observable().collect::<Vec<_>>(), vec![ItemId(1)]);
        assert_eq!(inv.accessible().collect::<Vec<_>>(), vec![ItemId(1)]);
    }

    #[test]
    fn remove() {
        let mut inv = sample();
        assert!(inv.remove(ItemId(2)));
        assert!(!inv.remove(ItemId(2)));
        assert!(!inv.contains(ItemId(2)));
        assert_eq!(inv.len(), 3);
    }
}

#[cfg(test)]
mod capabilities {
    use cx_core::ItemId;

    use crate::{BackContainer, CarrierState, Exposure, WearerState};

    #[test]
    fn everything_includes_back_item_not_its_contents() {
        let mut c = CarrierState::new();
        c.hold(ItemId(1));
        let mut pack = BackContainer::new(ItemId(2));
        pack.inventory.store(ItemId(3), Exposure::OPEN);
        c.set_back(pack);

        let all: Vec<_> = c.everything().collect();
        assert_eq!(all, vec![ItemId(1), ItemId(2)]);
    }

    #[test]
    fn hold_is_idempotent() {
        let mut c = CarrierState::new();
        c.hold(ItemId(1));
        c.hold(ItemId(1));
        assert_eq!(c.held(), &[ItemId(1)]);
        assert!(c.release(ItemId(1)));
        assert!(c.held().is_empty());
    }

    #[test]
    fn set_back_returns_previous() {
        let mut c = CarrierState::new();
        assert!(c.set_back(BackContainer::new(ItemId(5))).is_none());
        let old = c.set_back(BackContainer::new(ItemId(6))).unwrap();
        assert_eq!(old.item, ItemId(5));
        assert_eq!(c.back().map(|b| b.item), Some(ItemId(6)));
    }

    #[test]
    fn wearer_visible_subset() {
        let mut w = WearerState::new();
        w.wear(ItemId(1), true);
        w.wear(ItemId(2), false);
        assert_eq!(w.all().count(), 2);
        assert_eq!(w.visible().collect::<Vec<_>>(), vec![ItemId(1)]);

        // Re-wearing only updates visibility.
        w.wear(ItemId(2), true);
        assert_eq!(w.all().count(), 2);
        assert_eq!(w.visible().count(), 2);

        assert!(w.take_off(ItemId(1)));
        assert!(!w.take_off(ItemId(1)));
    }
}

#[cfg(test)]
mod store {
    use cx_core::{AgentId, CxError, ItemId, PlaceId};

    use crate::{Agent, EntityRepository, Exposure, Item, Place, Placement, WorldStore};

    fn two_rooms() -> WorldStore {
        let mut w = WorldStore::new();
        w.insert_place(Place::new(PlaceId(1), "hall")).unwrap();
        w.insert_place(Place::new(PlaceId(2), "yard")).unwrap();
        w.add_exit(PlaceId(1), PlaceId(2)).unwrap();
        w.insert_agent(Agent::new(AgentId(10), "bob").with_carrier().with_wearer()).unwrap();
        w.move_agent(AgentId(10), PlaceId(1)).unwrap();
        w
    }

    #[test]
    fn duplicate_insert_rejected() {
        let mut w = two_rooms();
        let err = w.insert_place(Place::new(PlaceId(1), "again")).unwrap_err();
        assert!(matches!(err, CxError::Duplicate(_)));
    }

    #[test]
    fn move_agent_keeps_membership_in_sync() {
        let mut w = two_rooms();
        assert_eq!(w.place(PlaceId(1)).unwrap().agents(), &[AgentId(10)]);

        w.move_agent(AgentId(10), PlaceId(2)).unwrap();
        assert!(w.place(PlaceId(1)).unwrap().agents().is_empty());
        assert_eq!(w.place(PlaceId(2)).unwrap().agents(), &[AgentId(10)]);
        assert_eq!(w.location_of(AgentId(10)).map(|p| p.id), Some(PlaceId(2)));
    }

    #[test]
    fn clear_location_leaves_agent_placeless() {
        let mut w = two_rooms();
        w.clear_location(AgentId(10)).unwrap();
        assert!(w.location_of(AgentId(10)).is_none());
        assert!(w.agent(AgentId(10)).is_some());
        assert!(w.place(PlaceId(1)).unwrap().agents().is_empty());
    }

    #[test]
    fn move_to_unknown_place_fails() {
        let mut w = two_rooms();
        let err = w.move_agent(AgentId(10), PlaceId(99)).unwrap_err();
        assert!(matches!(err, CxError::PlaceNotFound(PlaceId(99))));
        // Unchanged.
        assert_eq!(w.location_of(AgentId(10)).map(|p| p.id), Some(PlaceId(1)));
    }

    #[test]
    fn put_item_moves_between_containers() {
        let mut w = two_rooms();
        w.insert_item(Item::new(ItemId(20), "lamp")).unwrap();

        let floor = Placement::Place { place: PlaceId(1), exposure: Exposure::OPEN };
        w.put_item(ItemId(20), floor).unwrap();
        assert!(w.place(PlaceId(1)).unwrap().items.contains(ItemId(20)));

        w.put_item(ItemId(20), Placement::Held(AgentId(10))).unwrap();
        assert!(!w.place(PlaceId(1)).unwrap().items.contains(ItemId(20)));
        let bob = w.agent(AgentId(10)).unwrap();
        assert_eq!(bob.carrier.as_ref().unwrap().held(), &[ItemId(20)]);
        assert_eq!(w.placement_of(ItemId(20)), Some(Placement::Held(AgentId(10))));

        w.put_item(ItemId(20), Placement::Worn { agent: AgentId(10), visible: true }).unwrap();
        let bob = w.agent(AgentId(10)).unwrap();
        assert!(bob.carrier.as_ref().unwrap().held().is_empty());
        assert_eq!(bob.wearer.as_ref().unwrap().visible().collect::<Vec<_>>(), vec![ItemId(20)]);
    }

    #[test]
    fn capability_required() {
        let mut w = two_rooms();
        w.insert_agent(Agent::new(AgentId(11), "ghost")).unwrap();
        w.insert_item(Item::new(ItemId(20), "chain")).unwrap();

        let err = w.put_item(ItemId(20), Placement::Held(AgentId(11))).unwrap_err();
        assert!(matches!(err, CxError::MissingCapability { capability: "carrier", .. }));

        let worn = Placement::Worn { agent: AgentId(11), visible: true };
        let err = w.put_item(ItemId(20), worn).unwrap_err();
        assert!(matches!(err, CxError::MissingCapability { capability: "wearer", .. }));
    }

    #[test]
    fn packing_needs_a_back_container() {
        let mut w = two_rooms();
        w.insert_item(Item::new(ItemId(20), "map")).unwrap();
        let packed = Placement::Packed { agent: AgentId(10), exposure: Exposure::OPEN };
        assert!(w.put_item(ItemId(20), packed).is_err());

        w.insert_item(Item::new(ItemId(21), "rucksack")).unwrap();
        w.put_item(ItemId(21), Placement::Back(AgentId(10))).unwrap();
        w.put_item(ItemId(20), packed).unwrap();

        let back = w.agent(AgentId(10)).unwrap().carrier.as_ref().unwrap().back().unwrap();
        assert_eq!(back.item, ItemId(21));
        assert!(back.inventory.contains(ItemId(20)));
    }

    #[test]
    fn non_empty_back_container_cannot_move() {
        let mut w = two_rooms();
        w.insert_item(Item::new(ItemId(20), "map")).unwrap();
        w.insert_item(Item::new(ItemId(21), "rucksack")).unwrap();
        w.put_item(ItemId(21), Placement::Back(AgentId(10))).unwrap();
        w.put_item(ItemId(20), Placement::Packed { agent: AgentId(10), exposure: Exposure::OPEN })
            .unwrap();

        let floor = Placement::Place { place: PlaceId(1), exposure: Exposure::OPEN };
        let err = w.put_item(ItemId(21), floor).unwrap_err();
        assert!(matches!(err, CxError::ContainerNotEmpty(ItemId(21))));

        // Empty it, then it moves.
        w.put_item(ItemId(20), floor).unwrap();
        w.put_item(ItemId(21), floor).unwrap();
        let bob = w.agent(AgentId(10)).unwrap();
        assert!(bob.carrier.as_ref().unwrap().back().is_none());
    }

    #[test]
    fn removal_leaves_dangling_references() {
        let mut w = two_rooms();
        w.remove_place(PlaceId(2)).unwrap();
        // The exit reference survives; resolution drops it.
        assert_eq!(w.place(PlaceId(1)).unwrap().exits(), &[PlaceId(2)]);
        let exits = w.place(PlaceId(1)).unwrap().exits().to_vec();
        assert!(w.resolve_places(&exits).is_empty());

        w.remove_agent(AgentId(10)).unwrap();
        assert_eq!(w.place(PlaceId(1)).unwrap().agents(), &[AgentId(10)]);
        assert!(w.resolve_agents(&[AgentId(10)]).is_empty());
    }

    #[test]
    fn location_in_removed_place_is_none() {
        let mut w = two_rooms();
        w.remove_place(PlaceId(1)).unwrap();
        assert!(w.location_of(AgentId(10)).is_none());
    }

    #[test]
    fn resolve_items_drops_missing() {
        let mut w = two_rooms();
        w.insert_item(Item::new(ItemId(20), "coin")).unwrap();
        let found = w.resolve_items(&[ItemId(20), ItemId(21)]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, ItemId(20));
    }

    #[test]
    fn removed_placed_item_cannot_be_reinserted() {
        let mut w = two_rooms();
        w.insert_item(Item::new(ItemId(20), "lute")).unwrap();
        w.put_item(ItemId(20), Placement::Held(AgentId(10))).unwrap();
        w.remove_item(ItemId(20)).unwrap();

        let err = w.insert_item(Item::new(ItemId(20), "new lute")).unwrap_err();
        assert!(matches!(err, CxError::Duplicate(_)));
        assert!(w.item(ItemId(20)).is_none());
        let held = w.agent(AgentId(10)).unwrap().carrier.as_ref().unwrap().held().to_vec();
        assert!(w.resolve_items(&held).is_empty());
    }

    #[test]
    fn removed_unplaced_item_can_be_reinserted() {
        let mut w = two_rooms();
        w.insert_item(Item::new(ItemId(20), "coin")).unwrap();
        w.remove_item(ItemId(20)).unwrap();
        w.insert_item(Item::new(ItemId(20), "coin")).unwrap();
        assert!(w.placement_of(ItemId(20)).is_none());
    }

    #[test]
    fn usable_as_trait_object() {
        let w = two_rooms();
        let repo: &dyn EntityRepository = &w;
        assert_eq!(repo.location_of(AgentId(10)).map(|p| p.id), Some(PlaceId(1)));
        assert_eq!(repo.resolve_places(&[PlaceId(1), PlaceId(2), PlaceId(3)]).len(), 2);
    }
}

#[cfg(test)]
mod builder {
    use cx_core::{CxError, PlaceId};

    use crate::{EntityRepository, Exposure, Placement, WorldBuilder};

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut b = WorldBuilder::new();
        let hall = b.place("hall");
        let bob = b.agent("bob", hall);
        b.carrier(bob);
        let lamp = b.item("lamp", Placement::Held(bob));
        assert_ne!(hall.get(), bob.get());
        assert_ne!(bob.get(), lamp.get());
        let world = b.build().unwrap();
        assert_eq!(world.place_count(), 1);
        assert_eq!(world.agent_count(), 1);
        assert_eq!(world.item_count(), 1);
    }

    #[test]
    fn passage_is_two_way() {
        let mut b = WorldBuilder::new();
        let a = b.place("a");
        let c = b.place("c");
        b.passage(a, c);
        let world = b.build().unwrap();
        assert!(world.place(a).unwrap().has_exit_to(c));
        assert!(world.place(c).unwrap().has_exit_to(a));
    }

    #[test]
    fn first_error_is_reported() {
        let mut b = WorldBuilder::new();
        let hall = b.place("hall");
        b.exit(hall, PlaceId(404));
        let bob = b.agent("bob", hall);
        // No carrier capability: also an error, but not the first.
        b.item("lamp", Placement::Held(bob));
        let err = b.build().unwrap_err();
        assert!(matches!(err, CxError::PlaceNotFound(PlaceId(404))));
    }

    #[test]
    fn homeless_agent_has_no_location() {
        let mut b = WorldBuilder::new();
        b.place("hall");
        let drifter = b.homeless_agent("drifter");
        let world = b.build().unwrap();
        assert!(world.location_of(drifter).is_none());
    }

    #[test]
    fn place_items_keep_exposure() {
        let mut b = WorldBuilder::new();
        let hall = b.place("hall");
        let relic = b.item("relic", Placement::Place { place: hall, exposure: Exposure::DISPLAYED });
        let world = b.build().unwrap();
        let items = &world.place(hall).unwrap().items;
        assert_eq!(items.observable().collect::<Vec<_>>(), vec![relic]);
        assert_eq!(items.accessible().count(), 0);
    }
}

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use cx_core::{AgentId, CxError, ItemId, PlaceId};

    use crate::{EntityRepository, Placement, load_world_csv, load_world_reader};

    const WORLD_CSV: &str = "\
kind,subject,object,flags,name
place,1,,,Great Hall
place,2,,,Courtyard
exit,1,2,,
agent,10,1,carrier|wearer,Bob
agent,11,,,Wisp
item,20,,,sword
held,20,10,,
item,21,,,rucksack
back,21,10,,
item,22,,,map
packed,22,10,observable,
item,23,,,cloak
worn,23,10,visible,
item,24,,,chandelier
stored,24,1,observable,
";

    #[test]
    fn loads_every_row_kind() {
        let w = load_world_reader(Cursor::new(WORLD_CSV)).unwrap();
        assert_eq!(w.place_count(), 2);
        assert_eq!(w.agent_count(), 2);
        assert_eq!(w.item_count(), 5);

        assert_eq!(w.place(PlaceId(1)).unwrap().name, "Great Hall");
        assert!(w.place(PlaceId(1)).unwrap().has_exit_to(PlaceId(2)));
        assert!(!w.place(PlaceId(2)).unwrap().has_exit_to(PlaceId(1)));

        assert_eq!(w.location_of(AgentId(10)).map(|p| p.id), Some(PlaceId(1)));
        assert!(w.location_of(AgentId(11)).is_none());

        let bob = w.agent(AgentId(10)).unwrap();
        let carrier = bob.carrier.as_ref().unwrap();
        assert_eq!(carrier.held(), &[ItemId(20)]);
        let back = carrier.back().unwrap();
        assert_eq!(back.item, ItemId(21));
        assert_eq!(back.inventory.observable().collect::<Vec<_>>(), vec![ItemId(22)]);
        assert_eq!(back.inventory.accessible().count(), 0);
        assert_eq!(bob.wearer.as_ref().unwrap().visible().collect::<Vec<_>>(), vec![ItemId(23)]);

        let wisp = w.agent(AgentId(11)).unwrap();
        assert!(wisp.carrier.is_none());
        assert!(wisp.wearer.is_none());

        assert!(matches!(
            w.placement_of(ItemId(24)),
            Some(Placement::Place { place: PlaceId(1), .. })
        ));
    }

    #[test]
    fn unknown_kind_is_parse_error() {
        let csv = "kind,subject,object,flags,name\nportal,1,2,,\n";
        let err = load_world_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, CxError::Parse(_)), "got {err}");
    }

    #[test]
    fn unknown_flag_is_parse_error() {
        let csv = "kind,subject,object,flags,name\nagent,1,,flying,Bird\n";
        let err = load_world_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, CxError::Parse(_)), "got {err}");
    }

    #[test]
    fn missing_object_is_parse_error() {
        let csv = "kind,subject,object,flags,name\nplace,1,,,a\nexit,1,,,\n";
        let err = load_world_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("row 2"), "got {err}");
    }

    #[test]
    fn forward_reference_is_not_found() {
        let csv = "kind,subject,object,flags,name\nplace,1,,,a\nexit,1,2,,\nplace,2,,,b\n";
        let err = load_world_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, CxError::PlaceNotFound(PlaceId(2))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WORLD_CSV.as_bytes()).unwrap();
        let w = load_world_csv(file.path()).unwrap();
        assert_eq!(w.place_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_world_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, CxError::Io(_)));
    }
}
