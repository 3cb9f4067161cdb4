//! Unit tests for cx-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, EntityId, ItemId, PlaceId};

    #[test]
    fn raw_roundtrip() {
        let id = AgentId::from(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id, AgentId(42));
    }

    #[test]
    fn ordering() {
        assert!(ItemId(0) < ItemId(1));
        assert!(PlaceId(100) > PlaceId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(EntityId::from(PlaceId(2)).to_string(), "PlaceId(2)");
    }

    #[test]
    fn entity_kinds_stay_distinct() {
        // Same raw key, different kinds: not the same entity.
        assert_ne!(EntityId::from(PlaceId(3)), EntityId::from(AgentId(3)));
        assert_ne!(EntityId::from(AgentId(3)), EntityId::from(ItemId(3)));
    }
}

#[cfg(test)]
mod set {
    use crate::{AgentId, EntityId, ItemId, id_map, id_set};

    #[test]
    fn set_deduplicates_by_identity() {
        let mut s = id_set();
        assert!(s.insert(ItemId(1)));
        assert!(!s.insert(ItemId(1)));
        assert!(s.insert(ItemId(2)));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn mixed_entity_set() {
        let mut s = id_set::<EntityId>();
        s.insert(AgentId(1).into());
        s.insert(ItemId(1).into());
        s.insert(AgentId(1).into());
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn map_keyed_by_id() {
        let mut m = id_map();
        m.insert(AgentId(5), "five");
        assert_eq!(m.get(&AgentId(5)), Some(&"five"));
        assert!(m.get(&AgentId(6)).is_none());
    }
}

#[cfg(test)]
mod policy {
    use crate::{AnchorPolicy, ContextPolicy, ItemFilter};

    #[test]
    fn default_is_interactive() {
        assert_eq!(ContextPolicy::default(), ContextPolicy::INTERACTIVE);
        assert!(ContextPolicy::default().includes_anchor());
        assert_eq!(ContextPolicy::default().place_items, ItemFilter::Accessible);
    }

    #[test]
    fn descriptive_preset() {
        let p = ContextPolicy::DESCRIPTIVE;
        assert_eq!(p.anchor, AnchorPolicy::Exclude);
        assert!(!p.includes_anchor());
        assert_eq!(p.place_items, ItemFilter::Observable);
    }
}

#[cfg(test)]
mod error {
    use crate::{CxError, PlaceId};

    #[test]
    fn messages() {
        assert_eq!(
            CxError::PlaceNotFound(PlaceId(9)).to_string(),
            "place PlaceId(9) not found"
        );
        assert_eq!(CxError::Parse("bad row".into()).to_string(), "parse error: bad row");
    }
}
