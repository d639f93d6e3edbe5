//! Rebind-or-create integration tests.
//!
//! Each scenario replays the same call-site slot across simulated graph
//! passes and checks the identity and in-place-update guarantees.

use tether_tests::prelude::*;

mod idempotence {
    use super::*;

    #[test]
    fn test_identical_call_repeated_creates_once() {
        // GIVEN
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();

        // WHEN the same call-site executes twice with identical inputs
        let first = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();
        let second = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();

        // THEN one object exists and both passes see the same identity
        assert_eq!(first.id(), second.id());
        assert_eq!(ws.document.len(), 1);
    }

    #[test]
    fn test_iterations_of_one_call_site_are_distinct() {
        // GIVEN a call-site evaluated twice per pass (mapped input)
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();
        let site = CallSiteId::new(1);

        // WHEN
        let a = Placement::by_point(
            &mut ws.binding_ctx(),
            TraceSlot::new(site, 0),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();
        let b = Placement::by_point(
            &mut ws.binding_ctx(),
            TraceSlot::new(site, 1),
            Some(&desk),
            Some(Point::new(1.0, 0.0, 0.0)),
        )
        .unwrap();

        // THEN each iteration owns its own object
        assert_ne!(a.id(), b.id());
        assert_eq!(ws.document.len(), 2);
    }
}

mod rebind_updates {
    use super::*;

    #[test]
    fn test_position_change_retains_identity() {
        // GIVEN a placement at the origin
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();
        let first = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();

        // WHEN the input point changes between passes
        let second = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::new(1.0, 2.0, 3.0)),
        )
        .unwrap();

        // THEN same identity, new position
        assert_eq!(first.id(), second.id());
        assert_eq!(
            second.location(&ws.document).unwrap().as_point(),
            Some(Point::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn test_symbol_and_position_change_commit_together() {
        // GIVEN
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();
        let chair = Symbol::by_name(&ws.document, "Chair").unwrap();
        let first = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();

        // WHEN both symbol and position change on rebind
        let second = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&chair),
            Some(Point::new(4.0, 0.0, 0.0)),
        )
        .unwrap();

        // THEN the final state carries both the new symbol and the new
        // position
        assert_eq!(first.id(), second.id());
        assert_eq!(second.symbol(&ws.document).unwrap().name(), "Chair");
        assert_eq!(
            second.location(&ws.document).unwrap().as_point(),
            Some(Point::new(4.0, 0.0, 0.0))
        );
        assert!(!ws.transactions.is_active());
    }

    #[test]
    fn test_level_reapplied_on_rebind() {
        // GIVEN a placement hosted on Level 1
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();
        let level1 = Level::by_name(&ws.document, "Level 1").unwrap();
        let level2 = Level::by_name(&ws.document, "Level 2").unwrap();
        let first = Placement::by_point_and_level(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
            Some(&level1),
        )
        .unwrap();

        // WHEN rebound onto Level 2
        let second = Placement::by_point_and_level(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
            Some(&level2),
        )
        .unwrap();

        // THEN
        assert_eq!(first.id(), second.id());
        assert_eq!(
            ws.document.resolve(second.id()).unwrap().level,
            Some(level2.id())
        );
    }
}

mod deletion_recovery {
    use super::*;

    #[test]
    fn test_externally_deleted_object_is_recreated() {
        // GIVEN a bound object deleted outside the graph
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();
        let first = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();
        ws.document.delete(first.id()).unwrap();

        // WHEN the call-site executes again
        let second = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();

        // THEN a fresh object exists under a fresh identity
        assert_ne!(first.id(), second.id());
        assert!(ws.document.resolve(second.id()).is_some());
        assert_eq!(ws.document.len(), 1);
    }

    #[test]
    fn test_recovered_binding_rebinds_on_later_passes() {
        // GIVEN a delete-then-recreate cycle
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();
        let first = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();
        ws.document.delete(first.id()).unwrap();
        let second = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();

        // WHEN a further pass runs
        let third = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::new(2.0, 0.0, 0.0)),
        )
        .unwrap();

        // THEN the replacement binding behaves like any other
        assert_eq!(second.id(), third.id());
        assert_eq!(ws.document.len(), 1);
    }
}
