//! Factory integration tests: input validation, document-kind dispatch
//! and pre-existing imports.

use tether_tests::prelude::*;

mod input_validation {
    use super::*;

    #[test]
    fn test_missing_inputs_fail_before_any_transaction() {
        // GIVEN
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();

        // WHEN / THEN: each missing required input is rejected
        let no_symbol =
            Placement::by_point(&mut ws.binding_ctx(), slot(1), None, Some(Point::origin()));
        assert!(matches!(
            no_symbol,
            Err(ElementError::MissingArgument { name: "symbol" })
        ));

        let no_point = Placement::by_point(&mut ws.binding_ctx(), slot(1), Some(&desk), None);
        assert!(matches!(
            no_point,
            Err(ElementError::MissingArgument { name: "point" })
        ));

        let no_level = Placement::by_point_and_level(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
            None,
        );
        assert!(matches!(
            no_level,
            Err(ElementError::MissingArgument { name: "level" })
        ));

        // and no transaction ever opened
        assert_eq!(ws.transactions.commit_count(), 0);
        assert!(!ws.transactions.is_active());
        assert!(ws.document.is_empty());
        assert!(ws.trace.is_empty());
    }
}

mod context_dispatch {
    use super::*;

    #[test]
    fn test_definition_document_creates_without_level() {
        // GIVEN a definition document
        let mut ws = definition_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();

        // WHEN
        let placement = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();

        // THEN the definition entry point produced a level-free object
        let component = ws.document.resolve(placement.id()).unwrap();
        assert_eq!(component.level, None);
        assert_eq!(ws.document.kind(), DocumentKind::Definition);
    }

    #[test]
    fn test_instance_document_creates_with_level() {
        // GIVEN an instance document
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();
        let level = Level::by_name(&ws.document, "Level 1").unwrap();

        // WHEN
        let placement = Placement::by_point_and_level(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
            Some(&level),
        )
        .unwrap();

        // THEN the instance entry point carried the hosting level
        let component = ws.document.resolve(placement.id()).unwrap();
        assert_eq!(component.level, Some(level.id()));
    }

    #[test]
    fn test_level_hosting_is_inexpressible_in_definition_documents() {
        // GIVEN a definition document
        let ws = definition_workspace();

        // THEN no Level value can be obtained from it, so no
        // by_point_and_level call against it can be formed
        assert!(Level::by_name(&ws.document, "Level 1").is_none());
    }

    #[test]
    fn test_rebind_works_in_definition_documents() {
        // GIVEN
        let mut ws = definition_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();
        let first = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::origin()),
        )
        .unwrap();

        // WHEN
        let second = Placement::by_point(
            &mut ws.binding_ctx(),
            slot(1),
            Some(&desk),
            Some(Point::new(1.0, 1.0, 0.0)),
        )
        .unwrap();

        // THEN rebinding applies in definition documents too
        assert_eq!(first.id(), second.id());
        assert_eq!(ws.document.len(), 1);
    }
}

mod existing_imports {
    use super::*;

    #[test]
    fn test_existing_components_import_as_document_owned() {
        // GIVEN components placed outside the graph
        let mut ws = instance_workspace();
        let desk = Symbol::by_name(&ws.document, "Desk").unwrap();
        let chair = Symbol::by_name(&ws.document, "Chair").unwrap();
        ws.document
            .create_in_instance(desk.id(), Point::origin(), None)
            .unwrap();
        ws.document
            .create_in_instance(chair.id(), Point::origin(), None)
            .unwrap();
        ws.document
            .create_in_instance(desk.id(), Point::new(2.0, 0.0, 0.0), None)
            .unwrap();

        // WHEN
        let desks = Placement::by_existing_of_type(&ws.document, Some(&desk)).unwrap();

        // THEN only desks import, owned by the document, no trace entries
        assert_eq!(desks.len(), 2);
        assert!(desks.iter().all(|p| p.is_document_owned()));
        assert!(ws.trace.is_empty());
        assert_eq!(ws.transactions.commit_count(), 0);
    }

    #[test]
    fn test_import_requires_a_symbol() {
        let ws = instance_workspace();
        let result = Placement::by_existing_of_type(&ws.document, None);
        assert!(matches!(
            result,
            Err(ElementError::MissingArgument { name: "symbol" })
        ));
    }
}
