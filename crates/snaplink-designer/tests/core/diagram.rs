use snaplink_designer::{Diagram, PartKind, PartQuery, PartSearch, Point, Rect, Routing};

#[test]
fn test_find_parts_reports_kinds() {
    let mut diagram = Diagram::new();
    let node = diagram.add_node(Rect::new(0.0, 0.0, 10.0, 10.0));
    let link = diagram.add_link(
        vec![Point::new(-5.0, 5.0), Point::new(20.0, 5.0)],
        Routing::Orthogonal,
    );

    let found = diagram.find_parts_in(&Rect::new(-1.0, -1.0, 2.0, 2.0), PartSearch::OVERLAPPING);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, node);
    assert!(found[0].is_avoidable_node());

    let found = diagram.find_parts_in(&Rect::new(15.0, 4.0, 2.0, 2.0), PartSearch::OVERLAPPING);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, link);
    assert_eq!(found[0].kind, PartKind::Link);
    assert!(!found[0].is_avoidable_node());
}

#[test]
fn test_containment_search() {
    let mut diagram = Diagram::new();
    let inside = diagram.add_node(Rect::new(10.0, 10.0, 5.0, 5.0));
    diagram.add_node(Rect::new(18.0, 18.0, 10.0, 10.0));

    let search = PartSearch {
        intersects_boundary: false,
        include_temporary: false,
    };
    let found = diagram.find_parts_in(&Rect::new(0.0, 0.0, 20.0, 20.0), search);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, inside);
}

#[test]
fn test_adornments_only_on_request() {
    let mut diagram = Diagram::new();
    let link = diagram.add_link(
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        Routing::Orthogonal,
    );
    let handle = diagram.add_adornment(link, Rect::new(47.0, -3.0, 6.0, 6.0));
    let area = Rect::new(48.0, -1.0, 2.0, 2.0);

    let plain = diagram.find_parts_in(&area, PartSearch::OVERLAPPING);
    assert!(plain.iter().all(|p| p.kind != PartKind::Adornment));

    let search = PartSearch {
        intersects_boundary: true,
        include_temporary: true,
    };
    let all = diagram.find_parts_in(&area, search);
    assert!(all.iter().any(|p| p.id == handle && p.kind == PartKind::Adornment));

    diagram.clear_adornments(link);
    assert!(diagram.adornment(handle).is_none());
}

#[test]
fn test_move_node_reindexes() {
    let mut diagram = Diagram::new();
    let node = diagram.add_node(Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(diagram.move_node(node, 100.0, 0.0));

    let query: &dyn PartQuery = &diagram;
    assert!(query
        .find_parts_in(&Rect::new(4.0, 4.0, 1.0, 1.0), PartSearch::OVERLAPPING)
        .is_empty());
    assert_eq!(
        query
            .find_parts_in(&Rect::new(104.0, 4.0, 1.0, 1.0), PartSearch::OVERLAPPING)
            .len(),
        1
    );
    assert!(!diagram.move_node(9999, 1.0, 1.0));
}

#[test]
fn test_set_link_points_reindexes() {
    let mut diagram = Diagram::new();
    let link = diagram.add_link(
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        Routing::Normal,
    );
    assert!(diagram.set_link_points(link, vec![Point::new(0.0, 50.0), Point::new(10.0, 50.0)]));

    let near_old = diagram.find_parts_in(&Rect::new(4.0, -1.0, 2.0, 2.0), PartSearch::OVERLAPPING);
    assert!(near_old.is_empty());
    let near_new = diagram.find_parts_in(&Rect::new(4.0, 49.0, 2.0, 2.0), PartSearch::OVERLAPPING);
    assert_eq!(near_new.len(), 1);
}

#[test]
fn test_remove_part() {
    let mut diagram = Diagram::new();
    let node = diagram.add_node(Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(diagram.remove_part(node));
    assert!(!diagram.remove_part(node));
    assert!(!diagram.contains(node));
    assert_eq!(diagram.part_count(), 0);
    assert!(diagram
        .find_parts_in(&Rect::new(0.0, 0.0, 10.0, 10.0), PartSearch::OVERLAPPING)
        .is_empty());
}

#[test]
fn test_generated_ids_are_unique() {
    let mut diagram = Diagram::new();
    let a = diagram.add_node(Rect::new(0.0, 0.0, 1.0, 1.0));
    let b = diagram.add_node(Rect::new(5.0, 5.0, 1.0, 1.0));
    let c = diagram.add_link(vec![Point::new(0.0, 0.0)], Routing::Normal);
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}
