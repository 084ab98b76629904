use snaplink_designer::{
    AvoidanceSession, Diagram, Link, Point, PointCorrector, Rect, ReshapeConfig, ReshapeContext,
    ReshapeHandle, SnapLinkReshaper,
};

fn elbow() -> Link {
    Link::orthogonal(
        1,
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ],
    )
}

#[test]
fn test_first_point_only_checks_next_side() {
    let link = elbow();
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(40.0, 20.0, 20.0, 20.0));

    let start = Point::new(0.0, 0.0);
    let mut session = AvoidanceSession::start(&link, ReshapeHandle::new(0), start).unwrap();
    assert!(!session.prev_segment_horizontal());
    assert!(session.next_segment_horizontal());

    // Point 1 slides to (100,30); the segment between crosses the node.
    assert_eq!(session.evaluate(Point::new(0.0, 30.0), &link, Some(&diagram)), start);
    let clear = Point::new(0.0, -30.0);
    assert_eq!(session.evaluate(clear, &link, Some(&diagram)), clear);
}

#[test]
fn test_last_point_only_checks_prev_side() {
    let link = elbow();
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(140.0, 40.0, 20.0, 20.0));

    let start = Point::new(100.0, 100.0);
    let mut session = AvoidanceSession::start(&link, ReshapeHandle::new(2), start).unwrap();
    assert!(!session.prev_segment_horizontal());
    assert!(!session.next_segment_horizontal());

    // Point 1 slides to (150,0) and the moved vertical segment cuts the node.
    assert_eq!(session.evaluate(Point::new(150.0, 100.0), &link, Some(&diagram)), start);
    let clear = Point::new(60.0, 100.0);
    assert_eq!(session.evaluate(clear, &link, Some(&diagram)), clear);
}

#[test]
fn test_two_point_link() {
    let link = Link::orthogonal(1, vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(40.0, 40.0, 20.0, 20.0));

    let start = Point::new(100.0, 0.0);
    let mut session = AvoidanceSession::start(&link, ReshapeHandle::new(1), start).unwrap();
    assert!(session.prev_segment_horizontal());
    assert_eq!(session.evaluate(Point::new(100.0, 50.0), &link, Some(&diagram)), start);
    let clear = Point::new(100.0, 80.0);
    assert_eq!(session.evaluate(clear, &link, Some(&diagram)), clear);
}

#[test]
fn test_single_point_link_is_always_clear() {
    let link = Link::orthogonal(1, vec![Point::new(50.0, 50.0)]);
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(0.0, 0.0, 100.0, 100.0));

    let mut session =
        AvoidanceSession::start(&link, ReshapeHandle::new(0), Point::new(50.0, 50.0)).unwrap();
    let candidate = Point::new(60.0, 60.0);
    assert_eq!(session.evaluate(candidate, &link, Some(&diagram)), candidate);
}

#[test]
fn test_empty_link_does_not_arm() {
    let link = Link::orthogonal(1, Vec::new());
    assert!(AvoidanceSession::start(&link, ReshapeHandle::new(0), Point::default()).is_none());
}

#[test]
fn test_out_of_range_handle_passes_through() {
    let link = elbow();
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(90.0, 40.0, 20.0, 20.0));
    let ctx = ReshapeContext {
        link: &link,
        parts: Some(&diagram),
        grid: diagram.grid(),
        handle: Some(ReshapeHandle::new(5)),
    };
    let config = ReshapeConfig::default().with_grid_snap_enabled(false);
    let mut tool = SnapLinkReshaper::new(config);
    tool.begin(&ctx, Point::new(100.0, 0.0));
    assert!(!tool.is_active());

    let candidate = Point::new(100.0, 50.0);
    assert_eq!(tool.correct(&ctx, candidate), candidate);
}

#[test]
fn test_non_orthogonal_link_passes_through() {
    let link = Link::new(1, elbow().points);
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(90.0, 40.0, 20.0, 20.0));
    let ctx = ReshapeContext {
        link: &link,
        parts: Some(&diagram),
        grid: diagram.grid(),
        handle: Some(ReshapeHandle::new(1)),
    };
    let mut tool = SnapLinkReshaper::default();
    tool.begin(&ctx, Point::new(100.0, 0.0));
    assert!(!tool.is_active());

    // Still snapped, never blocked.
    assert_eq!(tool.correct(&ctx, Point::new(101.0, 49.0)), Point::new(100.0, 50.0));
}

#[test]
fn test_unavailable_index_fails_open() {
    let link = elbow();
    let diagram = Diagram::new();
    let ctx = ReshapeContext {
        link: &link,
        parts: None,
        grid: diagram.grid(),
        handle: Some(ReshapeHandle::new(1)),
    };
    let mut tool = SnapLinkReshaper::default();
    tool.begin(&ctx, Point::new(100.0, 0.0));
    assert!(tool.is_active());
    assert_eq!(tool.correct(&ctx, Point::new(100.0, 50.0)), Point::new(100.0, 50.0));
    assert_eq!(tool.session().unwrap().safe_point(), Point::new(100.0, 50.0));
}
