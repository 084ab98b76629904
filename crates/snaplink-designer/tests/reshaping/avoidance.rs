use proptest::prelude::*;
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

fn staircase() -> Link {
    Link::orthogonal(
        1,
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(200.0, 200.0),
        ],
    )
}

#[test]
fn test_obstacle_blocks_then_clear_point_accepted() {
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(90.0, 40.0, 20.0, 20.0));
    let link = elbow();
    let start = Point::new(100.0, 0.0);
    let mut session = AvoidanceSession::start(&link, ReshapeHandle::new(1), start).unwrap();

    assert_eq!(session.evaluate(Point::new(100.0, 50.0), &link, Some(&diagram)), start);
    assert_eq!(
        session.evaluate(Point::new(100.0, 150.0), &link, Some(&diagram)),
        Point::new(100.0, 150.0)
    );
    assert_eq!(session.safe_point(), Point::new(100.0, 150.0));

    // Blocked again: falls back to the latest safe point, not the start.
    assert_eq!(
        session.evaluate(Point::new(100.0, 45.0), &link, Some(&diagram)),
        Point::new(100.0, 150.0)
    );
}

#[test]
fn test_far_segment_is_checked() {
    // Dragging vertex 2 up drags vertex 3 with it, stretching the far
    // segment (3 to 4) over a node the original route never touched.
    let link = staircase();
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(190.0, 55.0, 20.0, 10.0));

    let start = Point::new(100.0, 100.0);
    let mut session = AvoidanceSession::start(&link, ReshapeHandle::new(2), start).unwrap();
    assert!(!session.prev_segment_horizontal());
    assert!(session.next_segment_horizontal());

    // next near (200,100) slides to (200,40); far segment spans (200,40)-(200,200).
    assert_eq!(session.evaluate(Point::new(100.0, 40.0), &link, Some(&diagram)), start);

    // The same node does not touch anything when the drag goes down.
    let clear = Point::new(100.0, 120.0);
    assert_eq!(session.evaluate(clear, &link, Some(&diagram)), clear);
}

#[test]
fn test_prev_far_segment_is_checked() {
    let link = staircase();
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(120.0, -5.0, 10.0, 10.0));

    let start = Point::new(100.0, 100.0);
    let mut session = AvoidanceSession::start(&link, ReshapeHandle::new(2), start).unwrap();
    // Vertex 1 slides to (160,0), so the first segment grows to x = 160.
    assert_eq!(session.evaluate(Point::new(160.0, 100.0), &link, Some(&diagram)), start);

    let clear = Point::new(80.0, 100.0);
    assert_eq!(session.evaluate(clear, &link, Some(&diagram)), clear);
}

#[test]
fn test_corrector_snaps_before_checking() {
    let mut diagram = Diagram::new();
    diagram.add_node(Rect::new(90.0, 40.0, 20.0, 20.0));
    let link = elbow();
    let ctx = ReshapeContext {
        link: &link,
        parts: Some(&diagram),
        grid: diagram.grid(),
        handle: Some(ReshapeHandle::new(1)),
    };
    let mut tool = SnapLinkReshaper::new(ReshapeConfig::default());
    tool.begin(&ctx, Point::new(100.0, 0.0));

    // (104,36) snaps to (100,40), on the node's top edge.
    assert_eq!(tool.correct(&ctx, Point::new(104.0, 36.0)), Point::new(100.0, 0.0));
    assert_eq!(tool.correct(&ctx, Point::new(104.0, 74.0)), Point::new(100.0, 70.0));
    tool.finish();
}

proptest! {
    #[test]
    fn prop_returned_points_never_cross_nodes(
        moves in prop::collection::vec((-200.0..300.0f64, -200.0..300.0f64), 1..40)
    ) {
        let mut diagram = Diagram::new();
        diagram.add_node(Rect::new(150.0, 30.0, 40.0, 40.0));
        diagram.add_node(Rect::new(-60.0, 120.0, 40.0, 40.0));
        let link = elbow();
        let start = Point::new(100.0, 0.0);
        let mut session = AvoidanceSession::start(&link, ReshapeHandle::new(1), start).unwrap();
        prop_assert!(session.is_clear(start, &link, Some(&diagram)));

        let mut last = start;
        for (x, y) in moves {
            let candidate = Point::new(x, y);
            let out = session.evaluate(candidate, &link, Some(&diagram));
            prop_assert!(out == candidate || out == last);
            prop_assert!(session.is_clear(out, &link, Some(&diagram)));
            prop_assert_eq!(session.safe_point(), out);
            last = out;
        }
    }
}
