use snaplink_designer::{
    Diagram, DiagramFile, Grid, Link, Node, Point, Rect, Routing, Size,
};
use tempfile::tempdir;

fn sample_diagram() -> Diagram {
    let mut diagram = Diagram::with_grid(Grid::new(Size::new(20.0, 20.0), Point::new(5.0, 5.0)));
    diagram.insert_node(Node::new(1, Rect::new(90.0, 40.0, 20.0, 20.0)).with_name("obstacle"));
    diagram.insert_node(
        Node::new(2, Rect::new(0.0, 200.0, 40.0, 40.0))
            .with_name("label")
            .with_avoidable(false),
    );
    diagram.insert_link(Link::orthogonal(
        3,
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ],
    ));
    diagram
}

#[test]
fn test_save_and_load_diagram() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.json");

    let file = DiagramFile::from_diagram("sample", &sample_diagram());
    file.save_to_file(&path).unwrap();

    let loaded = DiagramFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.metadata.name, "sample");
    assert_eq!(loaded.version, "1.0");
    assert_eq!(loaded.nodes.len(), 2);
    assert_eq!(loaded.links.len(), 1);
    assert_eq!(loaded.metadata.created, file.metadata.created);

    let diagram = loaded.to_diagram().unwrap();
    assert_eq!(diagram.grid().cell_size, Size::new(20.0, 20.0));
    assert_eq!(diagram.node(1).unwrap().name, "obstacle");
    assert!(!diagram.node(2).unwrap().avoidable);
    let link = diagram.link(3).unwrap();
    assert_eq!(link.routing, Routing::Orthogonal);
    assert_eq!(link.points[2], Point::new(100.0, 100.0));
}

#[test]
fn test_adornments_are_not_saved() {
    let mut diagram = sample_diagram();
    diagram.add_adornment(3, Rect::new(97.0, -3.0, 6.0, 6.0));
    assert_eq!(diagram.part_count(), 4);

    let file = DiagramFile::from_diagram("handles", &diagram);
    assert_eq!(file.to_diagram().unwrap().part_count(), 3);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempdir().unwrap();
    let err = DiagramFile::load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read diagram file"));
}

#[test]
fn test_load_invalid_json_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = DiagramFile::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse diagram file"));
}
