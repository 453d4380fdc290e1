//! Integration tests for grid inference and container synthesis

use grid_synth::layout::{flatten, is_single_column, is_single_row, row_occupancy};
use grid_synth::{
    generate_layout, identifier_leaf, Arrangement, ChildrenMatrix, Element, LayoutError, Node,
    Slot,
};
use pretty_assertions::assert_eq;

fn leaf(id: &str) -> Node<String> {
    Node::Leaf(id.to_string())
}

/// A dashboard-like arrangement: title bar, two stat cards, a wide chart
fn dashboard() -> Vec<Element> {
    vec![
        Element::at("title", 0.0, 0.0),
        Element::at("stat_users", 0.0, 60.0),
        Element::at("stat_revenue", 180.0, 62.0),
        Element::at("chart", 0.0, 200.0),
    ]
}

fn placed_ids(matrix: &ChildrenMatrix<'_>) -> Vec<String> {
    flatten(matrix).map(|e| e.id.clone()).collect()
}

#[test]
fn test_scenario_single_column() {
    let elements = vec![
        Element::at("a", 0.0, 0.0),
        Element::at("b", 0.0, 50.0),
        Element::at("c", 0.0, 100.0),
    ];
    let matrix = ChildrenMatrix::from_elements(&elements).expect("Should populate");
    assert!(is_single_column(&matrix));
    assert_eq!(placed_ids(&matrix), vec!["a", "b", "c"]);
}

#[test]
fn test_scenario_single_row() {
    let elements = vec![
        Element::at("a", 0.0, 0.0),
        Element::at("b", 50.0, 0.0),
        Element::at("c", 100.0, 0.0),
    ];
    let matrix = ChildrenMatrix::from_elements(&elements).expect("Should populate");
    assert!(is_single_row(&matrix));
    assert_eq!(placed_ids(&matrix), vec!["a", "b", "c"]);
}

#[test]
fn test_scenario_dispersed_occupancy() {
    let children: Vec<Element> = (1..=6)
        .map(|i| Element::at(format!("child{}", i), 0.0, 0.0))
        .collect();
    let mut matrix = ChildrenMatrix::new(children.len()).expect("Should allocate");
    let slots = [(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)];
    for (child, (row, column)) in children.iter().zip(slots) {
        matrix.set_child(row, column, child);
    }

    let occupancy: Vec<usize> = (0..6).map(|row| row_occupancy(&matrix, row)).collect();
    assert_eq!(occupancy, vec![1, 2, 3, 0, 0, 0]);
    assert_eq!(Arrangement::of(&matrix), Arrangement::Dispersed);
}

#[test]
fn test_dashboard_placement() {
    let elements = dashboard();
    let matrix = ChildrenMatrix::from_elements(&elements).expect("Should populate");

    assert_eq!(matrix.child(0, 0).map(|e| e.id.as_str()), Some("title"));
    assert_eq!(matrix.child(1, 0).map(|e| e.id.as_str()), Some("stat_users"));
    assert_eq!(matrix.child(1, 1).map(|e| e.id.as_str()), Some("stat_revenue"));
    assert_eq!(matrix.child(2, 0).map(|e| e.id.as_str()), Some("chart"));
}

#[test]
fn test_dashboard_tree() {
    let tree = generate_layout(&dashboard(), identifier_leaf).expect("Should synthesize");
    assert_eq!(
        tree,
        Node::vertical(vec![
            Node::vertical(vec![leaf("title")]),
            Node::horizontal(vec![leaf("stat_users"), leaf("stat_revenue")]),
            Node::vertical(vec![leaf("chart")]),
        ])
    );
}

#[test]
fn test_input_order_changes_grouping() {
    // Same geometry as a 2x2 block, different supply order
    let row_first = vec![
        Element::at("a", 0.0, 0.0),
        Element::at("b", 100.0, 0.0),
        Element::at("c", 0.0, 100.0),
        Element::at("d", 100.0, 100.0),
    ];
    let diagonal_first = vec![
        Element::at("a", 0.0, 0.0),
        Element::at("d", 100.0, 100.0),
        Element::at("b", 100.0, 0.0),
        Element::at("c", 0.0, 100.0),
    ];

    let first = generate_layout(&row_first, identifier_leaf).unwrap();
    let second = generate_layout(&diagonal_first, identifier_leaf).unwrap();

    assert_eq!(
        first,
        Node::vertical(vec![
            Node::horizontal(vec![leaf("a"), leaf("b")]),
            Node::horizontal(vec![leaf("c"), leaf("d")]),
        ])
    );
    assert_ne!(first, second);
}

#[test]
fn test_properties_hold_for_grid_inputs() {
    for count in 1..=9 {
        let elements: Vec<Element> = (0..count)
            .map(|i| {
                Element::at(
                    format!("e{}", i),
                    (i % 3) as f64 * 120.0,
                    (i / 3) as f64 * 45.0,
                )
            })
            .collect();
        let matrix = ChildrenMatrix::from_elements(&elements).expect("Should populate");

        assert_eq!(matrix.child(0, 0), Some(&elements[0]));

        let total: usize = (0..matrix.dimension())
            .map(|row| row_occupancy(&matrix, row))
            .sum();
        assert_eq!(total, count);

        let mut placed = placed_ids(&matrix);
        assert_eq!(placed.len(), count);
        placed.sort();
        placed.dedup();
        assert_eq!(placed.len(), count);

        let slots: Vec<Slot> = matrix.occupied().map(|(slot, _)| slot).collect();
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));

        if is_single_column(&matrix) && is_single_row(&matrix) {
            assert_eq!(count, 1);
        }
    }
}

#[test]
fn test_empty_input_is_invalid_dimension() {
    let result = generate_layout(&[], identifier_leaf);
    assert_eq!(result, Err(LayoutError::InvalidDimension { size: 0 }));
}

#[test]
fn test_elements_from_json() {
    let json = r#"[
        {"id": "avatar", "bounds": {"x": 0, "y": 0, "width": 40, "height": 40}},
        {"id": "name", "bounds": {"x": 50, "y": 0, "width": 120, "height": 20}}
    ]"#;
    let elements: Vec<Element> = serde_json::from_str(json).expect("Should deserialize");
    let tree = generate_layout(&elements, identifier_leaf).unwrap();
    assert_eq!(tree, Node::horizontal(vec![leaf("avatar"), leaf("name")]));
}
