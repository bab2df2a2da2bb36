//! Integration tests for the triple store, graph projection, and layout

use uni_graph::core::models::{local_name, NodeKind, Object, Triple, TripleStore};
use uni_graph::core::project::project;
use uni_graph::core::render::{compute_layout, fit_to_viewport, LayoutConfig};
use uni_graph::core::university::{build_university_store, LEADER_LABEL};

#[test]
fn test_university_store_has_all_statements() {
    let store = build_university_store();

    assert_eq!(store.len(), 26, "University store should have 26 triples");

    // One type statement per entity
    let type_count = store
        .iter()
        .filter(|t| local_name(&t.predicate) == "type")
        .count();
    assert_eq!(type_count, 8);

    // Literals carry the names and course titles
    let literal_count = store.iter().filter(|t| t.object.is_literal()).count();
    assert_eq!(literal_count, 8, "5 names + 3 titles");
}

#[test]
fn test_projection_drops_type_statements() {
    let store = build_university_store();
    let graph = project(&store);

    // No edge labelled "type" survives projection
    assert!(graph.edges().iter().all(|e| e.label != "type"));

    // Class nodes never appear (they only occur as type objects)
    assert!(!graph.contains_node("Student"));
    assert!(!graph.contains_node("Professor"));
    assert!(!graph.contains_node("Course"));
    assert!(!graph.contains_node("Leader"));
}

#[test]
fn test_projection_counts() {
    let store = build_university_store();
    let graph = project(&store);

    // 8 entities + 8 literal values (5 names + 3 titles)
    assert_eq!(graph.node_count(), 16);
    // 26 triples - 8 type statements
    assert_eq!(graph.edge_count(), 18);
}

#[test]
fn test_projection_node_kinds() {
    let store = build_university_store();
    let graph = project(&store);

    let leader = graph.node(LEADER_LABEL).expect("Leader node missing");
    assert_eq!(leader.kind, NodeKind::Entity);

    let name = graph.node("Imran Khan").expect("Leader name node missing");
    assert_eq!(name.kind, NodeKind::Literal);

    let title = graph
        .node("Machine Learning")
        .expect("Course title node missing");
    assert_eq!(title.kind, NodeKind::Literal);
}

#[test]
fn test_projection_relationship_edges() {
    let store = build_university_store();
    let graph = project(&store);

    assert!(graph.has_edge("Student1", LEADER_LABEL, "follows"));
    assert!(graph.has_edge("Student1", "Course1", "enrolledIn"));
    assert!(graph.has_edge("Professor", "Course1", "teaches"));
    assert!(graph.has_edge(LEADER_LABEL, "Imran Khan", "name"));
    assert!(graph.has_edge("Course2", "Machine Learning", "title"));

    // Direction matters
    assert!(!graph.has_edge(LEADER_LABEL, "Student1", "follows"));
}

#[test]
fn test_projection_empty_store() {
    let store = TripleStore::new();
    let graph = project(&store);

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_projection_preserves_parallel_edges() {
    let mut store = TripleStore::new();
    store.insert(Triple {
        subject: "http://example.org/a".to_string(),
        predicate: "http://example.org/knows".to_string(),
        object: Object::Entity("http://example.org/b".to_string()),
    });
    store.insert(Triple {
        subject: "http://example.org/a".to_string(),
        predicate: "http://example.org/knows".to_string(),
        object: Object::Entity("http://example.org/b".to_string()),
    });

    let graph = project(&store);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2, "Duplicate statements keep both edges");
}

#[test]
fn test_layout_is_deterministic() {
    let store = build_university_store();
    let graph = project(&store);
    let config = LayoutConfig::default();

    let first = compute_layout(&graph, &config);
    let second = compute_layout(&graph, &config);

    assert_eq!(first.len(), graph.node_count());
    for (a, b) in first.iter().zip(second.iter()) {
        assert!((a.x - b.x).abs() < f32::EPSILON);
        assert!((a.y - b.y).abs() < f32::EPSILON);
    }
}

#[test]
fn test_layout_seed_changes_positions() {
    let store = build_university_store();
    let graph = project(&store);

    let base = compute_layout(&graph, &LayoutConfig::default());
    let other = compute_layout(
        &graph,
        &LayoutConfig {
            seed: 7,
            ..LayoutConfig::default()
        },
    );

    let any_moved = base
        .iter()
        .zip(other.iter())
        .any(|(a, b)| (a.x - b.x).abs() > 1.0 || (a.y - b.y).abs() > 1.0);
    assert!(any_moved, "Different seeds should produce different layouts");
}

#[test]
fn test_fit_to_viewport_bounds() {
    let store = build_university_store();
    let graph = project(&store);

    let raw = compute_layout(&graph, &LayoutConfig::default());
    let fitted = fit_to_viewport(&raw, 1500.0, 1000.0, 90.0);

    assert_eq!(fitted.len(), raw.len());
    for p in &fitted {
        assert!(p.x >= 89.0 && p.x <= 1411.0, "x out of viewport: {}", p.x);
        assert!(p.y >= 89.0 && p.y <= 911.0, "y out of viewport: {}", p.y);
    }
}

#[test]
fn test_full_pipeline_node_positions_align() {
    let store = build_university_store();
    let graph = project(&store);
    let raw = compute_layout(&graph, &LayoutConfig::default());
    let positions = fit_to_viewport(&raw, 1500.0, 1000.0, 90.0);

    // One position per node, in node order
    assert_eq!(positions.len(), graph.node_count());
}
