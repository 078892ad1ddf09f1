use crate::ex;
use rdfmem_model::{BlankNode, Literal, NamedOrBlankNode, Quad, Triple};
use rdfmem_storage::{
    copy_quads, import_dataset, import_graph, insert_all, ActiveGraph, Dataset, Graph, QuadPattern,
    QuadStore,
};

fn triple_with_blank_node(graph: &Graph) -> (BlankNode, Triple) {
    let node = graph.factory().create_blank_node().unwrap();
    let triple = Triple::new(node.clone(), ex("p"), Literal::new_simple_literal("o"));
    (node, triple)
}

fn only_subject(graph: &Graph) -> NamedOrBlankNode {
    let triples = graph.triples().unwrap().try_collect_to_vec().unwrap();
    assert_eq!(triples.len(), 1);
    triples[0].subject.clone()
}

#[test]
fn blank_nodes_from_different_graphs_stay_distinct() {
    let a = Graph::new();
    let b = Graph::new();
    let (_, triple_a) = triple_with_blank_node(&a);
    let (_, triple_b) = triple_with_blank_node(&b);

    let target = Graph::new();
    target.insert(&triple_a).unwrap();
    target.insert(&triple_b).unwrap();

    assert_eq!(target.len().unwrap(), 2);
}

#[test]
fn reimport_maps_blank_nodes_to_same_local_node() {
    let source = Graph::new();
    let (_, triple) = triple_with_blank_node(&source);
    source.insert(&triple).unwrap();

    let target = Graph::new();
    assert_eq!(import_graph(&source, &target).unwrap(), 1);
    let first = only_subject(&target);

    assert_eq!(import_graph(&source, &target).unwrap(), 0);
    assert_eq!(only_subject(&target), first);
}

#[test]
fn blank_node_identity_is_per_store() {
    let a = Graph::new();
    let (node, triple) = triple_with_blank_node(&a);
    a.insert(&triple).unwrap();

    let b = Graph::new();
    let c = Graph::new();
    import_graph(&a, &b).unwrap();
    import_graph(&a, &c).unwrap();

    let in_b = only_subject(&b);
    let in_c = only_subject(&c);
    assert_ne!(in_b, in_c);
    assert_ne!(in_b, NamedOrBlankNode::from(node));

    // Round-tripping through B into a fresh store maps B's node again.
    let d = Graph::new();
    import_graph(&b, &d).unwrap();
    assert_ne!(only_subject(&d), in_b);
    assert!(b.contains(&triple).unwrap());
    assert!(!c.contains(&Triple::new(in_b, ex("p"), Literal::new_simple_literal("o"))).unwrap());
}

#[test]
fn named_blank_nodes_are_stable_per_scope() {
    let graph = Graph::new();
    let first = graph.factory().create_blank_node_named("x").unwrap();
    let second = graph.factory().create_blank_node_named("x").unwrap();
    let other = Graph::new().factory().create_blank_node_named("x").unwrap();

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn import_dataset_keeps_graphs() {
    let source = Dataset::new();
    let node = source.factory().create_blank_node().unwrap();
    source
        .extend([
            Quad::new(node.clone(), ex("p"), Literal::new_simple_literal("o"), None),
            Quad::new(
                ex("s"),
                ex("p"),
                Literal::new_simple_literal("o"),
                Some(node.into()),
            ),
        ])
        .unwrap();

    let target = Dataset::new();
    assert_eq!(import_dataset(&source, &target).unwrap(), 2);

    let names = target.graph_names().unwrap();
    assert_eq!(names.len(), 1);
    let NamedOrBlankNode::BlankNode(graph_name) = &names[0] else {
        panic!("expected a blank node graph name");
    };
    assert!(target.factory().is_local(graph_name));
    let subjects_named_like_graph = target
        .quads_for_pattern(&QuadPattern::new(
            Some(names[0].clone()),
            None,
            None,
            None::<Option<NamedOrBlankNode>>,
        ))
        .unwrap()
        .try_collect_to_vec()
        .unwrap();
    assert_eq!(subjects_named_like_graph.len(), 1);
}

#[test]
fn blank_node_references_cannot_be_restored_in_another_graph() {
    let a = Graph::new();
    let b = Graph::new();
    let node = a.factory().create_blank_node_named("x").unwrap();

    assert!(b.factory().restore_blank_node(node.unique_reference()).is_err());

    b.insert(&Triple::new(node.clone(), ex("p"), node.clone()))
        .unwrap();
    let NamedOrBlankNode::BlankNode(local) = only_subject(&b) else {
        panic!("expected a blank node subject");
    };
    assert_ne!(local, node);
    assert!(b.factory().is_local(&local));
}

#[test]
fn reimport_preserves_relationships_between_blank_nodes() {
    let a = Graph::new();
    let parent = a.factory().create_blank_node_named("parent").unwrap();
    let child = a.factory().create_blank_node_named("child").unwrap();
    a.insert(&Triple::new(parent.clone(), ex("hasChild"), child.clone()))
        .unwrap();

    let b = Graph::new();
    for _ in 0..2 {
        // Independent objects with equal unique references.
        let parent = a.factory().restore_blank_node(parent.unique_reference()).unwrap();
        let child = a.factory().restore_blank_node(child.unique_reference()).unwrap();
        b.insert(&Triple::new(parent, ex("hasChild"), child)).unwrap();
    }
    assert_eq!(b.len().unwrap(), 1);

    let c = Graph::new();
    let unrelated = Graph::new();
    let (_, triple) = triple_with_blank_node(&unrelated);
    c.insert(&triple).unwrap();
    import_graph(&c, &b).unwrap();

    let triples = b.triples().unwrap().try_collect_to_vec().unwrap();
    assert_eq!(triples.len(), 2);
    let related = triples
        .iter()
        .find(|triple| triple.predicate == ex("hasChild"))
        .unwrap();
    let from_c = triples
        .iter()
        .find(|triple| triple.predicate == ex("p"))
        .unwrap();
    let local_child = NamedOrBlankNode::try_from(related.object.clone()).unwrap();
    assert_ne!(related.subject, local_child);
    assert_ne!(related.subject, from_c.subject);
    assert_ne!(local_child, from_c.subject);
}

#[test]
fn copy_quads_respects_pattern() {
    let source = Dataset::new();
    source
        .extend([
            Quad::new(ex("s"), ex("p"), Literal::new_simple_literal("o"), None),
            Quad::new(ex("s"), ex("p"), Literal::new_simple_literal("o"), Some(ex("g").into())),
        ])
        .unwrap();

    let target = Dataset::new();
    let pattern = QuadPattern::any().with_graph(ActiveGraph::DefaultGraph);
    assert_eq!(copy_quads(&source, &target, &pattern).unwrap(), 1);
    assert!(QuadStore::graph_names(&target).unwrap().is_empty());
}

#[test]
fn insert_all_works_on_any_store() {
    let dataset = Dataset::new();
    let store: &dyn QuadStore = &dataset;
    let quad = Quad::new(ex("s"), ex("p"), Literal::new_simple_literal("o"), None);

    assert_eq!(insert_all(store, [quad.clone(), quad.clone()]).unwrap(), 1);
    assert!(store.contains(&quad).unwrap());
    assert_eq!(store.len().unwrap(), 1);
}
