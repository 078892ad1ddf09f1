use crate::{ex, example_quad, example_quad_in_graph, example_triple};
use insta::assert_snapshot;
use rdfmem_model::{Iri, Literal, NamedOrBlankNode, Quad, QuadLike, RdfTerm, Term, TermFactory};
use rdfmem_storage::{
    ActiveGraph, Dataset, MissingGraph, QuadPattern, StorageError, StoreConfig,
};

#[test]
fn insert_quad() {
    let dataset = Dataset::new();

    assert!(dataset.insert(&example_quad()).unwrap());
    assert_eq!(dataset.len().unwrap(), 1);
}

#[test]
fn insert_duplicate_quads_no_effect() {
    let dataset = Dataset::new();

    dataset.insert(&example_quad()).unwrap();

    assert!(!dataset.insert(&example_quad()).unwrap());
    assert_eq!(dataset.len().unwrap(), 1);
}

#[test]
fn insert_duplicate_quads_in_same_operation() {
    let dataset = Dataset::new();

    let inserted = dataset.extend([example_quad(), example_quad()]).unwrap();

    assert_eq!(inserted, 1);
}

#[test]
fn insert_triple_lands_in_default_graph() {
    let dataset = Dataset::new();

    dataset.insert(&example_triple()).unwrap();

    assert!(dataset.contains(&example_quad()).unwrap());
    assert_eq!(dataset.graph().len().unwrap(), 1);
}

#[test]
fn same_triple_in_different_graphs_is_distinct() {
    let dataset = Dataset::new();

    dataset.insert(&example_quad()).unwrap();
    dataset.insert(&example_quad_in_graph("g1")).unwrap();

    assert_eq!(dataset.len().unwrap(), 2);
    assert!(!dataset.contains(&example_quad_in_graph("g2")).unwrap());
}

#[test]
fn language_tags_compare_case_insensitively() {
    let dataset = Dataset::new();
    let upper = Quad::new(
        ex("s"),
        ex("p"),
        Literal::new_language_tagged_literal("chat", "EN").unwrap(),
        None,
    );
    let lower = Quad::new(
        ex("s"),
        ex("p"),
        Literal::new_language_tagged_literal("chat", "en").unwrap(),
        None,
    );

    dataset.insert(&upper).unwrap();

    assert!(dataset.contains(&lower).unwrap());
    assert!(!dataset.insert(&lower).unwrap());
    assert_eq!(dataset.len().unwrap(), 1);
}

#[test]
fn typed_literals_differ_from_simple_literals() {
    let dataset = Dataset::new();
    let typed = Quad::new(
        ex("s"),
        ex("p"),
        Literal::new_typed_literal("1", rdfmem_model::vocab::xsd::INTEGER).unwrap(),
        None,
    );

    dataset.insert(&typed).unwrap();

    let simple = Quad::new(ex("s"), ex("p"), Literal::new_simple_literal("1"), None);
    assert!(!dataset.contains(&simple).unwrap());
}

#[test]
fn contains_pattern_with_wildcards() {
    let dataset = Dataset::new();
    dataset.insert(&example_quad_in_graph("g")).unwrap();

    let by_predicate = QuadPattern::new(None, Some(ex("predicate")), None, ActiveGraph::AllGraphs);
    let by_other = QuadPattern::new(None, Some(ex("other")), None, ActiveGraph::AllGraphs);

    assert!(dataset.contains_pattern(&by_predicate).unwrap());
    assert!(!dataset.contains_pattern(&by_other).unwrap());
}

#[test]
fn graph_position_is_tri_state() {
    let dataset = Dataset::new();
    dataset.insert(&example_quad()).unwrap();
    dataset.insert(&example_quad_in_graph("g")).unwrap();

    let count = |graph: ActiveGraph| {
        dataset
            .quads_for_pattern(&QuadPattern::any().with_graph(graph))
            .unwrap()
            .try_collect_to_vec()
            .unwrap()
            .len()
    };

    assert_eq!(count(ActiveGraph::AllGraphs), 2);
    assert_eq!(count(ActiveGraph::DefaultGraph), 1);
    assert_eq!(count(ActiveGraph::NamedGraph(ex("g").into())), 1);
    assert_eq!(count(ActiveGraph::NamedGraph(ex("unknown").into())), 0);
}

#[test]
fn remove_quad() {
    let dataset = Dataset::new();
    dataset.insert(&example_quad()).unwrap();

    assert!(dataset.remove(&example_quad()).unwrap());
    assert!(!dataset.remove(&example_quad()).unwrap());
    assert!(dataset.is_empty().unwrap());
}

#[test]
fn remove_pattern_returns_count() {
    let dataset = Dataset::new();
    dataset
        .extend([
            example_quad(),
            example_quad_in_graph("g1"),
            example_quad_in_graph("g2"),
        ])
        .unwrap();

    let named_only = QuadPattern::new(Some(ex("subject").into()), None, None, ActiveGraph::AllGraphs);
    let removed = dataset
        .remove_pattern(&named_only.with_graph(ActiveGraph::NamedGraph(ex("g1").into())))
        .unwrap();

    assert_eq!(removed, 1);
    assert_eq!(dataset.len().unwrap(), 2);
}

#[test]
fn clear_removes_everything() {
    let dataset = Dataset::new();
    dataset
        .extend([example_quad(), example_quad_in_graph("g")])
        .unwrap();

    dataset.clear().unwrap();

    assert!(dataset.is_empty().unwrap());
    assert!(dataset.graph_names().unwrap().is_empty());
}

#[test]
fn extend_is_atomic_on_invalid_quads() {
    let dataset = Dataset::new();
    let invalid = Quad::new(
        ex("s"),
        Iri::new_unchecked("not an iri"),
        Literal::new_simple_literal("o"),
        None,
    );

    let result = dataset.extend([example_quad(), invalid]);

    assert!(matches!(result, Err(StorageError::InvalidArgument(_))));
    assert!(dataset.is_empty().unwrap());
}

/// A statement whose positions are not checked on construction.
struct RawQuad<'a> {
    subject: &'a dyn RdfTerm,
    predicate: &'a dyn RdfTerm,
    object: &'a dyn RdfTerm,
}

impl QuadLike for RawQuad<'_> {
    fn subject(&self) -> &dyn RdfTerm {
        self.subject
    }

    fn predicate(&self) -> &dyn RdfTerm {
        self.predicate
    }

    fn object(&self) -> &dyn RdfTerm {
        self.object
    }

    fn graph_name(&self) -> Option<&dyn RdfTerm> {
        None
    }
}

fn assert_rejected_by_lookups(dataset: &Dataset) {
    let value = Literal::new_simple_literal("value");
    let invalid_iri = Iri::new_unchecked("not an iri");
    let invalid_tag = Literal::new_language_tagged_literal_unchecked("value", "not a tag");
    let (subject, predicate) = (ex("subject"), ex("predicate"));
    let invalid = [
        RawQuad {
            subject: &value,
            predicate: &predicate,
            object: &value,
        },
        RawQuad {
            subject: &subject,
            predicate: &value,
            object: &value,
        },
        RawQuad {
            subject: &subject,
            predicate: &invalid_iri,
            object: &value,
        },
        RawQuad {
            subject: &subject,
            predicate: &predicate,
            object: &invalid_tag,
        },
    ];

    for quad in &invalid {
        assert!(matches!(
            dataset.contains(quad),
            Err(StorageError::InvalidArgument(_))
        ));
        assert!(matches!(
            dataset.remove(quad),
            Err(StorageError::InvalidArgument(_))
        ));
    }
}

#[test]
fn lookups_reject_invalid_quads_on_an_empty_dataset() {
    let dataset = Dataset::new();

    assert_rejected_by_lookups(&dataset);
}

#[test]
fn lookups_reject_invalid_quads_regardless_of_contents() {
    let dataset = Dataset::new();
    dataset.insert(&example_quad()).unwrap();

    assert_rejected_by_lookups(&dataset);
    assert_eq!(dataset.len().unwrap(), 1);
}

#[test]
fn insert_terms_rejects_terms_in_wrong_position() {
    let dataset = Dataset::new();
    let literal = Literal::new_simple_literal("o");

    let result = dataset.insert_terms(&literal, &ex("p"), &literal, None);

    let Err(error) = result else {
        panic!("a literal subject must be rejected");
    };
    assert_snapshot!(error, @"Expected an IRI or a blank node but found a literal");
    assert!(dataset.is_empty().unwrap());
}

#[test]
fn insert_terms_rejects_unsupported_term_kinds() {
    let dataset = Dataset::new();
    let variable = oxrdf::Variable::new("x").unwrap();

    let result = dataset.insert_terms(&ex("s"), &ex("p"), &variable, None);

    assert!(matches!(result, Err(StorageError::InvalidTermKind(_))));
}

#[test]
fn blank_nodes_of_other_scopes_are_mapped() {
    let dataset = Dataset::new();
    let foreign = TermFactory::new().create_blank_node().unwrap();
    let quad = Quad::new(foreign.clone(), ex("p"), foreign.clone(), None);

    dataset.insert(&quad).unwrap();

    assert!(dataset.contains(&quad).unwrap());
    let stored = dataset.quads().unwrap().try_collect_to_vec().unwrap();
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0], quad);
    assert_eq!(Term::from(stored[0].subject.clone()), stored[0].object);
    let NamedOrBlankNode::BlankNode(local) = &stored[0].subject else {
        panic!("expected a blank node subject");
    };
    assert!(dataset.factory().is_local(local));
}

#[test]
fn oxrdf_statements_are_accepted() {
    let dataset = Dataset::new();
    let node = oxrdf::BlankNode::new("b1").unwrap();
    let quad = oxrdf::Quad::new(
        node.clone(),
        oxrdf::NamedNode::new("http://example.com/p").unwrap(),
        oxrdf::Literal::new_language_tagged_literal("chat", "fr").unwrap(),
        oxrdf::GraphName::DefaultGraph,
    );

    assert!(dataset.insert(&quad).unwrap());
    assert!(!dataset.insert(&quad).unwrap());
    assert!(dataset.contains(&quad).unwrap());
}

#[test]
fn stream_can_only_be_consumed_once() {
    let dataset = Dataset::new();
    dataset.insert(&example_quad()).unwrap();

    let stream = dataset.quads().unwrap();
    assert_eq!(stream.iter().unwrap().count(), 1);
    assert!(matches!(stream.iter(), Err(StorageError::StreamReused)));

    let fresh = dataset.quads().unwrap();
    assert_eq!(fresh.try_collect_to_vec().unwrap(), vec![example_quad()]);
}

#[test]
fn stream_iterates_snapshot_by_default() {
    let dataset = Dataset::new();
    dataset.insert(&example_quad()).unwrap();

    let stream = dataset.quads().unwrap();
    dataset.insert(&example_quad_in_graph("g")).unwrap();

    assert_eq!(stream.try_collect_to_vec().unwrap(), vec![example_quad()]);
}

#[test]
fn stream_detects_concurrent_modification() {
    let dataset = Dataset::with_config(
        StoreConfig::default().with_concurrent_modification_detection(true),
    );
    dataset.insert(&example_quad()).unwrap();

    let stream = dataset.quads().unwrap();
    let mut iter = stream.iter().unwrap();
    dataset.insert(&example_quad_in_graph("g")).unwrap();

    assert!(matches!(
        iter.next(),
        Some(Err(StorageError::ConcurrentModification))
    ));
    assert!(iter.next().is_none());
}

#[test]
fn read_only_dataset_rejects_mutations() {
    let dataset = Dataset::with_config(StoreConfig::default().with_read_only(true));

    let result = dataset.insert(&example_quad());

    let Err(error) = result else {
        panic!("read-only datasets must reject insertions");
    };
    assert_snapshot!(error, @"Unsupported operation: modifying a read-only store");
    assert!(matches!(
        dataset.clear(),
        Err(StorageError::UnsupportedCapability(_))
    ));
    assert!(matches!(
        dataset.factory().create_blank_node(),
        Err(rdfmem_model::ModelError::UnsupportedCapability(_))
    ));
    assert!(dataset.is_empty().unwrap());
}

#[test]
fn closed_dataset_rejects_operations() {
    let dataset = Dataset::new();
    dataset.insert(&example_quad()).unwrap();
    let view = dataset.graph();

    dataset.close();

    assert!(matches!(dataset.len(), Err(StorageError::Closed)));
    assert!(matches!(dataset.quads(), Err(StorageError::Closed)));
    assert!(matches!(
        dataset.contains(&example_quad()),
        Err(StorageError::Closed)
    ));
    assert!(matches!(view.len(), Err(StorageError::Closed)));
}

#[test]
fn graph_names_are_distinct() {
    let dataset = Dataset::new();
    let other = Quad::new(ex("s2"), ex("p"), Literal::new_simple_literal("o"), Some(ex("g1").into()));
    dataset
        .extend([
            example_quad(),
            example_quad_in_graph("g1"),
            other,
            example_quad_in_graph("g2"),
        ])
        .unwrap();

    let mut names = dataset
        .graph_names()
        .unwrap()
        .into_iter()
        .map(|name| name.to_string())
        .collect::<Vec<_>>();
    names.sort();

    assert_eq!(
        names,
        vec!["<http://example.com/g1>", "<http://example.com/g2>"]
    );
}

#[test]
fn missing_named_graph_is_absent_by_default() {
    let dataset = Dataset::new();
    dataset.insert(&example_quad_in_graph("g")).unwrap();

    assert!(dataset.named_graph(&ex("g")).unwrap().is_some());
    assert!(dataset.named_graph(&ex("unknown")).unwrap().is_none());
}

#[test]
fn missing_named_graph_can_be_an_empty_view() {
    let dataset =
        Dataset::with_config(StoreConfig::default().with_missing_graph(MissingGraph::EmptyView));

    let graph = dataset.named_graph(&ex("g")).unwrap().unwrap();
    assert!(graph.is_empty().unwrap());

    graph.insert(&example_triple()).unwrap();
    assert!(dataset.contains(&example_quad_in_graph("g")).unwrap());
}

#[test]
fn named_graph_rejects_literals_on_an_empty_dataset() {
    let dataset = Dataset::new();

    let result = dataset.named_graph(&Literal::new_simple_literal("value"));

    assert!(matches!(result, Err(StorageError::InvalidArgument(_))));
}

#[test]
fn named_graph_rejects_literals() {
    let dataset = Dataset::new();
    dataset.insert(&example_quad()).unwrap();

    let result = dataset.named_graph(&Literal::new_simple_literal("value"));

    assert!(matches!(result, Err(StorageError::InvalidArgument(_))));
}
