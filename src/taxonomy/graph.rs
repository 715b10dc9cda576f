//! A taxonomy as a [petgraph] graph.
//!
//! Nodes are weighted by the atom of each element, and an edge runs from each child to each of its parents (the direction of entailment).

use std::collections::BTreeMap;

use petgraph::{
    algo,
    dot::{Config as DotConfig, Dot},
    graph::{Graph, NodeIndex},
};

use crate::structures::atom::Atom;

use super::Taxonomy;

impl Taxonomy {
    /// The taxonomy as a directed graph, with an edge from each child to each parent.
    pub fn graph(&self) -> Graph<Atom, ()> {
        let edge_count = self.elements.values().map(|e| e.parents.len()).sum();
        let mut graph = Graph::with_capacity(self.elements.len(), edge_count);

        let indices: BTreeMap<&Atom, NodeIndex> = self
            .elements
            .keys()
            .map(|atom| (atom, graph.add_node(atom.clone())))
            .collect();

        for (child, element) in &self.elements {
            for parent in &element.parents {
                if let (Some(c), Some(p)) = (indices.get(child), indices.get(parent)) {
                    graph.add_edge(*c, *p, ());
                }
            }
        }

        graph
    }

    /// True if the taxonomy contains no cycle (including any element which is its own parent).
    pub fn is_acyclic(&self) -> bool {
        !algo::is_cyclic_directed(&self.graph())
    }

    /// The taxonomy in the graphviz dot language, with each node labelled by the name of its atom.
    pub fn dot(&self) -> String {
        // Edges carry no weight to display, so labels are written through Debug.
        format!("{:?}", Dot::with_config(&self.graph(), &[DotConfig::EdgeNoLabel]))
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    #[test]
    fn edges_follow_entailment() {
        let [p, q] = ["p", "q"].map(Atom::from);
        let mut taxonomy = Taxonomy::new();
        taxonomy.add_elements([&p, &q]);
        assert!(taxonomy.add_parent(&p, &q).is_ok());

        let graph = taxonomy.graph();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let edge = graph.raw_edges().first().map(|e| (e.source(), e.target()));
        let named = edge.map(|(s, t)| (graph[s].clone(), graph[t].clone()));
        assert_eq!(named, Some((p, q)));
    }

    #[test]
    fn acyclicity() {
        let [p, q] = ["p", "q"].map(Atom::from);
        let mut taxonomy = Taxonomy::new();
        taxonomy.add_elements([&p, &q]);

        assert!(taxonomy.add_parent(&p, &q).is_ok());
        assert!(taxonomy.is_acyclic());

        assert!(taxonomy.add_parent(&q, &p).is_ok());
        assert!(!taxonomy.is_acyclic());

        assert!(taxonomy.remove_parent(&q, &p).is_ok());
        assert!(taxonomy.add_parent(&q, &q).is_ok());
        assert!(!taxonomy.is_acyclic());
    }

    #[test]
    fn dot_names_elements() {
        let mut taxonomy = Taxonomy::new();
        taxonomy.add_elements(["pizza", "dish"].map(Atom::from));
        assert!(taxonomy
            .add_parent(Atom::from("pizza"), Atom::from("dish"))
            .is_ok());

        let dot = taxonomy.dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("pizza") && dot.contains("dish"));
        assert!(dot.contains("->"));
    }
}
