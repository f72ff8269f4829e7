use indexmap::IndexMap;

/// A directed connection between two node identifiers.
///
/// Endpoints are plain identifiers and need not have been declared as nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Text between the pipes of `A -->|label| B`.
    pub label: Option<String>,
}

/// Nodes and edges parsed from one diagram block.
///
/// Node order is first-declaration order; the layout engine depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphModel {
    nodes: IndexMap<String, String>,
    edges: Vec<Edge>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node. A later declaration of the same id is ignored.
    pub fn declare_node(&mut self, id: &str, label: String) {
        if !self.nodes.contains_key(id) {
            self.nodes.insert(id.to_string(), label);
        }
    }

    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn nodes(&self) -> &IndexMap<String, String> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the label of a declared node.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).map(String::as_str)
    }

    /// Identifiers in layout order: declared nodes first, then edge endpoints
    /// that were never declared, in order of first reference.
    pub fn node_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        for edge in &self.edges {
            for id in [edge.from.as_str(), edge.to.as_str()] {
                if !self.nodes.contains_key(id) && !order.contains(&id) {
                    order.push(id);
                }
            }
        }
        order
    }
}
