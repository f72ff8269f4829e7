//! # Flowchart Parsing
//!
//! Line-oriented parser for the flowchart subset of the diagram notation.
//!
//! Every line is checked against four independent patterns and *all* matching
//! patterns contribute to the graph. A line such as `A[Start] --> B[End]`
//! therefore declares two nodes and one edge. Lines matching nothing are
//! skipped without error.

use std::sync::OnceLock;

use regex::Regex;

use super::model::{Edge, GraphModel};

fn square_node_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z0-9_]+)\[([^\]]+)\]").expect("Invalid square node regex")
    })
}

fn round_node_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Za-z0-9_]+)\(([^)]+)\)").expect("Invalid round node regex"))
}

fn edge_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z0-9_]+)(?:\[[^\]]*\]|\([^)]*\)|\{[^}]*\})?\s*-->\s*([A-Za-z0-9_]+)")
            .expect("Invalid edge regex")
    })
}

fn labeled_edge_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"([A-Za-z0-9_]+)(?:\[[^\]]*\]|\([^)]*\)|\{[^}]*\})?\s*-->\s*\|([^|]*)\|\s*([A-Za-z0-9_]+)",
        )
        .expect("Invalid labeled edge regex")
    })
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)[ \t]*(?:<br\s*/?>|\\n)[ \t]*").expect("Invalid line break regex")
    })
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

/// Parses a diagram body into a [`GraphModel`].
///
/// Total: unknown lines (including the `flowchart TD` header) are ignored.
pub fn parse(source: &str) -> GraphModel {
    let mut graph = GraphModel::new();

    for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let before = (graph.nodes().len(), graph.edges().len());

        declare_nodes(&mut graph, square_node_re(), line);
        declare_nodes(&mut graph, round_node_re(), line);
        push_edges(&mut graph, line);
        push_labeled_edges(&mut graph, line);

        if before == (graph.nodes().len(), graph.edges().len()) {
            log::trace!("diagram line produced nothing: {line:?}");
        }
    }

    graph
}

fn declare_nodes(graph: &mut GraphModel, re: &Regex, line: &str) {
    for caps in re.captures_iter(line) {
        graph.declare_node(&caps[1], normalize_label(&caps[2]));
    }
}

/// Plain edges. Restarting the search at the target id turns a chain like
/// `A --> B --> C` into one edge per hop.
fn push_edges(graph: &mut GraphModel, line: &str) {
    let re = edge_re();
    let mut at = 0;
    while let Some(caps) = re.captures_at(line, at) {
        let Some(to) = caps.get(2) else { break };
        graph.push_edge(Edge {
            from: caps[1].to_string(),
            to: to.as_str().to_string(),
            label: None,
        });
        at = to.start();
    }
}

fn push_labeled_edges(graph: &mut GraphModel, line: &str) {
    let re = labeled_edge_re();
    let mut at = 0;
    while let Some(caps) = re.captures_at(line, at) {
        let Some(to) = caps.get(3) else { break };
        let label = normalize_label(&caps[2]);
        graph.push_edge(Edge {
            from: caps[1].to_string(),
            to: to.as_str().to_string(),
            label: (!label.is_empty()).then_some(label),
        });
        at = to.start();
    }
}

/// Each line-break marker, with the blanks around it, becomes one space.
/// Any other tag-like `<...>` is dropped. Author spacing is kept.
pub fn normalize_label(raw: &str) -> String {
    let spaced = line_break_re().replace_all(raw, " ");
    tag_re().replace_all(&spaced, "").trim().to_string()
}
