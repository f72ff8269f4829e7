use std::borrow::Cow;

use indexmap::IndexMap;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text};

use super::layout::{COLUMNS, LayoutPosition, ORIGIN, X_PITCH, Y_PITCH};
use super::model::GraphModel;

pub const NODE_WIDTH: u32 = 150;
pub const NODE_HEIGHT: u32 = 60;
/// Labels longer than this many characters are cut and get an ellipsis.
pub const LABEL_MAX_CHARS: usize = 15;
pub const ELLIPSIS: &str = "...";

/// Which rendering a diagram body receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Flowchart,
    Unsupported,
}

impl DiagramKind {
    pub const FLOWCHART_KEYWORD: &'static str = "flowchart";

    /// Substring check, not a structural one: the keyword may appear anywhere.
    pub fn detect(source: &str) -> Self {
        if source.contains(Self::FLOWCHART_KEYWORD) {
            Self::Flowchart
        } else {
            Self::Unsupported
        }
    }
}

/// Everything needed to render one diagram block.
#[derive(Debug, Clone, Copy)]
pub struct DiagramView<'a> {
    /// Element id, unique within one render call.
    pub id: &'a str,
    /// Diagram body exactly as written between the fences.
    pub source: &'a str,
    pub kind: DiagramKind,
    pub graph: &'a GraphModel,
    pub layout: &'a IndexMap<String, LayoutPosition>,
    /// HTML-escape the source shown in the disclosure panel.
    pub escape_source: bool,
}

/// Renders a diagram card. Never fails; an empty graph gives an empty canvas.
pub fn render_diagram(view: &DiagramView<'_>) -> String {
    match view.kind {
        DiagramKind::Flowchart => format!(
            "<div class=\"diagram diagram-flowchart\" id=\"{id}\">\n\
             <div class=\"diagram-title\">Flowchart</div>\n\
             {canvas}\n\
             {source}\n\
             </div>",
            id = view.id,
            canvas = canvas(view.graph, view.layout),
            source = source_disclosure(view.source, view.escape_source),
        ),
        DiagramKind::Unsupported => format!(
            "<div class=\"diagram diagram-unsupported\" id=\"{id}\">\n\
             <div class=\"diagram-notice\">Full rendering is not supported for this diagram type.</div>\n\
             {source}\n\
             </div>",
            id = view.id,
            source = source_disclosure(view.source, view.escape_source),
        ),
    }
}

/// One rectangle and label per laid-out node. Edges are not drawn.
fn canvas(graph: &GraphModel, layout: &IndexMap<String, LayoutPosition>) -> Document {
    let (width, height) = canvas_size(layout.len());

    let mut doc = Document::new()
        .set("class", "diagram-canvas")
        .set("width", width)
        .set("height", height)
        .set("viewBox", format!("0 0 {width} {height}"));

    for (id, pos) in layout {
        // Edge endpoints that were never declared render with an empty label.
        let label = truncate_label(graph.label(id).unwrap_or_default());

        let rect = Rectangle::new()
            .set("x", pos.x)
            .set("y", pos.y)
            .set("width", NODE_WIDTH)
            .set("height", NODE_HEIGHT)
            .set("rx", 8)
            .set("fill", "white")
            .set("stroke", "#333333")
            .set("stroke-width", 2);

        let text = Text::new(label)
            .set("x", pos.x + NODE_WIDTH / 2)
            .set("y", pos.y + NODE_HEIGHT / 2)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-size", 14);

        let node = Group::new()
            .set("class", "diagram-node")
            .set("data-node-id", id.as_str())
            .add(rect)
            .add(text);
        doc = doc.add(node);
    }

    doc
}

/// Canvas dimensions for `nodes` grid cells, saturating at `u32::MAX`.
fn canvas_size(nodes: usize) -> (u32, u32) {
    let columns = nodes.clamp(1, COLUMNS) as u32;
    let rows = u32::try_from(nodes.div_ceil(COLUMNS).max(1)).unwrap_or(u32::MAX);
    let width = ORIGIN.0 * 2 + (columns - 1) * X_PITCH + NODE_WIDTH;
    let height = ((rows - 1).saturating_mul(Y_PITCH))
        .saturating_add(ORIGIN.1 + NODE_HEIGHT + ORIGIN.0);
    (width, height)
}

fn source_disclosure(source: &str, escape: bool) -> String {
    let body = if escape {
        html_escape::encode_text(source)
    } else {
        Cow::Borrowed(source)
    };
    format!(
        "<details class=\"diagram-source\">\n\
         <summary>Diagram source</summary>\n\
         <pre><code>{body}</code></pre>\n\
         </details>"
    )
}

/// Cuts labels longer than [`LABEL_MAX_CHARS`] characters and appends [`ELLIPSIS`].
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() <= LABEL_MAX_CHARS {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(LABEL_MAX_CHARS).collect();
    cut.push_str(ELLIPSIS);
    cut
}
