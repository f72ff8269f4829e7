// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** *content* and `code`.\n\n- Bullet point\n- Another item\n1. Ordered\n\nSee [docs](https://example.com).\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_flowchart(nodes: usize) -> String {
    let mut content = String::from("```mermaid\nflowchart TD\n");
    for i in 0..nodes {
        content.push_str(&format!("N{i}[Node {i}] --> N{}(Next {})\n", i + 1, i + 1));
    }
    content.push_str("```\n");
    content
}
