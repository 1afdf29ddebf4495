// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and a [link](https://example.com).\n\n- Bullet point\n    - Nested item\n- Another item\n\n> A quote\n>> with a nested quote\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_list(depth: usize) -> String {
    (0..depth)
        .map(|level| format!("{}- level {level}\n", "    ".repeat(level)))
        .collect()
}

#[allow(dead_code)]
pub fn generate_inline_heavy(size: usize) -> String {
    "Some **bold with _italic_ inside**, `code`, and ![img](a.png) text. ".repeat(size)
}
