use super::*;

#[test]
fn render_headings_and_code() {
    let out = render("# Wires\n\nUse `{name}` in prompts.");
    assert!(out.contains("<h1>Wires</h1>"));
    assert!(out.contains("<code>{name}</code>"));
}

#[test]
fn render_tables() {
    let out = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(out.contains("<table>"));
    assert!(out.contains("<td>2</td>"));
}

#[test]
fn render_escapes_text() {
    let out = render("1 < 2 & 3");
    assert!(out.contains("1 &lt; 2 &amp; 3"));
}

#[test]
fn render_empty_is_empty() {
    assert_eq!(render(""), "");
}
