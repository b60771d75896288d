use super::*;

#[test]
fn guide_covers_wires_and_wireflows() {
    let html = markdown::render(GUIDE);
    assert!(html.contains("<h2>Wires</h2>"));
    assert!(html.contains("<h2>Wireflows</h2>"));
    assert!(html.contains("<table>"));
    assert!(html.contains(r#"<a href="/wireflows">"#));
}
