use super::*;

// =============================================================
// Empty and plain input
// =============================================================

#[test]
fn empty_input_renders_to_an_empty_string() {
    assert_eq!(md_to_html(""), "");
}

#[test]
fn a_plain_line_becomes_a_paragraph() {
    assert_eq!(md_to_html("hello"), "<p>hello</p>");
}

#[test]
fn blank_lines_become_empty_output_lines() {
    assert_eq!(md_to_html("a\n\nb"), "<p>a</p>\n\n<p>b</p>");
}

#[test]
fn whitespace_only_lines_count_as_blank() {
    assert_eq!(md_to_html("a\n   \nb"), "<p>a</p>\n\n<p>b</p>");
}

// =============================================================
// Escaping
// =============================================================

#[test]
fn html_entities_are_escaped() {
    assert_eq!(md_to_html("2 < 3 & 4 > 1"), "<p>2 &lt; 3 &amp; 4 &gt; 1</p>");
}

#[test]
fn escaping_happens_before_markup_so_tags_cannot_be_injected() {
    assert_eq!(
        md_to_html("<script>**x**</script>"),
        "<p>&lt;script&gt;<strong>x</strong>&lt;/script&gt;</p>"
    );
}

#[test]
fn ampersand_is_escaped_first_and_only_once() {
    assert_eq!(md_to_html("&lt;"), "<p>&amp;lt;</p>");
}

// =============================================================
// Headings
// =============================================================

#[test]
fn heading_line_becomes_h4_wrapped_in_its_paragraph() {
    assert_eq!(md_to_html("## Title"), "<p><h4>Title</h4></p>");
}

#[test]
fn heading_allows_missing_space_after_the_marker() {
    assert_eq!(md_to_html("##Title"), "<p><h4>Title</h4></p>");
}

#[test]
fn heading_marker_mid_line_is_literal() {
    assert_eq!(md_to_html("see ## this"), "<p>see ## this</p>");
}

#[test]
fn heading_then_bold_paragraph() {
    assert_eq!(
        md_to_html("## Title\n**bold** text"),
        "<p><h4>Title</h4></p>\n<p><strong>bold</strong> text</p>"
    );
}

// =============================================================
// Bold spans
// =============================================================

#[test]
fn bold_span_is_wrapped_in_strong() {
    assert_eq!(md_to_html("a **b** c"), "<p>a <strong>b</strong> c</p>");
}

#[test]
fn multiple_bold_spans_match_non_greedily() {
    assert_eq!(
        md_to_html("**a** mid **b**"),
        "<p><strong>a</strong> mid <strong>b</strong></p>"
    );
}

#[test]
fn unpaired_marker_stays_literal() {
    assert_eq!(md_to_html("a ** b"), "<p>a ** b</p>");
}

#[test]
fn empty_bold_span_stays_literal() {
    assert_eq!(md_to_html("a **** b"), "<p>a **** b</p>");
}

#[test]
fn bold_span_may_cross_a_line_break() {
    assert_eq!(
        md_to_html("**a\nb** c"),
        "<p><strong>a</p>\n<p>b</strong> c</p>"
    );
}

// =============================================================
// Lists
// =============================================================

#[test]
fn list_items_open_and_close_around_a_trailing_paragraph() {
    assert_eq!(
        md_to_html("- a\n- b\nend"),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>end</p>"
    );
}

#[test]
fn star_bullets_and_indentation_are_accepted() {
    assert_eq!(md_to_html("  * a\n\t- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
}

#[test]
fn list_at_end_of_input_is_closed() {
    assert_eq!(md_to_html("- only"), "<ul>\n<li>only</li>\n</ul>");
}

#[test]
fn bullet_without_a_following_space_is_not_a_list_item() {
    assert_eq!(md_to_html("-dash"), "<p>-dash</p>");
}

#[test]
fn bold_line_is_not_mistaken_for_a_star_bullet() {
    assert_eq!(md_to_html("**bold**"), "<p><strong>bold</strong></p>");
}

#[test]
fn blank_line_splits_two_lists() {
    assert_eq!(
        md_to_html("- a\n\n- b"),
        "<ul>\n<li>a</li>\n</ul>\n\n<ul>\n<li>b</li>\n</ul>"
    );
}

#[test]
fn list_items_may_carry_inline_bold() {
    assert_eq!(
        md_to_html("- **urgent**: water"),
        "<ul>\n<li><strong>urgent</strong>: water</li>\n</ul>"
    );
}

// =============================================================
// Mixed documents
// =============================================================

#[test]
fn full_answer_renders_every_construct() {
    let md = "## Diagnosis\nLeaf rust, **moderate** severity.\n\n- apply fungicide\n- re-check in 7 days\nGood luck & stay dry";
    assert_eq!(
        md_to_html(md),
        "<p><h4>Diagnosis</h4></p>\n\
         <p>Leaf rust, <strong>moderate</strong> severity.</p>\n\
         \n\
         <ul>\n\
         <li>apply fungicide</li>\n\
         <li>re-check in 7 days</li>\n\
         </ul>\n\
         <p>Good luck &amp; stay dry</p>"
    );
}

#[test]
fn carriage_returns_are_tolerated() {
    assert_eq!(md_to_html("a\r\nb"), "<p>a</p>\n<p>b</p>");
}
