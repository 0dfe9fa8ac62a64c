//! Lightweight Markdown renderer for the final answer text.
//!
//! DESIGN
//! ======
//! The backend's synthesizer emits a small fixed dialect (`##` headings,
//! `**bold**`, `*`/`-` bullet lists, paragraphs) and this renderer handles
//! exactly that, nothing more. The input is entity-escaped before any
//! pattern handling, so the emitted tags are the only markup in the output
//! and raw model text can never inject HTML.
//!
//! The passes run in a fixed order: escape, headings, bold spans, then a
//! single line scan that forms lists and wraps the remaining non-blank lines
//! (already-transformed heading lines included) in paragraphs.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Render the supported Markdown subset to HTML. Empty input renders to an
/// empty string; the "awaiting result" placeholder belongs to the caller.
#[must_use]
pub fn md_to_html(md: &str) -> String {
    if md.is_empty() {
        return String::new();
    }

    let escaped = escape_entities(md);
    let headed: Vec<String> = escaped
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(convert_heading)
        .collect();
    let bolded = convert_bold_spans(&headed.join("\n"));

    let mut out: Vec<String> = Vec::new();
    let mut in_list = false;
    for line in bolded.split('\n') {
        if let Some(item) = list_item_text(line) {
            if !in_list {
                out.push("<ul>".to_owned());
                in_list = true;
            }
            out.push(format!("<li>{item}</li>"));
            continue;
        }
        if in_list {
            out.push("</ul>".to_owned());
            in_list = false;
        }
        if line.trim().is_empty() {
            out.push(String::new());
        } else {
            out.push(format!("<p>{line}</p>"));
        }
    }
    if in_list {
        out.push("</ul>".to_owned());
    }
    out.join("\n")
}

/// Escape `&` first so it never re-escapes the other entities.
fn escape_entities(input: &str) -> String {
    input.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// `## <text>` at line start becomes a level-4 heading.
fn convert_heading(line: &str) -> String {
    if let Some(rest) = line.strip_prefix("##") {
        let text = rest.trim_start();
        if !text.is_empty() {
            return format!("<h4>{text}</h4>");
        }
    }
    line.to_owned()
}

/// Wrap every `**text**` span in `<strong>`. Pairs are matched left to
/// right, non-greedily, with at least one character of content (which may
/// include newlines); an unpaired `**` is left literal.
fn convert_bold_spans(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    loop {
        let Some(open) = rest.find("**") else {
            out.push_str(rest);
            return out;
        };
        let tail = &rest[open + 2..];
        let Some(close) = find_bold_close(tail) else {
            // No closing pair with content; everything from here is literal.
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..open]);
        out.push_str("<strong>");
        out.push_str(&tail[..close]);
        out.push_str("</strong>");
        rest = &tail[close + 2..];
    }
}

/// First `**` in `tail` that leaves at least one character of content.
fn find_bold_close(tail: &str) -> Option<usize> {
    let (min, _) = tail.char_indices().nth(1)?;
    tail[min..].find("**").map(|i| i + min)
}

/// Bullet line: optional leading whitespace, `*` or `-`, at least one
/// whitespace character, then the (possibly empty) item text.
fn list_item_text(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(['*', '-'])?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}
