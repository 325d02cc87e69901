//! Clean-up of documentation fragments before they are emitted.

use docdump_types::{DocElement, DocFragment, DocNode};

/// Boilerplate summary openings and their replacements. First match wins,
/// and rewriting repeats until no opening matches.
const SUMMARY_REWRITES: [(&str, &str); 5] = [
    ("Gets or sets a value indicating ", "Indicates "),
    ("Gets or sets the ", ""),
    ("Gets or sets a ", ""),
    ("Gets or sets ", ""),
    ("Gets the ", "The "),
];

/// Turns line breaks into spaces and collapses runs of spaces.
pub fn collapse_whitespace(text: &str) -> String {
    let mut current = text.replace(['\n', '\r'], " ");
    loop {
        let next = current.replace("  ", " ");
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Trims a summary and rewrites its boilerplate opening.
pub fn normalize_summary(text: &str) -> String {
    rewrite_summary_prefix(text.trim())
}

fn rewrite_summary_prefix(text: &str) -> String {
    let mut current = text.to_string();
    while let Some(next) = rewrite_once(&current) {
        current = next;
    }
    current
}

fn rewrite_once(text: &str) -> Option<String> {
    SUMMARY_REWRITES.iter().find_map(|(pattern, replacement)| {
        text.strip_prefix(pattern)
            .map(|rest| capitalize(&format!("{}{}", replacement, rest)))
    })
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalizes a fragment in place.
///
/// Every text node has its whitespace collapsed, the top-level `summary`
/// loses its surrounding whitespace and boilerplate opening, and `code`
/// elements have their legacy `src` attribute renamed to `source`.
pub fn normalize_fragment(fragment: &mut DocFragment) {
    collapse_text_nodes(&mut fragment.children);

    if let Some(summary) = fragment.element_mut("summary") {
        fix_summary(summary);
    }

    rename_code_sources(&mut fragment.children);
}

fn collapse_text_nodes(nodes: &mut [DocNode]) {
    for node in nodes {
        match node {
            DocNode::Text(text) => *text = collapse_whitespace(text),
            DocNode::Element(el) => collapse_text_nodes(&mut el.children),
        }
    }
}

/// Trims the summary's outer text, rewrites its opening and drops emptied
/// text nodes, repeating until the summary no longer changes.
fn fix_summary(summary: &mut DocElement) {
    loop {
        let before = summary.children.clone();
        if let Some(DocNode::Text(text)) = summary.children.first_mut() {
            *text = rewrite_summary_prefix(text.trim_start());
        }
        if let Some(DocNode::Text(text)) = summary.children.last_mut() {
            *text = text.trim_end().to_string();
        }
        summary
            .children
            .retain(|node| !matches!(node, DocNode::Text(t) if t.is_empty()));
        if summary.children == before {
            return;
        }
    }
}

fn rename_code_sources(nodes: &mut [DocNode]) {
    for node in nodes {
        if let DocNode::Element(el) = node {
            if el.name == "code"
                && let Some(src) = el.attribute("src").map(str::to_owned)
            {
                el.set_attribute("source", src);
                el.remove_attribute("src");
            }
            rename_code_sources(&mut el.children);
        }
    }
}
