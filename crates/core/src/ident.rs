//! Identifier transforms: camel-case property names and documentation slugs,
//! plus the ordering used for type and property names.

use std::cmp::Ordering;

/// Converts a property identifier to its camel-case configuration name.
///
/// Short identifiers and all-caps abbreviations are lower-cased whole, a
/// leading `DB` becomes `db`, and otherwise only the first character is
/// lower-cased.
pub fn camel_case(identifier: &str) -> String {
    if identifier.chars().count() <= 2 || identifier.to_uppercase() == identifier {
        return identifier.to_lowercase();
    }

    if let Some(rest) = identifier.strip_prefix("DB") {
        return format!("db{}", rest);
    }

    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Orders names case-insensitively, falling back to ordinal comparison so
/// that names differing only in case still sort deterministically.
pub fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Builds the slug for a documented kind's display name.
pub fn slugify(name: &str, kind: &str) -> String {
    match kind {
        "target" => return format!("{}_target", name),
        "layout-renderer" => return format!("{}_layout_renderer", name),
        "layout" => return name.to_string(),
        "filter" => return format!("{}_filter", name),
        _ => {}
    }

    let slug_base = if name.to_uppercase() == name {
        name.to_lowercase()
    } else {
        let name = name.replace("NLog", "Nlog").replace("Log4J", "Log4j");
        let mut out = String::with_capacity(name.len() + 4);
        for (i, c) in name.chars().enumerate() {
            if i > 0 && c.is_uppercase() {
                out.push('_');
            }
            out.push(c);
        }
        out
    };

    if kind == "layout" {
        slug_base
    } else {
        format!("{}-{}", slug_base, kind)
    }
}
