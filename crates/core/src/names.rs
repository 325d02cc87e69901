//! Short display names for type identities.

use std::collections::HashMap;

/// Built-in overrides: primitives, well-known library types, and historical
/// identities mapped forward to their current names.
const DEFAULT_OVERRIDES: &[(&str, &str)] = &[
    ("System.String", "String"),
    ("System.Int32", "Integer"),
    ("System.Int64", "Long"),
    ("System.Boolean", "Boolean"),
    ("System.Char", "Char"),
    ("System.Byte", "Byte"),
    ("System.Globalization.CultureInfo", "Culture"),
    ("System.Text.Encoding", "Encoding"),
    ("NLog.Layouts.Layout", "Layout"),
    ("NLog.Targets.Target", "Target"),
    ("NLog.Conditions.ConditionExpression", "Condition"),
    ("NLog.Filters.FilterResult", "FilterResult"),
    ("NLog.Layout", "Layout"),
    ("NLog.Target", "Target"),
    ("NLog.ConditionExpression", "Condition"),
    ("NLog.FilterResult", "FilterResult"),
    ("NLog.TargetCollection", "Target"),
    (
        "NLog.Targets.NLogViewerParameterInfoCollection",
        "NLog.Targets.NLogViewerParameterInfo",
    ),
    (
        "NLog.Win32.Targets.ConsoleRowHighlightingRuleCollection",
        "NLog.Targets.ConsoleRowHighlightingRule",
    ),
    (
        "NLog.Win32.Targets.ConsoleWordHighlightingRuleCollection",
        "NLog.Targets.ConsoleWordHighlightingRule",
    ),
    (
        "NLog.Layouts.CsvLayout+ColumnDelimiterMode",
        "NLog.Layouts.ColumnDelimiterMode",
    ),
    (
        "NLog.RichTextBoxRowColoringRuleCollection",
        "NLog.Targets.RichTextBoxRowColoringRuleCollection",
    ),
    (
        "NLog.Targets.Wrappers.FilteringRuleCollection",
        "NLog.Targets.Wrappers.FilteringRule",
    ),
    (
        "NLog.Targets.RichTextBoxWordColoringRuleCollection",
        "NLog.Targets.RichTextBoxWordColoringRule",
    ),
    (
        "NLog.Targets.MethodCallParameterCollection",
        "NLog.Targets.MethodCallParameter",
    ),
    (
        "NLog.Targets.RichTextBoxRowColoringRuleCollection",
        "NLog.Targets.RichTextBoxRowColoringRule",
    ),
    (
        "NLog.Targets.WebServiceTarget+WebServiceProtocol",
        "NLog.Targets.WebServiceProtocol",
    ),
    (
        "NLog.Targets.DatabaseParameterInfoCollection",
        "NLog.Targets.DatabaseParameterInfo",
    ),
];

/// Maps fully-qualified type identities to display names.
#[derive(Debug, Clone)]
pub struct TypeNameResolver {
    overrides: HashMap<String, String>,
}

impl Default for TypeNameResolver {
    fn default() -> Self {
        Self {
            overrides: DEFAULT_OVERRIDES
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl TypeNameResolver {
    /// A resolver with no overrides at all.
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, identity: impl Into<String>, name: impl Into<String>) -> Self {
        self.overrides.insert(identity.into(), name.into());
        self
    }

    /// Returns the override for `identity`, or `identity` itself.
    pub fn resolve<'a>(&'a self, identity: &'a str) -> &'a str {
        self.overrides
            .get(identity)
            .map(String::as_str)
            .unwrap_or(identity)
    }
}
