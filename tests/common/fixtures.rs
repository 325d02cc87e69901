use serde_json::{Value, json};

const TARGET: &str = "NLog.Targets.TargetAttribute";
const ARRAY_PARAMETER: &str = "NLog.Config.ArrayParameterAttribute";

/// A marker attribute with a display name.
pub fn marker(kind: &str, name: &str) -> Value {
    json!({ "kind": kind, "args": [name] })
}

/// A minimal concrete type carrying `marker_kind` with display name `name`.
pub fn marked_type(full_name: &str, marker_kind: &str, name: &str) -> Value {
    json!({
        "fullName": full_name,
        "attributes": [marker(marker_kind, name)]
    })
}

/// A library manifest with the given references and types.
pub fn manifest(name: &str, references: &[&str], types: Vec<Value>) -> Value {
    json!({ "name": name, "references": references, "types": types })
}

/// The main test library: several targets plus one layout, layout renderer
/// and filter, with inherited properties, an enum, a collection and a
/// reference to `NLog.Base`.
pub fn nlog_manifest() -> Value {
    manifest(
        "NLog",
        &["NLog.Base"],
        vec![
            json!({
                "fullName": "NLog.Targets.Target",
                "isAbstract": true,
                "properties": [
                    { "name": "Name", "valueType": "System.String" }
                ]
            }),
            json!({
                "fullName": "NLog.Targets.TargetWithLayout",
                "isAbstract": true,
                "baseType": "NLog.Targets.Target",
                "properties": [
                    { "name": "Layout", "valueType": "NLog.Layouts.Layout" }
                ]
            }),
            json!({
                "fullName": "NLog.Targets.FileTarget",
                "baseType": "NLog.Targets.TargetWithLayout",
                "attributes": [marker(TARGET, "File")],
                "properties": [
                    { "name": "FileName", "valueType": "NLog.Layouts.Layout" },
                    { "name": "Encoding", "valueType": "System.Text.Encoding" },
                    { "name": "ArchiveNumbering", "valueType": "NLog.Targets.ArchiveNumberingMode" },
                    {
                        "name": "KeepFileOpen",
                        "valueType": "System.Boolean",
                        "attributes": [
                            { "kind": "System.ComponentModel.DefaultValueAttribute", "args": [false] },
                            { "kind": "NLog.Config.AdvancedAttribute" }
                        ]
                    },
                    { "name": "CompiledFileName", "valueType": "System.String" },
                    { "name": "FooterLayout", "valueType": "NLog.Layouts.Layout" }
                ]
            }),
            json!({
                "fullName": "NLog.Targets.ArchiveNumberingMode",
                "isEnum": true,
                "enumMembers": ["Sequence", "Rolling"]
            }),
            json!({
                "fullName": "NLog.Targets.DatabaseTarget",
                "baseType": "NLog.Targets.Target",
                "attributes": [marker(TARGET, "Database")],
                "properties": [
                    {
                        "name": "ConnectionString",
                        "valueType": "NLog.Layouts.Layout",
                        "attributes": [
                            { "kind": "NLog.Config.AcceptsLayoutAttribute" },
                            { "kind": "NLog.Config.RequiredParameterAttribute" }
                        ]
                    },
                    {
                        "name": "Parameters",
                        "valueType": "NLog.Targets.DatabaseParameterInfoCollection",
                        "canWrite": false,
                        "attributes": [
                            {
                                "kind": ARRAY_PARAMETER,
                                "args": [{ "type": "NLog.Targets.DatabaseParameterInfo" }, "parameter"]
                            }
                        ]
                    }
                ]
            }),
            json!({
                "fullName": "NLog.Targets.DatabaseParameterInfo",
                "properties": [
                    { "name": "Name", "valueType": "System.String" },
                    { "name": "Size", "valueType": "System.Int32",
                      "attributes": [{ "kind": "System.ComponentModel.DefaultValueAttribute", "args": [0] }] },
                    { "name": "Layout", "valueType": "NLog.Layouts.Layout" }
                ]
            }),
            json!({
                "fullName": "NLog.Targets.Wrappers.AsyncTargetWrapper",
                "baseType": "NLog.Targets.Wrappers.WrapperTargetBase",
                "attributes": [marker(TARGET, "AsyncWrapper")],
                "properties": [
                    { "name": "QueueLimit", "valueType": "System.Int32" }
                ]
            }),
            json!({
                "fullName": "NLog.Layouts.CsvLayout",
                "attributes": [marker("NLog.Layouts.LayoutAttribute", "CsvLayout")],
                "properties": [
                    { "name": "Delimiter", "valueType": "NLog.Layouts.CsvLayout+ColumnDelimiterMode" }
                ]
            }),
            json!({
                "fullName": "NLog.Layouts.CsvLayout+ColumnDelimiterMode",
                "isEnum": true,
                "enumMembers": ["Auto", "Comma", "Tab"]
            }),
            marked_type(
                "NLog.LayoutRenderers.DateLayoutRenderer",
                "NLog.LayoutRenderers.LayoutRendererAttribute",
                "date",
            ),
            json!({
                "fullName": "NLog.Filters.WhenFilter",
                "attributes": [marker("NLog.Filters.FilterAttribute", "when")],
                "properties": [
                    { "name": "Condition", "valueType": "NLog.Conditions.ConditionExpression" }
                ]
            }),
        ],
    )
}

/// The referenced base library, resolved from a reference directory.
pub fn nlog_base_manifest() -> Value {
    manifest(
        "NLog.Base",
        &[],
        vec![json!({
            "fullName": "NLog.Targets.Wrappers.WrapperTargetBase",
            "isAbstract": true,
            "baseType": "NLog.Targets.Target",
            "properties": [
                { "name": "WrappedTarget", "valueType": "NLog.Targets.Target" }
            ]
        })],
    )
}

/// Documentation comments for the main test library.
pub const NLOG_COMMENTS: &str = r#"<?xml version="1.0"?>
<doc>
  <assembly><name>NLog</name></assembly>
  <members>
    <member name="T:NLog.Targets.FileTarget">
      <summary>
        Writes log messages to one or more files.
      </summary>
      <docgen>
        <categories>
          <category name="Output Options" order="5" />
        </categories>
      </docgen>
      <example>
        <code src="examples/targets/File/Simple/NLog.config" lang="XML" />
      </example>
    </member>
    <member name="P:NLog.Targets.FileTarget.FileName">
      <summary>
        Gets or sets the name of the file to write to.
      </summary>
      <docgen category="Output Options" order="10" />
    </member>
    <member name="P:NLog.Targets.FileTarget.Encoding">
      <summary>Gets or sets the file encoding.</summary>
      <docgen category="Output Options" order="20" />
    </member>
    <member name="P:NLog.Targets.FileTarget.KeepFileOpen">
      <summary>Gets or sets a value indicating whether to keep log file open instead of opening and closing it on each logging event.</summary>
      <docgen category="Performance Tuning Options" order="10" />
    </member>
    <member name="P:NLog.Targets.Target.Name">
      <summary>Gets or sets the name of the target.</summary>
      <docgen category="General Options" order="10" />
    </member>
    <member name="P:NLog.Targets.TargetWithLayout.Layout">
      <summary>Gets or sets the layout used to format log messages.</summary>
      <docgen category="Layout Options" order="1" />
    </member>
    <member name="F:NLog.Targets.ArchiveNumberingMode.Rolling">
      <summary>Rolling style numbering (the most recent is always #0 then #1, ..., #N.</summary>
    </member>
    <member name="F:NLog.Layouts.CsvLayout.ColumnDelimiterMode.Tab">
      <summary>Tab character.</summary>
    </member>
    <member name="T:NLog.Targets.DatabaseParameterInfo">
      <summary>Represents a parameter to a Database target.</summary>
    </member>
    <member name="P:NLog.Targets.DatabaseParameterInfo.Name">
      <summary>Gets or sets the database parameter name.</summary>
      <docgen category="Parameter Options" order="10" />
    </member>
  </members>
</doc>
"#;
