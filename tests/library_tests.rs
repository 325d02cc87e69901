mod common;

use common::fixtures::{manifest, marked_type};
use common::{TestResult, Workspace, find_type, generate_xml};
use docdump::library::LibraryError;
use docdump::{DocDumpBuilder, DocDumpError};

#[test]
fn test_unresolved_reference_fails_the_load() -> TestResult {
    let ws = Workspace::new()?;
    ws.write_json(
        "NLog.Extended.json",
        &manifest("NLog.Extended", &["NLog.Missing"], vec![]),
    )?;

    let result = DocDumpBuilder::new()
        .with_library_file(ws.path("NLog.Extended.json"))
        .with_reference_dir(ws.path("refs"))
        .build();
    match result {
        Err(DocDumpError::Library(LibraryError::Unresolved { library, .. })) => {
            assert_eq!(library, "NLog.Missing");
        }
        Err(other) => return Err(format!("unexpected error: {}", other).into()),
        Ok(_) => return Err("expected the load to fail".into()),
    }
    Ok(())
}

#[test]
fn test_reference_libraries_are_not_documented() -> TestResult {
    let ws = Workspace::new()?;
    ws.write_json(
        "Plugin.json",
        &manifest(
            "Plugin",
            &["Host"],
            vec![marked_type("Plugin.MailTarget", "NLog.Targets.TargetAttribute", "Mail")],
        ),
    )?;
    ws.write_json(
        "refs/Host.json",
        &manifest(
            "Host",
            &[],
            vec![marked_type("Host.FileTarget", "NLog.Targets.TargetAttribute", "File")],
        ),
    )?;

    let xml = generate_xml(
        DocDumpBuilder::new()
            .with_library_file(ws.path("Plugin.json"))
            .with_reference_dir(ws.path("refs")),
    )?;
    let doc = roxmltree::Document::parse(&xml)?;
    assert!(find_type(&doc, "Plugin.MailTarget").is_some());
    assert!(find_type(&doc, "Host.FileTarget").is_none());
    Ok(())
}

#[test]
fn test_explicitly_loaded_reference_is_documented() -> TestResult {
    let ws = Workspace::new()?;
    ws.write_json(
        "Plugin.json",
        &manifest(
            "Plugin",
            &["Host"],
            vec![marked_type("Plugin.MailTarget", "NLog.Targets.TargetAttribute", "Mail")],
        ),
    )?;
    let host = ws.write_json(
        "refs/Host.json",
        &manifest(
            "Host",
            &[],
            vec![marked_type("Host.FileTarget", "NLog.Targets.TargetAttribute", "File")],
        ),
    )?;

    let xml = generate_xml(
        DocDumpBuilder::new()
            .with_library_file(ws.path("Plugin.json"))
            .with_library_file(host)
            .with_reference_dir(ws.path("refs")),
    )?;
    let doc = roxmltree::Document::parse(&xml)?;
    let file = find_type(&doc, "Host.FileTarget").ok_or("missing Host.FileTarget")?;
    assert_eq!(file.attribute("assembly"), Some("Host"));
    Ok(())
}

#[test]
fn test_legacy_markers_follow_current_ones() -> TestResult {
    let ws = Workspace::new()?;
    ws.write_json(
        "NLog.json",
        &manifest(
            "NLog",
            &[],
            vec![
                marked_type("NLog.OldFileTarget", "NLog.TargetAttribute", "OldFile"),
                marked_type("NLog.LayoutRenderers.LevelLayoutRenderer", "NLog.LayoutRenderers.LayoutRendererAttribute", "level"),
                marked_type("NLog.OldLevelLayoutRenderer", "NLog.LayoutRendererAttribute", "oldlevel"),
                marked_type("NLog.Targets.ConsoleTarget", "NLog.Targets.TargetAttribute", "Console"),
            ],
        ),
    )?;

    let xml = generate_xml(DocDumpBuilder::new().with_library_file(ws.path("NLog.json")))?;
    let doc = roxmltree::Document::parse(&xml)?;
    let order: Vec<&str> = doc
        .root_element()
        .children()
        .filter_map(|n| n.attribute("clrType"))
        .collect();
    assert_eq!(
        order,
        vec![
            "NLog.Targets.ConsoleTarget",
            "NLog.LayoutRenderers.LevelLayoutRenderer",
            "NLog.OldFileTarget",
            "NLog.OldLevelLayoutRenderer",
        ]
    );
    Ok(())
}

#[test]
fn test_custom_vocabulary() -> TestResult {
    let ws = Workspace::new()?;
    ws.write_json(
        "Acme.json",
        &manifest(
            "Acme",
            &[],
            vec![marked_type("Acme.Sinks.QueueSink", "Acme.SinkAttribute", "Queue")],
        ),
    )?;
    let vocabulary = ws.write(
        "vocabulary.json",
        r#"{ "markers": [{ "kind": "target", "attribute": "Acme.SinkAttribute" }] }"#,
    )?;

    let xml = generate_xml(
        DocDumpBuilder::new()
            .with_library_file(ws.path("Acme.json"))
            .with_vocabulary_file(vocabulary)?,
    )?;
    assert!(xml.contains(r#"clrType="Acme.Sinks.QueueSink" name="Queue" slug="Queue_target""#));
    Ok(())
}

#[test]
fn test_malformed_manifest_is_reported() -> TestResult {
    let ws = Workspace::new()?;
    ws.write("Broken.json", "{ \"name\": ")?;
    let result = DocDumpBuilder::new()
        .with_library_file(ws.path("Broken.json"))
        .build();
    assert!(matches!(
        result,
        Err(DocDumpError::Library(LibraryError::Manifest { .. }))
    ));
    Ok(())
}
