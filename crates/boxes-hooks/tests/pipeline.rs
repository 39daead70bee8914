//! End-to-end: assistant text → event log → injected summary.

use std::path::Path;

use boxes_core::{EventRecord, LearningCreated};
use boxes_hooks::{
    CaptureOutcome, HostEvent, InjectionCache, PluginContext, ResponseBoxesPlugin,
    SystemTransformInput, SystemTransformOutput,
};
use boxes_settings::BoxesSettings;

const MESSAGE: &str = "\
I went with the embedded store.

⚖️ Choice ──────────────────────────
**What**: SQLite
**Why**: zero ops
**Alternatives**: Postgres

⚠️ Warning ─────────────────────────
**Risk**: WAL file grows under long readers

Let me know if you want the migration next.";

fn settings(path: &Path) -> BoxesSettings {
    BoxesSettings {
        boxes_file: Some(path.to_path_buf()),
        ..BoxesSettings::default()
    }
}

fn plugin(path: &Path) -> ResponseBoxesPlugin {
    ResponseBoxesPlugin::new(
        settings(path),
        PluginContext {
            directory: Some("/work/app".into()),
            worktree: Some("/work".into()),
            ..PluginContext::default()
        },
    )
}

fn host_event(session: &str, text: &str) -> String {
    serde_json::json!({
        "type": "message.updated",
        "properties": {
            "info": {
                "role": "assistant",
                "sessionID": session,
                "parts": [{"type": "text", "text": text}]
            }
        }
    })
    .to_string()
}

#[tokio::test]
async fn capture_then_inject() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analytics").join("boxes.jsonl");
    let mut plugin = plugin(&path);

    let outcome = plugin
        .on_event_json(&host_event("ses_pipeline", MESSAGE))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        CaptureOutcome::Captured {
            session_id: "ses_pipeline".into(),
            message_index: 0,
            count: 2,
        }
    );

    let log = plugin.log().read().await.unwrap();
    assert_eq!(log.boxes.len(), 2);
    assert_eq!(log.boxes[0].box_type, "Choice");
    assert_eq!(log.boxes[0].fields["what"], "SQLite");
    assert_eq!(log.boxes[0].context["directory"], "/work/app");
    assert_eq!(log.boxes[0].context["worktree"], "/work");
    assert_eq!(log.boxes[1].box_type, "Warning");
    assert_eq!(log.boxes[0].ts, log.boxes[1].ts);

    let mut cache = InjectionCache::new();
    let mut output = SystemTransformOutput {
        system: vec!["You are helpful.".into()],
    };
    let input = SystemTransformInput {
        session_id: "ses_next".into(),
    };
    assert!(plugin.transform_system(&mut cache, &input, &mut output).await.unwrap());

    assert_eq!(output.system.len(), 2);
    let summary = &output.system[1];
    assert!(summary.starts_with("PRIOR SESSION LEARNINGS (from Response Boxes):\n\n"));
    assert!(summary.contains("• Choice: what: SQLite | why: zero ops\n"));
    assert!(summary.contains("• Warning: risk: WAL file grows under long readers\n"));
    assert!(!summary.contains("Patterns"));
    assert!(summary.ends_with("Apply relevant learnings using a 🔄 Reflection box in your response."));
}

#[tokio::test]
async fn learnings_from_external_writer_lead_the_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boxes.jsonl");
    let mut plugin = plugin(&path);
    let _ = plugin.capture_text("s", MESSAGE).await.unwrap();

    let learnings = [
        ("prefer embedded stores for single-user tools", 0.9, "2026-01-01T00:00:00Z"),
        ("surface WAL growth risks early", 0.9, "2026-01-02T00:00:00Z"),
        ("ask before schema changes", 0.5, "2026-01-03T00:00:00Z"),
        ("", 1.0, "2026-01-04T00:00:00Z"),
    ];
    let mut lines = std::fs::read_to_string(&path).unwrap();
    for (insight, confidence, ts) in learnings {
        let record = EventRecord::from(LearningCreated {
            insight: insight.into(),
            confidence,
            ts: ts.into(),
        });
        lines.push_str(&serde_json::to_string(&record).unwrap());
        lines.push('\n');
    }
    std::fs::write(&path, lines).unwrap();

    let summary = plugin.projection().await.unwrap().unwrap();
    let expected_patterns = "Patterns (AI-synthesized learnings)\n\
                             • [0.90] surface WAL growth risks early\n\
                             • [0.90] prefer embedded stores for single-user tools\n\
                             • [0.50] ask before schema changes\n\n";
    assert!(summary.contains(expected_patterns), "{summary}");
    assert!(summary.find("Patterns").unwrap() < summary.find("Recent notable boxes").unwrap());
}

#[tokio::test]
async fn legacy_and_corrupt_lines_still_project() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boxes.jsonl");
    std::fs::write(
        &path,
        concat!(
            "{\"type\":\"Assumption\",\"fields\":{\"what\":\"single tenant\"},\"ts\":\"2025-06-01T00:00:00Z\"}\n",
            "{\"event\":\"BoxCreated\",\"box_type\":\"Choi\n",
            "\n",
            "{\"event\":\"LearningCreated\",\"insight\":\"\"}\n",
        ),
    )
    .unwrap();

    let plugin = plugin(&path);
    let summary = plugin.projection().await.unwrap().unwrap();
    assert!(summary.contains("• Assumption: what: single tenant"));
}

#[tokio::test]
async fn disabled_plugin_neither_captures_nor_injects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boxes.jsonl");

    let mut enabled = plugin(&path);
    let _ = enabled.capture_text("s", MESSAGE).await.unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let mut disabled = ResponseBoxesPlugin::new(
        BoxesSettings {
            disabled: true,
            ..settings(&path)
        },
        PluginContext::default(),
    );
    let outcome = disabled
        .on_event(&HostEvent::assistant_message("s", MESSAGE))
        .await
        .unwrap();
    assert_eq!(outcome, CaptureOutcome::Disabled);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);

    let mut cache = InjectionCache::new();
    let mut output = SystemTransformOutput::default();
    let input = SystemTransformInput {
        session_id: "s".into(),
    };
    assert!(!disabled.transform_system(&mut cache, &input, &mut output).await.unwrap());
    assert!(output.system.is_empty());
}

#[tokio::test]
async fn one_cache_injects_each_session_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boxes.jsonl");
    let mut plugin = plugin(&path);
    let _ = plugin.capture_text("s", MESSAGE).await.unwrap();

    let mut cache = InjectionCache::new();
    let mut injected = 0;
    for session in ["a", "b", "a", "c", "b", "a"] {
        let mut output = SystemTransformOutput::default();
        let input = SystemTransformInput {
            session_id: session.into(),
        };
        if plugin.transform_system(&mut cache, &input, &mut output).await.unwrap() {
            injected += 1;
        }
    }
    assert_eq!(injected, 3);
    assert_eq!(cache.len(), 3);
}

#[test]
fn headers_for_model_requests() {
    let headers = boxes_hooks::session_headers("ses_hdr");
    assert_eq!(headers["X-Response-Boxes-Session"], "ses_hdr");
    assert_eq!(headers["X-Response-Boxes-Version"], "1");
}
