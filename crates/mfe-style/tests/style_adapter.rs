use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mfe_style::adapter::{ModeState, StyleMap};
use mfe_style::config::STYLE_MODE_ENV;
use mfe_style::{
    configure_style_mode, get_styles, global_context, install_global_context, reset_style_mode,
    ComponentRegistry, StyleAdapter, StyleContext, StyleMode,
};
use serial_test::serial;

fn counting_context(native: bool) -> (Arc<AtomicUsize>, StyleContext) {
    let count = Arc::new(AtomicUsize::new(0));
    let probe_count = Arc::clone(&count);
    let ctx = StyleContext::new(move || {
        probe_count.fetch_add(1, Ordering::SeqCst);
        native
    });
    (count, ctx)
}

#[test]
#[serial(global_style_mode)]
fn test_global_detection_runs_once() {
    let (count, ctx) = counting_context(true);
    install_global_context(ctx);

    let first = get_styles("button", &["base"], None);
    let second = get_styles("button", &["size-lg"], None);

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(first.class_name().unwrap().contains("inline-flex"));
    assert_eq!(second.class_name(), Some("h-11 px-8"));
}

#[test]
#[serial(global_style_mode)]
fn test_global_explicit_mode_wins_over_sticky_state() {
    let (count, ctx) = counting_context(true);
    install_global_context(ctx);

    assert_eq!(global_context().mode(), StyleMode::Native);
    let styles = get_styles(
        "button",
        &["base", "size-lg", "variant-primary"],
        Some(StyleMode::Precompiled),
    );
    assert_eq!(
        styles.class_name(),
        Some("mfe-btn mfe-btn--lg mfe-btn--primary")
    );
    assert_eq!(global_context().state(), ModeState::Resolved(StyleMode::Native));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
#[serial(global_style_mode)]
fn test_global_configure_and_reset() {
    let (count, ctx) = counting_context(false);
    install_global_context(ctx);

    configure_style_mode(StyleMode::Computed);
    let styles = get_styles("button", &["base", "size-lg"], None);
    assert_eq!(
        styles.computed_style().and_then(|s| s.get("height")),
        Some("2.75rem")
    );
    assert_eq!(count.load(Ordering::SeqCst), 0);

    reset_style_mode();
    assert_eq!(global_context().state(), ModeState::Uninitialized);
    let styles = get_styles("badge", &["base"], None);
    assert_eq!(styles.class_name(), Some("mfe-badge"));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
#[serial(global_style_mode)]
fn test_global_reset_reapplies_env_mode() {
    let (count, ctx) = counting_context(true);
    install_global_context(ctx);
    configure_style_mode(StyleMode::Native);

    std::env::set_var(STYLE_MODE_ENV, "computed");
    reset_style_mode();
    let state = global_context().state();
    let styles = get_styles("card", &["header"], None);
    std::env::remove_var(STYLE_MODE_ENV);

    assert_eq!(state, ModeState::Resolved(StyleMode::Computed));
    assert_eq!(
        styles.computed_style().and_then(|s| s.get("padding")),
        Some("1.5rem")
    );
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
#[serial(global_style_mode)]
fn test_global_reset_ignores_invalid_env_mode() {
    let (count, ctx) = counting_context(false);
    install_global_context(ctx);
    configure_style_mode(StyleMode::Computed);

    std::env::set_var(STYLE_MODE_ENV, "tailwind");
    reset_style_mode();
    let state = global_context().state();
    std::env::remove_var(STYLE_MODE_ENV);

    assert_eq!(state, ModeState::Uninitialized);
    assert_eq!(global_context().mode(), StyleMode::Precompiled);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
#[serial(global_style_mode)]
fn test_global_unknown_component_and_slot() {
    install_global_context(StyleContext::configured(StyleMode::Precompiled));

    assert!(get_styles("carousel", &["base"], None).is_empty());
    assert_eq!(
        get_styles("button", &["base", "nonexistent-slot"], None).class_name(),
        Some("mfe-btn")
    );
}

#[test]
fn test_custom_registry_from_yaml() {
    let yaml = r#"
chip:
  base:
    native: inline-flex rounded-full px-2
    precompiled: acme-chip
    computed:
      display: inline-flex
      borderRadius: 9999px
  tone-info:
    native: bg-info text-info-foreground
    precompiled: acme-chip--info
    computed:
      backgroundColor: var(--acme-info)
"#;
    let mut registry = ComponentRegistry::builtin().clone();
    registry.extend(ComponentRegistry::from_yaml(yaml).unwrap());

    let adapter = StyleAdapter::new(
        Arc::new(StyleContext::configured(StyleMode::Computed)),
        Arc::new(registry),
    );
    let styles = adapter.get_styles("chip", &["base", "tone-info"], None);
    let expected: StyleMap = [
        ("display", "inline-flex"),
        ("borderRadius", "9999px"),
        ("backgroundColor", "var(--acme-info)"),
    ]
    .into_iter()
    .collect();
    assert_eq!(styles.computed_style(), Some(&expected));

    assert_eq!(
        adapter
            .get_styles("button", &["base"], Some(StyleMode::Precompiled))
            .class_name(),
        Some("mfe-btn")
    );
}

#[test]
fn test_registry_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("components.json");
    std::fs::write(
        &path,
        r#"{"tag": {"base": {"native": "text-xs", "precompiled": "acme-tag"}}}"#,
    )
    .unwrap();

    let registry = ComponentRegistry::from_path(&path).unwrap();
    let adapter = StyleAdapter::new(
        Arc::new(StyleContext::configured(StyleMode::Native)),
        Arc::new(registry),
    );
    assert_eq!(
        adapter.get_styles("tag", &["base"], None).class_name(),
        Some("text-xs")
    );
}
