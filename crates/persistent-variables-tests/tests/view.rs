use persistent_variables::{PersistentVariablesPlugin, PluginSettings, USER_GUIDE_URL};
use persistent_variables_api::{
    ActionTarget, AlbumId, DialogRow, FileRef, ScriptContext, TrackRef,
};
use persistent_variables_host::ScriptHost;
use pretty_assertions::assert_eq;

const TITLE: &str = "View persistent variables";

fn enabled_host(settings: PluginSettings) -> ScriptHost {
    let plugin = PersistentVariablesPlugin::with_settings(settings);
    let mut host = ScriptHost::new();
    plugin.enable(&mut host);
    host
}

fn set(host: &ScriptHost, name: &str, ctx: &ScriptContext, key: &str, value: &str) {
    host.call(name, ctx, &[key.to_string(), value.to_string()])
        .unwrap();
}

#[test]
fn track_view_lists_album_then_session() {
    let host = enabled_host(PluginSettings::default());
    let a1 = AlbumId::new("album-1").unwrap();
    let ctx = ScriptContext::for_album(&a1);
    set(&host, "set_a", &ctx, "_hidden", "h");
    set(&host, "set_a", &ctx, "artist_count", "4");
    set(&host, "set_s", &ctx, "run", "yes");

    let dialog = host
        .run_action(TITLE, &[ActionTarget::Track(TrackRef::on_album(a1))])
        .unwrap()
        .unwrap();
    assert_eq!(dialog.help_url.as_deref(), Some(USER_GUIDE_URL));
    let keys: Vec<_> = dialog
        .rows
        .iter()
        .map(|row| match row {
            DialogRow::Section { title, summary } => format!("{title} ({summary})"),
            DialogRow::Item { key, value } => format!("{key}={value}"),
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            "Album Variables (2 items)",
            "artist_count=4",
            "~hidden=h",
            "Session Variables (1 item)",
            "run=yes",
        ]
    );
}

#[test]
fn unattached_file_shows_only_session() {
    let host = enabled_host(PluginSettings {
        help_url: "https://example.invalid/help".into(),
        ..PluginSettings::default()
    });
    let ctx = ScriptContext::default();
    set(&host, "set_s", &ctx, "run", "yes");

    let dialog = host
        .run_action(TITLE, &[ActionTarget::File(FileRef::unattached())])
        .unwrap()
        .unwrap();
    assert_eq!(dialog.rows.len(), 3);
    assert_eq!(
        dialog.rows[0],
        DialogRow::Section {
            title: "Album Variables".into(),
            summary: "0 items".into(),
        }
    );
    assert_eq!(dialog.help_url.as_deref(), Some("https://example.invalid/help"));
}
