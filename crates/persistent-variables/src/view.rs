use persistent_variables_api::{
    ActionDialog, ActionTarget, AlbumId, DialogRow, PluginAction, Translate,
};

use crate::store::{SharedStore, VariableStore};

/// Snapshot of the variables visible from one selected item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariablesView {
    pub album_id: Option<AlbumId>,
    pub album: Vec<(String, String)>,
    pub session: Vec<(String, String)>,
}

impl VariablesView {
    pub fn capture(store: &VariableStore, album_id: Option<&AlbumId>) -> Self {
        let album = album_id
            .and_then(|id| store.album_variables(id))
            .map(|vars| {
                vars.iter()
                    .map(|(key, value)| (key.clone(), value.to_string()))
                    .collect()
            })
            .unwrap_or_default();
        let session = store
            .session_variables()
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect();
        Self {
            album_id: album_id.cloned(),
            album,
            session,
        }
    }

    /// Two-section table: album variables, then session variables.
    pub fn rows(&self, tr: &dyn Translate) -> Vec<DialogRow> {
        let mut rows = Vec::with_capacity(self.album.len() + self.session.len() + 2);
        push_section(
            &mut rows,
            tr,
            tr.tr("ui.section.album", "Album Variables"),
            &self.album,
        );
        push_section(
            &mut rows,
            tr,
            tr.tr("ui.section.session", "Session Variables"),
            &self.session,
        );
        rows
    }
}

fn push_section(
    rows: &mut Vec<DialogRow>,
    tr: &dyn Translate,
    title: String,
    items: &[(String, String)],
) {
    rows.push(DialogRow::Section {
        title,
        summary: tr.trn("ui.table.item_count", "{n} item", "{n} items", items.len()),
    });
    rows.extend(items.iter().map(|(key, value)| DialogRow::Item {
        key: key.clone(),
        value: value.clone(),
    }));
}

/// "View persistent variables" context action.
pub struct ViewPersistentVariables {
    store: SharedStore,
    help_url: String,
}

impl ViewPersistentVariables {
    pub const TITLE: &'static str = "View persistent variables";

    pub fn new(store: SharedStore, help_url: impl Into<String>) -> Self {
        Self {
            store,
            help_url: help_url.into(),
        }
    }
}

impl PluginAction for ViewPersistentVariables {
    fn title(&self) -> String {
        Self::TITLE.to_string()
    }

    fn callback(&self, tr: &dyn Translate, targets: &[ActionTarget]) -> Option<ActionDialog> {
        // Files win over the containers they were selected with.
        let target = targets
            .iter()
            .find(|target| matches!(target, ActionTarget::File(_)))
            .or_else(|| targets.first())?;
        let view = VariablesView::capture(&self.store.lock(), target.album_id());
        Some(ActionDialog {
            title: tr.tr("action.title", Self::TITLE),
            rows: view.rows(tr),
            help_url: Some(self.help_url.clone()),
        })
    }
}
