use serde::{Deserialize, Serialize};

pub const USER_GUIDE_URL: &str =
    "https://picard-plugins-user-guides.readthedocs.io/en/latest/persistent_variables/user_guide.html";

/// Plugin options. Every field has a default so partial documents load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Page opened from the help button of the variables dialog.
    pub help_url: String,
    /// Headless hosts have no context menus to register actions on.
    pub register_actions: bool,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            help_url: USER_GUIDE_URL.to_string(),
            register_actions: true,
        }
    }
}
