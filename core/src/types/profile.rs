//! Profile → icon lookup supplied by the caller.

use std::collections::HashMap;


/// A profile discovered in a `settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}


/// Maps profile names to opaque icon references.
#[derive(Debug, Clone)]
pub struct ProfileIcons {
    icons: HashMap<String, String>,
    default_icon: String,
}

impl Default for ProfileIcons {
    fn default() -> Self {
        ProfileIcons::new("unknown")
    }
}

impl ProfileIcons {
    pub fn new(default_icon: impl Into<String>) -> Self {
        ProfileIcons {
            icons: HashMap::new(),
            default_icon: default_icon.into(),
        }
    }

    /// Build a lookup from `(name, icon)` pairs. The first pair for a name wins.
    pub fn from_pairs<I, K, V>(default_icon: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut lookup = ProfileIcons::new(default_icon);
        for (name, icon) in pairs {
            lookup.icons.entry(name.into()).or_insert_with(|| icon.into());
        }
        lookup
    }

    /// Build a lookup from settings profiles, keeping those that declare an icon.
    pub fn from_profiles(default_icon: impl Into<String>, profiles: &[ProfileInfo]) -> Self {
        Self::from_pairs(
            default_icon,
            profiles
                .iter()
                .filter_map(|p| p.icon.as_ref().map(|icon| (p.name.clone(), icon.clone()))),
        )
    }

    /// Icon for a profile, or the default sentinel when unknown.
    pub fn icon_for(&self, profile: Option<&str>) -> &str {
        profile
            .and_then(|name| self.icons.get(name))
            .map(String::as_str)
            .unwrap_or(&self.default_icon)
    }

    pub fn default_icon(&self) -> &str {
        &self.default_icon
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
