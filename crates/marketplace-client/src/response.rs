//! Response schema of the `extensionquery` endpoint and its reduction to [`ExtensionResult`].
//!
//! Every field the bot reads is optional on the wire; fallbacks are applied once, in
//! [`ExtensionResult::from`], instead of at each use site.

use serde::Deserialize;

/// Asset type of the 128px icon.
pub const ASSET_ICON_SMALL: &str = "Microsoft.VisualStudio.Services.Icons.Small";
/// Asset type of the full-size icon, used when no small icon is published.
pub const ASSET_ICON_DEFAULT: &str = "Microsoft.VisualStudio.Services.Icons.Default";
/// Placeholder for missing display names.
pub const NOT_AVAILABLE: &str = "N/A";
/// Item page prefix; the item name is appended.
pub const ITEM_URL_BASE: &str = "https://marketplace.visualstudio.com/items?itemName=";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExtensionQueryResponse {
    pub results: Vec<ResultGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResultGroup {
    pub extensions: Vec<RawExtension>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawExtension {
    pub display_name: Option<String>,
    pub extension_name: Option<String>,
    pub publisher: RawPublisher,
    pub versions: Vec<VersionEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPublisher {
    pub display_name: Option<String>,
    pub publisher_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VersionEntry {
    pub files: Vec<FileAsset>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileAsset {
    pub asset_type: Option<String>,
    pub source: Option<String>,
}

impl ExtensionQueryResponse {
    /// Extensions of the first result group; empty when the server sent no groups.
    pub fn into_extensions(self) -> Vec<RawExtension> {
        self.results
            .into_iter()
            .next()
            .map(|group| group.extensions)
            .unwrap_or_default()
    }
}

impl RawExtension {
    /// Icon of the latest version: the small icon if published, else the default icon.
    pub fn icon_url(&self) -> Option<String> {
        let files = self.versions.first().map(|v| v.files.as_slice()).unwrap_or(&[]);
        find_asset(files, ASSET_ICON_SMALL).or_else(|| find_asset(files, ASSET_ICON_DEFAULT))
    }
}

fn find_asset(files: &[FileAsset], asset_type: &str) -> Option<String> {
    files
        .iter()
        .find(|f| f.asset_type.as_deref() == Some(asset_type))
        .and_then(|f| f.source.clone())
        .filter(|s| !s.is_empty())
}

/// Display-ready view of one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionResult {
    pub display_name: String,
    pub publisher_display_name: String,
    /// Publisher's unique name (`ms-python`).
    pub publisher_id: String,
    /// Extension's unique name within the publisher (`python`).
    pub extension_id: String,
    pub icon_url: Option<String>,
}

impl ExtensionResult {
    /// `<publisher>.<extension>`, the marketplace's unique item name.
    pub fn item_name(&self) -> String {
        format!("{}.{}", self.publisher_id, self.extension_id)
    }

    pub fn marketplace_url(&self) -> String {
        format!("{}{}", ITEM_URL_BASE, self.item_name())
    }
}

impl From<RawExtension> for ExtensionResult {
    fn from(raw: RawExtension) -> Self {
        let icon_url = raw.icon_url();
        Self {
            display_name: raw.display_name.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            publisher_display_name: raw
                .publisher
                .display_name
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            publisher_id: raw.publisher.publisher_name.unwrap_or_default(),
            extension_id: raw.extension_name.unwrap_or_default(),
            icon_url,
        }
    }
}
