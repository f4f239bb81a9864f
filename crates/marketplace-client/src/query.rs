//! Request body of the gallery `extensionquery` endpoint.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Installation target of VS Code extensions.
pub const TARGET_VSCODE: &str = "Microsoft.VisualStudio.Code";

/// Criterion kind (`filterType` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterType(pub u32);

impl FilterType {
    /// Free-text match against names, descriptions and tags.
    pub const SEARCH_TEXT: Self = Self(10);
    /// Restricts results to one host product's extensions.
    pub const TARGET_PRODUCT: Self = Self(12);
}

/// Result ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortBy(pub u32);

impl SortBy {
    pub const INSTALL_COUNT: Self = Self(4);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortOrder(pub u32);

impl SortOrder {
    pub const DEFAULT: Self = Self(0);
}

/// Bit set selecting which fields the server includes in each extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryFlags(pub u32);

impl QueryFlags {
    pub const INCLUDE_FILES: Self = Self(0x2);
    pub const INCLUDE_VERSION_PROPERTIES: Self = Self(0x10);
    pub const INCLUDE_ASSET_URI: Self = Self(0x80);
    pub const INCLUDE_STATISTICS: Self = Self(0x100);
    pub const INCLUDE_LATEST_VERSION_ONLY: Self = Self(0x200);

    /// Flags sent by every search: latest version with its files, so icons can be resolved. Equals 914.
    pub const SEARCH: Self = Self(
        Self::INCLUDE_FILES.0
            | Self::INCLUDE_VERSION_PROPERTIES.0
            | Self::INCLUDE_ASSET_URI.0
            | Self::INCLUDE_STATISTICS.0
            | Self::INCLUDE_LATEST_VERSION_ONLY.0,
    );
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub filter_type: FilterType,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilter {
    pub criteria: Vec<Criterion>,
    pub page_size: u32,
    pub page_number: u32,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

/// Complete request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPayload {
    pub filters: Vec<QueryFilter>,
    pub flags: QueryFlags,
}

/// Builds the search request for `search_term`, asking for the first `limit` results.
///
/// The caller is responsible for rejecting empty terms.
pub fn build_query(search_term: &str, limit: NonZeroU32) -> QueryPayload {
    QueryPayload {
        filters: vec![QueryFilter {
            criteria: vec![
                Criterion {
                    filter_type: FilterType::SEARCH_TEXT,
                    value: search_term.to_string(),
                },
                Criterion {
                    filter_type: FilterType::TARGET_PRODUCT,
                    value: TARGET_VSCODE.to_string(),
                },
            ],
            page_size: limit.get(),
            page_number: 1,
            sort_by: SortBy::INSTALL_COUNT,
            sort_order: SortOrder::DEFAULT,
        }],
        flags: QueryFlags::SEARCH,
    }
}
