//! VS Code Marketplace search client.
//!
//! [`build_query`] turns a search term into the gallery `extensionquery` request body,
//! [`MarketplaceClient`] posts it, and the response is reduced to display-ready [`ExtensionResult`]s.

mod client;
mod error;
mod query;
mod response;

pub use client::{MarketplaceClient, ACCEPT_HEADER_VALUE, DEFAULT_MARKETPLACE_API_URL};
pub use error::MarketplaceError;
pub use query::{
    build_query, Criterion, FilterType, QueryFilter, QueryFlags, QueryPayload, SortBy, SortOrder,
    TARGET_VSCODE,
};
pub use response::{
    ExtensionQueryResponse, ExtensionResult, FileAsset, RawExtension, RawPublisher, ResultGroup,
    VersionEntry, ASSET_ICON_DEFAULT, ASSET_ICON_SMALL, ITEM_URL_BASE, NOT_AVAILABLE,
};
