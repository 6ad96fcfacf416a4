//! Telegraph API result types

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Telegraph account
///
/// `access_token` and `auth_url` are only returned by `createAccount`,
/// `revokeAccessToken` and field-restricted `getAccountInfo` calls that
/// ask for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account name, shown to the user above the "Edit/Publish" button
    #[serde(default)]
    pub short_name: String,
    /// Default author name used when creating new pages
    #[serde(default)]
    pub author_name: String,
    /// Default profile link opened when users click the author name
    #[serde(default)]
    pub author_url: String,
    /// Access token of the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// One-time URL that authorizes a browser on telegra.ph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    /// Number of pages belonging to the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
}

/// Telegraph page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Path to the page, assigned by the server
    pub path: String,
    /// Canonical URL of the page
    pub url: String,
    /// Page title
    pub title: String,
    /// Page description
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Page body, only present when the content was requested
    #[serde(
        default,
        deserialize_with = "crate::codec::deserialize_content",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    /// Whether the current account may edit the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
}

/// List of pages belonging to an account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageList {
    /// Total number of pages belonging to the account
    pub total_count: u64,
    /// Requested pages, without content
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// View count of a page for the queried period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageViews {
    pub views: u64,
}

/// Account fields that can be requested from `getAccountInfo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountField {
    ShortName,
    AuthorName,
    AuthorUrl,
    AuthUrl,
    PageCount,
}

impl AccountField {
    /// Fields returned when no explicit list is given
    pub const DEFAULT: [AccountField; 3] = [
        AccountField::ShortName,
        AccountField::AuthorName,
        AccountField::AuthorUrl,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountField::ShortName => "short_name",
            AccountField::AuthorName => "author_name",
            AccountField::AuthorUrl => "author_url",
            AccountField::AuthUrl => "auth_url",
            AccountField::PageCount => "page_count",
        }
    }
}

impl fmt::Display for AccountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
