//! Telegraph method names and request parameter builders
//!
//! Each builder assembles the ordered form parameters for one API method.
//! Optional string parameters are only sent when non-empty and
//! `return_content` only when true, matching what the service expects.

use crate::codec;
use crate::error::{Result, TelegraphError};
use crate::node::Node;
use crate::transport::Params;
use crate::types::AccountField;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Telegraph API method names
pub mod methods {
    pub const CREATE_ACCOUNT: &str = "createAccount";
    pub const EDIT_ACCOUNT_INFO: &str = "editAccountInfo";
    pub const GET_ACCOUNT_INFO: &str = "getAccountInfo";
    pub const REVOKE_ACCESS_TOKEN: &str = "revokeAccessToken";
    pub const CREATE_PAGE: &str = "createPage";
    pub const EDIT_PAGE: &str = "editPage";
    pub const GET_PAGE: &str = "getPage";
    pub const GET_PAGE_LIST: &str = "getPageList";
    pub const GET_VIEWS: &str = "getViews";
}

/// Optional author fields for `createAccount`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAccountOptions {
    pub author_name: Option<String>,
    pub author_url: Option<String>,
}

impl CreateAccountOptions {
    /// Sets the default author name
    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    /// Sets the default author profile link
    pub fn author_url(mut self, url: impl Into<String>) -> Self {
        self.author_url = Some(url.into());
        self
    }
}

/// Fields to change with `editAccountInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditAccountOptions {
    pub short_name: Option<String>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
}

impl EditAccountOptions {
    pub fn short_name(mut self, name: impl Into<String>) -> Self {
        self.short_name = Some(name.into());
        self
    }

    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    pub fn author_url(mut self, url: impl Into<String>) -> Self {
        self.author_url = Some(url.into());
        self
    }
}

/// Options shared by `createPage` and `editPage`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Author name shown below the title
    pub author_name: Option<String>,
    /// Profile link opened when users click the author name
    pub author_url: Option<String>,
    /// Ask the server to echo the page content back
    pub return_content: bool,
}

impl PageOptions {
    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    pub fn author_url(mut self, url: impl Into<String>) -> Self {
        self.author_url = Some(url.into());
        self
    }

    pub fn return_content(mut self, return_content: bool) -> Self {
        self.return_content = return_content;
        self
    }
}

/// Paging for `getPageList`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageListOptions {
    /// Sequential number of the first page to return
    pub offset: Option<u32>,
    /// Number of pages to return (server caps this at 200)
    pub limit: Option<u32>,
}

impl PageListOptions {
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Time period for `getViews`
///
/// Each finer unit needs the coarser one: a month needs a year, a day
/// needs a month and an hour needs a day. The default query counts all
/// views of the page.
///
/// # Example
///
/// ```
/// use telegraph_rs::ViewsQuery;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
/// let query = ViewsQuery::for_date(date);
/// assert_eq!(query, ViewsQuery::year(2024).month(3).day(14));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewsQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
}

impl ViewsQuery {
    /// Count all views
    pub fn total() -> Self {
        Self::default()
    }

    /// Count views in a year
    pub fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Default::default()
        }
    }

    /// Narrow to a month (1-12)
    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Narrow to a day of the month (1-31)
    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Narrow to an hour of the day (0-24)
    pub fn hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Count views on a calendar day
    pub fn for_date(date: NaiveDate) -> Self {
        Self::year(date.year()).month(date.month()).day(date.day())
    }

    /// Count views during the hour containing `datetime`
    pub fn for_hour(datetime: NaiveDateTime) -> Self {
        Self::for_date(datetime.date()).hour(datetime.hour())
    }

    /// Check the ranges and the year > month > day > hour chain
    pub fn validate(&self) -> Result<()> {
        let invalid =
            |msg: &str| -> Result<()> { Err(TelegraphError::InvalidArgument(msg.to_string())) };

        if self.month.is_some() && self.year.is_none() {
            return invalid("month requires year");
        }
        if self.day.is_some() && self.month.is_none() {
            return invalid("day requires month");
        }
        if self.hour.is_some() && self.day.is_none() {
            return invalid("hour requires day");
        }
        if self.year.is_some_and(|y| !(2000..=2100).contains(&y)) {
            return invalid("year must be between 2000 and 2100");
        }
        if self.month.is_some_and(|m| !(1..=12).contains(&m)) {
            return invalid("month must be between 1 and 12");
        }
        if self.day.is_some_and(|d| !(1..=31).contains(&d)) {
            return invalid("day must be between 1 and 31");
        }
        if self.hour.is_some_and(|h| h > 24) {
            return invalid("hour must be between 0 and 24");
        }
        Ok(())
    }
}

fn token_param(params: &mut Params, access_token: &str) {
    params.push("access_token", access_token);
}

/// Build `createAccount` parameters
pub fn create_account(short_name: &str, options: &CreateAccountOptions) -> Params {
    let mut params = Params::new();
    params.push("short_name", short_name);
    params.push_non_empty("author_name", options.author_name.as_deref());
    params.push_non_empty("author_url", options.author_url.as_deref());
    params
}

/// Build `editAccountInfo` parameters
pub fn edit_account_info(access_token: &str, options: &EditAccountOptions) -> Params {
    let mut params = Params::new();
    token_param(&mut params, access_token);
    params.push_non_empty("short_name", options.short_name.as_deref());
    params.push_non_empty("author_name", options.author_name.as_deref());
    params.push_non_empty("author_url", options.author_url.as_deref());
    params
}

/// Build `getAccountInfo` parameters
///
/// `fields` is sent as a JSON array of field names. An empty slice
/// requests [`AccountField::DEFAULT`].
pub fn get_account_info(access_token: &str, fields: &[AccountField]) -> Result<Params> {
    let fields = if fields.is_empty() {
        &AccountField::DEFAULT[..]
    } else {
        fields
    };
    let encoded =
        serde_json::to_string(fields).map_err(|e| TelegraphError::Encode(e.to_string()))?;

    let mut params = Params::new();
    token_param(&mut params, access_token);
    params.push("fields", encoded);
    Ok(params)
}

/// Build `revokeAccessToken` parameters
pub fn revoke_access_token(access_token: &str) -> Params {
    let mut params = Params::new();
    token_param(&mut params, access_token);
    params
}

fn page_options(params: &mut Params, options: &PageOptions) {
    params.push_non_empty("author_name", options.author_name.as_deref());
    params.push_non_empty("author_url", options.author_url.as_deref());
    if options.return_content {
        params.push("return_content", "true");
    }
}

/// Build `createPage` parameters
pub fn create_page(
    access_token: &str,
    title: &str,
    content: &[Node],
    options: &PageOptions,
) -> Result<Params> {
    let mut params = Params::new();
    token_param(&mut params, access_token);
    params.push("title", title);
    params.push("content", codec::encode_content(content)?);
    page_options(&mut params, options);
    Ok(params)
}

/// Build `editPage` parameters
pub fn edit_page(
    access_token: &str,
    path: &str,
    title: &str,
    content: &[Node],
    options: &PageOptions,
) -> Result<Params> {
    let mut params = Params::new();
    token_param(&mut params, access_token);
    params.push("path", path);
    params.push("title", title);
    params.push("content", codec::encode_content(content)?);
    page_options(&mut params, options);
    Ok(params)
}

/// Build `getPage` parameters
pub fn get_page(path: &str, return_content: bool) -> Params {
    let mut params = Params::new();
    params.push("path", path);
    if return_content {
        params.push("return_content", "true");
    }
    params
}

/// Build `getPageList` parameters
pub fn get_page_list(access_token: &str, options: &PageListOptions) -> Params {
    let mut params = Params::new();
    token_param(&mut params, access_token);
    if let Some(offset) = options.offset {
        params.push("offset", offset.to_string());
    }
    if let Some(limit) = options.limit {
        params.push("limit", limit.to_string());
    }
    params
}

/// Build `getViews` parameters
///
/// # Errors
///
/// Returns [`TelegraphError::InvalidArgument`] if the query fails
/// [`ViewsQuery::validate`].
pub fn get_views(path: &str, query: &ViewsQuery) -> Result<Params> {
    query.validate()?;

    let mut params = Params::new();
    params.push("path", path);
    if let Some(year) = query.year {
        params.push("year", year.to_string());
    }
    if let Some(month) = query.month {
        params.push("month", month.to_string());
    }
    if let Some(day) = query.day {
        params.push("day", day.to_string());
    }
    if let Some(hour) = query.hour {
        params.push("hour", hour.to_string());
    }
    Ok(params)
}
