use crate::commands::{self, PageListOptions, PageOptions, ViewsQuery, methods};
use crate::node::Node;
use crate::transport::Transport;
use crate::types::{Page, PageList, PageViews};
use crate::Result;
use tracing::{debug, info};

use super::TelegraphClient;

impl<T: Transport> TelegraphClient<T> {
    /// Create a new page
    ///
    /// # Arguments
    ///
    /// * `title` - Page title (1-256 characters)
    /// * `content` - Page body
    /// * `options` - Author overrides and whether to echo the content back
    ///
    /// # Errors
    ///
    /// - [`TelegraphError::MissingAccessToken`](crate::TelegraphError::MissingAccessToken) - No access token is set
    /// - [`TelegraphError::Service`](crate::TelegraphError::Service) - The server rejected the page
    /// - [`TelegraphError::Decode`](crate::TelegraphError::Decode) - The returned page could not be decoded
    pub async fn create_page(
        &self,
        title: &str,
        content: &[Node],
        options: &PageOptions,
    ) -> Result<Option<Page>> {
        let params = commands::create_page(self.require_token()?, title, content, options)?;
        let page: Option<Page> = self.call(methods::CREATE_PAGE, params).await?;
        if let Some(page) = &page {
            info!("Created page {}", page.path);
        }
        Ok(page)
    }

    /// Replace the title and content of an existing page
    pub async fn edit_page(
        &self,
        path: &str,
        title: &str,
        content: &[Node],
        options: &PageOptions,
    ) -> Result<Option<Page>> {
        let params = commands::edit_page(self.require_token()?, path, title, content, options)?;
        let page: Option<Page> = self.call(methods::EDIT_PAGE, params).await?;
        if page.is_some() {
            info!("Edited page {}", path);
        }
        Ok(page)
    }

    /// Get a page, optionally with its content
    ///
    /// Does not need an access token.
    pub async fn get_page(&self, path: &str, return_content: bool) -> Result<Option<Page>> {
        let params = commands::get_page(path, return_content);
        self.call(methods::GET_PAGE, params).await
    }

    /// List pages belonging to the account, newest first
    pub async fn get_page_list(&self, options: &PageListOptions) -> Result<Option<PageList>> {
        let params = commands::get_page_list(self.require_token()?, options);
        let list: Option<PageList> = self.call(methods::GET_PAGE_LIST, params).await?;
        if let Some(list) = &list {
            debug!("Got {} of {} pages", list.pages.len(), list.total_count);
        }
        Ok(list)
    }

    /// Get the number of views of a page for a period
    ///
    /// Does not need an access token.
    ///
    /// # Errors
    ///
    /// - [`TelegraphError::InvalidArgument`](crate::TelegraphError::InvalidArgument) - The query is incomplete or out of range
    /// - [`TelegraphError::Service`](crate::TelegraphError::Service) - The server rejected the request
    pub async fn get_views(&self, path: &str, query: &ViewsQuery) -> Result<Option<PageViews>> {
        let params = commands::get_views(path, query)?;
        self.call(methods::GET_VIEWS, params).await
    }
}
