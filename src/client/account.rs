use crate::commands::{self, CreateAccountOptions, EditAccountOptions, methods};
use crate::transport::Transport;
use crate::types::{Account, AccountField};
use crate::Result;
use tracing::info;

use super::TelegraphClient;

impl<T: Transport> TelegraphClient<T> {
    /// Create a new Telegraph account
    ///
    /// The returned account carries a fresh `access_token`. The client's
    /// own token is left untouched; call
    /// [`set_access_token`](TelegraphClient::set_access_token) to use it.
    ///
    /// # Errors
    ///
    /// - [`TelegraphError::Service`](crate::TelegraphError::Service) - The server rejected the request
    /// - [`TelegraphError::Http`](crate::TelegraphError::Http) - The request could not be sent
    pub async fn create_account(
        &self,
        short_name: &str,
        options: &CreateAccountOptions,
    ) -> Result<Option<Account>> {
        let params = commands::create_account(short_name, options);
        let account: Option<Account> = self.call(methods::CREATE_ACCOUNT, params).await?;
        if account.is_some() {
            info!("Created account {}", short_name);
        }
        Ok(account)
    }

    /// Update account information
    ///
    /// Only the fields set in `options` are changed.
    pub async fn edit_account_info(&self, options: &EditAccountOptions) -> Result<Option<Account>> {
        let params = commands::edit_account_info(self.require_token()?, options);
        self.call(methods::EDIT_ACCOUNT_INFO, params).await
    }

    /// Get account information
    ///
    /// An empty `fields` slice requests [`AccountField::DEFAULT`].
    pub async fn get_account_info(&self, fields: &[AccountField]) -> Result<Option<Account>> {
        let params = commands::get_account_info(self.require_token()?, fields)?;
        self.call(methods::GET_ACCOUNT_INFO, params).await
    }

    /// Revoke the current access token and generate a new one
    ///
    /// The new token is in the returned account's `access_token`; the
    /// client keeps sending the old one until it is replaced.
    pub async fn revoke_access_token(&self) -> Result<Option<Account>> {
        let params = commands::revoke_access_token(self.require_token()?);
        self.call(methods::REVOKE_ACCESS_TOKEN, params).await
    }
}
