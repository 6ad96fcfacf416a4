use crate::response;
use crate::transport::{UploadFile, Uploader};
use crate::{Result, TelegraphError};
use std::path::Path;
use tracing::{debug, info};

use super::TelegraphClient;

impl<T: Uploader> TelegraphClient<T> {
    /// Upload files and return their server paths, in order
    ///
    /// Paths are relative to the site URL (e.g. `/file/6a5b15e7980a4d1e.png`);
    /// use [`ClientConfig::page_url`](crate::ClientConfig::page_url) for a
    /// full link.
    ///
    /// # Errors
    ///
    /// - [`TelegraphError::InvalidArgument`] - `files` is empty
    /// - [`TelegraphError::Service`] - The server rejected a file (message lower-cased)
    /// - [`TelegraphError::EnvelopeParse`] - The response could not be parsed
    pub async fn upload(&self, files: &[UploadFile]) -> Result<Vec<String>> {
        if files.is_empty() {
            return Err(TelegraphError::InvalidArgument(
                "no files to upload".to_string(),
            ));
        }

        let body = self.transport.upload_files(files).await?;
        let paths = response::parse_upload_response(&body)?;
        info!("Uploaded {} files", paths.len());
        Ok(paths)
    }

    /// Read files from disk and upload them
    pub async fn upload_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<String>> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            debug!("Reading {}", path.as_ref().display());
            files.push(UploadFile::from_path(path).await?);
        }
        self.upload(&files).await
    }
}
