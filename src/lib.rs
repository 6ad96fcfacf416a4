#![doc = include_str!("../README.md")]

mod client;
/// Node codec: JSON wire shape of content nodes
pub mod codec;
/// Telegraph method names and request parameter builders
pub mod commands;
mod config;
mod error;
mod node;
/// Response envelope decoding
pub mod response;
/// HTTP transport and upload collaborators
pub mod transport;
mod types;

pub use client::TelegraphClient;
pub use codec::{decode_nodes, encode_nodes};
pub use commands::{
    CreateAccountOptions, EditAccountOptions, PageListOptions, PageOptions, ViewsQuery,
};
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_SITE_URL, DEFAULT_UPLOAD_URL};
pub use error::{Result, TelegraphError};
pub use node::{Element, Node};
pub use response::{Envelope, decode_envelope, decode_envelope_with};
pub use transport::{HttpTransport, Params, Transport, UploadFile, Uploader};
pub use types::{Account, AccountField, Page, PageList, PageViews};
