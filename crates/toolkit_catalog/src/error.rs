use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("item id must not be empty (item titled `{0}`)")]
    EmptyId(String),

    #[error("duplicate item id `{0}`")]
    DuplicateId(String),

    #[error("detailed description for unknown item `{0}`")]
    UnknownDetailId(String),

    #[error("code examples for unknown item `{0}`")]
    UnknownCodeExampleId(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("an email address is required to sign in")]
    BlankEmail,
}
