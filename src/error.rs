use thiserror::Error;

/// Startup failures of the client-only build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no element with id `{0}` in the host document")]
    MissingContainer(String),
    #[error("mount container `{0}` is not an HTML element")]
    NotHtmlElement(String),
}
