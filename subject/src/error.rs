use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The last owning handle was dropped, so no strong handle can be produced
    #[error("observer has expired")]
    Expired,
}
