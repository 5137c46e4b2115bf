use crate::alert::AlertId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("alert {0} appears more than once in the seed set")]
    DuplicateId(AlertId),
    #[error("no alert with id {0}")]
    NotFound(AlertId),
}
