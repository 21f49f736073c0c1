use std::sync::PoisonError;

use thiserror::Error;

use crate::PropertyError;

/// Errors from the CoolProp backend.
#[derive(Debug, Error)]
pub enum CoolPropError {
    /// The underlying CoolProp call failed.
    #[error(transparent)]
    Rfluids(#[from] rfluids::error::Error),

    /// A previous panic poisoned a state mutex.
    #[error("CoolProp state mutex is poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(err: CoolPropError) -> Self {
        Self::Calculation(err.to_string())
    }
}
