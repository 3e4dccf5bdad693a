//! Claim engine error types.
use alloy::primitives::Bytes;
use thiserror::Error;

mod auth;
pub use auth::AuthError;

mod config;
pub use config::ConfigError;

mod merkle;
pub use merkle::MerkleError;

mod mint;
pub use mint::MintError;

mod registry;
pub use registry::RegistryError;

mod settlement;
pub use settlement::SettlementError;

mod transfer;
pub use transfer::TransferError;

/// The overarching error type returned by the claim engine.
///
/// Every variant aborts the attempted operation without any state change.
#[derive(Debug, Error)]
pub enum ClaimError {
    /// Errors related to privileged operations.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// Errors related to configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Errors related to the Merkle root lifecycle.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Errors related to claim validation.
    #[error(transparent)]
    Settlement(#[from] SettlementError),
    /// Errors returned by the reward collaborator.
    #[error(transparent)]
    Mint(#[from] MintError),
}

/// Broad classes of [`ClaimError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller lacks the required privilege.
    Authorization,
    /// An argument is not a valid configuration value.
    Configuration,
    /// The registry is in the wrong state for the operation.
    RegistryState,
    /// The claim was rejected. Expected and user-facing.
    ClaimValidation,
    /// A collaborator failed.
    Collaborator,
}

impl ClaimError {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(_) => ErrorKind::Authorization,
            Self::Config(_) => ErrorKind::Configuration,
            Self::Registry(_) => ErrorKind::RegistryState,
            Self::Settlement(_) => ErrorKind::ClaimValidation,
            Self::Mint(_) => ErrorKind::Collaborator,
        }
    }

    /// Returns the Solidity revert data for this error.
    pub fn abi_encode(&self) -> Bytes {
        self.revert_data().into()
    }

    /// Returns the inner [`SettlementError`], if this is a claim validation error.
    pub fn as_settlement(&self) -> Option<&SettlementError> {
        match self {
            Self::Settlement(err) => Some(err),
            _ => None,
        }
    }
}

/// Encodes an error as the custom-error revert data of the claim contract.
pub trait RevertData {
    /// Returns `selector || abi.encode(args)` for the matching Solidity error.
    fn revert_data(&self) -> Vec<u8>;
}

impl RevertData for ClaimError {
    fn revert_data(&self) -> Vec<u8> {
        match self {
            Self::Auth(inner) => inner.revert_data(),
            Self::Config(inner) => inner.revert_data(),
            Self::Registry(inner) => inner.revert_data(),
            Self::Settlement(inner) => inner.revert_data(),
            Self::Mint(inner) => inner.revert_data(),
        }
    }
}

/// A helper trait to convert a result into one carrying revert data.
pub trait ToRevertResult<Ok>: Sized {
    /// Converts the error variant into its revert data.
    fn to_revert_result(self) -> Result<Ok, Bytes>;
}

macro_rules! impl_error_helpers {
    ($err:ty) => {
        impl<Ok> ToRevertResult<Ok> for Result<Ok, $err> {
            fn to_revert_result(self) -> Result<Ok, Bytes> {
                self.map_err(|err| err.revert_data().into())
            }
        }
    };
}

impl_error_helpers!(ClaimError);
impl_error_helpers!(AuthError);
impl_error_helpers!(ConfigError);
impl_error_helpers!(RegistryError);
impl_error_helpers!(SettlementError);
impl_error_helpers!(MintError);
