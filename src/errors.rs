//! Error types for the shielded pool program.
//!
//! # Error Code Reference
//!
//! - 0: NullifierAlreadyUsed
//! - 1: CreateNullifierFailed
//! - 2: UnknownRoot
//! - 3: InvalidProof
//! - 4: DepositLimitExceeded
//! - 5: InsufficientFunds
//! - 6: TreeFull
//! - 7: Unauthorized
//! - 8: TransferFailed
//! - 9: ArithmeticOverflow
//! - 10: FieldOverflow
//! - 100-102: Groth16 group-op failures

use pinocchio::program_error::ProgramError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShieldedPoolError {
    /// Either nullifier PDA already exists (non-zero lamports).
    NullifierAlreadyUsed,
    /// PDA creation failed for a reason other than already-exists.
    CreateNullifierFailed,
    /// Declared root absent from `root_history` (or all-zero).
    UnknownRoot,
    /// Pairing check returned a value other than the canonical "one".
    InvalidProof,
    /// `net_amount > max_deposit_amount`.
    DepositLimitExceeded,
    /// Signer balance < deposit or vault balance < withdrawal.
    InsufficientFunds,
    /// `next_index >= 2^26`.
    TreeFull,
    /// `update_config` signer does not match `config.authority`.
    Unauthorized,
    /// Underlying transfer precompile failed.
    TransferFailed,
    /// Saturating fee math detected overflow.
    ArithmeticOverflow,
    /// A decoded scalar was not strictly less than the BN254 scalar field modulus.
    FieldOverflow,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Groth16Error {
    InvalidPublicInputsLength,
    PublicInputGreaterThanFieldSize,
    G1AddFailed,
    G1MulFailed,
    PairingFailed,
}

impl From<ShieldedPoolError> for ProgramError {
    fn from(error: ShieldedPoolError) -> Self {
        match error {
            ShieldedPoolError::NullifierAlreadyUsed => ProgramError::Custom(0),
            ShieldedPoolError::CreateNullifierFailed => ProgramError::Custom(1),
            ShieldedPoolError::UnknownRoot => ProgramError::Custom(2),
            ShieldedPoolError::InvalidProof => ProgramError::Custom(3),
            ShieldedPoolError::DepositLimitExceeded => ProgramError::Custom(4),
            ShieldedPoolError::InsufficientFunds => ProgramError::Custom(5),
            ShieldedPoolError::TreeFull => ProgramError::Custom(6),
            ShieldedPoolError::Unauthorized => ProgramError::Custom(7),
            ShieldedPoolError::TransferFailed => ProgramError::Custom(8),
            ShieldedPoolError::ArithmeticOverflow => ProgramError::Custom(9),
            ShieldedPoolError::FieldOverflow => ProgramError::Custom(10),
        }
    }
}

impl From<Groth16Error> for ProgramError {
    fn from(error: Groth16Error) -> Self {
        match error {
            Groth16Error::InvalidPublicInputsLength => ProgramError::Custom(100),
            Groth16Error::PublicInputGreaterThanFieldSize => ProgramError::Custom(101),
            Groth16Error::G1AddFailed => ProgramError::Custom(102),
            Groth16Error::G1MulFailed => ProgramError::Custom(103),
            Groth16Error::PairingFailed => ProgramError::Custom(104),
        }
    }
}

impl From<Groth16Error> for ShieldedPoolError {
    fn from(_: Groth16Error) -> Self {
        ShieldedPoolError::InvalidProof
    }
}
