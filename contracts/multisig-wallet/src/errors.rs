use soroban_sdk::contracterror;

/// Errors returned by every wallet entrypoint.
///
/// The discriminant is the stable identifier surfaced to callers
/// (`Error(Contract, #N)`); it must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    /// `initialize` was called on an initialized wallet
    AlreadyInitialized = 1,
    /// The wallet has not been initialized yet
    NotInitialized = 2,
    /// Caller is not a member of the signer set
    NotSigner = 3,
    /// Amount exceeds the caller's deposited balance
    InsufficientBalance = 4,
    /// Caller has nothing to withdraw
    NoBalance = 5,
    /// Request has already been executed
    AlreadyExecuted = 6,
    /// Request has fewer signatures than the current threshold
    NotFullySigned = 7,
    /// Signer already signed this request
    DuplicateSignature = 8,
    /// No request exists with this id
    UnknownRequest = 9,
    /// Threshold is already 1
    ThresholdAtFloor = 10,
    /// Threshold would exceed the size of the signer set
    ThresholdAtCapacity = 11,
    /// Signer has no signature on this request to revoke
    SignatureNotFound = 12,
    /// Nested call into a locked operation
    Reentrancy = 13,
    /// Amount must be greater than zero
    InvalidAmount = 14,
    /// Target address cannot receive this request
    InvalidTarget = 15,
    /// The owner is a permanent signer
    OwnerNotRemovable = 16,
    /// Target of a removal is not a signer
    UnknownSigner = 17,
    /// Arithmetic overflow
    Overflow = 18,
}

/// Coarse classification of [`WalletError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Caller lacks the right or the funds
    Authorization,
    /// Transition is invalid given the current state
    State,
    /// Malformed request input
    Value,
}

impl WalletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::NotSigner | WalletError::InsufficientBalance | WalletError::NoBalance => {
                ErrorKind::Authorization
            }
            WalletError::AlreadyInitialized
            | WalletError::NotInitialized
            | WalletError::AlreadyExecuted
            | WalletError::NotFullySigned
            | WalletError::DuplicateSignature
            | WalletError::UnknownRequest
            | WalletError::ThresholdAtFloor
            | WalletError::ThresholdAtCapacity
            | WalletError::SignatureNotFound
            | WalletError::Reentrancy => ErrorKind::State,
            WalletError::InvalidAmount
            | WalletError::InvalidTarget
            | WalletError::OwnerNotRemovable
            | WalletError::UnknownSigner
            | WalletError::Overflow => ErrorKind::Value,
        }
    }

    /// Human-readable reason for the failure.
    pub fn reason(&self) -> &'static str {
        match self {
            WalletError::AlreadyInitialized => "wallet is already initialized",
            WalletError::NotInitialized => "wallet is not initialized",
            WalletError::NotSigner => "caller is not a signer",
            WalletError::InsufficientBalance => "amount exceeds deposited balance",
            WalletError::NoBalance => "caller has no balance",
            WalletError::AlreadyExecuted => "request was already executed",
            WalletError::NotFullySigned => "request does not have enough signatures",
            WalletError::DuplicateSignature => "signer already signed this request",
            WalletError::UnknownRequest => "request does not exist",
            WalletError::ThresholdAtFloor => "threshold cannot go below one",
            WalletError::ThresholdAtCapacity => "threshold cannot exceed the number of signers",
            WalletError::SignatureNotFound => "signer has not signed this request",
            WalletError::Reentrancy => "reentrant call rejected",
            WalletError::InvalidAmount => "amount must be positive",
            WalletError::InvalidTarget => "target cannot be the wallet itself",
            WalletError::OwnerNotRemovable => "owner cannot be removed",
            WalletError::UnknownSigner => "target is not a signer",
            WalletError::Overflow => "arithmetic overflow",
        }
    }
}
