#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups linkdrop errors by domain for monitoring and off-chain display.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `LinkdropError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Public-key parsing errors (codes 200-299).
    KeyEncoding,
    /// Escrow ledger and capability errors (codes 300-399).
    Escrow,
    /// Account identifier errors (codes 400-499).
    Account,
    /// Pending account-creation errors (codes 500-599).
    Creation,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  LinkdropError
/// @notice Canonical error enum returned by every linkdrop entry point.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : KeyEncoding
///   300 - 399 : Escrow
///   400 - 499 : Account
///   500 - 599 : Creation
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LinkdropError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    /// The access-key allowance passed to `initialize` is negative.
    InvalidAllowance = 3,

    // --- Authorization (100-199) ---
    /// The call was not authorized by a live capability, or a callback did
    /// not come from the account factory it was dispatched to.
    Unauthorized = 100,

    /// Caller is not the admin.
    NotAdmin = 101,

    // --- KeyEncoding (200-299) ---
    /// Key text is malformed: wrong length, bad base58, or wrong byte length.
    InvalidKeyEncoding = 200,

    /// Key text carries an algorithm prefix other than `ed25519:`.
    UnsupportedKeyAlgorithm = 201,

    // --- Escrow (300-399) ---
    /// Deposit does not exceed the access-key allowance.
    InsufficientDeposit = 300,

    /// No escrowed balance exists for the key (never funded or already claimed).
    UnknownKey = 301,

    /// No live capability exists for the key.
    CapabilityNotFound = 302,

    /// Amount argument must be strictly positive (> 0).
    AmountMustBePositive = 303,

    /// There are no accrued allowance fees to collect.
    NoFeesAccrued = 304,

    // --- Account (400-499) ---
    /// Account identifier failed validation.
    InvalidAccountId = 400,

    // --- Creation (500-599) ---
    /// No pending account creation exists for the request id, or it belongs
    /// to the other creation path.
    PendingCreationNotFound = 500,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every LinkdropError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for LinkdropError {
    fn category(&self) -> ErrorCategory {
        match self {
            LinkdropError::NotInitialized
            | LinkdropError::AlreadyInitialized
            | LinkdropError::InvalidAllowance => ErrorCategory::Initialization,

            LinkdropError::Unauthorized | LinkdropError::NotAdmin => ErrorCategory::Authorization,

            LinkdropError::InvalidKeyEncoding | LinkdropError::UnsupportedKeyAlgorithm => {
                ErrorCategory::KeyEncoding
            }

            LinkdropError::InsufficientDeposit
            | LinkdropError::UnknownKey
            | LinkdropError::CapabilityNotFound
            | LinkdropError::AmountMustBePositive
            | LinkdropError::NoFeesAccrued => ErrorCategory::Escrow,

            LinkdropError::InvalidAccountId => ErrorCategory::Account,

            LinkdropError::PendingCreationNotFound => ErrorCategory::Creation,

            LinkdropError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            LinkdropError::NotInitialized => "Contract has not been initialized",
            LinkdropError::AlreadyInitialized => "Contract has already been initialized",
            LinkdropError::InvalidAllowance => "Access-key allowance must not be negative",
            LinkdropError::Unauthorized => "Call is not authorized for this entry point",
            LinkdropError::NotAdmin => "Caller is not the admin",
            LinkdropError::InvalidKeyEncoding => "Public key is not a well-formed ed25519 key",
            LinkdropError::UnsupportedKeyAlgorithm => "Public key algorithm is not supported",
            LinkdropError::InsufficientDeposit => {
                "Deposit must be greater than the access-key allowance"
            }
            LinkdropError::UnknownKey => "No escrowed balance for the given key",
            LinkdropError::CapabilityNotFound => "No live capability for the given key",
            LinkdropError::AmountMustBePositive => "Amount must be strictly positive (> 0)",
            LinkdropError::NoFeesAccrued => "No accrued fees to collect",
            LinkdropError::InvalidAccountId => "Account id is not valid",
            LinkdropError::PendingCreationNotFound => {
                "No pending account creation for the request id"
            }
            LinkdropError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
