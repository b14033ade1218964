#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ErrorCategory, ErrorExt, LinkdropError};
    use std::vec::Vec;

    fn all_variants() -> Vec<LinkdropError> {
        std::vec![
            LinkdropError::NotInitialized,
            LinkdropError::AlreadyInitialized,
            LinkdropError::InvalidAllowance,
            LinkdropError::Unauthorized,
            LinkdropError::NotAdmin,
            LinkdropError::InvalidKeyEncoding,
            LinkdropError::UnsupportedKeyAlgorithm,
            LinkdropError::InsufficientDeposit,
            LinkdropError::UnknownKey,
            LinkdropError::CapabilityNotFound,
            LinkdropError::AmountMustBePositive,
            LinkdropError::NoFeesAccrued,
            LinkdropError::InvalidAccountId,
            LinkdropError::PendingCreationNotFound,
            LinkdropError::Overflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(LinkdropError::NotInitialized as u32, 1);
        assert_eq!(LinkdropError::AlreadyInitialized as u32, 2);
        assert_eq!(LinkdropError::InvalidAllowance as u32, 3);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(LinkdropError::Unauthorized as u32, 100);
        assert_eq!(LinkdropError::NotAdmin as u32, 101);
    }

    #[test]
    fn test_codes_key_encoding() {
        assert_eq!(LinkdropError::InvalidKeyEncoding as u32, 200);
        assert_eq!(LinkdropError::UnsupportedKeyAlgorithm as u32, 201);
    }

    #[test]
    fn test_codes_escrow() {
        assert_eq!(LinkdropError::InsufficientDeposit as u32, 300);
        assert_eq!(LinkdropError::UnknownKey as u32, 301);
        assert_eq!(LinkdropError::CapabilityNotFound as u32, 302);
        assert_eq!(LinkdropError::AmountMustBePositive as u32, 303);
        assert_eq!(LinkdropError::NoFeesAccrued as u32, 304);
    }

    #[test]
    fn test_codes_account_creation_arithmetic() {
        assert_eq!(LinkdropError::InvalidAccountId as u32, 400);
        assert_eq!(LinkdropError::PendingCreationNotFound as u32, 500);
        assert_eq!(LinkdropError::Overflow as u32, 700);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: Vec<u32> = all_variants().iter().map(|e| *e as u32).collect();
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_matches_code_range() {
        for err in all_variants() {
            let expected = match err as u32 {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::KeyEncoding,
                300..=399 => ErrorCategory::Escrow,
                400..=499 => ErrorCategory::Account,
                500..=599 => ErrorCategory::Creation,
                700..=799 => ErrorCategory::Arithmetic,
                other => panic!("code {} outside every category", other),
            };
            assert_eq!(err.category(), expected, "{:?}", err);
        }
    }

    #[test]
    fn test_category_spot_checks() {
        assert_eq!(
            LinkdropError::Unauthorized.category(),
            ErrorCategory::Authorization
        );
        assert_eq!(LinkdropError::UnknownKey.category(), ErrorCategory::Escrow);
        assert_eq!(
            LinkdropError::UnsupportedKeyAlgorithm.category(),
            ErrorCategory::KeyEncoding
        );
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty_and_distinct() {
        let variants = all_variants();
        for err in variants.iter() {
            assert!(!err.description().is_empty(), "{:?}", err);
        }
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(a.description(), b.description());
            }
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(LinkdropError::UnknownKey, LinkdropError::UnknownKey);
        assert_ne!(LinkdropError::UnknownKey, LinkdropError::Unauthorized);
    }

    // --- Result integration tests (mirrors real contract call sites) ---

    fn mock_deposit(amount: i128, allowance: i128) -> Result<i128, LinkdropError> {
        if amount <= allowance {
            return Err(LinkdropError::InsufficientDeposit);
        }
        amount.checked_sub(allowance).ok_or(LinkdropError::Overflow)
    }

    fn mock_balance(present: Option<i128>) -> Result<i128, LinkdropError> {
        present.ok_or(LinkdropError::UnknownKey)
    }

    #[test]
    fn test_insufficient_deposit() {
        assert_eq!(mock_deposit(1, 1), Err(LinkdropError::InsufficientDeposit));
        assert_eq!(mock_deposit(10, 1), Ok(9));
    }

    #[test]
    fn test_unknown_key_is_never_zero() {
        assert_eq!(mock_balance(None), Err(LinkdropError::UnknownKey));
        assert_eq!(mock_balance(Some(0)), Ok(0));
    }
}
