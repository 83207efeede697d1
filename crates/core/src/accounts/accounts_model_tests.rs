//! Tests for account domain models, slug derivation, and connection serde.

#[cfg(test)]
mod tests {
    use crate::accounts::{slugify, AccountConnection, ConnectionKind, NewAccount};

    // ==================== Slug Derivation Tests ====================

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("Chase Checking"), "chase-checking");
        assert_eq!(slugify("CHASE CHECKING"), "chase-checking");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Bank of America -- Savings"), "bank-of-america-savings");
        assert_eq!(slugify("  Fidelity  (401k)  "), "fidelity-401k");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("--cash--"), "cash");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_differently_cased_names_collide() {
        assert_eq!(slugify("Revolut EUR"), slugify("revolut eur"));
    }

    // ==================== Effective Slug Tests ====================

    fn manual_account(name: &str, slug: Option<&str>) -> NewAccount {
        NewAccount {
            name: name.to_string(),
            connection: AccountConnection::Manual,
            slug: slug.map(String::from),
            is_active: true,
        }
    }

    #[test]
    fn test_manual_account_derives_slug_from_name() {
        assert_eq!(
            manual_account("Chase Checking", None).effective_slug(),
            Some("chase-checking".to_string())
        );
    }

    #[test]
    fn test_explicit_slug_wins_over_derived() {
        assert_eq!(
            manual_account("Chase Checking", Some("chase")).effective_slug(),
            Some("chase".to_string())
        );
    }

    #[test]
    fn test_wallet_account_never_carries_slug() {
        let new_account = NewAccount {
            name: "Main wallet".to_string(),
            connection: AccountConnection::Wallet {
                address: "0xabc".to_string(),
                chains: vec!["eth".to_string()],
                perp_venues: vec![],
            },
            slug: Some("main-wallet".to_string()),
            is_active: true,
        };
        assert_eq!(new_account.effective_slug(), None);
    }

    // ==================== Connection Serde Tests ====================

    #[test]
    fn test_connection_tagged_serialization() {
        let wallet = AccountConnection::Wallet {
            address: "0xabc".to_string(),
            chains: vec!["eth".to_string(), "arb".to_string()],
            perp_venues: vec!["hyperliquid".to_string()],
        };
        let json = serde_json::to_value(&wallet).unwrap();
        assert_eq!(json["type"], "wallet");
        assert_eq!(json["perpVenues"][0], "hyperliquid");

        let manual = serde_json::to_value(AccountConnection::Manual).unwrap();
        assert_eq!(manual["type"], "manual");
    }

    #[test]
    fn test_connection_roundtrip_preserves_kind() {
        let exchange = AccountConnection::Exchange {
            exchange_id: "kraken".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
        };
        let json = serde_json::to_string(&exchange).unwrap();
        let back: AccountConnection = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), ConnectionKind::Exchange);
        assert_eq!(back, exchange);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_empty_name_rejected() {
        assert!(manual_account("   ", None).validate().is_err());
    }

    #[test]
    fn test_wallet_requires_address() {
        let new_account = NewAccount {
            name: "wallet".to_string(),
            connection: AccountConnection::Wallet {
                address: "".to_string(),
                chains: vec![],
                perp_venues: vec![],
            },
            slug: None,
            is_active: true,
        };
        assert!(new_account.validate().is_err());
    }
}
