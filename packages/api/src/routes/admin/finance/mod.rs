//! Finance ledger routes.
//!
//! Purchases, refunds, and account credits are three append-mostly ledgers.
//! A user's totals (`totalSpent`, `totalRefunded`, `creditBalance`) are
//! never stored; they are summed from the ledgers inside one transaction by
//! the financial-summary endpoint.

use crate::entity::{account_credit, purchase, refund, sea_orm_active_enums::PurchaseStatus};

pub mod create_credit;
pub mod create_refund;
pub mod list_credits;
pub mod list_purchases;
pub mod list_refunds;
pub mod user_financials;

/// Refund bounds: positive and at most the original purchase amount.
pub(crate) fn validate_refund_amount(amount: i64, purchase_amount: i64) -> Result<(), String> {
    if amount <= 0 {
        return Err("Refund amount must be positive".to_string());
    }
    if amount > purchase_amount {
        return Err(format!(
            "Refund amount {} exceeds purchase amount {}",
            amount, purchase_amount
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LedgerTotals {
    pub total_spent: i64,
    pub total_refunded: i64,
    pub credit_balance: i64,
}

/// Sum the three ledgers. Failed purchases do not count toward spend;
/// credits are signed, so debits subtract naturally.
pub(crate) fn summarize_ledgers(
    purchases: &[purchase::Model],
    refunds: &[refund::Model],
    credits: &[account_credit::Model],
) -> LedgerTotals {
    let total_spent = purchases
        .iter()
        .filter(|p| p.status != PurchaseStatus::Failed)
        .map(|p| p.amount)
        .sum();
    let total_refunded = refunds.iter().map(|r| r.amount).sum();
    let credit_balance = credits.iter().map(|c| c.amount).sum();
    LedgerTotals {
        total_spent,
        total_refunded,
        credit_balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::sea_orm_active_enums::{CreditType, RefundReason};

    fn purchase_row(amount: i64, status: PurchaseStatus) -> purchase::Model {
        purchase::Model {
            id: licensure_types::create_id(),
            user_id: "user-1".to_string(),
            course_id: "course-1".to_string(),
            amount,
            currency: "USD".to_string(),
            status,
            stripe_session_id: None,
            stripe_payment_intent_id: None,
            completed_at: None,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    fn refund_row(amount: i64) -> refund::Model {
        refund::Model {
            id: licensure_types::create_id(),
            purchase_id: "purchase-1".to_string(),
            amount,
            reason: RefundReason::RequestedByCustomer,
            notes: None,
            stripe_refund_id: None,
            created_by: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn credit_row(amount: i64) -> account_credit::Model {
        account_credit::Model {
            id: licensure_types::create_id(),
            user_id: "user-1".to_string(),
            amount,
            credit_type: CreditType::Promotional,
            description: None,
            purchase_id: None,
            enrollment_id: None,
            created_by: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn refund_bounds() {
        assert!(validate_refund_amount(1, 100).is_ok());
        assert!(validate_refund_amount(100, 100).is_ok());
        assert!(validate_refund_amount(0, 100).is_err());
        assert!(validate_refund_amount(-5, 100).is_err());
        assert!(validate_refund_amount(101, 100).is_err());
    }

    #[test]
    fn totals_sum_the_three_ledgers() {
        let purchases = vec![
            purchase_row(10_000, PurchaseStatus::Completed),
            purchase_row(5_000, PurchaseStatus::Refunded),
        ];
        let refunds = vec![refund_row(5_000)];
        let credits = vec![credit_row(2_000), credit_row(-500)];

        let totals = summarize_ledgers(&purchases, &refunds, &credits);
        assert_eq!(totals.total_spent, 15_000);
        assert_eq!(totals.total_refunded, 5_000);
        assert_eq!(totals.credit_balance, 1_500);
    }

    #[test]
    fn failed_purchases_do_not_count() {
        let purchases = vec![
            purchase_row(10_000, PurchaseStatus::Completed),
            purchase_row(9_900, PurchaseStatus::Failed),
        ];
        let totals = summarize_ledgers(&purchases, &[], &[]);
        assert_eq!(totals.total_spent, 10_000);
    }

    #[test]
    fn empty_ledgers_are_zero() {
        let totals = summarize_ledgers(&[], &[], &[]);
        assert_eq!(totals.total_spent, 0);
        assert_eq!(totals.total_refunded, 0);
        assert_eq!(totals.credit_balance, 0);
    }
}
