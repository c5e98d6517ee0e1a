use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "expense" => Some(Self::Expense),
            "income" => Some(Self::Income),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    AtmWithdrawal,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::BankTransfer => "bank_transfer",
            Self::AtmWithdrawal => "atm_withdrawal",
            Self::Cash => "cash",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "credit_card" => Some(Self::CreditCard),
            "bank_transfer" => Some(Self::BankTransfer),
            "atm_withdrawal" => Some(Self::AtmWithdrawal),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }
}

/// A persisted transaction. `amount` is always positive; direction is
/// carried by `transaction_type`.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    pub description: String,
    pub category_id: i64,
    pub transaction_type: TransactionType,
    pub payment_method: PaymentMethod,
    pub date: NaiveDate,
    pub time: String, // HH:MM
    pub created_at: String,
}

/// Field set for inserts and full-record updates. `created_at` is owned by
/// the store and set once at insert.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
    pub category_id: i64,
    pub transaction_type: TransactionType,
    pub payment_method: PaymentMethod,
    pub date: NaiveDate,
    pub time: String,
}

/// Best-effort output of the free-text parser. Absent fields mean the
/// parser found nothing, which is distinct from an empty user entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTransaction {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub time: Option<String>, // HH:MM, hour zero-padded
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
}

/// Active filter set. Unset fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub search_query: String,
    pub category_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty()
            && self.category_id.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// Derived statistics, recomputed from the current list and filter set.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub income: f64,
    pub expenses: f64,
    pub net_total: f64,
    pub total_count: usize,
    pub filtered_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_roundtrip() {
        for t in [TransactionType::Expense, TransactionType::Income] {
            assert_eq!(TransactionType::parse(t.as_str()), Some(t));
        }
        assert_eq!(TransactionType::parse("transfer"), None);
    }

    #[test]
    fn test_payment_method_roundtrip() {
        for m in [
            PaymentMethod::CreditCard,
            PaymentMethod::BankTransfer,
            PaymentMethod::AtmWithdrawal,
            PaymentMethod::Cash,
        ] {
            assert_eq!(PaymentMethod::parse(m.as_str()), Some(m));
        }
        assert_eq!(PaymentMethod::parse("cheque"), None);
    }

    #[test]
    fn test_empty_filters() {
        let f = Filters::default();
        assert!(f.is_empty());
        let f = Filters {
            search_query: "coffee".to_string(),
            ..Filters::default()
        };
        assert!(!f.is_empty());
    }
}
