use chrono::{Duration, Local};
use colored::Colorize;

use crate::db::{get_connection, init_db};
use crate::error::{PennyError, Result};
use crate::models::{NewTransaction, PaymentMethod, TransactionType};
use crate::settings::db_path;
use crate::store;

struct DemoTxn {
    days_ago: i64,
    time: &'static str,
    description: &'static str,
    amount: f64,
    transaction_type: TransactionType,
    payment_method: PaymentMethod,
    category: &'static str,
}

const SAMPLE: &[DemoTxn] = &[
    DemoTxn { days_ago: 45, time: "09:00", description: "Monthly salary", amount: 2800.00, transaction_type: TransactionType::Income, payment_method: PaymentMethod::BankTransfer, category: "Bills" },
    DemoTxn { days_ago: 44, time: "08:12", description: "RIDENOW", amount: 5.15, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::CreditCard, category: "Transportation" },
    DemoTxn { days_ago: 41, time: "13:05", description: "GREEN GROCER", amount: 38.70, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::CreditCard, category: "Food" },
    DemoTxn { days_ago: 38, time: "19:40", description: "CINEMA CITY", amount: 15.50, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::Cash, category: "Entertainment" },
    DemoTxn { days_ago: 32, time: "10:00", description: "Electricity bill", amount: 64.20, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::BankTransfer, category: "Bills" },
    DemoTxn { days_ago: 30, time: "16:25", description: "CORNER BAKERY", amount: 3.20, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::Cash, category: "Food" },
    DemoTxn { days_ago: 21, time: "11:45", description: "Pharmacy", amount: 12.90, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::CreditCard, category: "Health" },
    DemoTxn { days_ago: 15, time: "09:00", description: "Freelance invoice", amount: 450.00, transaction_type: TransactionType::Income, payment_method: PaymentMethod::BankTransfer, category: "Bills" },
    DemoTxn { days_ago: 12, time: "14:42", description: "Textbooks", amount: 59.99, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::CreditCard, category: "Education" },
    DemoTxn { days_ago: 8, time: "18:30", description: "New jacket", amount: 89.00, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::CreditCard, category: "Fashion" },
    DemoTxn { days_ago: 4, time: "12:10", description: "Cash withdrawal lunch", amount: 40.00, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::AtmWithdrawal, category: "Food" },
    DemoTxn { days_ago: 1, time: "20:05", description: "Streaming subscription", amount: 11.99, transaction_type: TransactionType::Expense, payment_method: PaymentMethod::CreditCard, category: "Entertainment" },
];

pub fn run() -> Result<()> {
    let conn = get_connection(&db_path())?;
    init_db(&conn)?;

    let today = Local::now().date_naive();
    let mut inserted = 0usize;
    for sample in SAMPLE {
        let category = store::find_category_by_name(&conn, sample.category)?
            .ok_or_else(|| PennyError::UnknownCategory(sample.category.to_string()))?;
        store::add_transaction(
            &conn,
            &NewTransaction {
                amount: sample.amount,
                description: sample.description.to_string(),
                category_id: category.id,
                transaction_type: sample.transaction_type,
                payment_method: sample.payment_method,
                date: today - Duration::days(sample.days_ago),
                time: sample.time.to_string(),
            },
        )?;
        inserted += 1;
    }

    println!("{} {inserted} sample transactions", "Loaded".green());
    println!("Try `penny list`, `penny stats --from {}`, or `penny list --search grocer`.",
        (today - Duration::days(30)).format("%Y-%m-%d"));
    Ok(())
}
