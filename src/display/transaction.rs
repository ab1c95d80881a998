//! Transaction listing for the data explorer

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Row")]
    row: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    kind: String,
}

/// Format transactions as a table, in the order given
pub fn format_transactions(transactions: &[&Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            row: txn.row,
            date: txn.date.format("%Y-%m-%d").to_string(),
            category: match txn.category {
                Some(category) => category.to_string(),
                None => format!("{} (unmatched)", txn.label),
            },
            amount: txn.amount.format_with_symbol(symbol),
            kind: txn.kind.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());
    table.to_string()
}
