//! Transaction aggregation for the finance dashboard.
//!
//! Every function here is pure and recomputes its result from scratch, so
//! callers should rerun them whenever the transactions or the selected period
//! change. Amounts are summed as plain `f64` with no rounding.

use std::collections::BTreeMap;

use serde::Serialize;
use time::Month;

use crate::{
    Error,
    finance::core::{Category, Transaction, TransactionKind},
};

/// The currency every amount is shown in.
pub const CURRENCY: &str = "MZN";

/// A calendar month in a specific year.
///
/// Use [Period::new] to create a period so that the month is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    /// The month, 1 for January to 12 for December.
    pub month: u8,
    /// The year, e.g. 2024.
    pub year: i32,
}

impl Period {
    /// Create a period for `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPeriod] if `month` is not between 1 and 12.
    pub fn new(month: u8, year: i32) -> Result<Self, Error> {
        Month::try_from(month).map_err(|_| Error::InvalidPeriod(month))?;

        Ok(Self { month, year })
    }

    fn contains(&self, transaction: &Transaction) -> bool {
        u8::from(transaction.date.month()) == self.month && transaction.date.year() == self.year
    }
}

/// The totals shown on the dashboard summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Income minus expenses.
    pub balance: f64,
    /// The sum of all income.
    pub income: f64,
    /// The sum of all expenses.
    pub expense: f64,
    /// The currency of the amounts, always [CURRENCY].
    pub currency: &'static str,
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category the expenses belong to.
    pub category: Category,
    /// The sum of the expenses in the category.
    pub total: f64,
}

/// Income and expenses for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// The year the month belongs to.
    pub year: i32,
    /// The month, 1 for January to 12 for December.
    pub month: u8,
    /// A three-letter label for the month, e.g. "Fev".
    pub label: &'static str,
    /// The sum of the income in the month.
    pub income: f64,
    /// The sum of the expenses in the month.
    pub expense: f64,
}

/// Keep the transactions dated in the month and year of `period`.
pub fn filter_by_period(transactions: &[Transaction], period: Period) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| period.contains(transaction))
        .cloned()
        .collect()
}

/// Sum income and expenses and compute the balance.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = 0.0;
    let mut expense = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expense += transaction.amount,
        }
    }

    Summary {
        balance: income - expense,
        income,
        expense,
        currency: CURRENCY,
    }
}

/// Sum expenses by category.
///
/// Categories appear in the order they are first seen in `transactions`.
/// Income is ignored, so categories with no expenses are left out.
pub fn categorize(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense)
    {
        match totals
            .iter_mut()
            .find(|total| total.category == transaction.category)
        {
            Some(total) => total.total += transaction.amount,
            None => totals.push(CategoryTotal {
                category: transaction.category,
                total: transaction.amount,
            }),
        }
    }

    totals
}

/// Sum income and expenses for each month that has transactions.
///
/// # Returns
/// One entry per month in chronological order.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<(i32, u8), (f64, f64)> = BTreeMap::new();

    for transaction in transactions {
        let key = (transaction.date.year(), u8::from(transaction.date.month()));
        let (income, expense) = totals.entry(key).or_insert((0.0, 0.0));

        match transaction.kind {
            TransactionKind::Income => *income += transaction.amount,
            TransactionKind::Expense => *expense += transaction.amount,
        }
    }

    totals
        .into_iter()
        .map(|((year, month), (income, expense))| MonthlyTotal {
            year,
            month,
            label: month_label(month),
            income,
            expense,
        })
        .collect()
}

/// Formats a month number as a three-letter Portuguese abbreviation.
fn month_label(month: u8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Fev",
        3 => "Mar",
        4 => "Abr",
        5 => "Mai",
        6 => "Jun",
        7 => "Jul",
        8 => "Ago",
        9 => "Set",
        10 => "Out",
        11 => "Nov",
        12 => "Dez",
        _ => "",
    }
}
