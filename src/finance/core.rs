//! Defines the core data models and database table for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, validation::require_non_empty};

/// Alias for the integer type used for mapping to transaction IDs.
pub type TransactionId = i64;

/// The error returned when a label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} \"{label}\"")]
pub struct UnknownLabel {
    kind: &'static str,
    label: String,
}

/// Implements string and SQL conversions for an enum that is stored as a
/// fixed text label.
macro_rules! labelled_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label used for this variant in JSON and in the database.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownLabel {
                        kind: $kind,
                        label: other.to_owned(),
                    }),
                }
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|error| FromSqlError::Other(Box::new(error)))
            }
        }
    };
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money earned, e.g. a salary.
    #[serde(rename = "income", alias = "receita")]
    Income,
    /// Money spent.
    #[serde(rename = "expense", alias = "despesa")]
    Expense,
}

labelled_enum!(TransactionKind, "transaction kind", {
    Income => "income",
    Expense => "expense",
});

/// What a transaction was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Wages and salary.
    #[serde(rename = "Salário")]
    Salary,
    /// Groceries and eating out.
    #[serde(rename = "Alimentação")]
    Food,
    /// Phone credit, internet and similar.
    #[serde(rename = "Comunicações")]
    Communications,
    /// Buses, fuel and taxis.
    #[serde(rename = "Transporte")]
    Transport,
    /// Money moved to or from someone else.
    #[serde(rename = "Transferência")]
    Transfer,
    /// Leisure and entertainment.
    #[serde(rename = "Lazer")]
    Leisure,
    /// School fees, courses and books.
    #[serde(rename = "Educação")]
    Education,
    /// Medical costs.
    #[serde(rename = "Saúde")]
    Health,
    /// Anything else.
    #[serde(rename = "Outros")]
    Other,
}

labelled_enum!(Category, "category", {
    Salary => "Salário",
    Food => "Alimentação",
    Communications => "Comunicações",
    Transport => "Transporte",
    Transfer => "Transferência",
    Leisure => "Lazer",
    Education => "Educação",
    Health => "Saúde",
    Other => "Outros",
});

/// The account an expense was paid from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wallet {
    /// The M-Pesa mobile wallet.
    #[serde(rename = "M-Pesa")]
    MPesa,
    /// The e-Mola mobile wallet.
    #[serde(rename = "e-Mola")]
    EMola,
    /// A bank account.
    #[serde(rename = "Banco")]
    Bank,
    /// Cash.
    #[serde(rename = "Dinheiro")]
    Cash,
}

labelled_enum!(Wallet, "wallet", {
    MPesa => "M-Pesa",
    EMola => "e-Mola",
    Bank => "Banco",
    Cash => "Dinheiro",
});

/// An income or expense ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money earned or spent. Always positive.
    pub amount: f64,
    /// Whether the money was earned or spent.
    pub kind: TransactionKind,
    /// When the transaction happened.
    pub date: Date,
    /// What the transaction was for.
    pub category: Category,
    /// The account an expense was paid from. Always `None` for income.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
}

/// The data submitted to create or replace a transaction.
///
/// Clients that send the Portuguese field names (`descricao`, `valor`, `tipo`,
/// `data`, `categoria` and `carteira`) are accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    /// A text description of what the transaction was for.
    #[serde(alias = "descricao")]
    pub description: String,
    /// The amount of money earned or spent.
    #[serde(alias = "valor")]
    pub amount: f64,
    /// Whether the money was earned or spent.
    #[serde(alias = "tipo")]
    pub kind: TransactionKind,
    /// When the transaction happened.
    #[serde(alias = "data")]
    pub date: Date,
    /// What the transaction was for.
    #[serde(alias = "categoria")]
    pub category: Category,
    /// The account an expense was paid from.
    #[serde(default, alias = "carteira")]
    pub wallet: Option<Wallet>,
}

impl TransactionForm {
    /// Check the form before it is stored.
    ///
    /// # Errors
    ///
    /// Returns an [Error::EmptyField] for a blank description,
    /// [Error::NonPositiveAmount] if the amount is not greater than zero, or
    /// [Error::MissingWallet] for an expense without a wallet.
    pub fn validate(&self) -> Result<(), Error> {
        require_non_empty("description", &self.description)?;

        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(Error::NonPositiveAmount(self.amount));
        }

        if self.kind == TransactionKind::Expense && self.wallet.is_none() {
            return Err(Error::MissingWallet);
        }

        Ok(())
    }

    /// Drop the wallet from income, which is not paid from a wallet.
    pub fn normalized(self) -> Self {
        match self.kind {
            TransactionKind::Income => Self {
                wallet: None,
                ..self
            },
            TransactionKind::Expense => self,
        }
    }

    /// Create a transaction with the given `id` from the form.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        let form = self.normalized();

        Transaction {
            id,
            description: form.description,
            amount: form.amount,
            kind: form.kind,
            date: form.date,
            category: form.category,
            wallet: form.wallet,
        }
    }
}

/// The columns of the transaction table in the order [map_row_to_transaction] expects them.
pub const TRANSACTION_COLUMNS: &str = "id, description, amount, kind, date, category, wallet";

/// Create the transaction table and its date index if they do not exist.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            kind TEXT NOT NULL,
            date TEXT NOT NULL,
            category TEXT NOT NULL,
            wallet TEXT
        )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date)",
        (),
    )?;

    Ok(())
}

/// Map a row selected with [TRANSACTION_COLUMNS] to a [Transaction].
pub fn map_row_to_transaction(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        kind: row.get(3)?,
        date: row.get(4)?,
        category: row.get(5)?,
        wallet: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::Error;

    use super::{
        Category, TransactionForm, TransactionKind, Wallet, create_transaction_table,
    };

    fn expense() -> TransactionForm {
        TransactionForm {
            description: "Mercado".to_owned(),
            amount: 1200.0,
            kind: TransactionKind::Expense,
            date: date!(2024 - 06 - 03),
            category: Category::Food,
            wallet: Some(Wallet::MPesa),
        }
    }

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_transaction_table(&connection));
    }

    #[test]
    fn valid_expense_passes_validation() {
        assert_eq!(expense().validate(), Ok(()));
    }

    #[test]
    fn zero_amount_fails_validation() {
        let form = TransactionForm {
            amount: 0.0,
            ..expense()
        };

        assert_eq!(form.validate(), Err(Error::NonPositiveAmount(0.0)));
    }

    #[test]
    fn negative_amount_fails_validation() {
        let form = TransactionForm {
            amount: -5.0,
            ..expense()
        };

        assert_eq!(form.validate(), Err(Error::NonPositiveAmount(-5.0)));
    }

    #[test]
    fn expense_without_wallet_fails_validation() {
        let form = TransactionForm {
            wallet: None,
            ..expense()
        };

        assert_eq!(form.validate(), Err(Error::MissingWallet));
    }

    #[test]
    fn income_without_wallet_passes_validation() {
        let form = TransactionForm {
            kind: TransactionKind::Income,
            category: Category::Salary,
            wallet: None,
            ..expense()
        };

        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn blank_description_fails_validation() {
        let form = TransactionForm {
            description: "".to_owned(),
            ..expense()
        };

        assert_eq!(form.validate(), Err(Error::EmptyField("description")));
    }

    #[test]
    fn income_loses_its_wallet() {
        let form = TransactionForm {
            kind: TransactionKind::Income,
            ..expense()
        };

        let transaction = form.into_transaction(1);

        assert_eq!(transaction.wallet, None);
    }

    #[test]
    fn deserializes_portuguese_labels() {
        let form: TransactionForm = serde_json::from_value(serde_json::json!({
            "description": "Recarga",
            "amount": 200,
            "kind": "despesa",
            "date": "2024-06-03",
            "category": "Comunicações",
            "wallet": "e-Mola"
        }))
        .unwrap();

        assert_eq!(form.kind, TransactionKind::Expense);
        assert_eq!(form.category, Category::Communications);
        assert_eq!(form.wallet, Some(Wallet::EMola));
        assert_eq!(form.date, date!(2024 - 06 - 03));
    }

    #[test]
    fn accepts_portuguese_field_names() {
        let form: TransactionForm = serde_json::from_value(serde_json::json!({
            "descricao": "Mercado",
            "valor": 1200,
            "tipo": "despesa",
            "data": "2024-06-03",
            "categoria": "Alimentação",
            "carteira": "M-Pesa"
        }))
        .unwrap();

        assert_eq!(form, expense());
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(*category));
        }
    }
}
