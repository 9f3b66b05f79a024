//! Defines the endpoint for the monthly finance dashboard.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    app_state::TransactionState,
    finance::{
        CategoryTotal, MonthlyTotal, Period, Summary, Transaction, categorize, filter_by_period,
        monthly_totals, summarize,
    },
};

/// The query parameters for the dashboard.
///
/// Missing values default to the current month and year in UTC.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// The month to summarise, 1 to 12.
    pub month: Option<u8>,
    /// The year to summarise.
    pub year: Option<i32>,
}

/// Everything the dashboard shows for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// The month the figures are for.
    pub period: Period,
    /// Income, expenses and balance for the period.
    pub summary: Summary,
    /// Expenses in the period grouped by category.
    pub categories: Vec<CategoryTotal>,
    /// The transactions in the period, most recent first.
    pub transactions: Vec<Transaction>,
    /// Income and expenses for every month with transactions.
    pub monthly: Vec<MonthlyTotal>,
}

impl Dashboard {
    /// Compute the dashboard for `period` from every known transaction.
    pub fn build(transactions: &[Transaction], period: Period) -> Self {
        let in_period = filter_by_period(transactions, period);

        Self {
            period,
            summary: summarize(&in_period),
            categories: categorize(&in_period),
            monthly: monthly_totals(transactions),
            transactions: in_period,
        }
    }
}

/// Respond with the summary, category totals and transactions for the requested month.
pub async fn get_dashboard_endpoint(
    State(state): State<TransactionState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let period = match resolve_period(&query, OffsetDateTime::now_utc().date()) {
        Ok(period) => period,
        Err(error) => {
            tracing::debug!("Rejected dashboard query {query:?}: {error}");
            return error.into_response();
        }
    };

    match state.transaction_store.get_all() {
        Ok(transactions) => Json(Dashboard::build(&transactions, period)).into_response(),
        Err(error) => {
            tracing::error!("Could not load transactions for the dashboard: {error}");
            error.into_response()
        }
    }
}

fn resolve_period(query: &DashboardQuery, today: Date) -> Result<Period, Error> {
    Period::new(
        query.month.unwrap_or_else(|| u8::from(today.month())),
        query.year.unwrap_or_else(|| today.year()),
    )
}
