//! Monthly summary analytics over stored transactions.
//!
//! Pure functions: callers pass the transaction slice and a reference date,
//! nothing here touches storage or the clock.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::category::Category;
use crate::time::{month_of, months_back, previous_month};
use crate::transaction::Transaction;

/// Income/expense totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MonthTotals {
    pub income: f64,
    pub expenses: f64,
}

impl MonthTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }

    /// Percent of income kept; 0 when there is no income.
    pub fn savings_rate(&self) -> f64 {
        if self.income > 0.0 {
            self.net() / self.income * 100.0
        } else {
            0.0
        }
    }
}

/// One point of the trailing monthly series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthPoint {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
}

/// Current-month dashboard numbers, with growth vs the previous month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialStats {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_income: f64,
    pub savings_rate: f64,
    pub income_growth: f64,
    pub expense_growth: f64,
    pub net_growth: f64,
    pub top_category: Option<Category>,
}

fn in_month(tx: &Transaction, year: i32, month: u32) -> bool {
    tx.date.year() == year && tx.date.month() == month
}

/// Sum income and expenses for one calendar month.
pub fn month_totals(txns: &[Transaction], year: i32, month: u32) -> MonthTotals {
    let mut totals = MonthTotals::default();
    for tx in txns.iter().filter(|t| in_month(t, year, month)) {
        if tx.is_income() {
            totals.income += tx.amount;
        } else {
            totals.expenses += tx.amount;
        }
    }
    totals
}

/// Percent change from `previous` to `current`; 0 when there is no baseline.
pub fn growth_pct(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

/// Net-income growth divides by |previous| so a negative baseline still
/// yields a signed percentage.
pub fn net_growth_pct(current: f64, previous: f64) -> f64 {
    if previous != 0.0 {
        (current - previous) / previous.abs() * 100.0
    } else {
        0.0
    }
}

/// Trailing `n`-month series ending at (end_year, end_month), oldest first.
pub fn monthly_series(txns: &[Transaction], end_year: i32, end_month: u32, n: u32) -> Vec<MonthPoint> {
    (0..n)
        .rev()
        .map(|back| {
            let (year, month) = months_back(end_year, end_month, back);
            let totals = month_totals(txns, year, month);
            MonthPoint {
                year,
                month,
                income: totals.income,
                expenses: totals.expenses,
            }
        })
        .collect()
}

/// Per-category expense totals for one month, largest first.
pub fn category_breakdown(txns: &[Transaction], year: i32, month: u32) -> Vec<(Category, f64)> {
    let mut by_category: HashMap<Category, f64> = HashMap::new();
    for tx in txns.iter().filter(|t| t.is_expense() && in_month(t, year, month)) {
        *by_category.entry(tx.category).or_insert(0.0) += tx.amount;
    }
    let mut out: Vec<(Category, f64)> = by_category.into_iter().collect();
    out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap().then(a.0.id().cmp(b.0.id())));
    out
}

/// Dashboard stats for the month containing `today`.
pub fn compute_stats(txns: &[Transaction], today: NaiveDate) -> FinancialStats {
    let (year, month) = month_of(today);
    let (prev_year, prev_month) = previous_month(year, month);

    let current = month_totals(txns, year, month);
    let previous = month_totals(txns, prev_year, prev_month);

    let top_category = category_breakdown(txns, year, month)
        .first()
        .map(|(cat, _)| *cat);

    FinancialStats {
        total_income: current.income,
        total_expenses: current.expenses,
        net_income: current.net(),
        savings_rate: current.savings_rate(),
        income_growth: growth_pct(current.income, previous.income),
        expense_growth: growth_pct(current.expenses, previous.expenses),
        net_growth: net_growth_pct(current.net(), previous.net()),
        top_category,
    }
}
