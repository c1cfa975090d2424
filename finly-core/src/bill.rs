//! Recurring bills and due-date projection.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Billing cadence for recurring bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "quarterly")]
    Quarterly,
    #[serde(rename = "yearly")]
    Yearly,
}

impl Frequency {
    /// Month stride between due dates.
    pub fn months(&self) -> u32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::Yearly => 12,
        }
    }
}

/// A bill obligation, possibly recurring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub category: Category,
    pub is_paid: bool,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    pub created_at: DateTime<Utc>,
}

impl Bill {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        due_date: NaiveDate,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            due_date,
            category,
            is_paid: false,
            is_recurring: false,
            frequency: None,
            created_at,
        }
    }

    pub fn recurring(mut self, frequency: Frequency) -> Self {
        self.is_recurring = true;
        self.frequency = Some(frequency);
        self
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_paid && self.due_date < today
    }

    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    /// Next due date after the current one, for recurring bills.
    /// End-of-month dates clamp (Jan 31 -> Feb 28/29).
    pub fn next_due_date(&self) -> Option<NaiveDate> {
        if !self.is_recurring {
            return None;
        }
        let freq = self.frequency?;
        self.due_date.checked_add_months(Months::new(freq.months()))
    }

    /// Mark paid; recurring bills roll forward to the next cycle unpaid.
    pub fn mark_paid(&mut self) {
        match self.next_due_date() {
            Some(next) => {
                self.due_date = next;
                self.is_paid = false;
            }
            None => self.is_paid = true,
        }
    }
}

/// Unpaid bills already past their due date, earliest first.
pub fn overdue(bills: &[Bill], today: NaiveDate) -> Vec<&Bill> {
    let mut out: Vec<&Bill> = bills.iter().filter(|b| b.is_overdue(today)).collect();
    out.sort_by_key(|b| b.due_date);
    out
}

/// Unpaid bills due within the next `window_days` (today inclusive),
/// earliest first. Overdue bills are excluded; use [`overdue`] for those.
pub fn due_within(bills: &[Bill], today: NaiveDate, window_days: i64) -> Vec<&Bill> {
    let mut out: Vec<&Bill> = bills
        .iter()
        .filter(|b| {
            if b.is_paid {
                return false;
            }
            let days = b.days_until_due(today);
            days >= 0 && days <= window_days
        })
        .collect();
    out.sort_by_key(|b| b.due_date);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bill(id: &str, due: NaiveDate) -> Bill {
        Bill::new(id, "Electricity", 1200.0, due, Category::Utilities, Utc::now())
    }

    #[test]
    fn test_overdue_and_days_until_due() {
        let today = date(2026, 3, 10);
        let b = bill("bill-0001", date(2026, 3, 5));
        assert!(b.is_overdue(today));
        assert_eq!(b.days_until_due(today), -5);

        let mut paid = bill("bill-0002", date(2026, 3, 5));
        paid.is_paid = true;
        assert!(!paid.is_overdue(today));
    }

    #[test]
    fn test_recurring_rolls_forward_with_clamp() {
        let mut b = bill("bill-0003", date(2026, 1, 31)).recurring(Frequency::Monthly);
        b.mark_paid();
        // Rolls to the last valid day of February and stays unpaid
        assert_eq!(b.due_date, date(2026, 2, 28));
        assert!(!b.is_paid);

        let mut yearly = bill("bill-0004", date(2026, 6, 1)).recurring(Frequency::Yearly);
        yearly.mark_paid();
        assert_eq!(yearly.due_date, date(2027, 6, 1));
    }

    #[test]
    fn test_one_shot_bill_stays_paid() {
        let mut b = bill("bill-0005", date(2026, 4, 1));
        b.mark_paid();
        assert!(b.is_paid);
        assert_eq!(b.due_date, date(2026, 4, 1));
    }

    #[test]
    fn test_due_within_excludes_paid_and_overdue() {
        let today = date(2026, 3, 10);
        let mut paid = bill("bill-0006", date(2026, 3, 12));
        paid.is_paid = true;
        let bills = vec![
            bill("bill-0007", date(2026, 3, 14)),
            bill("bill-0008", date(2026, 3, 11)),
            bill("bill-0009", date(2026, 3, 1)), // overdue
            paid,
            bill("bill-0010", date(2026, 4, 20)), // outside window
        ];

        let due = due_within(&bills, today, 7);
        let ids: Vec<&str> = due.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["bill-0008", "bill-0007"]);

        let late = overdue(&bills, today);
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].id, "bill-0009");
    }
}
