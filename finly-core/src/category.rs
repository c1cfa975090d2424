//! The fixed category vocabulary.
//!
//! Category ids are a closed set of string keys shared by transactions,
//! bills, and the SMS extractor's auto-categorization chains.

use serde::{Deserialize, Serialize};

/// Which side of the ledger a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
    #[serde(rename = "bill")]
    Bill,
}

/// Spending/income buckets, serialized as their string ids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    // Income
    #[serde(rename = "salary")]
    Salary,
    #[serde(rename = "freelance")]
    Freelance,
    #[serde(rename = "investments")]
    Investments,
    #[serde(rename = "other-income")]
    OtherIncome,

    // Expense
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "transportation")]
    Transportation,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "healthcare")]
    Healthcare,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "other-expense")]
    OtherExpense,

    // Bills
    #[serde(rename = "utilities")]
    Utilities,
    #[serde(rename = "rent")]
    Rent,
    #[serde(rename = "insurance")]
    Insurance,
    #[serde(rename = "subscriptions")]
    Subscriptions,
}

/// The full catalog, in display order. Process-wide constant.
const ALL_CATEGORIES: &[Category] = &[
    Category::Salary,
    Category::Freelance,
    Category::Investments,
    Category::OtherIncome,
    Category::Food,
    Category::Transportation,
    Category::Shopping,
    Category::Entertainment,
    Category::Healthcare,
    Category::Education,
    Category::OtherExpense,
    Category::Utilities,
    Category::Rent,
    Category::Insurance,
    Category::Subscriptions,
];

impl Category {
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }

    /// Stable string id, identical to the serde rename.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Freelance => "freelance",
            Category::Investments => "investments",
            Category::OtherIncome => "other-income",
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Healthcare => "healthcare",
            Category::Education => "education",
            Category::OtherExpense => "other-expense",
            Category::Utilities => "utilities",
            Category::Rent => "rent",
            Category::Insurance => "insurance",
            Category::Subscriptions => "subscriptions",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investments => "Investments",
            Category::OtherIncome => "Other Income",
            Category::Food => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::OtherExpense => "Other Expenses",
            Category::Utilities => "Utilities",
            Category::Rent => "Rent/Mortgage",
            Category::Insurance => "Insurance",
            Category::Subscriptions => "Subscriptions",
        }
    }

    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::Salary
            | Category::Freelance
            | Category::Investments
            | Category::OtherIncome => CategoryKind::Income,
            Category::Food
            | Category::Transportation
            | Category::Shopping
            | Category::Entertainment
            | Category::Healthcare
            | Category::Education
            | Category::OtherExpense => CategoryKind::Expense,
            Category::Utilities
            | Category::Rent
            | Category::Insurance
            | Category::Subscriptions => CategoryKind::Bill,
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        ALL_CATEGORIES.iter().copied().find(|c| c.id() == id)
    }

    pub fn of_kind(kind: CategoryKind) -> impl Iterator<Item = Category> {
        ALL_CATEGORIES.iter().copied().filter(move |c| c.kind() == kind)
    }
}
