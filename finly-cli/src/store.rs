//! JSON store under ~/.finly: transactions.json and bills.json.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use finly_core::{Bill, Transaction};

pub fn finly_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".finly"))
}

pub fn ensure_finly_home() -> Result<PathBuf> {
    let dir = finly_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn transactions_path() -> Result<PathBuf> {
    Ok(ensure_finly_home()?.join("transactions.json"))
}

pub fn bills_path() -> Result<PathBuf> {
    Ok(ensure_finly_home()?.join("bills.json"))
}

fn load_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?)
}

fn save_array<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn load_transactions() -> Result<Vec<Transaction>> {
    load_array(&transactions_path()?)
}

pub fn save_transactions(txns: &[Transaction]) -> Result<()> {
    save_array(&transactions_path()?, txns)
}

pub fn load_bills() -> Result<Vec<Bill>> {
    load_array(&bills_path()?)
}

pub fn save_bills(bills: &[Bill]) -> Result<()> {
    save_array(&bills_path()?, bills)
}

/// Next sequential id like "tx-0007", scanning existing "{prefix}-NNNN" ids.
pub fn next_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let max = existing
        .filter_map(|id| id.strip_prefix(prefix)?.strip_prefix('-')?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}-{:04}", max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_scans_existing() {
        let ids = ["tx-0001", "tx-0042", "bill-0100", "garbage"];
        assert_eq!(next_id("tx", ids.iter().copied()), "tx-0043");
        assert_eq!(next_id("bill", ids.iter().copied()), "bill-0101");
        assert_eq!(next_id("tx", [].iter().copied()), "tx-0001");
    }
}
