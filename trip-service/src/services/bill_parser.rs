//! Bill text parser: classifies the lines of a scanned trip-expense bill
//! into header fields and income/expense line items.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{LineItem, ParsedBillDraft};

static BILL_NO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Bill No:\s*(\S+)").expect("valid regex"));
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Date:\s*(\S+)").expect("valid regex"));
static VEHICLE_NO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Vehicle No:\s*(\S+)").expect("valid regex"));
static DRIVER_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Driver Name:\s*(\S+)").expect("valid regex"));

/// One numbered table row: `<row no> | <description> | <amount>`. Rows whose
/// amount cell is blank or non-numeric do not match and are dropped rather
/// than recorded as zero-amount items.
static ITEM_ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s*\|\s*(.*?)\s*\|\s*(\d+)").expect("valid regex"));

/// Descriptions matching any of these mark a row as an expense even when it
/// shows up inside the income section of a badly segmented scan.
const EXPENSE_KEYWORDS: [&str; 10] = [
    "pooja",
    "commission",
    "unloading",
    "police",
    "parking",
    "tarpaulin",
    "batta",
    "toll",
    "fuel",
    "other",
];

/// Parse one semi-structured bill text block into a draft.
///
/// Income rows sit between the `S.No` table header and the `Total Income`
/// line; expense rows between `Total Income` and `Total Expenses` (markers
/// matched case-insensitively, boundary lines excluded). Header fields
/// default to empty strings and missing sections to empty lists; this never
/// fails, whatever the input looks like.
pub fn parse_bill_text(raw: &str) -> ParsedBillDraft {
    let lines: Vec<&str> = raw.lines().collect();

    let income_items = collect_income_items(&lines);
    let expense_items = collect_expense_items(&lines);

    let total_income: i64 = income_items.iter().map(|item| item.amount).sum();
    let total_expense: i64 = expense_items.iter().map(|item| item.amount).sum();

    ParsedBillDraft {
        bill_no: capture_first(&BILL_NO_RE, raw),
        date: capture_first(&DATE_RE, raw),
        vehicle_no: capture_first(&VEHICLE_NO_RE, raw),
        driver_name: capture_first(&DRIVER_NAME_RE, raw),
        income_items,
        expense_items,
        total_income,
        total_expense,
        remaining: total_income - total_expense,
    }
}

fn capture_first(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn parse_item_row(line: &str) -> Option<LineItem> {
    let caps = ITEM_ROW_RE.captures(line)?;
    let description = caps.get(1)?.as_str().trim().to_string();
    let amount = caps.get(2)?.as_str().parse::<i64>().ok()?;
    Some(LineItem {
        description,
        amount,
    })
}

fn is_expense_description(description: &str) -> bool {
    let lowered = description.to_lowercase();
    EXPENSE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

fn collect_income_items(lines: &[&str]) -> Vec<LineItem> {
    let mut items = Vec::new();
    let mut in_income_section = false;

    for line in lines {
        let lowered = line.to_lowercase();
        if lowered.contains("total income") {
            in_income_section = false;
        }
        if lowered.contains("s.no") {
            in_income_section = true;
            continue;
        }
        if !in_income_section {
            continue;
        }

        if let Some(item) = parse_item_row(line) {
            if !is_expense_description(&item.description) {
                items.push(item);
            }
        }
    }

    items
}

fn collect_expense_items(lines: &[&str]) -> Vec<LineItem> {
    let mut items = Vec::new();
    let mut in_expense_section = false;

    for line in lines {
        let lowered = line.to_lowercase();
        if lowered.contains("total income") {
            in_expense_section = true;
            continue;
        }
        if lowered.contains("total expenses") {
            in_expense_section = false;
        }
        if !in_expense_section {
            continue;
        }

        if let Some(item) = parse_item_row(line) {
            items.push(item);
        }
    }

    items
}
