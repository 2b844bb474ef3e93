//! Statement classification: an ordered, short-circuiting rule list
//! mapping a normalized guard statement to one invariant category.
//!
//! The rule order is load-bearing. The broad identifier-class rule fires
//! before the keyword ladder, so bare-identifier bodies (including ones
//! mentioning `whitelist`, `sender` or `owner` as plain identifiers) land
//! in `enforce specification`; the ladder branches match only statements
//! that mix in digits, relational operators or other characters outside
//! that class. Reordering changes the output corpus-wide.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::InvariantCategory;

lazy_static! {
    // Arithmetic/comparison bodies over the throwaway identifiers
    // a, b, c, x, y, z and underscore, with or without a message argument.
    static ref SAFE_MATH_CLOSED: Regex =
        Regex::new(r"(?i)require\(([abcxyz_+-/*)()><=]+)\)").unwrap();
    static ref SAFE_MATH_MSG: Regex =
        Regex::new(r"(?i)require\(([abcxyz_+-/*)()><=]+),").unwrap();
    // Bodies built purely from identifier-like characters, with or
    // without a message argument.
    static ref IDENTIFIER_MSG: Regex =
        Regex::new(r"(?i)require\(([a-zA-Z_.\&\|!\[\]]+),").unwrap();
    static ref IDENTIFIER_CLOSED: Regex =
        Regex::new(r"(?i)require\(([a-zA-Z_.\&\|!\[\]]+)\)").unwrap();
}

fn is_comment(s: &str) -> bool {
    s.starts_with("//")
}

fn is_always_false(s: &str) -> bool {
    s.contains("require(false);")
}

fn is_always_true(s: &str) -> bool {
    s.contains("require(true);")
}

fn is_safe_math(s: &str) -> bool {
    SAFE_MATH_CLOSED.is_match(s) || SAFE_MATH_MSG.is_match(s)
}

fn is_zero_check(s: &str) -> bool {
    ["!=0", ">0", ">=0", "==0"].iter().any(|p| s.contains(p))
}

fn is_identifier_body(s: &str) -> bool {
    IDENTIFIER_MSG.is_match(s) || IDENTIFIER_CLOSED.is_match(s)
}

fn is_sender_owner(s: &str) -> bool {
    s.contains("sender") && s.contains("owner")
}

fn is_sender(s: &str) -> bool {
    s.contains("sender")
}

fn is_owner(s: &str) -> bool {
    s.contains("owner")
}

fn is_zero_address(s: &str) -> bool {
    s.contains("address(0)")
}

fn is_time(s: &str) -> bool {
    s.contains("time") || s.contains("period")
}

fn is_offer_id(s: &str) -> bool {
    s.contains("_offerid")
}

fn is_whitelist(s: &str) -> bool {
    s.contains("whitelist")
}

fn is_value(s: &str) -> bool {
    s.contains("value")
}

fn is_contract_check(s: &str) -> bool {
    s.contains("iscontract")
}

fn is_balance_comparison(s: &str) -> bool {
    s.contains("balance") && (s.contains('>') || s.contains('<'))
}

fn is_length(s: &str) -> bool {
    s.contains("length")
}

fn is_amount_equality(s: &str) -> bool {
    s.contains("amount") && (s.contains("==") || s.contains("!="))
}

/// Ordered rule table, first match wins. Entries after a match are never
/// consulted, so every predicate may assume all earlier ones failed.
static RULES: &[(fn(&str) -> bool, InvariantCategory)] = &[
    (is_comment, InvariantCategory::IgnoreComment),
    (is_always_false, InvariantCategory::IgnoreAlwaysFalse),
    (is_always_true, InvariantCategory::IgnoreAlwaysTrue),
    (is_safe_math, InvariantCategory::IgnoreSafeMath),
    (is_zero_check, InvariantCategory::IgnoreZeroCheck),
    (is_identifier_body, InvariantCategory::EnforceSpecification),
    (is_sender_owner, InvariantCategory::SenderOwnerOf),
    (is_sender, InvariantCategory::SenderPermission),
    (is_owner, InvariantCategory::OwnerPermission),
    (is_zero_address, InvariantCategory::ZeroAddress),
    (is_time, InvariantCategory::TimeControl),
    (is_offer_id, InvariantCategory::OfferIdControl),
    (is_whitelist, InvariantCategory::WhitelistControl),
    (is_value, InvariantCategory::MsgValueControl),
    (is_contract_check, InvariantCategory::EoaValidation),
    (is_balance_comparison, InvariantCategory::BalanceControl),
    (is_length, InvariantCategory::ArrayLengthControl),
    (is_amount_equality, InvariantCategory::AmountEnforcement),
];

/// Map a normalized statement to its invariant category. Total and
/// deterministic: matching is case-insensitive and every input gets
/// exactly one category, falling back to `Uncategorizable`.
pub fn classify(statement: &str) -> InvariantCategory {
    let lowered = statement.to_lowercase();
    RULES
        .iter()
        .find(|(predicate, _)| predicate(&lowered))
        .map(|(_, category)| *category)
        .unwrap_or(InvariantCategory::Uncategorizable)
}
