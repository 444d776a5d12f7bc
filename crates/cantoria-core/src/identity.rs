// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipient identifier canonicalization.
//!
//! The same person shows up in the directory and the notification log with
//! whatever formatting a human typed: `0812-345-6789`, `+62 812 3456 789`,
//! `628123456789`. Log keys and transport targets must agree, so both go
//! through the canonical forms defined here.
//!
//! Two normalization strengths exist on purpose: [`normalize_identifier`]
//! is best-effort and never fails (log keys must be computable for any
//! input), while [`validate_msisdn`] is the strict send-time check.

use crate::error::CantoriaError;
use crate::types::ChannelKind;

/// Minimum digit count for a deliverable phone number.
const MIN_MSISDN_DIGITS: usize = 10;

/// Default country code substituted for a leading `0`.
const COUNTRY_CODE: &str = "62";

/// Canonicalizes an identifier for use as a log key.
///
/// Telegram chat ids are opaque: trimming is the only safe operation.
/// Phone numbers are folded to a `+`-prefixed canonical digit string.
/// Never fails; unusable input yields an empty string.
pub fn normalize_identifier(kind: ChannelKind, raw: &str) -> String {
    match kind {
        ChannelKind::Telegram => raw.trim().to_string(),
        ChannelKind::Whatsapp => normalize_phone(raw),
    }
}

/// Best-effort phone canonicalization to a simplified E.164 form (`+62...`).
pub fn normalize_phone(raw: &str) -> String {
    let kept: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let digits: String = kept.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    if kept.starts_with('+') {
        return format!("+{digits}");
    }
    if let Some(rest) = digits.strip_prefix('0') {
        return format!("+{COUNTRY_CODE}{rest}");
    }
    if digits.starts_with(COUNTRY_CODE) {
        return format!("+{digits}");
    }
    if digits.starts_with('8') {
        return format!("+{COUNTRY_CODE}{digits}");
    }
    format!("+{digits}")
}

/// Strict send-time validation of a phone number.
///
/// Returns the bare `62...` digit string the delivery API expects, or a
/// [`CantoriaError::Validation`] describing why the number is undeliverable.
pub fn validate_msisdn(raw: &str) -> Result<String, CantoriaError> {
    if raw.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(CantoriaError::Validation(
            "phone number must not contain letters".into(),
        ));
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let digits = cleaned.trim_start_matches('+');
    if digits.is_empty() {
        return Err(CantoriaError::Validation(format!(
            "no digits in phone number: {raw:?}"
        )));
    }
    // Only a leading '+' is a valid prefix; any '+' left after stripping
    // it would reach the gateway and inflate the length check.
    if digits.contains('+') {
        return Err(CantoriaError::Validation(format!(
            "invalid phone format: {raw}"
        )));
    }

    let canonical = if let Some(rest) = digits.strip_prefix('0') {
        format!("{COUNTRY_CODE}{rest}")
    } else if digits.starts_with(COUNTRY_CODE) {
        digits.to_string()
    } else if digits.starts_with('8') {
        format!("{COUNTRY_CODE}{digits}")
    } else {
        return Err(CantoriaError::Validation(format!(
            "invalid phone format: {raw}"
        )));
    };

    if canonical.len() < MIN_MSISDN_DIGITS {
        return Err(CantoriaError::Validation(format!(
            "phone number too short: {raw}"
        )));
    }

    Ok(canonical)
}

/// Whether two identifiers refer to the same recipient on `kind`.
pub fn identifiers_match(kind: ChannelKind, a: &str, b: &str) -> bool {
    normalize_identifier(kind, a) == normalize_identifier(kind, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_gets_country_code() {
        assert_eq!(normalize_phone("0812-345-6789"), "+628123456789");
    }

    #[test]
    fn existing_country_code_is_kept() {
        assert_eq!(normalize_phone("628123456789"), "+628123456789");
        assert_eq!(normalize_phone("+62 812 3456 789"), "+628123456789");
    }

    #[test]
    fn bare_mobile_prefix_gets_country_code() {
        assert_eq!(normalize_phone("8123456789"), "+628123456789");
    }

    #[test]
    fn garbage_yields_empty_not_panic() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("n/a"), "");
    }

    #[test]
    fn telegram_ids_are_only_trimmed() {
        assert_eq!(
            normalize_identifier(ChannelKind::Telegram, "  987654321 "),
            "987654321"
        );
        // No phone reformatting applies to chat ids.
        assert_eq!(
            normalize_identifier(ChannelKind::Telegram, "0812"),
            "0812"
        );
    }

    #[test]
    fn matching_folds_formatting_differences() {
        assert!(identifiers_match(
            ChannelKind::Whatsapp,
            "0812-345-6789",
            "+62 812 345 6789"
        ));
        assert!(!identifiers_match(
            ChannelKind::Telegram,
            "123",
            "124"
        ));
    }

    #[test]
    fn validate_accepts_canonicalizable_forms() {
        assert_eq!(validate_msisdn("0812-345-6789").unwrap(), "628123456789");
        assert_eq!(validate_msisdn("+628123456789").unwrap(), "628123456789");
        assert_eq!(validate_msisdn("8123456789").unwrap(), "628123456789");
    }

    #[test]
    fn validate_rejects_interior_plus_signs() {
        assert!(validate_msisdn("0812+345+6789").is_err());
        // Plus padding must not satisfy the minimum digit count.
        assert!(validate_msisdn("08++++12345678").is_err());
        // A single leading '+' stays valid.
        assert_eq!(validate_msisdn("+628123456789").unwrap(), "628123456789");
    }

    #[test]
    fn validate_rejects_letters_short_and_foreign_prefixes() {
        assert!(validate_msisdn("call me").is_err());
        assert!(validate_msisdn("0812").is_err());
        assert!(validate_msisdn("1234567890").is_err());
        assert!(validate_msisdn("").is_err());
    }
}
