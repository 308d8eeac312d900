const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormatError {
    #[error("format.invalid_currency")]
    InvalidCurrency,
    #[error("format.non_finite_amount")]
    NonFinite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Number and currency conventions for one locale.
struct LocaleFormat {
    tag: &'static str,
    group: &'static str,
    decimal: &'static str,
    position: SymbolPosition,
    /// Digits required above the first group before grouping kicks in.
    min_grouping_digits: usize,
    symbols: &'static [(&'static str, &'static str)],
}

const LOCALES: &[LocaleFormat] = &[
    LocaleFormat {
        tag: "en-US",
        group: ",",
        decimal: ".",
        position: SymbolPosition::Prefix,
        min_grouping_digits: 1,
        symbols: &[("USD", "$"), ("EUR", "€"), ("GBP", "£"), ("JPY", "¥")],
    },
    LocaleFormat {
        tag: "en-GB",
        group: ",",
        decimal: ".",
        position: SymbolPosition::Prefix,
        min_grouping_digits: 1,
        symbols: &[("USD", "US$"), ("EUR", "€"), ("GBP", "£"), ("JPY", "JP¥")],
    },
    LocaleFormat {
        tag: "de-DE",
        group: ".",
        decimal: ",",
        position: SymbolPosition::Suffix,
        min_grouping_digits: 1,
        symbols: &[("USD", "$"), ("EUR", "€"), ("GBP", "£"), ("JPY", "¥")],
    },
    LocaleFormat {
        tag: "fr-FR",
        group: NARROW_NBSP,
        decimal: ",",
        position: SymbolPosition::Suffix,
        min_grouping_digits: 1,
        symbols: &[("USD", "$US"), ("EUR", "€"), ("GBP", "£GB"), ("JPY", "JPY")],
    },
    LocaleFormat {
        tag: "es-ES",
        group: ".",
        decimal: ",",
        position: SymbolPosition::Suffix,
        min_grouping_digits: 2,
        symbols: &[("USD", "US$"), ("EUR", "€"), ("GBP", "GBP"), ("JPY", "JPY")],
    },
    LocaleFormat {
        tag: "ja-JP",
        group: ",",
        decimal: ".",
        position: SymbolPosition::Prefix,
        min_grouping_digits: 1,
        symbols: &[("USD", "$"), ("EUR", "€"), ("GBP", "£"), ("JPY", "￥")],
    },
];

/// Resolves a BCP 47 tag, matching the full tag first and then the language
/// alone. Unknown locales fall back to `en-US`.
fn resolve_locale(tag: &str) -> &'static LocaleFormat {
    let exact = LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(tag));
    let language = tag.split(['-', '_']).next().unwrap_or_default();
    exact
        .or_else(|| {
            LOCALES
                .iter()
                .find(|l| l.tag.split('-').next() == Some(language))
        })
        .unwrap_or(&LOCALES[0])
}

fn fraction_digits(currency: &str) -> usize {
    match currency {
        "JPY" => 0,
        _ => 2,
    }
}

fn normalize_currency(currency: &str) -> Result<String, FormatError> {
    if currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(currency.to_ascii_uppercase())
    } else {
        Err(FormatError::InvalidCurrency)
    }
}

/// Rounds the decimal rendering of `value` to `digits` fraction digits,
/// half away from zero. Returns the integer and fraction digit strings.
fn round_decimal(value: f64, digits: usize) -> (String, String) {
    let rendered = format!("{}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    if frac_part.len() <= digits {
        let mut frac = frac_part.to_string();
        frac.extend(std::iter::repeat_n('0', digits - frac_part.len()));
        return (int_part.to_string(), frac);
    }

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part.as_bytes()[digits] >= b'5';

    if round_up {
        let mut index = kept.len();
        loop {
            if index == 0 {
                kept.insert(0, b'1');
                break;
            }
            index -= 1;
            if kept[index] == b'9' {
                kept[index] = b'0';
            } else {
                kept[index] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let int_digits = String::from_utf8_lossy(&kept[..split]).into_owned();
    let frac_digits = String::from_utf8_lossy(&kept[split..]).into_owned();
    (int_digits, frac_digits)
}

fn group_integer(int_digits: &str, locale: &LocaleFormat) -> String {
    if int_digits.len() < 3 + locale.min_grouping_digits {
        return int_digits.to_string();
    }

    let head = int_digits.len() % 3;
    let mut grouped = String::with_capacity(int_digits.len() * 2);
    grouped.push_str(&int_digits[..head]);
    for (i, chunk) in int_digits.as_bytes()[head..].chunks(3).enumerate() {
        if head > 0 || i > 0 {
            grouped.push_str(locale.group);
        }
        grouped.push_str(&String::from_utf8_lossy(chunk));
    }
    grouped
}

/// Formats `amount` as US dollars in the `en-US` locale.
///
/// `format_currency(0.0)` yields `"$0.00"`.
pub fn format_currency(amount: f64) -> String {
    // USD/en-US never hits an error path for finite input.
    format_currency_with(amount, "USD", "en-US").unwrap_or_else(|_| amount.to_string())
}

/// Formats `amount` in `currency` using the conventions of `locale`.
///
/// Currencies without a locale-specific symbol are rendered with their ISO
/// code. Unknown locales fall back to `en-US`.
pub fn format_currency_with(
    amount: f64,
    currency: &str,
    locale: &str,
) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite);
    }
    let currency = normalize_currency(currency)?;
    let locale = resolve_locale(locale);

    let (int_digits, frac_digits) = round_decimal(amount, fraction_digits(&currency));
    let mut number = group_integer(&int_digits, locale);
    if !frac_digits.is_empty() {
        number.push_str(locale.decimal);
        number.push_str(&frac_digits);
    }

    let known_symbol = locale
        .symbols
        .iter()
        .find(|(code, _)| *code == currency)
        .map(|(_, symbol)| *symbol);
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    let formatted = match (locale.position, known_symbol) {
        (SymbolPosition::Prefix, Some(symbol)) => format!("{sign}{symbol}{number}"),
        (SymbolPosition::Prefix, None) => format!("{sign}{currency}{NBSP}{number}"),
        (SymbolPosition::Suffix, Some(symbol)) => format!("{sign}{number}{NBSP}{symbol}"),
        (SymbolPosition::Suffix, None) => format!("{sign}{number}{NBSP}{currency}"),
    };
    Ok(formatted)
}
