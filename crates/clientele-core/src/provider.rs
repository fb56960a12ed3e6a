use std::sync::{Arc, LazyLock};

use crate::formatter::CustomFormatter;

/// Locale-style formatting capability consumed by record rendering.
///
/// Providers supply grouped decimal rendering and answer capability lookups;
/// a provider that performs custom formatting of whole values advertises it
/// through [`FormatProvider::custom_formatter`].
pub trait FormatProvider: Send + Sync {
    /// Render `value` with grouped integer digits and exactly
    /// `fraction_digits` digits after the decimal point.
    fn format_decimal(&self, value: f64, fraction_digits: u8) -> String;

    /// Capability lookup: providers without a custom formatter answer `None`.
    fn custom_formatter(&self) -> Option<&dyn CustomFormatter> {
        None
    }
}

/// Number style settings backing [`FormatProvider`] for plain locales.
///
/// The default style groups integer digits with `,` and uses `.` as the
/// decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleProvider {
    grouping_separator: char,
    decimal_point: char,
}

const GROUP_SIZE: usize = 3;

impl LocaleProvider {
    pub const fn new(grouping_separator: char, decimal_point: char) -> Self {
        Self {
            grouping_separator,
            decimal_point,
        }
    }

    pub const fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    pub const fn with_decimal_point(mut self, point: char) -> Self {
        self.decimal_point = point;
        self
    }

    /// Process-wide default provider, resolved exactly once.
    pub fn current() -> Arc<Self> {
        static CURRENT: LazyLock<Arc<LocaleProvider>> =
            LazyLock::new(|| Arc::new(LocaleProvider::default()));
        Arc::clone(&CURRENT)
    }
}

impl Default for LocaleProvider {
    fn default() -> Self {
        Self::new(',', '.')
    }
}

impl FormatProvider for LocaleProvider {
    fn format_decimal(&self, value: f64, fraction_digits: u8) -> String {
        let rendered = format!("{value:.precision$}", precision = fraction_digits as usize);
        if !value.is_finite() {
            return rendered;
        }

        let (sign, magnitude) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered.as_str()),
        };
        let (int_part, frac_part) = match magnitude.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (magnitude, None),
        };

        let mut grouped = String::with_capacity(rendered.len() + int_part.len() / GROUP_SIZE);
        grouped.push_str(sign);
        for (index, digit) in int_part.chars().enumerate() {
            if index > 0 && (int_part.len() - index) % GROUP_SIZE == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(digit);
        }
        if let Some(frac_part) = frac_part {
            grouped.push(self.decimal_point);
            grouped.push_str(frac_part);
        }

        grouped
    }
}
