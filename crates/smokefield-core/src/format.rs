/// Locale-aware whole-number formatting for calculator output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub group_separator: char,
    /// Numbers with fewer than `3 + min_grouping_digits` digits are not grouped.
    pub min_grouping_digits: usize,
}

impl NumberFormat {
    /// Romanian: `.` between thousands.
    pub const RO: NumberFormat = NumberFormat {
        group_separator: '.',
        min_grouping_digits: 1,
    };

    /// Round half away from zero and group thousands; no decimals.
    pub fn integer(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let rounded = value.round();
        let digits = format!("{:.0}", rounded.abs());
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if rounded < 0.0 {
            out.push('-');
        }
        if digits.len() < 3 + self.min_grouping_digits {
            out.push_str(&digits);
            return out;
        }
        let len = digits.len();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(c);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::RO
    }
}
