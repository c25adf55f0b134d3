/// 2^127, the first magnitude an `i128` cannot hold.
const I128_BOUND: f64 = 170141183460469231731687303715884105728.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UntypedValue {
    Int(i128),
    Float(f64),
}

/// A numeric constant whose concrete type is decided by its context.
#[derive(Debug, Clone, Copy)]
pub struct UntypedNumberTy<'cx> {
    pub text: &'cx str,
    pub value: UntypedValue,
    is_int: bool,
    is_possible_double: bool,
}

impl<'cx> UntypedNumberTy<'cx> {
    pub(crate) fn from_int(text: &'cx str, value: i128) -> Self {
        Self {
            text,
            value: UntypedValue::Int(value),
            is_int: true,
            is_possible_double: false,
        }
    }

    pub(crate) fn from_float(text: &'cx str, value: f64) -> Self {
        Self {
            text,
            value: UntypedValue::Float(value),
            is_int: value.fract() == 0.0 && value.abs() < I128_BOUND,
            is_possible_double: true,
        }
    }

    /// Whether the value is integral. `2.0` is integral.
    pub fn is_integer(&self) -> bool {
        self.is_int
    }

    /// Whether the constant has floating-point form, either because it was
    /// written that way or because it was folded from one.
    pub fn is_possible_double(&self) -> bool {
        self.is_possible_double
    }

    /// Integral and without floating-point form.
    pub fn is_exact_integer(&self) -> bool {
        self.is_int && !self.is_possible_double
    }

    /// The value truncated towards zero.
    pub fn int_value(&self) -> i128 {
        match self.value {
            UntypedValue::Int(v) => v,
            UntypedValue::Float(v) => v as i128,
        }
    }

    pub fn float_value(&self) -> f64 {
        match self.value {
            UntypedValue::Int(v) => v as f64,
            UntypedValue::Float(v) => v,
        }
    }
}

pub(crate) enum Classified {
    Int(i128),
    Float(f64),
}

/// Classifies literal text. Integer literals may carry a `0x`, `0o`, `0b`
/// or legacy leading-zero octal prefix and `_` separators.
pub(crate) fn classify(text: &str) -> Option<Classified> {
    if let Some(v) = parse_int_literal(text) {
        return Some(Classified::Int(v));
    }
    let cleaned = text.replace('_', "");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(Classified::Float(v)),
        _ => None,
    }
}

fn parse_int_literal(text: &str) -> Option<i128> {
    let (neg, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let (radix, body) = if let Some(body) = lower.strip_prefix("0x") {
        (16, body)
    } else if let Some(body) = lower.strip_prefix("0o") {
        (8, body)
    } else if let Some(body) = lower.strip_prefix("0b") {
        (2, body)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let v = i128::from_str_radix(body, radix).ok()?;
    Some(if neg { -v } else { v })
}
