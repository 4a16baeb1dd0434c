use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseEquationError;
use crate::math::Tolerant;

/// One term of an equation: a named unknown with a coefficient, or a constant.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationSegment {
    unknown: Option<String>,
    factor: f64,
}

impl EquationSegment {
    pub fn constant(value: f64) -> Self {
        Self { unknown: None, factor: value }
    }

    pub fn unknown(name: impl Into<String>, coefficient: f64) -> Self {
        Self {
            unknown: Some(name.into()),
            factor: coefficient,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.unknown.is_none()
    }

    /// Name of the unknown, `None` for constants.
    pub fn name(&self) -> Option<&str> {
        self.unknown.as_deref()
    }

    /// Coefficient of the unknown, or the value of a constant.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn negate(&self) -> Self {
        Self {
            unknown: self.unknown.clone(),
            factor: -self.factor,
        }
    }

    pub fn divide(&self, divisor: f64) -> Self {
        Self {
            unknown: self.unknown.clone(),
            factor: self.factor / divisor,
        }
    }

    /// Sums two constants or two terms of the same unknown.
    pub fn add_up(&self, other: &EquationSegment) -> Option<Self> {
        if self.unknown != other.unknown {
            return None;
        }
        Some(Self {
            unknown: self.unknown.clone(),
            factor: self.factor + other.factor,
        })
    }
}

impl fmt::Display for EquationSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.factor < 0.0 { '-' } else { '+' };
        let magnitude = self.factor.abs();
        match &self.unknown {
            Some(name) if magnitude == 1.0 => write!(f, "{sign} {name}"),
            Some(name) => write!(f, "{sign} {magnitude}{name}"),
            None => write!(f, "{sign} {magnitude}"),
        }
    }
}

/// A linear equation with an ordered left and right side.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Equation {
    left: Vec<EquationSegment>,
    right: Vec<EquationSegment>,
}

impl Equation {
    pub fn new(left: Vec<EquationSegment>, right: Vec<EquationSegment>) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &[EquationSegment] {
        &self.left
    }

    pub fn right(&self) -> &[EquationSegment] {
        &self.right
    }

    /// Distinct unknown names on either side, alphabetically.
    pub fn unknowns(&self) -> BTreeSet<String> {
        self.left
            .iter()
            .chain(self.right.iter())
            .filter_map(|s| s.name().map(str::to_owned))
            .collect()
    }

    pub fn unknown_count(&self) -> usize {
        self.unknowns().len()
    }

    pub fn constants(&self) -> impl Iterator<Item = &EquationSegment> {
        self.left.iter().chain(self.right.iter()).filter(|s| s.is_constant())
    }

    /// All segments, left side first.
    pub fn segments(&self) -> impl Iterator<Item = &EquationSegment> {
        self.left.iter().chain(self.right.iter())
    }

    /// Normalizes over this equation's own unknowns. See [`Equation::normalize_with`].
    pub fn normalize(&self) -> Equation {
        self.normalize_with(&self.unknowns())
    }

    /// Collects every term of each unknown into one left-side segment (sorted by
    /// name) and every constant into one right-side segment. Unknowns from
    /// `all_unknowns` missing here get a zero coefficient.
    pub fn normalize_with(&self, all_unknowns: &BTreeSet<String>) -> Equation {
        let mut names = self.unknowns();
        names.extend(all_unknowns.iter().cloned());

        let left = names
            .into_iter()
            .map(|name| {
                let coefficient = self.side_sum(&self.left, Some(&name))
                    - self.side_sum(&self.right, Some(&name));
                EquationSegment::unknown(name, coefficient)
            })
            .collect();

        let constant = self.side_sum(&self.right, None) - self.side_sum(&self.left, None);

        Equation {
            left,
            right: vec![EquationSegment::constant(constant)],
        }
    }

    fn side_sum(&self, side: &[EquationSegment], name: Option<&str>) -> f64 {
        side.iter()
            .filter(|s| s.name() == name)
            .map(EquationSegment::factor)
            .sum()
    }

    /// Solves an equation with exactly one unknown. `None` when there are more or
    /// fewer unknowns, or the unknown's coefficient is tolerant-zero.
    pub fn try_solve(&self) -> Option<f64> {
        if self.unknown_count() != 1 {
            return None;
        }
        let normalized = self.normalize();
        let coefficient = normalized.left[0].factor;
        if Tolerant(coefficient).is_zero() {
            return None;
        }
        Some(normalized.right[0].factor / coefficient)
    }
}

fn fmt_side(f: &mut fmt::Formatter<'_>, side: &[EquationSegment]) -> fmt::Result {
    let Some((first, rest)) = side.split_first() else {
        return write!(f, "0");
    };
    let first = first.to_string();
    match first.strip_prefix("+ ") {
        Some(positive) => write!(f, "{positive}")?,
        None => write!(f, "-{}", &first[2..])?,
    }
    for segment in rest {
        write!(f, " {segment}")?;
    }
    Ok(())
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_side(f, &self.left)?;
        write!(f, " = ")?;
        fmt_side(f, &self.right)
    }
}

impl FromStr for Equation {
    type Err = ParseEquationError;

    /// Parses text such as `"2x - y = 10"` or `"0.5a + 3 = b"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sides = s.split('=');
        let (Some(left), Some(right)) = (sides.next(), sides.next()) else {
            return Err(ParseEquationError::MissingEquals);
        };
        if sides.next().is_some() {
            return Err(ParseEquationError::MultipleEquals);
        }
        Ok(Equation::new(parse_side(left)?, parse_side(right)?))
    }
}

fn parse_side(side: &str) -> Result<Vec<EquationSegment>, ParseEquationError> {
    let mut segments = Vec::new();
    let mut chars = side.chars().peekable();
    let mut sign = 1.0;

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
            }
            '-' => {
                chars.next();
                sign = -sign;
            }
            c if c.is_ascii_digit() || c == '.' || c.is_alphabetic() => {
                let mut number = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        number.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }

                let mut name = String::new();
                if chars.peek().is_some_and(|d| d.is_alphabetic()) {
                    while let Some(&d) = chars.peek() {
                        if d.is_alphanumeric() || d == '_' {
                            name.push(d);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                }

                let factor = if number.is_empty() {
                    1.0
                } else {
                    number
                        .parse::<f64>()
                        .map_err(|_| ParseEquationError::InvalidNumber(number.clone()))?
                };

                segments.push(if name.is_empty() {
                    EquationSegment::constant(sign * factor)
                } else {
                    EquationSegment::unknown(name, sign * factor)
                });
                sign = 1.0;
            }
            other => return Err(ParseEquationError::UnexpectedChar(other)),
        }
    }

    Ok(segments)
}
