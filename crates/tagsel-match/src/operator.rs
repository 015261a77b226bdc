//! Operators attached to criteria.

use crate::error::Error;
use std::str::FromStr;

/// A numeric comparison between a record value (lhs) and a criterion (rhs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl Relation {
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Relation::Equal => lhs == rhs,
            Relation::NotEqual => lhs != rhs,
            Relation::LessThan => lhs < rhs,
            Relation::LessOrEqual => lhs <= rhs,
            Relation::GreaterThan => lhs > rhs,
            Relation::GreaterOrEqual => lhs >= rhs,
        }
    }
}

/// How a criterion's pattern is compared with a tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// Plain text: prefix match, or substring match when matching anywhere.
    #[default]
    None,
    Relational(Relation),
    Regex,
}

// Longest tokens first so that "<=" is not read as "<".
const TOKENS: [(&str, Operator); 9] = [
    ("<=", Operator::Relational(Relation::LessOrEqual)),
    (">=", Operator::Relational(Relation::GreaterOrEqual)),
    ("<>", Operator::Relational(Relation::NotEqual)),
    ("!=", Operator::Relational(Relation::NotEqual)),
    ("==", Operator::Relational(Relation::Equal)),
    ("=", Operator::Relational(Relation::Equal)),
    ("<", Operator::Relational(Relation::LessThan)),
    (">", Operator::Relational(Relation::GreaterThan)),
    ("~", Operator::Regex),
];

impl Operator {
    pub const EQUAL: Operator = Operator::Relational(Relation::Equal);
    pub const NOT_EQUAL: Operator = Operator::Relational(Relation::NotEqual);
    pub const LESS_THAN: Operator = Operator::Relational(Relation::LessThan);
    pub const LESS_OR_EQUAL: Operator = Operator::Relational(Relation::LessOrEqual);
    pub const GREATER_THAN: Operator = Operator::Relational(Relation::GreaterThan);
    pub const GREATER_OR_EQUAL: Operator = Operator::Relational(Relation::GreaterOrEqual);

    pub fn relation(self) -> Option<Relation> {
        match self {
            Operator::Relational(relation) => Some(relation),
            Operator::None | Operator::Regex => None,
        }
    }

    /// Split a leading operator token off `text`.
    ///
    /// `"<=2000"` gives `(LESS_OR_EQUAL, "2000")`; text without a leading
    /// operator is returned whole with [`Operator::None`].
    pub fn split_prefixed(text: &str) -> (Operator, &str) {
        TOKENS
            .iter()
            .find_map(|(token, op)| text.strip_prefix(*token).map(|rest| (*op, rest)))
            .unwrap_or((Operator::None, text))
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Operator::None);
        }
        TOKENS
            .iter()
            .find(|(token, _)| *token == s)
            .map(|(_, op)| *op)
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}
