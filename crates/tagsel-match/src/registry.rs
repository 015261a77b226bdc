//! The criterion registry: per-tag lists of accepted patterns.

use crate::config::MatchConfig;
use crate::error::{Error, Result};
use crate::operator::Operator;
use crate::scalar::GameDate;
use crate::soundex::soundex;
use crate::tag::{TagCode, TagKind, MAX_TAG_CODES, PREDEFINED_TAG_COUNT};
use regex::Regex;
use std::fmt;
use tracing::warn;

/// Receives board-position patterns, which are matched outside this crate.
pub trait PositionMatcher: Send + Sync {
    fn add_pattern(&mut self, pattern: &str);
}

/// One accepted pattern for a tag.
#[derive(Debug, Clone)]
pub struct Criterion {
    pattern: String,
    operator: Operator,
    regex: Option<Regex>,
}

impl Criterion {
    /// Build a criterion. Regex patterns are compiled here; one that fails
    /// to compile is reported and never matches.
    pub fn new(pattern: impl Into<String>, operator: Operator) -> Self {
        let pattern = pattern.into();
        let regex = match operator {
            Operator::Regex => match Regex::new(&pattern) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "ignoring invalid regular expression");
                    None
                }
            },
            Operator::None | Operator::Relational(_) => None,
        };
        Self {
            pattern,
            operator,
            regex,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The compiled expression of a regex criterion that compiled.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }
}

/// Tag-indexed criteria, built once and then only read.
pub struct Registry {
    config: MatchConfig,
    lists: Vec<Vec<Criterion>>,
    has_criteria: bool,
    position_matcher: Option<Box<dyn PositionMatcher>>,
}

impl Registry {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            lists: (0..PREDEFINED_TAG_COUNT).map(|_| Vec::new()).collect(),
            has_criteria: false,
            position_matcher: None,
        }
    }

    pub fn with_position_matcher(mut self, matcher: Box<dyn PositionMatcher>) -> Self {
        self.position_matcher = Some(matcher);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current size of the tag-code space.
    pub fn tag_count(&self) -> usize {
        self.lists.len()
    }

    /// Whether any criterion was ever registered.
    pub fn has_criteria(&self) -> bool {
        self.has_criteria
    }

    /// Grow the tag-code space to at least `count` codes.
    pub fn reserve_tags(&mut self, count: usize) -> Result<()> {
        if count > MAX_TAG_CODES {
            return Err(Error::InvalidTag(count as i64 - 1));
        }
        if count > self.lists.len() {
            self.lists.resize_with(count, Vec::new);
        }
        Ok(())
    }

    /// The criteria registered for `tag`, empty when it is unconstrained.
    pub fn criteria(&self, tag: TagCode) -> &[Criterion] {
        self.lists.get(tag.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Register a raw tag number, as handed over by configuration parsing.
    /// Invalid numbers are reported and dropped.
    pub fn register_raw(&mut self, tag: i64, pattern: &str, operator: Operator) -> Result<()> {
        match TagCode::try_from(tag) {
            Ok(code) => self.register(code, pattern, operator),
            Err(e) => {
                warn!(tag, "illegal tag number, criterion dropped");
                Err(e)
            }
        }
    }

    /// Add `pattern` to the criteria for `tag`.
    pub fn register(&mut self, tag: TagCode, pattern: &str, operator: Operator) -> Result<()> {
        if tag.index() >= MAX_TAG_CODES {
            warn!(%tag, "illegal tag number, criterion dropped");
            return Err(Error::InvalidTag(i64::try_from(tag.index()).unwrap_or(i64::MAX)));
        }
        self.reserve_tags(tag.index() + 1)?;

        if tag.kind() == TagKind::Position {
            match self.position_matcher.as_mut() {
                Some(matcher) => matcher.add_pattern(pattern),
                None => warn!(pattern, "no position matcher installed, pattern dropped"),
            }
            return Ok(());
        }

        if tag.kind() == TagKind::Date {
            check_date_pattern(pattern, operator);
        }

        let stored = if self.config.use_soundex && tag.is_name_like() {
            soundex(pattern)
        } else {
            pattern.to_string()
        };
        self.lists[tag.index()].push(Criterion::new(stored, operator));
        self.has_criteria = true;
        Ok(())
    }

    /// Register a convenience argument: a type letter followed by the
    /// pattern, e.g. `"wKasparov"` or `"d1990"`.
    pub fn register_argument(&mut self, argument: &str) -> Result<()> {
        let mut chars = argument.chars();
        let tag = match chars.next() {
            Some('a') => TagCode::ANNOTATOR,
            Some('b') => TagCode::BLACK,
            Some('d') => TagCode::DATE,
            Some('e') => TagCode::ECO,
            Some('f') => TagCode::FEN,
            Some('h') => TagCode::HASH_CODE,
            Some('p') => TagCode::PSEUDO_PLAYER,
            Some('r') => TagCode::RESULT,
            Some('t') => TagCode::TIME_CONTROL,
            Some('w') => TagCode::WHITE,
            _ => return Err(Error::UnknownArgumentType(argument.to_string())),
        };
        self.register(tag, chars.as_str(), Operator::None)
    }
}

/// Date patterns are only parsed when records are evaluated; report one
/// that can never be compared up front instead of once per record.
fn check_date_pattern(pattern: &str, operator: Operator) {
    let (operator, date) = date_operator(pattern, operator);
    if operator.relation().is_some() && GameDate::parse(date).is_none() {
        warn!(pattern, "failed to extract year from date criterion");
    }
}

/// The operator that applies to a date pattern: a leading `b` (before)
/// means less-than, a leading `a` (after) greater-than.
pub(crate) fn date_operator(pattern: &str, operator: Operator) -> (Operator, &str) {
    if let Some(rest) = pattern.strip_prefix('b') {
        (Operator::LESS_THAN, rest)
    } else if let Some(rest) = pattern.strip_prefix('a') {
        (Operator::GREATER_THAN, rest)
    } else {
        (operator, pattern)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("lists", &self.lists)
            .field("has_criteria", &self.has_criteria)
            .field("position_matcher", &self.position_matcher.is_some())
            .finish()
    }
}
