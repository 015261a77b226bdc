//! Whole-record verdicts.

use crate::config::SetupMode;
use crate::matcher::{matches, matches_date, matches_elo, matches_time_control};
use crate::registry::Registry;
use crate::tag::{TagCode, TagKind, TagValues};
use tracing::debug;

/// Evaluates records against a finished [`Registry`].
///
/// Holds only a shared borrow, so one registry can back any number of
/// selectors on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'r> {
    registry: &'r Registry,
}

impl<'r> Selector<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Check every constrained tag except ECO.
    ///
    /// The either-player and either-rating criteria try White first and fall
    /// back to Black. Every other constrained tag must be present and match.
    ///
    /// # Panics
    ///
    /// If the record's tag space differs from the registry's, which means the
    /// caller and the registry disagree about the tag schema.
    pub fn overall_match(&self, record: &TagValues) -> bool {
        if !self.registry.has_criteria() {
            return true;
        }
        let tag_count = self.registry.tag_count();
        assert_eq!(
            record.len(),
            tag_count,
            "internal error: record has {} tags but the registry has {}",
            record.len(),
            tag_count
        );

        let config = self.registry.config();

        let players = self.registry.criteria(TagCode::PSEUDO_PLAYER);
        if !players.is_empty()
            && !either(record, TagCode::WHITE, TagCode::BLACK, |tag, value| {
                matches(config, tag, value, players)
            })
        {
            debug!("no player matched");
            return false;
        }

        let ratings = self.registry.criteria(TagCode::PSEUDO_ELO);
        if !ratings.is_empty()
            && !either(record, TagCode::WHITE_ELO, TagCode::BLACK_ELO, |_, value| {
                matches_elo(value, ratings)
            })
        {
            debug!("no rating matched");
            return false;
        }

        (0..tag_count)
            .map(TagCode::new)
            .filter(|&tag| {
                !matches!(tag, TagCode::PSEUDO_PLAYER | TagCode::PSEUDO_ELO | TagCode::ECO)
            })
            .all(|tag| self.check_tag(record, tag))
    }

    /// Check just the ECO tag.
    pub fn eco_match(&self, record: &TagValues) -> bool {
        !self.registry.has_criteria() || self.check_tag(record, TagCode::ECO)
    }

    /// Check the SetUp tag against the configured setup mode.
    pub fn setup_gate(&self, record: &TagValues) -> bool {
        match self.registry.config().setup {
            SetupMode::Any => true,
            SetupMode::Absent => record.get(TagCode::SETUP).is_none(),
            SetupMode::Required => record.get(TagCode::SETUP).is_some(),
        }
    }

    /// The full verdict: setup gate, then ECO, then everything else.
    pub fn select(&self, record: &TagValues) -> bool {
        self.setup_gate(record) && self.eco_match(record) && self.overall_match(record)
    }

    fn check_tag(&self, record: &TagValues, tag: TagCode) -> bool {
        let criteria = self.registry.criteria(tag);
        if criteria.is_empty() {
            return true;
        }
        let Some(value) = record.get(tag) else {
            debug!(%tag, "required tag missing");
            return false;
        };
        let wanted = match tag.kind() {
            TagKind::Date => matches_date(value, criteria),
            TagKind::Elo => matches_elo(value, criteria),
            TagKind::TimeControl => matches_time_control(value, criteria),
            TagKind::Text | TagKind::Position => {
                matches(self.registry.config(), tag, value, criteria)
            }
        };
        if !wanted {
            debug!(%tag, value, "tag did not match");
        }
        wanted
    }
}

/// Try `first`'s value, falling back to `second`'s when absent or unmatched.
fn either<F>(record: &TagValues, first: TagCode, second: TagCode, mut check: F) -> bool
where
    F: FnMut(TagCode, &str) -> bool,
{
    let first_matched = record
        .get(first)
        .is_some_and(|value| check(first, value));
    first_matched || record.get(second).is_some_and(|value| check(second, value))
}
