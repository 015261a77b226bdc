//! Matching a single tag value against the criteria for its tag.
//!
//! Plain-text alternatives are OR-ed. Relational criteria on a numeric value
//! must all hold. Regular expressions are a last resort. Dates, ratings and
//! time controls have matchers of their own.

use crate::config::MatchConfig;
use crate::operator::Operator;
use crate::registry::{date_operator, Criterion};
use crate::scalar::{leading_float, leading_unsigned, looks_numeric, GameDate, TimeControl};
use crate::soundex::soundex;
use crate::tag::TagCode;

/// Match `value` of `tag` against a general list of criteria.
pub fn matches(config: &MatchConfig, tag: TagCode, value: &str, criteria: &[Criterion]) -> bool {
    let code;
    let candidate = if config.use_soundex && tag.is_name_like() {
        code = soundex(value);
        code.as_str()
    } else {
        value
    };

    let plain = criteria
        .iter()
        .filter(|c| c.operator() == Operator::None)
        .any(|c| {
            if config.match_anywhere {
                candidate.contains(c.pattern())
            } else {
                candidate.starts_with(c.pattern())
            }
        });
    if plain {
        return true;
    }

    let has_relations = criteria.iter().any(|c| c.operator().relation().is_some());
    if has_relations && looks_numeric(candidate) {
        // Unparseable numbers on either side leave the verdict alone.
        let all_hold = criteria
            .iter()
            .filter_map(|c| c.operator().relation().map(|relation| (relation, c)))
            .all(|(relation, c)| {
                match (leading_float(candidate), leading_float(c.pattern())) {
                    (Some(lhs), Some(rhs)) => relation.holds(lhs, rhs),
                    _ => true,
                }
            });
        if all_hold {
            return true;
        }
    }

    criteria
        .iter()
        .filter_map(Criterion::regex)
        .any(|regex| regex.is_match(candidate))
}

/// Match a Date value.
///
/// Relational criteria are AND-ed together while plain prefixes are OR-ed,
/// with the first criterion seeding the verdict. A later plain criterion can
/// turn a rejection into a match but never the reverse.
pub fn matches_date(value: &str, criteria: &[Criterion]) -> bool {
    let Some(game_date) = GameDate::parse(value) else {
        return false;
    };
    let encoded = game_date.encode();

    let mut wanted = false;
    for (index, criterion) in criteria.iter().enumerate() {
        let (operator, pattern) = date_operator(criterion.pattern(), criterion.operator());
        match operator {
            Operator::Relational(relation) => {
                wanted = match GameDate::parse(pattern) {
                    Some(limit) if game_date.year_in_range() => {
                        let holds = relation.holds(encoded, limit.encode());
                        if index == 0 {
                            holds
                        } else {
                            wanted && holds
                        }
                    }
                    _ => false,
                };
            }
            Operator::None => {
                if index == 0 || !wanted {
                    wanted = value.starts_with(pattern);
                }
            }
            // Dates have no regex comparison.
            Operator::Regex => wanted = false,
        }
    }
    wanted
}

/// Match an Elo rating. Any satisfied criterion is enough.
pub fn matches_elo(value: &str, criteria: &[Criterion]) -> bool {
    let Some(elo) = leading_unsigned(value) else {
        return false;
    };
    matches_period(value, elo, criteria)
}

/// Match a TimeControl value by its first control. Any satisfied criterion
/// is enough.
pub fn matches_time_control(value: &str, criteria: &[Criterion]) -> bool {
    match TimeControl::parse(value) {
        Some(tc) => matches_period(tc.control, tc.period, criteria),
        None => false,
    }
}

fn matches_period(text: &str, number: u32, criteria: &[Criterion]) -> bool {
    criteria.iter().any(|c| match c.operator() {
        Operator::None => text.starts_with(c.pattern()),
        Operator::Relational(relation) => leading_unsigned(c.pattern())
            .is_some_and(|limit| relation.holds(f64::from(number), f64::from(limit))),
        Operator::Regex => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[(&str, Operator)]) -> Vec<Criterion> {
        entries
            .iter()
            .map(|(pattern, op)| Criterion::new(*pattern, *op))
            .collect()
    }

    fn prefix() -> MatchConfig {
        MatchConfig::default()
    }

    #[test]
    fn test_prefix_match() {
        let criteria = list(&[("Smith", Operator::None)]);
        assert!(matches(&prefix(), TagCode::WHITE, "Smith, John", &criteria));
        assert!(!matches(&prefix(), TagCode::WHITE, "John Smith", &criteria));
    }

    #[test]
    fn test_anywhere_match() {
        let config = MatchConfig::new().anywhere(true);
        let criteria = list(&[("Smith", Operator::None)]);
        assert!(matches(&config, TagCode::WHITE, "Smith, John", &criteria));
        assert!(matches(&config, TagCode::WHITE, "John Smith", &criteria));
        assert!(!matches(&config, TagCode::WHITE, "John Smyth", &criteria));
    }

    #[test]
    fn test_plain_alternatives_or() {
        let criteria = list(&[("Tal", Operator::None), ("Fischer", Operator::None)]);
        assert!(matches(&prefix(), TagCode::BLACK, "Fischer, Robert J.", &criteria));
        assert!(!matches(&prefix(), TagCode::BLACK, "Spassky", &criteria));
    }

    #[test]
    fn test_soundex_candidate() {
        let config = MatchConfig::new().soundex(true);
        let criteria = list(&[(soundex("Nimzowitsch").as_str(), Operator::None)]);
        assert!(matches(&config, TagCode::WHITE, "Nimzovich", &criteria));
        // Not a name-like tag: compared literally.
        assert!(!matches(&config, TagCode::ROUND, "Nimzovich", &criteria));
    }

    #[test]
    fn test_relations_and() {
        let criteria = list(&[("40", Operator::GREATER_THAN), ("60", Operator::LESS_THAN)]);
        assert!(matches(&prefix(), TagCode::PLY_COUNT, "52", &criteria));
        assert!(!matches(&prefix(), TagCode::PLY_COUNT, "70", &criteria));
        assert!(!matches(&prefix(), TagCode::PLY_COUNT, "30", &criteria));
    }

    #[test]
    fn test_relations_skip_non_numeric_candidate() {
        let criteria = list(&[("40", Operator::GREATER_THAN)]);
        assert!(!matches(&prefix(), TagCode::PLY_COUNT, "about 50", &criteria));
    }

    #[test]
    fn test_relations_unparseable_pattern_ignored() {
        let criteria = list(&[("many", Operator::GREATER_THAN), ("60", Operator::LESS_THAN)]);
        assert!(matches(&prefix(), TagCode::PLY_COUNT, "52", &criteria));
    }

    #[test]
    fn test_relations_unparseable_candidate_ignored() {
        let criteria = list(&[("5", Operator::GREATER_THAN)]);
        assert!(matches(&prefix(), TagCode::ROUND, "-", &criteria));
        assert!(matches(&prefix(), TagCode::ROUND, ".", &criteria));
        assert!(matches(&prefix(), TagCode::ROUND, "", &criteria));
    }

    #[test]
    fn test_relations_tolerate_multiple_dots() {
        let criteria = list(&[("1", Operator::GREATER_THAN)]);
        assert!(matches(&prefix(), TagCode::ROUND, "3.1.2", &criteria));
    }

    #[test]
    fn test_relations_not_prefix_matched() {
        let criteria = list(&[("60", Operator::LESS_THAN)]);
        assert!(!matches(&prefix(), TagCode::PLY_COUNT, "600", &criteria));
    }

    #[test]
    fn test_plain_wins_before_relations() {
        let criteria = list(&[("7", Operator::None), ("5", Operator::LESS_THAN)]);
        assert!(matches(&prefix(), TagCode::ROUND, "7", &criteria));
    }

    #[test]
    fn test_regex_fallback() {
        let criteria = list(&[("^World.*Championship$", Operator::Regex)]);
        assert!(matches(&prefix(), TagCode::EVENT, "World Chess Championship", &criteria));
        assert!(!matches(&prefix(), TagCode::EVENT, "Hoogovens", &criteria));
    }

    #[test]
    fn test_regex_unanchored() {
        let criteria = list(&[("Open", Operator::Regex)]);
        assert!(matches(&prefix(), TagCode::EVENT, "Reykjavik Open 2024", &criteria));
    }

    #[test]
    fn test_regex_invalid_skipped() {
        let criteria = list(&[("(", Operator::Regex), ("Open$", Operator::Regex)]);
        assert!(matches(&prefix(), TagCode::EVENT, "Gibraltar Open", &criteria));
        assert!(!matches(&prefix(), TagCode::EVENT, "(", &criteria));
    }

    #[test]
    fn test_regex_ignored_by_relations() {
        let criteria = list(&[("^9", Operator::Regex)]);
        assert!(!matches(&prefix(), TagCode::ROUND, "5", &criteria));
        assert!(matches(&prefix(), TagCode::ROUND, "9", &criteria));
    }

    #[test]
    fn test_empty_list_never_matches() {
        assert!(!matches(&prefix(), TagCode::EVENT, "anything", &[]));
    }

    #[test]
    fn test_date_relations_and() {
        let criteria = list(&[("1990", Operator::GREATER_THAN), ("2000", Operator::LESS_THAN)]);
        assert!(matches_date("1995.06.01", &criteria));
        assert!(!matches_date("2005.01.01", &criteria));
        assert!(!matches_date("1985.01.01", &criteria));
    }

    #[test]
    fn test_date_before_after_letters() {
        let criteria = list(&[("a1990", Operator::None), ("b2000.06", Operator::None)]);
        assert!(matches_date("2000.05.31", &criteria));
        assert!(!matches_date("2000.06.02", &criteria));
        assert!(!matches_date("1990.01.01", &criteria));
    }

    #[test]
    fn test_date_plain_prefix() {
        let criteria = list(&[("1972", Operator::None)]);
        assert!(matches_date("1972.07.11", &criteria));
        assert!(!matches_date("1973.07.11", &criteria));
    }

    #[test]
    fn test_date_later_plain_only_raises() {
        let criteria = list(&[("1972", Operator::None), ("1985", Operator::None)]);
        assert!(matches_date("1985.09.03", &criteria));

        let criteria = list(&[("b1980", Operator::None), ("1985", Operator::None)]);
        assert!(matches_date("1975.01.01", &criteria));
        assert!(matches_date("1985.01.01", &criteria));
        assert!(!matches_date("1990.01.01", &criteria));
    }

    #[test]
    fn test_date_relation_after_plain_is_anded() {
        let criteria = list(&[("1972", Operator::None), ("a1980", Operator::None)]);
        assert!(!matches_date("1972.07.11", &criteria));
    }

    #[test]
    fn test_date_candidate_unusable() {
        let criteria = list(&[("a1900", Operator::None)]);
        assert!(!matches_date("????.??.??", &criteria));
        // Two-digit years cannot be compared.
        assert!(!matches_date("95.01.01", &criteria));
    }

    #[test]
    fn test_date_bad_pattern_never_matches() {
        let criteria = list(&[("bsometime", Operator::None)]);
        assert!(!matches_date("1995.01.01", &criteria));
    }

    #[test]
    fn test_elo_or() {
        let criteria = list(&[("2700", Operator::GREATER_THAN), ("2800", Operator::GREATER_THAN)]);
        assert!(matches_elo("2750", &criteria));
        assert!(!matches_elo("2650", &criteria));
    }

    #[test]
    fn test_elo_prefix_and_bad_values() {
        let criteria = list(&[("26", Operator::None)]);
        assert!(matches_elo("2650", &criteria));
        assert!(!matches_elo("-", &criteria));
        assert!(!matches_elo("", &criteria));

        let criteria = list(&[("strong", Operator::GREATER_THAN)]);
        assert!(!matches_elo("2650", &criteria));
    }

    #[test]
    fn test_time_control() {
        let criteria = list(&[("7200", Operator::GREATER_OR_EQUAL)]);
        assert!(matches_time_control("40/7200:20/3600", &criteria));
        assert!(!matches_time_control("300+5", &criteria));

        let criteria = list(&[("600", Operator::LESS_THAN)]);
        assert!(matches_time_control("300+5", &criteria));
        assert!(matches_time_control("*180", &criteria));
        assert!(!matches_time_control("-", &criteria));
        assert!(!matches_time_control("?", &criteria));
    }

    #[test]
    fn test_time_control_prefix_uses_first_control() {
        let criteria = list(&[("40/7200", Operator::None)]);
        assert!(matches_time_control("40/7200:20/3600", &criteria));
        let criteria = list(&[("40/7200:20", Operator::None)]);
        assert!(!matches_time_control("40/7200:20/3600", &criteria));
        let criteria = list(&[("-", Operator::None)]);
        assert!(!matches_time_control("-", &criteria));
    }
}
