use crate::input::Game;
use rayon::prelude::*;
use tagsel_match::{Registry, Selector, TagSchema};
use tracing::debug;

/// The games whose tags satisfy the registered criteria, in input order.
pub fn select_games<'g>(
    games: &'g [Game],
    schema: &TagSchema,
    registry: &Registry,
    sequential: bool,
) -> Vec<&'g Game> {
    let selector = Selector::new(registry);
    let tag_count = registry.tag_count();
    let wanted = |game: &&'g Game| {
        let selected = selector.select(&game.values(schema, tag_count));
        if !selected {
            debug!(line = game.start_line, "game rejected");
        }
        selected
    };

    if sequential {
        games.iter().filter(wanted).collect()
    } else {
        games.par_iter().filter(wanted).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_games;
    use tagsel_match::{MatchConfig, Operator, TagCode};

    const GAMES: &str = r#"[Event "Moscow"]
[White "Karpov, Anatoly"]
[Black "Kasparov, Garry"]
[Date "1985.10.15"]

1. e4 c5 0-1

[Event "Linares"]
[White "Kasparov, Garry"]
[Black "Topalov, Veselin"]
[Date "1999.02.20"]

1. e4 d6 1-0

[Event "Tilburg"]
[White "Karpov, Anatoly"]
[Black "Timman, Jan"]
[Date "1979.10.01"]
[SetUp "1"]

1. d4 1/2-1/2
"#;

    fn events(selected: &[&Game]) -> Vec<String> {
        selected.iter().map(|g| g.tags[0].1.clone()).collect()
    }

    #[test]
    fn test_select_in_order() {
        let games = parse_games(GAMES).unwrap();
        let schema = TagSchema::new();
        let mut registry = Registry::new(MatchConfig::default());
        registry.register(TagCode::PSEUDO_PLAYER, "Kasparov", Operator::None).unwrap();

        let parallel = select_games(&games, &schema, &registry, false);
        let sequential = select_games(&games, &schema, &registry, true);
        assert_eq!(events(&parallel), ["Moscow", "Linares"]);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_select_everything_without_criteria() {
        let games = parse_games(GAMES).unwrap();
        let registry = Registry::new(MatchConfig::default());
        let selected = select_games(&games, &TagSchema::new(), &registry, false);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_select_with_setup_gate() {
        let games = parse_games(GAMES).unwrap();
        let mut registry = Registry::new(MatchConfig::new().setup("only".parse().unwrap()));
        registry.register(TagCode::DATE, "1990", Operator::LESS_THAN).unwrap();
        let selected = select_games(&games, &TagSchema::new(), &registry, true);
        assert_eq!(events(&selected), ["Tilburg"]);
    }
}
