//! Criteria matching for chess game tag sections.
//!
//! Criteria are registered per tag, each a pattern with an optional
//! operator. A [`Selector`] then decides for each game whether its tag
//! values satisfy them.
//!
//! # Example
//!
//! ```
//! use tagsel_match::{MatchConfig, Operator, Registry, Selector, TagCode, TagValues};
//!
//! let mut registry = Registry::new(MatchConfig::default());
//! registry.register(TagCode::PSEUDO_PLAYER, "Kasparov", Operator::None).unwrap();
//! registry.register(TagCode::DATE, "1990", Operator::GREATER_THAN).unwrap();
//!
//! let game = TagValues::with_len(registry.tag_count())
//!     .with(TagCode::WHITE, "Karpov, Anatoly")
//!     .with(TagCode::BLACK, "Kasparov, Garry")
//!     .with(TagCode::DATE, "1990.10.08");
//!
//! let selector = Selector::new(&registry);
//! assert!(selector.select(&game));
//!
//! let older = game.clone().with(TagCode::DATE, "1985.09.03");
//! assert!(!selector.select(&older));
//! ```

mod config;
mod error;
mod matcher;
mod operator;
mod registry;
mod scalar;
mod selector;
mod soundex;
mod tag;

pub use config::{MatchConfig, SetupMode};
pub use error::{Error, Result};
pub use matcher::{matches, matches_date, matches_elo, matches_time_control};
pub use operator::{Operator, Relation};
pub use registry::{Criterion, PositionMatcher, Registry};
pub use scalar::{
    leading_float, leading_unsigned, looks_numeric, GameDate, TimeControl, MAX_YEAR, MIN_YEAR,
};
pub use selector::Selector;
pub use soundex::{soundex, MAX_SOUNDEX_LEN};
pub use tag::{TagCode, TagKind, TagSchema, TagValues, MAX_TAG_CODES, PREDEFINED_TAG_COUNT};
