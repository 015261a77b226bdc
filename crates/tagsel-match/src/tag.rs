//! Tag codes, the tag schema and per-record tag values.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Number of tag codes known before any configuration takes place.
pub const PREDEFINED_TAG_COUNT: usize = 40;

/// Upper bound on the tag-code space. Registrations beyond it are dropped.
pub const MAX_TAG_CODES: usize = 1 << 16;

/// Integer identifier of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagCode(usize);

impl TagCode {
    pub const EVENT: TagCode = TagCode(0);
    pub const SITE: TagCode = TagCode(1);
    pub const DATE: TagCode = TagCode(2);
    pub const ROUND: TagCode = TagCode(3);
    pub const WHITE: TagCode = TagCode(4);
    pub const BLACK: TagCode = TagCode(5);
    pub const RESULT: TagCode = TagCode(6);
    /// Either player: matched against White, then Black.
    pub const PSEUDO_PLAYER: TagCode = TagCode(7);
    /// Either rating: matched against WhiteElo, then BlackElo.
    pub const PSEUDO_ELO: TagCode = TagCode(8);
    pub const WHITE_TITLE: TagCode = TagCode(9);
    pub const BLACK_TITLE: TagCode = TagCode(10);
    pub const WHITE_ELO: TagCode = TagCode(11);
    pub const BLACK_ELO: TagCode = TagCode(12);
    pub const WHITE_USCF: TagCode = TagCode(13);
    pub const BLACK_USCF: TagCode = TagCode(14);
    pub const WHITE_NA: TagCode = TagCode(15);
    pub const BLACK_NA: TagCode = TagCode(16);
    pub const WHITE_TYPE: TagCode = TagCode(17);
    pub const BLACK_TYPE: TagCode = TagCode(18);
    pub const EVENT_DATE: TagCode = TagCode(19);
    pub const EVENT_SPONSOR: TagCode = TagCode(20);
    pub const SECTION: TagCode = TagCode(21);
    pub const STAGE: TagCode = TagCode(22);
    pub const BOARD: TagCode = TagCode(23);
    pub const OPENING: TagCode = TagCode(24);
    pub const VARIATION: TagCode = TagCode(25);
    pub const SUB_VARIATION: TagCode = TagCode(26);
    pub const ECO: TagCode = TagCode(27);
    pub const NIC: TagCode = TagCode(28);
    pub const TIME: TagCode = TagCode(29);
    pub const UTC_TIME: TagCode = TagCode(30);
    pub const UTC_DATE: TagCode = TagCode(31);
    pub const TIME_CONTROL: TagCode = TagCode(32);
    pub const SETUP: TagCode = TagCode(33);
    /// Board position; criteria for it go to a [`crate::PositionMatcher`].
    pub const FEN: TagCode = TagCode(34);
    pub const TERMINATION: TagCode = TagCode(35);
    pub const ANNOTATOR: TagCode = TagCode(36);
    pub const MODE: TagCode = TagCode(37);
    pub const PLY_COUNT: TagCode = TagCode(38);
    pub const HASH_CODE: TagCode = TagCode(39);

    pub const fn new(index: usize) -> Self {
        TagCode(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub fn kind(self) -> TagKind {
        match self {
            TagCode::DATE => TagKind::Date,
            TagCode::WHITE_ELO | TagCode::BLACK_ELO | TagCode::PSEUDO_ELO => TagKind::Elo,
            TagCode::TIME_CONTROL => TagKind::TimeControl,
            TagCode::FEN => TagKind::Position,
            _ => TagKind::Text,
        }
    }

    /// Tags whose values are personal or place names, eligible for
    /// phonetic matching.
    pub fn is_name_like(self) -> bool {
        matches!(
            self,
            TagCode::WHITE
                | TagCode::BLACK
                | TagCode::PSEUDO_PLAYER
                | TagCode::EVENT
                | TagCode::SITE
                | TagCode::ANNOTATOR
        )
    }
}

impl TryFrom<i64> for TagCode {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self> {
        usize::try_from(raw)
            .ok()
            .filter(|&index| index < MAX_TAG_CODES)
            .map(TagCode)
            .ok_or(Error::InvalidTag(raw))
    }
}

impl fmt::Display for TagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How values of a tag are compared against criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Text,
    Date,
    Elo,
    TimeControl,
    Position,
}

// Indexed by tag code. Pseudo tags have no name in a game's tag section.
const PREDEFINED_NAMES: [&str; PREDEFINED_TAG_COUNT] = [
    "Event",
    "Site",
    "Date",
    "Round",
    "White",
    "Black",
    "Result",
    "",
    "",
    "WhiteTitle",
    "BlackTitle",
    "WhiteElo",
    "BlackElo",
    "WhiteUSCF",
    "BlackUSCF",
    "WhiteNA",
    "BlackNA",
    "WhiteType",
    "BlackType",
    "EventDate",
    "EventSponsor",
    "Section",
    "Stage",
    "Board",
    "Opening",
    "Variation",
    "SubVariation",
    "ECO",
    "NIC",
    "Time",
    "UTCTime",
    "UTCDate",
    "TimeControl",
    "SetUp",
    "FEN",
    "Termination",
    "Annotator",
    "Mode",
    "PlyCount",
    "HashCode",
];

/// Mapping between tag names and tag codes.
///
/// Starts with the predefined tags and grows as novel tag names are interned
/// during configuration. It never shrinks.
#[derive(Debug, Clone)]
pub struct TagSchema {
    names: Vec<String>,
    codes: HashMap<String, TagCode>,
}

impl TagSchema {
    pub fn new() -> Self {
        let mut schema = Self {
            names: Vec::with_capacity(PREDEFINED_TAG_COUNT),
            codes: HashMap::new(),
        };
        for (index, name) in PREDEFINED_NAMES.iter().enumerate() {
            schema.names.push(name.to_string());
            if !name.is_empty() {
                schema.codes.insert(name.to_string(), TagCode(index));
            }
        }
        schema
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn code_for(&self, name: &str) -> Option<TagCode> {
        self.codes.get(name).copied()
    }

    pub fn name(&self, code: TagCode) -> Option<&str> {
        self.names
            .get(code.index())
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Return the code for `name`, allocating a fresh one for novel tags.
    pub fn intern(&mut self, name: &str) -> Result<TagCode> {
        if let Some(code) = self.code_for(name) {
            return Ok(code);
        }
        let code = TagCode::try_from(self.names.len() as i64)?;
        self.names.push(name.to_string());
        self.codes.insert(name.to_string(), code);
        Ok(code)
    }
}

impl Default for TagSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// The tag values of one record, indexed by tag code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagValues {
    values: Vec<Option<String>>,
}

impl TagValues {
    pub fn with_len(len: usize) -> Self {
        Self {
            values: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, tag: TagCode) -> Option<&str> {
        self.values.get(tag.index()).and_then(|v| v.as_deref())
    }

    /// Set the value of `tag`, widening the record if `tag` lies beyond it.
    pub fn set(&mut self, tag: TagCode, value: impl Into<String>) {
        if tag.index() >= self.values.len() {
            self.values.resize(tag.index() + 1, None);
        }
        self.values[tag.index()] = Some(value.into());
    }

    pub fn with(mut self, tag: TagCode, value: impl Into<String>) -> Self {
        self.set(tag, value);
        self
    }
}
