//! Splitting PGN text into games and reading their tag pairs.

use crate::error::{Error, Result};
use std::path::Path;
use tagsel_match::{TagSchema, TagValues};
use winnow::ascii::{multispace0, multispace1};
use winnow::combinator::{delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, none_of, take_while};

/// One game: its tag pairs plus the verbatim text to echo on selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub tags: Vec<(String, String)>,
    pub text: String,
    pub start_line: usize,
}

impl Game {
    fn new(start_line: usize) -> Self {
        Self {
            tags: Vec::new(),
            text: String::new(),
            start_line,
        }
    }

    fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    /// The game's tag values laid out for a registry with `tag_count` codes.
    /// Tags the schema does not know cannot be constrained and are left out.
    pub fn values(&self, schema: &TagSchema, tag_count: usize) -> TagValues {
        let mut values = TagValues::with_len(tag_count);
        for (name, value) in &self.tags {
            if let Some(code) = schema.code_for(name).filter(|c| c.index() < tag_count) {
                values.set(code, value.as_str());
            }
        }
        values
    }
}

pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return Ok(std::io::read_to_string(std::io::stdin())?);
    }
    std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_games(content: &str) -> Result<Vec<Game>> {
    let mut games = Vec::new();
    let mut current: Option<Game> = None;
    let mut after_tags = false;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            if after_tags {
                games.extend(current.take());
                after_tags = false;
            }
            let pair = parse_tag_pair(trimmed).ok_or_else(|| Error::MalformedTag {
                line: index + 1,
                text: line.to_string(),
            })?;
            let game = current.get_or_insert_with(|| Game::new(index + 1));
            game.tags.push(pair);
            game.push_line(line);
        } else if let Some(game) = current.as_mut() {
            game.push_line(line);
            after_tags = true;
        } else if !trimmed.is_empty() {
            let game = current.insert(Game::new(index + 1));
            game.push_line(line);
            after_tags = true;
        }
    }

    games.extend(current);
    Ok(games)
}

// ============ Tag pair parsing ============

fn tag_name<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

fn value_char(input: &mut &str) -> ModalResult<char> {
    let c: char = none_of('"').parse_next(input)?;
    if c == '\\' {
        any.parse_next(input)
    } else {
        Ok(c)
    }
}

fn tag_value(input: &mut &str) -> ModalResult<String> {
    delimited(
        '"',
        repeat(0.., value_char).fold(String::new, |mut s, c| {
            s.push(c);
            s
        }),
        '"',
    )
    .parse_next(input)
}

fn tag_pair(input: &mut &str) -> ModalResult<(String, String)> {
    '['.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let name = tag_name.parse_next(input)?;
    let _ = multispace1.parse_next(input)?;
    let value = tag_value.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    ']'.parse_next(input)?;
    Ok((name.to_string(), value))
}

fn parse_tag_pair(line: &str) -> Option<(String, String)> {
    let mut input = line;
    tag_pair.parse_next(&mut input).ok()
}
