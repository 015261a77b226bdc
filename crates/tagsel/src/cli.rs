use crate::error::{Error, Result};
use clap::Parser;
use std::path::PathBuf;
use tagsel_match::{MatchConfig, Operator, Registry, SetupMode, TagCode, TagSchema};

#[derive(Parser, Debug)]
#[command(
    name = "tagsel",
    about = "Select chess games by their tag values",
    version
)]
pub struct Cli {
    /// PGN file to filter, or "-" to read from stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Criterion given as a type letter and a pattern, e.g. "wKasparov" or "d1990".
    /// Letters: a(nnotator) b(lack) d(ate) e(co) f(en) h(ashcode) p(layer) r(esult)
    /// t(ime control) w(hite)
    #[arg(short = 't', long = "tag-arg", value_name = "LETTER+PATTERN")]
    pub tag_args: Vec<String>,

    /// Criterion on a named tag. The pattern may start with an operator:
    /// <, <=, >, >=, =, <> or ~ (regex). "Player" and "Elo" mean either side.
    #[arg(short = 'T', long = "tag", value_name = "NAME=PATTERN")]
    pub tags: Vec<String>,

    /// Compare player, event, site and annotator names phonetically
    #[arg(short = 'S', long)]
    pub soundex: bool,

    /// Let plain patterns match anywhere in a tag value
    #[arg(long)]
    pub anywhere: bool,

    /// Games with a SetUp tag: any, none or only
    #[arg(long, default_value = "any")]
    pub setup: SetupMode,

    /// Evaluate games one at a time instead of in parallel
    #[arg(short, long)]
    pub sequential: bool,

    /// Log why games are rejected
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::new()
            .soundex(self.soundex)
            .anywhere(self.anywhere)
            .setup(self.setup)
    }

    /// Register every criterion given on the command line.
    pub fn build_registry(&self) -> Result<(TagSchema, Registry)> {
        let mut schema = TagSchema::new();
        let mut registry = Registry::new(self.match_config());

        for argument in &self.tag_args {
            registry.register_argument(argument)?;
        }

        for criterion in &self.tags {
            let (name, rest) = criterion
                .split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| Error::InvalidCriterion(criterion.clone()))?;
            let tag = match name {
                "Player" => TagCode::PSEUDO_PLAYER,
                "Elo" => TagCode::PSEUDO_ELO,
                _ => schema.intern(name)?,
            };
            let (operator, pattern) = Operator::split_prefixed(rest);
            registry.register(tag, pattern, operator)?;
        }

        registry.reserve_tags(schema.len())?;
        Ok((schema, registry))
    }
}
