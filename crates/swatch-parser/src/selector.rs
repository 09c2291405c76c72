//! The selector-path DSL.
//!
//! A path is `>`-separated segments, each naming a node type with an
//! optional `[name='...']` filter; `$` means "stay at the current node":
//!
//! ```text
//! FRAME[name='Body'] > TEXT
//! $
//! INSTANCE > VECTOR[name="{Type} icon"]
//! ```

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, separated_pair},
    IResult,
};
use smallvec::SmallVec;

use swatch_core::{NodeType, SelectorError};

/// A parsed selector path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorPath(pub SmallVec<[Segment; 4]>);

impl SelectorPath {
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.0.iter()
    }
}

/// One path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// `$`: stay at the node reached so far.
    Current,
    /// A typed descendant search. `node_type` is `None` when the spelling
    /// is outside the closed node-type set; the resolver treats such
    /// segments as no-ops. `name` may contain `{Prop}` placeholders.
    Node {
        node_type: Option<NodeType>,
        name: Option<String>,
    },
}

fn ident(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_till(|c| c == '\''), char('\'')),
        delimited(char('"'), take_till(|c| c == '"'), char('"')),
    ))(input)
}

/// `[key='value']`; any key other than `name` parses but is discarded.
fn attribute(input: &str) -> IResult<&str, (&str, &str)> {
    delimited(
        pair(char('['), multispace0),
        separated_pair(
            ident,
            delimited(multispace0, char('='), multispace0),
            quoted,
        ),
        pair(multispace0, char(']')),
    )(input)
}

fn segment(input: &str) -> IResult<&str, Segment> {
    alt((
        map(char('$'), |_| Segment::Current),
        map(
            pair(ident, opt(preceded(multispace0, attribute))),
            |(ty, attr)| Segment::Node {
                node_type: NodeType::parse(ty),
                name: attr.and_then(|(key, value)| {
                    key.eq_ignore_ascii_case("name").then(|| value.to_string())
                }),
            },
        ),
    ))(input)
}

fn path(input: &str) -> IResult<&str, Vec<Segment>> {
    separated_list1(delimited(multispace0, char('>'), multispace0), segment)(input)
}

/// Parse a selector path into its typed segment list.
pub fn parse_selector(input: &str) -> Result<SelectorPath, SelectorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SelectorError::Empty);
    }
    match all_consuming(path)(trimmed) {
        Ok((_, segments)) => Ok(SelectorPath(segments.into_iter().collect())),
        Err(_) => Err(SelectorError::Malformed {
            path: input.to_string(),
        }),
    }
}
