// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Compact single-line case format, parse and serialize.
//!
//! The format packs a whole problem instance into one delimiter-separated
//! line:
//!
//! ```raw
//! <original hikers>;<bridge 1>;<bridge 2>;...;<bridge n>
//! original hikers: name1 speed1,name2 speed2,...
//! bridge:          length[,name speed,...]        (joining hikers optional)
//! ```
//!
//! Example: `A 100,B 50,C 20,D 10;100;250,E 2.5;150,F 25,G 15`
//!
//! A bridge segment lists only the hikers NEWLY introduced at that bridge;
//! accumulation across bridges happens in `ExpeditionBuilder`. `serialize`
//! writes the same delta form, so a parsed expedition round-trips to an
//! equivalent one.

use crate::{
    error::ModelError,
    expedition::{Expedition, ExpeditionBuilder},
    hiker::Hiker,
};
use trestle_core::num::CrossingFloat;

/// The error type for compact case parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompactParseError {
    /// The case has fewer than two `;`-separated segments, i.e. no bridge.
    MissingBridges,
    /// A hiker token lacks a name or a speed.
    MalformedHiker {
        /// The offending token.
        token: String,
    },
    /// A token could not be parsed as a number.
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// A parsed value failed entity validation (speed or length out of range).
    Model(ModelError),
}

impl std::fmt::Display for CompactParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBridges => write!(f, "Case format error: No bridge"),
            Self::MalformedHiker { token } => {
                write!(f, "Hiker format error: '{}'", token)
            }
            Self::InvalidNumber { token } => {
                write!(f, "Could not parse token '{}' as a number", token)
            }
            Self::Model(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CompactParseError {}

impl From<ModelError> for CompactParseError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

/// Parses a compact case line into a validated `Expedition`.
///
/// # Errors
///
/// Returns a `CompactParseError` when the segment structure is wrong, a token
/// is not numeric, or a speed/length fails validation.
///
/// # Examples
///
/// ```rust
/// use trestle_model::compact;
///
/// let expedition =
///     compact::parse::<f64>("A 100,B 50,C 20,D 10;100;250,E 2.5").unwrap();
/// assert_eq!(expedition.num_hikers(), 4);
/// assert_eq!(expedition.num_bridges(), 2);
/// assert!(compact::parse::<f64>("A 100").is_err()); // no bridge
/// ```
pub fn parse<T>(input: &str) -> Result<Expedition<T>, CompactParseError>
where
    T: CrossingFloat,
{
    let segments: Vec<&str> = input.split(';').collect();
    if segments.len() < 2 {
        return Err(CompactParseError::MissingBridges);
    }

    let mut builder = ExpeditionBuilder::new();
    for token in segments[0].split(',') {
        builder.add_hiker(parse_hiker(token)?);
    }

    for segment in &segments[1..] {
        let mut items = segment.split(',');
        let length = parse_number(items.next().unwrap_or_default())?;
        let arrivals = items
            .map(parse_hiker)
            .collect::<Result<Vec<Hiker<T>>, CompactParseError>>()?;
        builder.add_bridge(length, arrivals)?;
    }

    Ok(builder.build())
}

/// Serializes an expedition back to the compact case form.
///
/// Each bridge segment lists only the hikers newly introduced at that bridge,
/// so the output re-parses to an equivalent expedition.
///
/// # Examples
///
/// ```rust
/// use trestle_model::compact;
///
/// let case = "A 100,B 50;100;250,E 2.5";
/// let expedition = compact::parse::<f64>(case).unwrap();
/// assert_eq!(compact::serialize(&expedition), case);
/// ```
pub fn serialize<T>(expedition: &Expedition<T>) -> String
where
    T: CrossingFloat,
{
    let mut out = String::new();
    for (i, hiker) in expedition.hikers().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&hiker.to_string());
    }
    for bridge in expedition.bridges() {
        out.push(';');
        out.push_str(&bridge.length().to_string());
        for hiker in bridge.arrivals() {
            out.push(',');
            out.push_str(&hiker.to_string());
        }
    }
    out
}

/// Parses a `name speed` token.
fn parse_hiker<T>(token: &str) -> Result<Hiker<T>, CompactParseError>
where
    T: CrossingFloat,
{
    let mut parts = token.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(name), Some(speed_token)) => {
            let speed = parse_number(speed_token)?;
            Ok(Hiker::new(name, speed)?)
        }
        _ => Err(CompactParseError::MalformedHiker {
            token: token.to_owned(),
        }),
    }
}

/// Parses a numeric token, trimming surrounding whitespace.
fn parse_number<T>(token: &str) -> Result<T, CompactParseError>
where
    T: CrossingFloat,
{
    let trimmed = token.trim();
    trimmed
        .parse::<T>()
        .map_err(|_| CompactParseError::InvalidNumber {
            token: trimmed.to_owned(),
        })
}
