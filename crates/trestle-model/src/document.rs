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

//! Structured YAML case documents.
//!
//! serde does the heavy lifting; the schema mirrors the compact format with
//! the same validation and accumulation rules:
//!
//! ```yaml
//! hikers:
//!   - name: A
//!     speed: 100
//!   - name: B
//!     speed: 50
//! bridges:
//!   - length: 100
//!   - length: 250
//!     hikers:
//!       - name: E
//!         speed: 2.5
//! ```
//!
//! A bridge's `hikers` sequence is optional and lists only the hikers newly
//! introduced at that bridge. Documents can be loaded from a string, a
//! reader, or a file path.

use crate::{
    error::ModelError,
    expedition::{Expedition, ExpeditionBuilder},
    hiker::Hiker,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use trestle_core::num::CrossingFloat;

/// The error type for document loading.
#[derive(Debug)]
pub enum DocumentError {
    /// An I/O error occurred while reading the document.
    Io(std::io::Error),
    /// The document is not valid YAML or does not match the schema.
    Yaml(serde_yaml::Error),
    /// A value in the document failed entity validation.
    Model(ModelError),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Yaml(e) => write!(f, "YAML error: {}", e),
            Self::Model(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<std::io::Error> for DocumentError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for DocumentError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<ModelError> for DocumentError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HikerDoc<T> {
    name: String,
    speed: T,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct BridgeDoc<T> {
    length: T,
    #[serde(default)]
    hikers: Vec<HikerDoc<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseDoc<T> {
    hikers: Vec<HikerDoc<T>>,
    bridges: Vec<BridgeDoc<T>>,
}

/// Loads a case document from a YAML string.
///
/// # Errors
///
/// Returns a `DocumentError` when the YAML does not match the schema or a
/// speed/length fails validation.
///
/// # Examples
///
/// ```rust
/// let yaml = r#"
/// hikers:
///   - name: A
///     speed: 100
/// bridges:
///   - length: 100
/// "#;
/// let expedition = trestle_model::document::from_str::<f64>(yaml).unwrap();
/// assert_eq!(expedition.num_hikers(), 1);
/// assert_eq!(expedition.num_bridges(), 1);
/// ```
pub fn from_str<T>(s: &str) -> Result<Expedition<T>, DocumentError>
where
    T: CrossingFloat + DeserializeOwned,
{
    let doc: CaseDoc<T> = serde_yaml::from_str(s)?;
    build(doc)
}

/// Loads a case document from a generic reader.
#[inline]
pub fn from_reader<T, R>(rdr: R) -> Result<Expedition<T>, DocumentError>
where
    T: CrossingFloat + DeserializeOwned,
    R: Read,
{
    let doc: CaseDoc<T> = serde_yaml::from_reader(rdr)?;
    build(doc)
}

/// Loads a case document from a file path.
#[inline]
pub fn from_path<T, P>(path: P) -> Result<Expedition<T>, DocumentError>
where
    T: CrossingFloat + DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    from_reader(file)
}

/// Converts a deserialized document into a validated `Expedition`.
fn build<T>(doc: CaseDoc<T>) -> Result<Expedition<T>, DocumentError>
where
    T: CrossingFloat,
{
    let mut builder = ExpeditionBuilder::new();
    for hiker in doc.hikers {
        builder.add_hiker(Hiker::new(hiker.name, hiker.speed)?);
    }
    for bridge in doc.bridges {
        let arrivals = bridge
            .hikers
            .into_iter()
            .map(|h| Hiker::new(h.name, h.speed))
            .collect::<Result<Vec<Hiker<T>>, ModelError>>()?;
        builder.add_bridge(bridge.length, arrivals)?;
    }
    Ok(builder.build())
}
