//! On-disk JSON records.
//!
//! Two historical node layouts are accepted on read: `{"id", "pos": "(x,y,z)"}`
//! and `{"key", "pos": [x, y, z]}`. Edges carry their weight as `w` or
//! `weight`. Output always uses `key`, array positions and `weight`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{GraphResult, NodeId, Position};

/// Top-level document. A `null` document stands for an empty graph.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GraphRecord {
    #[serde(rename = "Nodes", default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(rename = "Edges", default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(alias = "id")]
    pub key: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PosRecord>,
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub info: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub tag: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: NodeId,
    pub dest: NodeId,
    #[serde(alias = "w")]
    pub weight: f64,
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub info: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub tag: i64,
}

/// A position, either as text `"(x,y,z)"` or as a numeric triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PosRecord {
    Triple([f64; 3]),
    Text(String),
}

impl PosRecord {
    pub fn resolve(&self) -> GraphResult<Position> {
        match self {
            Self::Triple(coords) => Ok(Position::from(*coords)),
            Self::Text(text) => text.parse(),
        }
    }
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

// Older files write `"info": null`.
fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
