//! Tag types

use serde::{Deserialize, Serialize};

use super::ids::TagId;

/// A free-form tag. Names are unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}
