//! Genre types

use serde::{Deserialize, Serialize};

use super::ids::GenreId;

/// A music genre. Names are unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}
