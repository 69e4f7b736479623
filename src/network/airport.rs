//! Airport type

use serde::{Deserialize, Serialize};
use std::fmt;

/// An airport in the route network
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code, used as the node label in the graph
    pub code: String,

    /// Full airport name
    pub name: String,
}

impl Airport {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Airport {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
