//! Opake Bezeichner für Nodes, Hallen und Marker.
//!
//! Alle IDs sind String-Newtypes: der Editor vergibt sie selbst, importierte
//! Grundrisse bringen beliebige Strings (z.B. UUIDs) mit.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Erstellt eine ID aus einem beliebigen String.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Gibt die ID als `&str` zurück.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// ID eines Navigations-Nodes
    NodeId
);
string_id!(
    /// ID einer Halle
    HallId
);
string_id!(
    /// ID eines Map-Markers
    MarkerId
);
