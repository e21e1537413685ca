// ============================================================================
// MODELS - One record type per dashboard area, plus the user profile
// ============================================================================

/// Declares a closed set of lowercase string values (categories, statuses,
/// flag names) with serde, `FromStr` and `Display` support.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!("unknown value `{}`", other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod event;
pub mod listing;
pub mod post;
pub mod profile;
pub mod question;
pub mod service;

pub use event::{Event, EventCategory, EventFlag};
pub use listing::{Listing, ListingCategory, ListingFlag};
pub use post::{FeedTopic, Post, PostAuthor, PostFlag};
pub use profile::Profile;
pub use question::{Question, QuestionCategory, QuestionFlag, QuestionStatus};
pub use service::{RateType, Service, ServiceCategory, ServiceFlag};
