//! Specifier resolution for directory navigation.
//!
//! # Architecture
//!
//! - `matcher.rs` - Match rules (prefix, substring, fuzzy subsequence)
//! - `listing.rs` - Directory snapshots partitioned by entry kind
//! - `filter.rs` - Exclusion of transient/backup names
//! - `resolver.rs` - Fallback cascade over match rules for one step
//! - `walker.rs` - One resolution step per specifier, root to leaf
//!
//! Every step reads a fresh listing. Nothing is cached between steps.
//!
//! # Example
//!
//! ```
//! use dirnav_resolve::{MatchRule, Resolution, resolve};
//!
//! let candidates = ["project-alpha", "project-beta", "docs"];
//! match resolve(&candidates, "palpha") {
//!     Resolution::Unique { name, rule } => {
//!         assert_eq!(name, "project-alpha");
//!         assert_eq!(rule, MatchRule::Fuzzy);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub use error::{Error, Result};
pub use filter::{DEFAULT_PATTERNS, ExclusionRules};
pub use listing::{DirectoryListing, EntryKind, describe_kinds};
pub use matcher::MatchRule;
pub use resolver::{Resolution, resolve};
pub use walker::{FsListing, ListingSource, PathWalker};

mod error;
mod filter;
mod listing;
pub mod matcher;
mod resolver;
mod walker;
