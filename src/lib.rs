//! Tagrank - a ranked tag-match result value type.
//!
//! Tagrank provides [`MatchResult`](crate::result::MatchResult), a small value
//! type that a tag-based search process uses to record which query tags
//! matched a candidate subject, flag perfect matches, and rank the finished
//! collection of hits.

pub mod result;
pub mod viewable;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::result::*;
    pub use crate::viewable::*;
}
