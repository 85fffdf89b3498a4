//! The ranked tag-match result type.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crate::viewable::Viewable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One ranked search hit: a subject plus the query tags that matched it.
///
/// A `MatchResult` is created by a search process when a candidate subject
/// first matches, grows as more query tags are found to match via
/// [`add_matched_tag`](MatchResult::add_matched_tag), and may be flagged as a
/// perfect match via [`mark_perfect_match`](MatchResult::mark_perfect_match).
/// What "perfect match" means is up to the caller; this type only records it.
///
/// The subject is stored by value and fixed at construction. The accessor
/// [`subject`](MatchResult::subject) returns a borrow of the stored value,
/// never a copy; callers that need shared ownership of the subject should
/// construct the result with an `Arc<T>` (see [`Viewable`]).
///
/// Results order by match quality through `Ord`, so a collection of them can
/// be ranked with a plain `sort` or with [`rank`]. See the `Ord` impl below
/// for the exact rule.
///
/// # Examples
///
/// ```rust
/// use tagrank::prelude::*;
///
/// let mut result = MatchResult::with_tag("/docs/report.txt".to_string(), "urgent");
/// result.add_matched_tag("draft");
/// result.add_matched_tag("urgent"); // already present, no effect
///
/// assert_eq!(result.match_count(), 2);
/// assert!(!result.is_perfect_match());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchResult<T> {
  /// The subject this result refers to.
  subject: T,
  /// Every query tag that has matched the subject so far. Set semantics:
  /// unique, unordered.
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "HashSet::is_empty")
  )]
  matched_tags: HashSet<String>,
  /// Whether the subject fully satisfies the search intent. Starts false
  /// and never goes back to false once set.
  #[cfg_attr(feature = "serde", serde(default))]
  perfect_match: bool,
}

impl<T> MatchResult<T> {
  /// Creates a result for `subject` with no matched tags yet.
  pub fn new(subject: T) -> Self {
    Self {
      subject,
      matched_tags: HashSet::new(),
      perfect_match: false,
    }
  }

  /// Creates a result for `subject` with a single initial matched tag.
  pub fn with_tag(subject: T, tag: impl Into<String>) -> Self {
    let mut result = Self::new(subject);
    result.matched_tags.insert(tag.into());
    result
  }

  /// Creates a result for `subject` whose tag set is a copy of the given
  /// tags. Duplicates in the input collapse to one entry.
  pub fn with_tags<I, S>(subject: T, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut result = Self::new(subject);
    result.matched_tags.extend(tags.into_iter().map(Into::into));
    result
  }

  /// Flags the subject as a perfect match with the search terms, whatever
  /// that means to the caller. Idempotent; the flag never resets.
  pub fn mark_perfect_match(&mut self) {
    self.perfect_match = true;
  }

  /// Records that `tag` matched the subject. Inserting a tag that is
  /// already present is a no-op. An empty string is accepted as a
  /// degenerate tag.
  pub fn add_matched_tag(&mut self, tag: impl Into<String>) {
    self.matched_tags.insert(tag.into());
  }

  /// Returns true if the subject has been flagged as a perfect match.
  pub fn is_perfect_match(&self) -> bool {
    self.perfect_match
  }

  /// Returns a borrow of the subject this result refers to.
  pub fn subject(&self) -> &T {
    &self.subject
  }

  /// Returns the number of distinct tags that matched the subject.
  pub fn match_count(&self) -> usize {
    self.matched_tags.len()
  }

  /// Returns a snapshot copy of the matched tags. Mutating the returned
  /// set does not affect this result.
  pub fn matched_tags(&self) -> HashSet<String> {
    self.matched_tags.clone()
  }
}

/// Equality over the ranking key (perfect-match flag and match count).
///
/// The subject does not participate; two results for different subjects with
/// the same flag and the same number of matched tags compare equal. This is
/// exactly the "ties" notion of the ordering below and keeps `Ord`'s
/// total-order contract.
impl<T> PartialEq for MatchResult<T> {
  fn eq(&self, other: &Self) -> bool {
    self.perfect_match == other.perfect_match && self.match_count() == other.match_count()
  }
}

impl<T> Eq for MatchResult<T> {}

impl<T> PartialOrd for MatchResult<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// The two-tier ranking rule.
///
/// 1. A perfect match sorts strictly after any non-perfect match in
///    ascending order.
/// 2. Within the same perfect-match status, the result with more matched
///    tags sorts first.
///
/// Note that tier 1 puts perfect matches *last* under an ascending sort.
/// Counter-intuitive, but deliberate: consumers of the ranked list depend on
/// this direction, so it is kept as is.
impl<T> Ord for MatchResult<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    self
      .perfect_match
      .cmp(&other.perfect_match)
      .then_with(|| other.match_count().cmp(&self.match_count()))
  }
}

/// Renders the result as a human-readable block: the subject's location,
/// then each matched tag tab-indented on its own line, wrapped in braces.
///
/// ```text
/// /docs/report.txt {
/// 	urgent
/// }
/// ```
///
/// Tags are emitted in sorted order so the output is deterministic. This is
/// a debugging/display format, not a serialization format; its exact shape
/// carries no compatibility contract.
impl<T: Viewable> fmt::Display for MatchResult<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{} {{", self.subject.location())?;

    let mut tags: Vec<&str> = self.matched_tags.iter().map(String::as_str).collect();
    tags.sort_unstable();

    for tag in tags {
      writeln!(f, "\t{}", tag)?;
    }

    write!(f, "}}")
  }
}

/// Ranks a collection of results in place.
///
/// This is a stable ascending sort by the ordering on [`MatchResult`]:
/// results with more matched tags come first, and perfect matches come last.
/// Results that tie on both criteria keep their original relative order.
pub fn rank<T>(results: &mut [MatchResult<T>]) {
  results.sort();
}
