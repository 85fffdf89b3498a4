//! The `Viewable` trait, which defines what a search subject must expose.

use std::rc::Rc;
use std::sync::Arc;

/// A subject that a search result can refer to.
///
/// The result type itself treats the subject as opaque; the only thing it
/// ever asks of it is a human-readable location identifier, used when
/// rendering a result for display. A file path string, a directory entry, or
/// any richer domain type can be a subject as long as it can name where it
/// lives.
///
/// Delegating impls are provided for `&T`, `Box<T>`, `Arc<T>`, and `Rc<T>`,
/// so callers pick the ownership model: store the subject by value, or share
/// it with the rest of the application behind a pointer.
///
/// # Examples
///
/// ```rust
/// use tagrank::prelude::*;
///
/// struct Entry {
///     path: String,
///     size: u64,
/// }
///
/// impl Viewable for Entry {
///     fn location(&self) -> &str {
///         &self.path
///     }
/// }
/// ```
pub trait Viewable {
  /// Returns the human-readable location identifier of this subject.
  fn location(&self) -> &str;
}

impl Viewable for str {
  fn location(&self) -> &str {
    self
  }
}

impl Viewable for String {
  fn location(&self) -> &str {
    self
  }
}

impl<T: Viewable + ?Sized> Viewable for &T {
  fn location(&self) -> &str {
    (**self).location()
  }
}

impl<T: Viewable + ?Sized> Viewable for Box<T> {
  fn location(&self) -> &str {
    (**self).location()
  }
}

impl<T: Viewable + ?Sized> Viewable for Arc<T> {
  fn location(&self) -> &str {
    (**self).location()
  }
}

impl<T: Viewable + ?Sized> Viewable for Rc<T> {
  fn location(&self) -> &str {
    (**self).location()
  }
}
