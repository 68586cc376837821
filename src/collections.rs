//! Self-validating lists behind a torrent's file list and announce list.
//!
//! - [`PathList`]: file paths, with directories expanded to the files below
//!   them.
//! - [`UrlList`]: syntactically valid URLs.
//! - [`TierList`]: URLs grouped into tiers of equal preference.
//!
//! All three are [`ObservableList`]s with a different [`ListKind`] policy.
//!
//! # Invariants
//!
//! 1. A list never holds two entries for the same thing: the same resolved
//!    path, the same URL string, the same URL in two tiers. Duplicates are
//!    dropped silently and the entry already present wins.
//! 2. Input is validated in full before the list changes. A call that
//!    returns an error has changed nothing and notified no one.
//! 3. The callback fires exactly once per successful mutating call, after
//!    the change. Calls that add nothing (everything was a duplicate) do not
//!    fire it. Construction never fires it.
//! 4. A [`TierList`] never contains an empty tier.
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use tormeta::TierList;
//!
//! let changes = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&changes);
//! let mut tiers = TierList::with_callback(
//!     ["http://foo:123", "http://bar:456"],
//!     move |_: &TierList| counter.set(counter.get() + 1),
//! )
//! .unwrap();
//!
//! tiers.append(["http://baz:789", "http://foo:123"]).unwrap();
//! assert_eq!(
//!     tiers,
//!     vec![vec!["http://foo:123"], vec!["http://bar:456"], vec!["http://baz:789"]]
//! );
//!
//! tiers.tier_mut(1).unwrap().remove_url("http://bar:456");
//! assert_eq!(tiers.len(), 2);
//! assert_eq!(changes.get(), 2);
//!
//! let merged = (&tiers + ["http://x"]).unwrap();
//! assert_eq!(merged, vec![vec!["http://foo:123", "http://x"], vec!["http://baz:789"]]);
//! ```

mod observable;
mod paths;
mod tiers;
mod urls;

pub use observable::{Callback, ListKind, ObservableList};
pub use paths::{PathEntry, PathKind, PathList};
pub use tiers::{TierInput, TierKind, TierList, TierMut};
pub use urls::{UrlKind, UrlList};
