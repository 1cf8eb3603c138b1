//! seqkit - Generic sequence algorithms
//!
//! # Overview
//!
//! seqkit is a stateless library of sequence algorithms: transform, filter,
//! aggregate, sort, group, pair and window. Each algorithm is written once
//! and works over any element kind and any container that can be viewed as
//! a slice, including an absent (`None`) sequence.
//!
//! # Quick Start
//!
//! ```
//! use seqkit::{filter, fold, map, sorted_by_descending};
//!
//! let scores = [72, 95, 61, 88];
//!
//! let passed = filter(&scores, |&s| s >= 70);
//! assert_eq!(passed, vec![72, 95, 88]);
//!
//! let curved = map(&passed, |s| s + 5);
//! assert_eq!(curved, vec![77, 100, 93]);
//!
//! let total = fold(&curved, 0, |acc, s| acc + s);
//! assert_eq!(total, 270);
//!
//! let ranked = sorted_by_descending(&[("ana", 3), ("bo", 5), ("cy", 3)], |p| p.1);
//! assert_eq!(ranked, vec![("bo", 5), ("ana", 3), ("cy", 3)]);
//! ```
//!
//! # Edge Cases
//!
//! Operations that need an element fail with a [`SeqError`] and have a
//! non-failing `*_or_null` counterpart. NaN is absorbing for natural-order
//! extremes:
//!
//! ```
//! use seqkit::{ErrorKind, max_or_null, reduce, reduce_or_null, take};
//!
//! let empty: Vec<i32> = Vec::new();
//! assert_eq!(reduce(&empty, |a, b| a + b).unwrap_err().kind(), ErrorKind::EmptyInput);
//! assert_eq!(reduce_or_null(&empty, |a, b| a + b), None);
//!
//! assert!(max_or_null(&[1.0, f64::NAN, 2.0]).unwrap().is_nan());
//!
//! assert_eq!(take(&[1, 2, 3], 10), Ok(vec![1, 2, 3]));
//! assert_eq!(take(&[1, 2, 3], -1).unwrap_err().kind(), ErrorKind::InvalidArgument);
//! ```
//!
//! # Grouping and Joining
//!
//! ```
//! use seqkit::{JoinOptions, JoinOptionsOverride, group_by, join_to_string};
//!
//! let groups = group_by(&["apple", "ant", "bee"], |w| w.as_bytes()[0]);
//! let keys: Vec<u8> = groups.keys().copied().collect();
//! assert_eq!(keys, vec![b'a', b'b']);
//! assert_eq!(groups[&b'a'], vec!["apple", "ant"]);
//!
//! let mut options = JoinOptions::default();
//! options.override_with(&JoinOptionsOverride {
//!     prefix: Some("[".into()),
//!     postfix: Some("]".into()),
//!     limit: Some(2),
//!     ..Default::default()
//! });
//! assert_eq!(join_to_string(&[1, 2, 3], &options), "[1, 2, ...]");
//! ```
//!
//! # Dropping Elements
//!
//! `drop` lives at [`window::drop`] and is not part of the root exports, so
//! `use seqkit::*;` keeps the prelude's `drop` working:
//!
//! ```
//! use seqkit::*;
//!
//! let values = vec![1, 2, 3];
//! assert_eq!(window::drop(&values, 1), Ok(vec![2, 3]));
//! assert_eq!(drop_last(&values, 1), Ok(vec![1, 2]));
//! drop(values);
//! ```

// Re-export the engine, its modules included
pub use seqkit_core::*;
