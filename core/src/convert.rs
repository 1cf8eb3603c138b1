//! Conversions to owned containers and string joining.

use alloc::{string::String, vec::Vec};
use core::{
    fmt::{self, Display, Write},
    hash::Hash,
};

use crate::{
    access::SeqView,
    ordered::{OrderedSet, ordered_set_with_capacity},
};

// ============================================================================
// Containers
// ============================================================================

/// Owned copy of the elements.
pub fn to_list<S>(seq: &S) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
{
    seq.as_slice().to_vec()
}

/// Borrowed view of the elements; nothing is copied.
pub fn as_list<S: SeqView + ?Sized>(seq: &S) -> &[S::Elem] {
    seq.as_slice()
}

/// Distinct elements in first-occurrence order.
///
/// # Examples
/// - `to_set([3, 1, 3, 2])` → `{3, 1, 2}`
pub fn to_set<S>(seq: &S) -> OrderedSet<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone + Eq + Hash,
{
    let items = seq.as_slice();
    let mut set = ordered_set_with_capacity(items.len());
    set.extend(items.iter().cloned());
    set
}

/// The elements of `seq`, or an empty slice when it is absent.
pub fn or_empty<S: SeqView + ?Sized>(seq: Option<&S>) -> &[S::Elem] {
    match seq {
        Some(seq) => seq.as_slice(),
        None => &[],
    }
}

// ============================================================================
// Join Options
// ============================================================================

/// Formatting knobs for [`join_to_string`] and [`join_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    /// Written between two elements.
    pub separator: String,
    /// Written before the first element.
    pub prefix: String,
    /// Written after the last element (and after `truncated`).
    pub postfix: String,
    /// Maximum number of elements written. `None` writes all of them.
    pub limit: Option<usize>,
    /// Written in place of the elements dropped by `limit`.
    pub truncated: String,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            separator: String::from(", "),
            prefix: String::new(),
            postfix: String::new(),
            limit: None,
            truncated: String::from("..."),
        }
    }
}

/// Partial [`JoinOptions`]; only the `Some` fields are applied.
///
/// ```
/// use seqkit_core::{JoinOptions, JoinOptionsOverride};
///
/// let mut options = JoinOptions::default();
/// options.override_with(&JoinOptionsOverride {
///     separator: Some(" | ".into()),
///     limit: Some(2),
///     ..Default::default()
/// });
/// assert_eq!(options.separator, " | ");
/// assert_eq!(options.truncated, "...");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinOptionsOverride {
    pub separator: Option<String>,
    pub prefix: Option<String>,
    pub postfix: Option<String>,
    pub limit: Option<usize>,
    pub truncated: Option<String>,
}

impl JoinOptions {
    /// Applies every field set in `options_override`.
    pub fn override_with(&mut self, options_override: &JoinOptionsOverride) {
        if let Some(separator) = &options_override.separator {
            self.separator.clone_from(separator);
        }
        if let Some(prefix) = &options_override.prefix {
            self.prefix.clone_from(prefix);
        }
        if let Some(postfix) = &options_override.postfix {
            self.postfix.clone_from(postfix);
        }
        if let Some(limit) = options_override.limit {
            self.limit = Some(limit);
        }
        if let Some(truncated) = &options_override.truncated {
            self.truncated.clone_from(truncated);
        }
    }
}

// ============================================================================
// Join
// ============================================================================

fn join_core<S, W, F>(seq: &S, out: &mut W, options: &JoinOptions, mut write_item: F) -> fmt::Result
where
    S: SeqView + ?Sized,
    W: Write,
    F: FnMut(&mut W, &S::Elem) -> fmt::Result,
{
    out.write_str(&options.prefix)?;
    let mut cut_short = false;
    for (index, item) in seq.as_slice().iter().enumerate() {
        if index > 0 {
            out.write_str(&options.separator)?;
        }
        if options.limit.is_some_and(|limit| index >= limit) {
            cut_short = true;
            break;
        }
        write_item(out, item)?;
    }
    if cut_short {
        out.write_str(&options.truncated)?;
    }
    out.write_str(&options.postfix)
}

/// Writes the joined elements to `out`.
///
/// When `limit` cuts the output short, the separator is still written
/// before the truncation marker.
///
/// # Examples
/// - `[1, 2, 3]` with defaults → `"1, 2, 3"`
/// - `[1, 2, 3]` with `limit: Some(2)` → `"1, 2, ..."`
pub fn join_to<S, W>(seq: &S, out: &mut W, options: &JoinOptions) -> fmt::Result
where
    S: SeqView + ?Sized,
    S::Elem: Display,
    W: Write,
{
    join_core(seq, out, options, |out, item| write!(out, "{item}"))
}

/// Like [`join_to`], writing `transform(element)` for each element.
pub fn join_to_with<S, W, D, F>(
    seq: &S,
    out: &mut W,
    options: &JoinOptions,
    mut transform: F,
) -> fmt::Result
where
    S: SeqView + ?Sized,
    W: Write,
    D: Display,
    F: FnMut(&S::Elem) -> D,
{
    join_core(seq, out, options, |out, item| write!(out, "{}", transform(item)))
}

/// Joins the elements into a new `String`.
///
/// Writing into a `String` only fails when an element's `Display` impl
/// does. The output is then partial: it ends with the text written before
/// the failure, without the postfix. Use [`try_join_to_string`] to see the
/// error instead.
pub fn join_to_string<S>(seq: &S, options: &JoinOptions) -> String
where
    S: SeqView + ?Sized,
    S::Elem: Display,
{
    let mut out = String::new();
    let _ = join_to(seq, &mut out, options);
    out
}

/// Like [`join_to_string`], writing `transform(element)` for each element.
///
/// A failing `Display` impl leaves the output partial, as for
/// [`join_to_string`].
pub fn join_to_string_with<S, D, F>(seq: &S, options: &JoinOptions, transform: F) -> String
where
    S: SeqView + ?Sized,
    D: Display,
    F: FnMut(&S::Elem) -> D,
{
    let mut out = String::new();
    let _ = join_to_with(seq, &mut out, options, transform);
    out
}

/// Joins the elements into a new `String`, failing if any element's
/// `Display` impl fails.
pub fn try_join_to_string<S>(seq: &S, options: &JoinOptions) -> Result<String, fmt::Error>
where
    S: SeqView + ?Sized,
    S::Elem: Display,
{
    let mut out = String::new();
    join_to(seq, &mut out, options)?;
    Ok(out)
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;
