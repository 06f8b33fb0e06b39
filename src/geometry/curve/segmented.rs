use crate::error::{GeometryError, Result};

use super::Curve;

/// A curve assembled from sub-curves that share one parameter axis.
///
/// Implementors only resolve which segment owns a parameter; every query is
/// then forwarded to that segment with the parameter unchanged, since each
/// segment already lives on its own sub-interval of the shared axis.
pub trait Segmented {
    fn segment_count(&self) -> usize;

    fn segment(&self, index: usize) -> Option<&dyn Curve>;

    /// Maps a global parameter to `(segment index, local parameter)`.
    ///
    /// # Errors
    ///
    /// Returns an error if no segment owns `t`.
    fn locate(&self, t: f64) -> Result<(usize, f64)>;

    /// Runs `query` on the segment owning `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` cannot be located or the query fails.
    fn with_segment<R, F>(&self, t: f64, query: F) -> Result<R>
    where
        F: FnOnce(&dyn Curve, f64) -> Result<R>,
    {
        let (index, local) = self.locate(t)?;
        let segment = self.segment(index).ok_or(GeometryError::EmptyCurve)?;
        query(segment, local)
    }
}

/// Index of the last item whose key is `<= t`, by binary search.
///
/// `items` must be sorted by `key`. Values before the first key resolve to
/// index 0; an empty slice yields `None`.
pub(crate) fn last_at_or_before<T, K>(items: &[T], t: f64, key: K) -> Option<usize>
where
    K: Fn(&T) -> f64,
{
    if items.is_empty() {
        return None;
    }
    let after = items.partition_point(|item| key(item) <= t);
    Some(after.saturating_sub(1))
}
