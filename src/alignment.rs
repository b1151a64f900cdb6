//! The alignment-result input type.
//!
//! A [`DtwAlignment`] is produced by an external DTW engine and consumed
//! read-only by the renderers in this crate. It carries the warping path as
//! two positionally paired index sequences, and optionally the original
//! input series and the cumulative cost matrix when the producer retained
//! them. No alignment computation happens here.

use ndarray::Array2;

use crate::error::{PlotError, PlotResult};

/// An externally computed DTW alignment result.
///
/// Invariants, enforced at construction:
/// - `index1` and `index2` have the same non-zero length;
/// - both index sequences are monotonically non-decreasing;
/// - when a series is attached, every path index into it is in bounds;
/// - when a cost matrix is attached, it covers the full index range of
///   the path.
#[derive(Debug, Clone, PartialEq)]
pub struct DtwAlignment {
    index1: Vec<usize>,
    index2: Vec<usize>,
    query: Option<Vec<f64>>,
    reference: Option<Vec<f64>>,
    cost_matrix: Option<Array2<f64>>,
}

impl DtwAlignment {
    /// Create an alignment from the two warping path index sequences.
    ///
    /// # Errors
    /// Returns [`PlotError::InvalidAlignment`] if the sequences are empty,
    /// have different lengths, or are not monotonically non-decreasing.
    pub fn new(index1: Vec<usize>, index2: Vec<usize>) -> PlotResult<Self> {
        if index1.is_empty() {
            return Err(PlotError::InvalidAlignment(
                "warping path must be non-empty".to_string(),
            ));
        }
        if index1.len() != index2.len() {
            return Err(PlotError::InvalidAlignment(format!(
                "index1 has {} entries but index2 has {}",
                index1.len(),
                index2.len()
            )));
        }
        check_monotone(&index1, "index1")?;
        check_monotone(&index2, "index2")?;

        Ok(Self {
            index1,
            index2,
            query: None,
            reference: None,
            cost_matrix: None,
        })
    }

    /// Attach the original query and reference series.
    ///
    /// # Errors
    /// Returns [`PlotError::InvalidAlignment`] if any path index is out of
    /// bounds for the corresponding series.
    pub fn with_series(mut self, query: Vec<f64>, reference: Vec<f64>) -> PlotResult<Self> {
        check_index_bounds(&self.index1, query.len(), "query")?;
        check_index_bounds(&self.index2, reference.len(), "reference")?;
        self.query = Some(query);
        self.reference = Some(reference);
        Ok(self)
    }

    /// Attach the cumulative cost matrix (query positions x reference positions).
    ///
    /// # Errors
    /// Returns [`PlotError::InvalidAlignment`] if the matrix does not cover
    /// the index range of the warping path.
    pub fn with_cost_matrix(mut self, cost_matrix: Array2<f64>) -> PlotResult<Self> {
        // Path endpoints are the largest indices on a non-decreasing path.
        let max1 = *self.index1.last().unwrap_or(&0);
        let max2 = *self.index2.last().unwrap_or(&0);
        let (rows, cols) = cost_matrix.dim();
        if rows <= max1 || cols <= max2 {
            return Err(PlotError::InvalidAlignment(format!(
                "cost matrix is {rows}x{cols} but the warping path reaches ({max1}, {max2})"
            )));
        }
        self.cost_matrix = Some(cost_matrix);
        Ok(self)
    }

    /// Query-side warping path indices.
    #[must_use]
    pub fn index1(&self) -> &[usize] {
        &self.index1
    }

    /// Reference-side warping path indices, paired positionally with `index1`.
    #[must_use]
    pub fn index2(&self) -> &[usize] {
        &self.index2
    }

    /// Number of steps in the warping path.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.index1.len()
    }

    /// The retained query series, if the producer kept it.
    #[must_use]
    pub fn query(&self) -> Option<&[f64]> {
        self.query.as_deref()
    }

    /// The retained reference series, if the producer kept it.
    #[must_use]
    pub fn reference(&self) -> Option<&[f64]> {
        self.reference.as_deref()
    }

    /// The retained cumulative cost matrix, if the producer kept it.
    #[must_use]
    pub fn cost_matrix(&self) -> Option<&Array2<f64>> {
        self.cost_matrix.as_ref()
    }
}

fn check_monotone(indices: &[usize], name: &str) -> PlotResult<()> {
    for (pos, pair) in indices.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(PlotError::InvalidAlignment(format!(
                "{name} decreases at path position {}: {} -> {}",
                pos + 1,
                pair[0],
                pair[1]
            )));
        }
    }
    Ok(())
}

fn check_index_bounds(indices: &[usize], series_len: usize, name: &str) -> PlotResult<()> {
    // Sequences are non-decreasing, so the last entry is the largest.
    if let Some(&last) = indices.last()
        && last >= series_len
    {
        return Err(PlotError::InvalidAlignment(format!(
            "path index {last} is out of bounds for {name} of length {series_len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn accepts_valid_path() {
        let d = DtwAlignment::new(vec![0, 1, 1, 2], vec![0, 0, 1, 2]).unwrap();
        assert_eq!(d.path_len(), 4);
        assert_eq!(d.index1(), &[0, 1, 1, 2]);
        assert_eq!(d.index2(), &[0, 0, 1, 2]);
        assert!(d.query().is_none());
        assert!(d.cost_matrix().is_none());
    }

    #[test]
    fn rejects_empty_path() {
        assert!(matches!(
            DtwAlignment::new(vec![], vec![]),
            Err(PlotError::InvalidAlignment(_))
        ));
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(matches!(
            DtwAlignment::new(vec![0, 1, 2], vec![0, 1]),
            Err(PlotError::InvalidAlignment(_))
        ));
    }

    #[test]
    fn rejects_decreasing_indices() {
        assert!(matches!(
            DtwAlignment::new(vec![0, 2, 1], vec![0, 1, 2]),
            Err(PlotError::InvalidAlignment(_))
        ));
        assert!(matches!(
            DtwAlignment::new(vec![0, 1, 2], vec![0, 2, 1]),
            Err(PlotError::InvalidAlignment(_))
        ));
    }

    #[test]
    fn rejects_series_shorter_than_path_indices() {
        let d = DtwAlignment::new(vec![0, 1, 2], vec![0, 1, 2]).unwrap();
        let err = d.with_series(vec![0.0, 1.0], vec![0.0, 1.0, 2.0]);
        assert!(matches!(err, Err(PlotError::InvalidAlignment(_))));
    }

    #[test]
    fn accepts_matching_series() {
        let d = DtwAlignment::new(vec![0, 1, 2], vec![0, 1, 2])
            .unwrap()
            .with_series(vec![0.5, 1.5, 2.5], vec![0.0, 1.0, 2.0])
            .unwrap();
        assert_eq!(d.query().unwrap().len(), 3);
        assert_eq!(d.reference().unwrap().len(), 3);
    }

    #[test]
    fn rejects_undersized_cost_matrix() {
        let d = DtwAlignment::new(vec![0, 1, 2], vec![0, 1, 3]).unwrap();
        let err = d.clone().with_cost_matrix(Array2::zeros((3, 3)));
        assert!(matches!(err, Err(PlotError::InvalidAlignment(_))));
        assert!(d.with_cost_matrix(Array2::zeros((3, 4))).is_ok());
    }
}
