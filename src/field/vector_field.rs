//! Dense pairwise distances and direction vectors over the current positions.
//!
//! The field is recomputed from scratch every step and dropped afterwards.
//! Entries are stored row-major: row `i` holds the relation of particle `i`
//! to every particle `j`.
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::utils::norm;

#[derive(Debug, Clone, Default)]
pub struct PairwiseField {
    n: usize,
    distances: Vec<f64>,
    directions_x: Vec<f64>,
    directions_y: Vec<f64>,
}

impl PairwiseField {
    /// Computes `D[i][j] = |p_i - p_j|` and `Dir[i][j] = (p_i - p_j) / (D[i][j] + softening)`.
    ///
    /// The softening term is added unconditionally, so the diagonal and any
    /// coincident pair produce a zero direction instead of dividing by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use particle_dynamics::field::PairwiseField;
    ///
    /// let xs = [0.0, 3.0];
    /// let ys = [0.0, 4.0];
    /// let field = PairwiseField::compute(&xs, &ys, 1e-20);
    ///
    /// assert_eq!(field.distance(0, 1), 5.0);
    /// assert_eq!(field.distance(1, 1), 0.0);
    /// let (dx, dy) = field.direction(0, 1);
    /// assert!((dx + 0.6).abs() < 1e-12 && (dy + 0.8).abs() < 1e-12);
    /// ```
    pub fn compute(xs: &[f64], ys: &[f64], softening: f64) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        let n = xs.len();
        let mut distances = vec![0.0; n * n];
        let mut directions_x = vec![0.0; n * n];
        let mut directions_y = vec![0.0; n * n];

        if n == 0 {
            return PairwiseField { n, distances, directions_x, directions_y };
        }

        let fill_row = |i: usize, d_row: &mut [f64], dx_row: &mut [f64], dy_row: &mut [f64]| {
            let (xi, yi) = (xs[i], ys[i]);
            for j in 0..n {
                let rx = xi - xs[j];
                let ry = yi - ys[j];
                let d = norm(rx, ry);
                let inv = (d + softening).recip();
                d_row[j] = d;
                dx_row[j] = rx * inv;
                dy_row[j] = ry * inv;
            }
        };

        #[cfg(feature = "parallel")]
        {
            distances
                .par_chunks_mut(n)
                .zip(directions_x.par_chunks_mut(n))
                .zip(directions_y.par_chunks_mut(n))
                .enumerate()
                .for_each(|(i, ((d_row, dx_row), dy_row))| fill_row(i, d_row, dx_row, dy_row));
        }

        #[cfg(not(feature = "parallel"))]
        {
            distances
                .chunks_mut(n)
                .zip(directions_x.chunks_mut(n))
                .zip(directions_y.chunks_mut(n))
                .enumerate()
                .for_each(|(i, ((d_row, dx_row), dy_row))| fill_row(i, d_row, dx_row, dy_row));
        }

        PairwiseField { n, distances, directions_x, directions_y }
    }

    /// Number of particles the field was computed for.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.n + j]
    }

    pub fn direction(&self, i: usize, j: usize) -> (f64, f64) {
        let k = i * self.n + j;
        (self.directions_x[k], self.directions_y[k])
    }

    /// Distances from particle `i` to every particle.
    pub fn distance_row(&self, i: usize) -> &[f64] {
        &self.distances[i * self.n..(i + 1) * self.n]
    }

    /// Direction components from every particle towards particle `i`, as two slices.
    pub fn direction_row(&self, i: usize) -> (&[f64], &[f64]) {
        let range = i * self.n..(i + 1) * self.n;
        (&self.directions_x[range.clone()], &self.directions_y[range])
    }
}
