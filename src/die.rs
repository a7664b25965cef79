use itertools::Itertools;
use rand::{thread_rng, Rng};

use crate::error::{Error, Result};
use crate::face::Face;

/// An N-sided die: an ordered set of distinct face labels, each with a
/// mutable non-negative weight. Fresh dice weight every face at 1.0.
///
/// The face set is fixed at construction; only weights change afterwards.
/// Draw probability is weight / sum of weights, evaluated at draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct Die<K>
where
    K: Face,
{
    faces: Vec<K>,
    weights: Vec<f64>,
}

impl<K> Die<K>
where
    K: Face,
{
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let faces: Vec<_> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(Error::EmptyFaces);
        }
        if let Some(dup) = faces.iter().duplicates().next() {
            return Err(Error::DuplicateFace(format!("{dup:?}")));
        }
        Ok(Self::with_uniform_weights(faces))
    }

    pub(crate) fn with_uniform_weights(faces: Vec<K>) -> Self {
        let weights = vec![1.0; faces.len()];
        Self { faces, weights }
    }

    /// Overwrites the weight of one face in place. Zero is allowed and
    /// removes the face from play without shrinking the face set.
    pub fn change_weight(&mut self, face: &K, new_weight: f64) -> Result<()> {
        if !new_weight.is_finite() || new_weight < 0.0 {
            return Err(Error::InvalidWeight(new_weight));
        }
        let i = self.index_of(face)?;
        self.weights[i] = new_weight;
        Ok(())
    }

    /// Draws `n` independent weighted samples with replacement, using
    /// the thread-local generator. `n = 0` yields an empty sequence.
    pub fn roll(&self, n: usize) -> Result<Vec<K>> {
        self.roll_with(n, &mut thread_rng())
    }

    pub fn roll_with<G>(&self, n: usize, rng: &mut G) -> Result<Vec<K>>
    where
        G: Rng,
    {
        let mut outcomes = Vec::with_capacity(n);
        for _ in 0..n {
            outcomes.push(self.sample_with(rng)?);
        }
        Ok(outcomes)
    }

    /// One weighted draw: a uniform point in `[0, total)` mapped onto
    /// the cumulative weight line.
    pub fn sample_with<G>(&self, rng: &mut G) -> Result<K>
    where
        G: Rng,
    {
        let total = self.total_weight()?;
        let x = rng.gen_range(0.0..total);
        let mut acc = 0.0;
        for (face, w) in self.faces.iter().zip(&self.weights) {
            acc += w;
            if x < acc {
                return Ok(face.clone());
            }
        }
        // Accumulated rounding can leave x just past the last bound; the
        // sliver belongs to the last face still in play.
        let (face, _) = self
            .faces
            .iter()
            .zip(&self.weights)
            .rev()
            .find(|(_, w)| **w > 0.0)
            .ok_or(Error::ZeroWeightSum)?;
        Ok(face.clone())
    }

    /// Snapshot of the face → weight mapping in original face order.
    /// Later weight changes do not affect a snapshot already taken.
    #[must_use]
    pub fn state(&self) -> Vec<(K, f64)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }

    pub fn probabilities(&self) -> Result<Vec<(K, f64)>> {
        let total = self.total_weight()?;
        Ok(self
            .faces
            .iter()
            .cloned()
            .zip(self.weights.iter().map(|w| w / total))
            .collect())
    }

    #[must_use]
    pub fn faces(&self) -> &[K] {
        &self.faces
    }

    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn index_of(&self, face: &K) -> Result<usize> {
        self.faces
            .iter()
            .position(|f| f == face)
            .ok_or_else(|| Error::UnknownFace(format!("{face:?}")))
    }

    fn total_weight(&self) -> Result<f64> {
        let total: f64 = self.weights.iter().sum();
        if total > 0.0 {
            Ok(total)
        } else {
            Err(Error::ZeroWeightSum)
        }
    }
}

impl Die<u32> {
    /// A fair numeric die with faces `1..=sides`.
    #[must_use]
    pub fn numeric(sides: u32) -> Self {
        assert_ne!(sides, 0);
        Self::with_uniform_weights((1..=sides).collect())
    }
}
