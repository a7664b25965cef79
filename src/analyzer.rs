use itertools::Itertools;

use crate::error::{Error, Result};
use crate::face::Face;
use crate::game::Game;
use crate::table::{CountTable, FaceCounts};

/// Derives summary statistics from a game's most recent result. Holds a
/// borrow of the game and computes every view on demand; nothing is
/// cached.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a, K>
where
    K: Face,
{
    game: &'a Game<K>,
}

impl<'a, K> Analyzer<'a, K>
where
    K: Face,
{
    #[must_use]
    pub fn new(game: &'a Game<K>) -> Self {
        Self { game }
    }

    /// Number of rolls where every die landed on the same face.
    pub fn jackpot_count(&self) -> Result<usize> {
        let table = self.game.result()?;
        Ok(table
            .rows()
            .filter(|row| row.iter().all_equal())
            .count())
    }

    /// Per-roll occurrence counts for each face of the first die's face
    /// set. An outcome outside that set means the game's dice do not
    /// share faces and is reported as `UnknownFace`.
    pub fn face_counts(&self) -> Result<FaceCounts<K>> {
        let table = self.game.result()?;
        let faces = self.game.dice()[0].faces().to_vec();
        let mut rows = Vec::with_capacity(table.roll_count());
        for row in table.rows() {
            let mut counts = vec![0usize; faces.len()];
            for outcome in row {
                let i = faces
                    .iter()
                    .position(|f| f == outcome)
                    .ok_or_else(|| Error::UnknownFace(format!("{outcome:?}")))?;
                counts[i] += 1;
            }
            rows.push(counts);
        }
        Ok(FaceCounts::new(faces, rows))
    }

    /// Counts each order-independent combination of per-roll outcomes:
    /// every roll is sorted into a canonical key before tallying.
    pub fn combo_count(&self) -> Result<CountTable<K>> {
        let table = self.game.result()?;
        Ok(CountTable::tally(table.rows().map(|row| {
            row.iter().cloned().sorted().collect()
        })))
    }

    /// Counts each order-dependent sequence of per-roll outcomes, die
    /// order preserved.
    pub fn permutation_count(&self) -> Result<CountTable<K>> {
        let table = self.game.result()?;
        Ok(CountTable::tally(table.rows().map(<[K]>::to_vec)))
    }
}
