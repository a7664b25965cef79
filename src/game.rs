use rand::{thread_rng, Rng};

use crate::die::Die;
use crate::error::{Error, Result};
use crate::face::Face;
use crate::table::{NarrowRecord, RollTable};

/// An ordered collection of dice rolled together. Holds the result of
/// the most recent play; each play replaces the one before it.
///
/// Dice are assumed to share a face set. This is not enforced here:
/// `Analyzer::face_counts` is where a mismatch surfaces.
#[derive(Debug, Clone)]
pub struct Game<K>
where
    K: Face,
{
    dice: Vec<Die<K>>,
    result: Option<RollTable<K>>,
}

impl<K> Game<K>
where
    K: Face,
{
    pub fn new(dice: Vec<Die<K>>) -> Result<Self> {
        if dice.is_empty() {
            return Err(Error::NoDice);
        }
        Ok(Self { dice, result: None })
    }

    /// Rolls every die `n` times with the thread-local generator and
    /// stores the outcome table.
    pub fn play(&mut self, n: usize) -> Result<()> {
        self.play_with(n, &mut thread_rng())
    }

    /// Rolls die by die in list order, collecting each die's outcomes in
    /// roll order before merging by die index. On error the previous
    /// result is left in place.
    pub fn play_with<G>(&mut self, n: usize, rng: &mut G) -> Result<()>
    where
        G: Rng,
    {
        let mut columns = Vec::with_capacity(self.dice.len());
        for die in &self.dice {
            columns.push(die.roll_with(n, rng)?);
        }
        self.result = Some(RollTable::from_columns(columns));
        Ok(())
    }

    /// The most recent result in wide form.
    pub fn result(&self) -> Result<&RollTable<K>> {
        self.result.as_ref().ok_or(Error::NoResults)
    }

    /// The most recent result in narrow form, one record per
    /// (roll, die) pair.
    pub fn narrow_result(&self) -> Result<Vec<NarrowRecord<K>>> {
        self.result().map(RollTable::to_narrow)
    }

    #[must_use]
    pub fn dice(&self) -> &[Die<K>] {
        &self.dice
    }

    #[must_use]
    pub fn die_count(&self) -> usize {
        self.dice.len()
    }
}
