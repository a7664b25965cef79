use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::face::Face;

/// Wide result table: one row per roll, one column per die, cell = the
/// face that die rolled.
#[derive(Debug, Clone, PartialEq)]
pub struct RollTable<K>
where
    K: Face,
{
    die_count: usize,
    rows: Vec<Vec<K>>,
}

/// One cell of the narrow result form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowRecord<K>
where
    K: Face,
{
    pub roll: usize,
    pub die: usize,
    pub outcome: K,
}

impl<K> RollTable<K>
where
    K: Face,
{
    /// Builds the table from per-die outcome columns, each already in
    /// roll order. Every column must have the same length.
    pub(crate) fn from_columns(columns: Vec<Vec<K>>) -> Self {
        let die_count = columns.len();
        let roll_count = columns.first().map_or(0, Vec::len);
        let mut rows = vec![Vec::with_capacity(die_count); roll_count];
        for column in columns {
            debug_assert_eq!(column.len(), roll_count);
            for (row, outcome) in rows.iter_mut().zip(column) {
                row.push(outcome);
            }
        }
        Self { die_count, rows }
    }

    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn die_count(&self) -> usize {
        self.die_count
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[K]> {
        self.rows.get(roll).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[K]> {
        self.rows.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn get(&self, roll: usize, die: usize) -> Option<&K> {
        self.rows.get(roll).and_then(|row| row.get(die))
    }

    /// Reshapes to the narrow form: one record per (roll, die) pair,
    /// ordered by roll number then die number.
    #[must_use]
    pub fn to_narrow(&self) -> Vec<NarrowRecord<K>> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(roll, row)| {
                row.iter().enumerate().map(move |(die, outcome)| NarrowRecord {
                    roll,
                    die,
                    outcome: outcome.clone(),
                })
            })
            .collect()
    }
}

/// Counts of composite keys (combinations or permutations of a roll),
/// sorted by descending count; ties keep first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct CountTable<K>
where
    K: Face,
{
    entries: Vec<(Vec<K>, usize)>,
}

impl<K> CountTable<K>
where
    K: Face,
{
    pub(crate) fn tally<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Vec<K>>,
    {
        let mut order = Vec::new();
        let mut counts = HashMap::new();
        for key in keys {
            match counts.entry(key) {
                Entry::Vacant(e) => {
                    order.push(e.key().clone());
                    e.insert(1usize);
                }
                Entry::Occupied(mut e) => {
                    *e.get_mut() += 1;
                }
            }
        }
        let mut entries: Vec<_> = order
            .into_iter()
            .map(|key| {
                let count = counts[&key];
                (key, count)
            })
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[(Vec<K>, usize)] {
        &self.entries
    }

    #[must_use]
    pub fn count_of(&self, key: &[K]) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k.as_slice() == key)
            .map_or(0, |(_, count)| *count)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-roll face frequencies: one row per roll, one column per face of
/// the reference face set, cell = occurrences of that face in the roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceCounts<K>
where
    K: Face,
{
    faces: Vec<K>,
    rows: Vec<Vec<usize>>,
}

impl<K> FaceCounts<K>
where
    K: Face,
{
    pub(crate) fn new(faces: Vec<K>, rows: Vec<Vec<usize>>) -> Self {
        Self { faces, rows }
    }

    #[must_use]
    pub fn faces(&self) -> &[K] {
        &self.faces
    }

    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        self.rows.get(roll).map(Vec::as_slice)
    }

    #[must_use]
    pub fn get(&self, roll: usize, face: &K) -> Option<usize> {
        let i = self.faces.iter().position(|f| f == face)?;
        self.rows.get(roll).map(|row| row[i])
    }
}
