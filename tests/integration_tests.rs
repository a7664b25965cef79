use montedice::defs::{coin, d6};
use montedice::{Analyzer, Die, Error, Game};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Replays a fixed list of raw values so weighted draws land on chosen
/// faces: 0 maps to the bottom of the cumulative weight line, u64::MAX
/// to the top.
struct ScriptedRng {
    values: Vec<u64>,
    pos: usize,
}

impl ScriptedRng {
    fn new(values: Vec<u64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

const LO: u64 = 0;
const HI: u64 = u64::MAX;

/// Two fair coins played four times, scripted to roll HH, HT, TH, TT.
/// Dice are rolled column by column: die 0 draws all four rolls first.
fn two_coin_game() -> Game<char> {
    let mut rng = ScriptedRng::new(vec![LO, LO, HI, HI, LO, HI, LO, HI]);
    let mut game = Game::new(vec![coin(), coin()]).unwrap();
    game.play_with(4, &mut rng).unwrap();
    game
}

#[test]
fn scripted_game_rolls_the_expected_table() {
    let game = two_coin_game();
    let table = game.result().unwrap();
    assert_eq!(table.row(0), Some(['H', 'H'].as_slice()));
    assert_eq!(table.row(1), Some(['H', 'T'].as_slice()));
    assert_eq!(table.row(2), Some(['T', 'H'].as_slice()));
    assert_eq!(table.row(3), Some(['T', 'T'].as_slice()));
}

#[test]
fn jackpots_in_the_worked_example() {
    let game = two_coin_game();
    assert_eq!(Analyzer::new(&game).jackpot_count().unwrap(), 2);
}

#[test]
fn face_counts_in_the_worked_example() {
    let game = two_coin_game();
    let counts = Analyzer::new(&game).face_counts().unwrap();
    assert_eq!(counts.get(0, &'H'), Some(2));
    assert_eq!(counts.get(0, &'T'), Some(0));
    assert_eq!(counts.get(1, &'H'), Some(1));
    assert_eq!(counts.get(1, &'T'), Some(1));
    assert_eq!(counts.get(3, &'T'), Some(2));
}

#[test]
fn combos_in_the_worked_example() {
    let game = two_coin_game();
    let combos = Analyzer::new(&game).combo_count().unwrap();
    assert_eq!(combos.count_of(&['H', 'H']), 1);
    assert_eq!(combos.count_of(&['H', 'T']), 2);
    assert_eq!(combos.count_of(&['T', 'T']), 1);
    assert_eq!(combos.len(), 3);
    assert_eq!(combos.total(), 4);
    // Most frequent combination leads the table.
    assert_eq!(combos.entries()[0], (vec!['H', 'T'], 2));
}

#[test]
fn permutations_in_the_worked_example() {
    let game = two_coin_game();
    let perms = Analyzer::new(&game).permutation_count().unwrap();
    for key in [['H', 'H'], ['H', 'T'], ['T', 'H'], ['T', 'T']] {
        assert_eq!(perms.count_of(&key), 1);
    }
    assert_eq!(perms.len(), 4);
    assert_eq!(perms.total(), 4);
}

#[test]
fn narrow_result_has_one_record_per_cell() {
    let game = two_coin_game();
    let narrow = game.narrow_result().unwrap();
    assert_eq!(narrow.len(), 8);
    assert_eq!(narrow[0].roll, 0);
    assert_eq!(narrow[0].die, 0);
    assert_eq!(narrow[0].outcome, 'H');
    assert_eq!(narrow[7].roll, 3);
    assert_eq!(narrow[7].die, 1);
    assert_eq!(narrow[7].outcome, 'T');
}

#[test]
fn count_tables_always_total_the_roll_count() {
    let mut game = Game::new(vec![d6(), d6(), d6()]).unwrap();
    game.play_with(40, &mut StdRng::seed_from_u64(17)).unwrap();
    let analyzer = Analyzer::new(&game);
    assert_eq!(analyzer.combo_count().unwrap().total(), 40);
    assert_eq!(analyzer.permutation_count().unwrap().total(), 40);
    assert!(analyzer.jackpot_count().unwrap() <= 40);
}

#[test]
fn face_count_rows_sum_to_the_die_count() {
    let mut game = Game::new(vec![d6(), d6(), d6()]).unwrap();
    game.play_with(25, &mut StdRng::seed_from_u64(23)).unwrap();
    let counts = Analyzer::new(&game).face_counts().unwrap();
    assert_eq!(counts.roll_count(), 25);
    for roll in 0..25 {
        let row = counts.row(roll).unwrap();
        assert_eq!(row.iter().sum::<usize>(), 3);
    }
}

#[test]
fn reweighted_game_rolls_only_live_faces() {
    let mut die = Die::new(["win", "lose"]).unwrap();
    die.change_weight(&"lose", 0.0).unwrap();
    let mut game = Game::new(vec![die.clone(), die]).unwrap();
    game.play_with(500, &mut StdRng::seed_from_u64(5)).unwrap();
    let analyzer = Analyzer::new(&game);
    assert_eq!(analyzer.jackpot_count().unwrap(), 500);
    let combos = analyzer.combo_count().unwrap();
    assert_eq!(combos.count_of(&["win", "win"]), 500);
    assert_eq!(combos.len(), 1);
}

#[test]
fn the_full_pipeline_reports_missing_results() {
    let game = Game::new(vec![coin()]).unwrap();
    assert_eq!(game.result().unwrap_err(), Error::NoResults);
    assert_eq!(
        Analyzer::new(&game).jackpot_count().unwrap_err(),
        Error::NoResults
    );
}
