use crate::io::configuration::{CUP_COUNT_LONG, CUP_MOVES_LONG, CUP_MOVES_SHORT};
use crate::io::error::{Result, malformed};
use crate::io::progress::{ProgressReporter, TaskProgress};

/// Cups picked up by each move
pub const PICKED_UP: usize = 3;

/// Circle of cups where `next[label]` is the label clockwise of `label`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cups {
    next: Vec<usize>,
    current: usize,
}

impl Cups {
    /// Lay out the given labels, then `total` minus their count more cups
    /// numbered upwards
    ///
    /// # Errors
    ///
    /// Returns an error unless the labels are the digits `1..=n` in some order
    /// and the circle holds more cups than a move picks up
    pub fn new(labels: &[usize], total: usize) -> Result<Self> {
        let mut sorted = labels.to_vec();
        sorted.sort_unstable();
        if sorted.is_empty() || !sorted.iter().copied().eq(1..=labels.len()) {
            return Err(malformed("cup labels", &"labels must be 1..=n, each once"));
        }

        let total = total.max(labels.len());
        if total <= PICKED_UP {
            return Err(malformed(
                "cup labels",
                &format!("{total} cups leave no destination after picking up {PICKED_UP}"),
            ));
        }
        let order: Vec<usize> = labels
            .iter()
            .copied()
            .chain(labels.len() + 1..=total)
            .collect();

        let mut next = vec![0; total + 1];
        for (&label, &following) in order.iter().zip(order.iter().cycle().skip(1)) {
            if let Some(slot) = next.get_mut(label) {
                *slot = following;
            }
        }
        let current = order.first().copied().unwrap_or(1);
        Ok(Self { next, current })
    }

    fn after(&self, label: usize) -> usize {
        self.next.get(label).copied().unwrap_or(label)
    }

    fn link(&mut self, label: usize, following: usize) {
        if let Some(slot) = self.next.get_mut(label) {
            *slot = following;
        }
    }

    /// Play one move
    pub fn play_move(&mut self) {
        let highest = self.next.len() - 1;
        let mut picked = [0; PICKED_UP];
        let mut cursor = self.current;
        for cup in &mut picked {
            cursor = self.after(cursor);
            *cup = cursor;
        }

        let mut destination = self.current;
        loop {
            destination = if destination == 1 { highest } else { destination - 1 };
            if !picked.contains(&destination) {
                break;
            }
        }

        let first_picked = self.after(self.current);
        let after_picked = self.after(cursor);
        self.link(self.current, after_picked);
        let after_destination = self.after(destination);
        self.link(destination, first_picked);
        self.link(cursor, after_destination);
        self.current = self.after(self.current);
    }

    /// Play `moves` moves
    pub fn play(&mut self, moves: usize, progress: &TaskProgress) {
        for step in 1..=moves {
            self.play_move();
            progress.advance(step);
        }
    }

    /// Labels clockwise from cup 1, excluding it
    pub fn labels_after_one(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.after(1)), move |&label| Some(self.after(label)))
            .take_while(|&label| label != 1)
    }
}

/// Parse the digit string of cup labels
///
/// # Errors
///
/// Returns an error on non-digit characters
pub fn parse(input: &str) -> Result<Vec<usize>> {
    input
        .trim()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|digit| digit as usize)
                .ok_or_else(|| malformed("cup labels", &format!("unexpected '{c}'")))
        })
        .collect()
}

/// Labels after cup 1 following `moves` moves of the small game
///
/// # Errors
///
/// Returns an error if the labels are malformed
pub fn labels_after(input: &str, moves: usize) -> Result<String> {
    let labels = parse(input)?;
    let mut cups = Cups::new(&labels, labels.len())?;
    cups.play(moves, &TaskProgress::hidden());
    Ok(cups.labels_after_one().map(|label| label.to_string()).collect())
}

/// Labels after cup 1 following 100 moves
///
/// # Errors
///
/// Returns an error if the labels are malformed
pub fn part1(input: &str) -> Result<String> {
    labels_after(input, CUP_MOVES_SHORT)
}

/// Product of the two cups after cup 1 in the million-cup game
///
/// # Errors
///
/// Returns an error if the labels are malformed
pub fn part2(input: &str, reporter: &ProgressReporter) -> Result<u64> {
    let mut cups = Cups::new(&parse(input)?, CUP_COUNT_LONG)?;
    let progress = reporter.start("crab cups", CUP_MOVES_LONG);
    cups.play(CUP_MOVES_LONG, &progress);
    progress.finish();
    Ok(cups
        .labels_after_one()
        .take(2)
        .map(|label| label as u64)
        .product())
}
