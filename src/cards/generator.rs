//! Card generation.
//!
//! Each column shuffles its full 15-number range and keeps the first five
//! values in row order, so numbers never repeat within a column.

use super::card::{Card, GRID_SIZE};
use super::cell::Column;
use crate::core::RandomSource;

/// Unbiased in-place Fisher-Yates shuffle.
///
/// For `i` from the last index down to 1, swap `i` with a uniform index in
/// `[0, i]`.
pub fn fisher_yates<T, R: RandomSource + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_index(i + 1);
        slice.swap(i, j);
    }
}

/// Generate a fresh card.
///
/// Never fails. The center cell is always the free cell, whatever number
/// the N column drew for that row.
pub fn generate_card<R: RandomSource + ?Sized>(rng: &mut R) -> Card {
    let mut columns = [[0u8; GRID_SIZE]; GRID_SIZE];

    for col in Column::ALL {
        let mut numbers: Vec<u8> = col.range().collect();
        fisher_yates(&mut numbers, rng);
        columns[col.index()].copy_from_slice(&numbers[..GRID_SIZE]);
    }

    let card = Card::from_columns(columns);
    tracing::debug!(card = %card.compact(), "generated card");
    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_fisher_yates_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u8> = (1..=15).collect();
        fisher_yates(&mut data, &mut rng);

        let mut sorted = data.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_fisher_yates_with_zero_script() {
        // Always swapping with index 0 rotates the front element through:
        // [1,2,3,4] -> i=3:[4,2,3,1] -> i=2:[3,2,4,1] -> i=1:[2,3,4,1]
        let mut rng = ScriptedRng::zeros();
        let mut data = vec![1, 2, 3, 4];
        fisher_yates(&mut data, &mut rng);
        assert_eq!(data, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_fisher_yates_identity_script() {
        // j == i at every step leaves the slice untouched
        let mut rng = ScriptedRng::new(vec![4, 3, 2, 1]);
        let mut data = vec![1, 2, 3, 4, 5];
        fisher_yates(&mut data, &mut rng);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_generate_with_identity_script() {
        // Identity swaps for a 15-long range: j = i for i = 14..=1
        let script: Vec<usize> = (1..=14).rev().collect();
        let mut rng = ScriptedRng::new(script);
        let card = generate_card(&mut rng);

        assert_eq!(card.column_numbers(Column::B), [1, 2, 3, 4, 5]);
        assert_eq!(card.column_numbers(Column::I), [16, 17, 18, 19, 20]);
        assert_eq!(card.column_numbers(Column::N), [31, 32, 0, 34, 35]);
        assert_eq!(card.column_numbers(Column::O), [61, 62, 63, 64, 65]);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate_card(&mut GameRng::new(9));
        let b = generate_card(&mut GameRng::new(9));
        assert_eq!(a, b);
    }
}
