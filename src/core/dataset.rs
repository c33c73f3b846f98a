use crate::domain::model::{Dataset, InputSpec, MatchRecord, Problem};
use crate::utils::error::{DrillError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngExt, SeedableRng};

/// 產生比賽資料用的棋手名單
const PLAYER_POOL: [&str; 10] = [
    "Carlsen",
    "Ding Liren",
    "Nepomniachtchi",
    "Karjakin",
    "Aronian",
    "Keymer",
    "Vitiugov",
    "Gukesh D",
    "Andreikin",
    "Grischuk",
];

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Inclusive strided range, the usual drill input shape.
pub fn strided(start: i64, end: i64, step: i64) -> Vec<i64> {
    let mut values = Vec::new();
    let mut current = start;
    while current <= end {
        values.push(current);
        current += step;
    }
    values
}

/// 由 Range 或 Inline 規格產生數列；File 由 storage 層負責
pub fn generate_values(input: &InputSpec, seed: Option<u64>) -> Result<Vec<i64>> {
    match input {
        InputSpec::Range {
            start,
            end,
            step,
            shuffle,
        } => {
            crate::utils::validation::validate_stride("input", *start, *end, *step)?;
            let mut values = strided(*start, *end, *step);
            if *shuffle {
                values.shuffle(&mut rng_for(seed));
            }
            Ok(values)
        }
        InputSpec::Inline { values } => Ok(values.clone()),
        InputSpec::File { path } => Err(DrillError::DatasetError {
            message: format!("File input '{}' must be resolved through storage", path),
        }),
        InputSpec::Fixtures { .. } => Err(DrillError::DatasetError {
            message: "Fixture input produces match records, not a numeric sequence".to_string(),
        }),
    }
}

/// Parse a numeric dataset out of CSV bytes; every field of every record
/// must be an integer.
pub fn values_from_csv_bytes(bytes: &[u8]) -> Result<Vec<i64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        for field in record.iter() {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let value: i64 = field.parse().map_err(|_| DrillError::DatasetError {
                message: format!("Non-integer field in dataset file: '{}'", field),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// 未指定 candidate 時，取每隔一個元素作為子序列
pub fn default_candidate(array: &[i64]) -> Vec<i64> {
    array.iter().copied().step_by(2).collect()
}

pub fn season_fixtures(rounds: usize, seed: Option<u64>) -> Vec<MatchRecord> {
    let mut rng = rng_for(seed);
    let (hosts, guests) = PLAYER_POOL.split_at(PLAYER_POOL.len() / 2);

    (0..rounds)
        .map(|_| MatchRecord {
            host: hosts[rng.random_range(0..hosts.len())].to_string(),
            guest: guests[rng.random_range(0..guests.len())].to_string(),
            host_won: rng.random_range(0..2) == 1,
        })
        .collect()
}

/// 將數列整理成題目要求的資料集
pub fn assemble_numbers(problem: Problem, mut values: Vec<i64>, target: Option<i64>) -> Result<Dataset> {
    match problem {
        Problem::SortedSquares => {
            // The two-pointer variant relies on sorted input.
            values.sort_unstable();
            Ok(Dataset::Numbers {
                values,
                target: None,
            })
        }
        Problem::CoinChange => {
            if let Some(bad) = values.iter().find(|v| **v <= 0) {
                return Err(DrillError::DatasetError {
                    message: format!("Coin denominations must be positive, got {}", bad),
                });
            }
            Ok(Dataset::Numbers {
                values,
                target: None,
            })
        }
        Problem::TwoSum => Ok(Dataset::Numbers { values, target }),
        Problem::Subsequence | Problem::Tournament => Err(DrillError::DatasetError {
            message: format!("Problem '{}' does not take a plain numeric dataset", problem),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strided_matches_inclusive_bounds() {
        assert_eq!(strided(-5, 5, 5), vec![-5, 0, 5]);
        assert_eq!(strided(0, 10, 9), vec![0, 9]);
        assert_eq!(strided(3, 3, 1), vec![3]);
        assert_eq!(strided(5, 3, 1), Vec::<i64>::new());
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let input = InputSpec::Range {
            start: 0,
            end: 1000,
            step: 1,
            shuffle: true,
        };
        let a = generate_values(&input, Some(42)).unwrap();
        let b = generate_values(&input, Some(42)).unwrap();
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, strided(0, 1000, 1));
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let input = InputSpec::Range {
            start: 0,
            end: 10,
            step: 0,
            shuffle: false,
        };
        assert!(generate_values(&input, None).is_err());
    }

    #[test]
    fn test_values_from_csv_bytes() {
        let bytes = b"1\n-2\n30\n";
        assert_eq!(values_from_csv_bytes(bytes).unwrap(), vec![1, -2, 30]);

        let multi = b"1,2,3\n4,5\n";
        assert_eq!(values_from_csv_bytes(multi).unwrap(), vec![1, 2, 3, 4, 5]);

        assert!(values_from_csv_bytes(b"1\nnope\n").is_err());
    }

    #[test]
    fn test_default_candidate_is_a_subsequence() {
        let array = vec![1, 2, 3, 4, 5];
        let candidate = default_candidate(&array);
        assert_eq!(candidate, vec![1, 3, 5]);
        assert!(crate::algos::subsequence::is_subsequence(&array, &candidate));
    }

    #[test]
    fn test_season_fixtures_are_seeded_and_sized() {
        let a = season_fixtures(10, Some(7));
        let b = season_fixtures(10, Some(7));
        assert_eq!(a.len(), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_assemble_sorts_for_sorted_squares() {
        let dataset = assemble_numbers(Problem::SortedSquares, vec![3, -5, 1], None).unwrap();
        match dataset {
            Dataset::Numbers { values, .. } => assert_eq!(values, vec![-5, 1, 3]),
            _ => panic!("expected a numeric dataset"),
        }
    }

    #[test]
    fn test_assemble_rejects_non_positive_coins() {
        let err = assemble_numbers(Problem::CoinChange, vec![1, 0, 2], None).unwrap_err();
        assert!(matches!(err, DrillError::DatasetError { .. }));
    }
}
