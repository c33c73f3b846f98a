use crate::utils::error::{DrillError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// 可供練習的題目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Problem {
    TwoSum,
    Subsequence,
    SortedSquares,
    CoinChange,
    Tournament,
}

impl Problem {
    pub fn all() -> &'static [Problem] {
        &[
            Problem::TwoSum,
            Problem::Subsequence,
            Problem::SortedSquares,
            Problem::CoinChange,
            Problem::Tournament,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Problem::TwoSum => "two-sum",
            Problem::Subsequence => "subsequence",
            Problem::SortedSquares => "sorted-squares",
            Problem::CoinChange => "coin-change",
            Problem::Tournament => "tournament",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Problem {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "two-sum" => Ok(Problem::TwoSum),
            "subsequence" => Ok(Problem::Subsequence),
            "sorted-squares" => Ok(Problem::SortedSquares),
            "coin-change" => Ok(Problem::CoinChange),
            "tournament" => Ok(Problem::Tournament),
            other => Err(DrillError::UnknownProblemError {
                name: other.to_string(),
            }),
        }
    }
}

/// 一場比賽的紀錄：主場、客場與勝負
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub host: String,
    pub guest: String,
    pub host_won: bool,
}

/// 單次練習的輸入資料
#[derive(Debug, Clone)]
pub enum Dataset {
    Numbers {
        values: Vec<i64>,
        target: Option<i64>,
    },
    SequencePair {
        array: Vec<i64>,
        candidate: Vec<i64>,
    },
    Season {
        rounds: Vec<MatchRecord>,
    },
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self {
            Dataset::Numbers { values, .. } => values.len(),
            Dataset::SequencePair { array, .. } => array.len(),
            Dataset::Season { rounds } => rounds.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 各變體的回答，依題目型別標記
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Pair(Option<(i64, i64)>),
    Indices(Option<(usize, usize)>),
    Truth(bool),
    Sequence(Vec<i64>),
    Amount(i64),
    Champion(Option<String>),
}

impl Answer {
    /// Pair-like answers only claim existence; different variants may
    /// legitimately return different pairs for the same input.
    fn found(&self) -> Option<bool> {
        match self {
            Answer::Pair(pair) => Some(pair.is_some()),
            Answer::Indices(pair) => Some(pair.is_some()),
            _ => None,
        }
    }

    pub fn agrees_with(&self, other: &Answer) -> bool {
        match (self.found(), other.found()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }
}

/// 輸入資料的來源描述
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputSpec {
    Range {
        start: i64,
        end: i64,
        step: i64,
        #[serde(default)]
        shuffle: bool,
    },
    File {
        path: String,
    },
    Inline {
        values: Vec<i64>,
    },
    Fixtures {
        rounds: usize,
    },
}

/// 一項排定的練習
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillSpec {
    pub name: String,
    pub problem: Problem,
    #[serde(default)]
    pub variants: Vec<String>,
    pub input: InputSpec,
    #[serde(default)]
    pub candidate: Option<InputSpec>,
    #[serde(default)]
    pub target: Option<i64>,
}

/// 單一變體的執行結果
#[derive(Debug, Clone)]
pub struct VariantRun {
    pub variant: String,
    pub answer: Answer,
    pub elapsed: Duration,
    pub verified: bool,
}

/// 一項練習完整的執行結果
#[derive(Debug, Clone)]
pub struct DrillReport {
    pub drill_name: String,
    pub problem: Problem,
    pub input_size: usize,
    pub runs: Vec<VariantRun>,
    pub consistent: bool,
}
