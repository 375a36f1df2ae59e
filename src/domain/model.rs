use serde::{Deserialize, Serialize};
use std::fmt;

/// 單一請求的分類結果，每次請求重新計算
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

/// 400/500 回應內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityTag {
    Odd,
    Even,
}

impl ParityTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParityTag::Odd => "odd",
            ParityTag::Even => "even",
        }
    }
}

impl fmt::Display for ParityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const ARMSTRONG_TAG: &str = "armstrong";

/// 事實服務失敗時的替代句子，保留原始帶號數字
pub fn fallback_fact(number: i64) -> String {
    format!("{} is a number with interesting properties.", number)
}
