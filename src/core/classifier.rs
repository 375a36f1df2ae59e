//! 數字性質判斷。全部為純函數，先取絕對值再計算；只有奇偶使用帶號值。

use crate::domain::model::{ClassificationResult, ParityTag, ARMSTRONG_TAG};

pub fn is_prime(number: i64) -> bool {
    let n = number.unsigned_abs();
    if n < 2 {
        return false;
    }

    let mut i = 2u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// 真因數和等於自身。因數成對列舉到平方根為止。
pub fn is_perfect(number: i64) -> bool {
    let n = number.unsigned_abs();
    if n <= 1 {
        return false;
    }

    let mut sum: u128 = 1;
    let mut i = 2u64;
    while i <= n / i {
        if n % i == 0 {
            sum += u128::from(i);
            let pair = n / i;
            if pair != i {
                sum += u128::from(pair);
            }
        }
        i += 1;
    }
    sum == u128::from(n)
}

pub fn is_armstrong(number: i64) -> bool {
    let n = number.unsigned_abs();
    let digits = decimal_digits(n);
    let power = digits.len() as u32;

    // u128 足以容納 20 位數各自的 20 次方總和
    let total: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    total == u128::from(n)
}

pub fn digit_sum(number: i64) -> u64 {
    decimal_digits(number.unsigned_abs())
        .into_iter()
        .map(u64::from)
        .sum()
}

pub fn parity(number: i64) -> ParityTag {
    if number % 2 == 0 {
        ParityTag::Even
    } else {
        ParityTag::Odd
    }
}

/// "armstrong"（如適用）在前，接著恰好一個奇偶標籤
pub fn properties(number: i64) -> Vec<String> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(number) {
        properties.push(ARMSTRONG_TAG.to_string());
    }
    properties.push(parity(number).to_string());
    properties
}

pub fn classify(number: i64, fun_fact: String) -> ClassificationResult {
    ClassificationResult {
        number,
        is_prime: is_prime(number),
        is_perfect: is_perfect(number),
        properties: properties(number),
        digit_sum: digit_sum(number),
        fun_fact,
    }
}

fn decimal_digits(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }

    let mut digits = Vec::with_capacity(20);
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.reverse();
    digits
}
