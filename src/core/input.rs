use crate::utils::error::InputError;

/// 絕對值上限，限制每次請求的計算量
pub const MAX_MAGNITUDE: u64 = 1_000_000_000;

/// 解析客戶端輸入：接受小數，向零截斷後再檢查絕對值上限。
pub fn parse_number(raw: &str, max_magnitude: u64) -> Result<i64, InputError> {
    let unparsable = || InputError::Unparsable {
        raw: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| unparsable())?;
    if !value.is_finite() {
        return Err(unparsable());
    }

    let truncated = value.trunc();
    if truncated.abs() > max_magnitude as f64 {
        return Err(InputError::OutOfRange {
            raw: raw.to_string(),
            // `as` 會飽和，不會溢位
            value: truncated as i64,
            ceiling: max_magnitude,
        });
    }

    Ok(truncated as i64)
}
