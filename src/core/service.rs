use crate::core::classifier;
use crate::core::input::{parse_number, MAX_MAGNITUDE};
use crate::domain::model::ClassificationResult;
use crate::domain::ports::{ConfigProvider, FactSource};
use crate::utils::error::Result;
use std::sync::Arc;

/// 解析 → 分類 → 取得趣聞 → 組合結果。請求之間不共享可變狀態。
pub struct ClassificationService<F: FactSource> {
    facts: Arc<F>,
    max_magnitude: u64,
}

impl<F: FactSource> Clone for ClassificationService<F> {
    fn clone(&self) -> Self {
        Self {
            facts: Arc::clone(&self.facts),
            max_magnitude: self.max_magnitude,
        }
    }
}

impl<F: FactSource> ClassificationService<F> {
    pub fn new(facts: F) -> Self {
        Self {
            facts: Arc::new(facts),
            max_magnitude: MAX_MAGNITUDE,
        }
    }

    pub fn from_config<C: ConfigProvider>(facts: F, config: &C) -> Self {
        Self::new(facts).with_max_magnitude(config.max_magnitude())
    }

    /// 上限只能調低，不能超過 `MAX_MAGNITUDE`
    pub fn with_max_magnitude(mut self, max_magnitude: u64) -> Self {
        self.max_magnitude = max_magnitude.min(MAX_MAGNITUDE);
        self
    }

    pub fn max_magnitude(&self) -> u64 {
        self.max_magnitude
    }

    pub async fn classify_raw(&self, raw: &str) -> Result<ClassificationResult> {
        let number = parse_number(raw, self.max_magnitude)?;
        tracing::debug!("Classifying {} (input {:?})", number, raw);

        let fun_fact = self.facts.fun_fact(number).await;
        Ok(classifier::classify(number, fun_fact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::fallback_fact;
    use crate::utils::error::{ClassifierError, InputError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingFacts {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FactSource for CountingFacts {
        async fn fun_fact(&self, number: i64) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            fallback_fact(number)
        }
    }

    fn service() -> ClassificationService<CountingFacts> {
        ClassificationService::new(CountingFacts {
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_classify_raw_success() {
        let service = service();
        let result = service.classify_raw("371").await.unwrap();

        assert_eq!(result.number, 371);
        assert_eq!(result.properties, vec!["armstrong", "odd"]);
        assert_eq!(result.fun_fact, "371 is a number with interesting properties.");
        assert_eq!(service.facts.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_truncated_inputs_classify_identically() {
        let service = service();
        let a = service.classify_raw("3.9").await.unwrap();
        let b = service.classify_raw("3").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_bad_input_skips_fact_lookup() {
        let service = service();
        let err = service.classify_raw("abc").await.unwrap_err();

        assert!(matches!(
            err,
            ClassifierError::Input(InputError::Unparsable { ref raw }) if raw == "abc"
        ));
        assert_eq!(service.facts.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_ceiling_cannot_be_raised() {
        let service = service().with_max_magnitude(u64::MAX);
        assert_eq!(service.max_magnitude(), MAX_MAGNITUDE);
        assert!(service.classify_raw("2000000000").await.is_err());

        let strict = service.with_max_magnitude(10);
        assert!(strict.classify_raw("11").await.is_err());
        assert!(strict.classify_raw("-10").await.is_ok());
    }
}
