//! GetCriteriaHandler - query handler for the criteria catalog.

use std::sync::Arc;

use crate::domain::ahp::Criterion;
use crate::domain::foundation::DomainError;
use crate::ports::CriterionCatalog;

/// Handler returning the ordered criteria list the frontend renders against.
pub struct GetCriteriaHandler {
    catalog: Arc<dyn CriterionCatalog>,
}

impl GetCriteriaHandler {
    pub fn new(catalog: Arc<dyn CriterionCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Criterion>, DomainError> {
        self.catalog.list_criteria().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;

    struct StaticCatalog(Vec<Criterion>);

    #[async_trait]
    impl CriterionCatalog for StaticCatalog {
        async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
            Ok(self.0.clone())
        }
    }

    struct FailingCatalog;

    #[async_trait]
    impl CriterionCatalog for FailingCatalog {
        async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
            Err(DomainError::new(
                ErrorCode::CatalogUnavailable,
                "Simulated catalog outage",
            ))
        }
    }

    #[tokio::test]
    async fn returns_catalog_order_unchanged() {
        let catalog = StaticCatalog(vec![
            Criterion::new(1, "A", "Alpha", None),
            Criterion::new(2, "B", "Beta", None),
        ]);
        let handler = GetCriteriaHandler::new(Arc::new(catalog));

        let criteria = handler.handle().await.unwrap();
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria[0].code, "A");
        assert_eq!(criteria[1].code, "B");
    }

    #[tokio::test]
    async fn propagates_catalog_failure() {
        let handler = GetCriteriaHandler::new(Arc::new(FailingCatalog));
        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
    }
}
