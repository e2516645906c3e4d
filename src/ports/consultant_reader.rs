//! Read access to the consultant directory.

use async_trait::async_trait;

use crate::domain::directory::Consultant;
use crate::domain::foundation::{ConsultantId, DomainError};

/// Query port for consultant profiles.
#[async_trait]
pub trait ConsultantReader: Send + Sync {
    /// Lists all consultants in directory order.
    async fn list(&self) -> Result<Vec<Consultant>, DomainError>;

    /// Finds a consultant by id, None if absent.
    async fn find_by_id(&self, id: &ConsultantId) -> Result<Option<Consultant>, DomainError>;
}
