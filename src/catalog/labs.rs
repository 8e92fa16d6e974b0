//! Lab bindings

use crate::catalog::Resource;
use crate::catalog::models::{ApiMessage, Lab, LabInput};
use crate::error::TransportError;
use crate::transport::Transport;

pub struct LabsApi<'a> {
    resource: Resource<'a>,
}

impl<'a> LabsApi<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            resource: Resource::new(transport, "labs"),
        }
    }

    pub async fn get_all(&self, course_id: Option<i64>) -> Result<Vec<Lab>, TransportError> {
        self.resource.list(course_id).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Lab, TransportError> {
        self.resource.get(id).await
    }

    pub async fn create(&self, input: &LabInput) -> Result<Lab, TransportError> {
        self.resource.create(input).await
    }

    pub async fn update(&self, id: i64, input: &LabInput) -> Result<ApiMessage, TransportError> {
        self.resource.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<ApiMessage, TransportError> {
        self.resource.delete(id).await
    }
}
