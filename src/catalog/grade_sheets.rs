//! Grade sheet bindings

use crate::catalog::Resource;
use crate::catalog::models::{ApiMessage, GradeSheet, GradeSheetInput};
use crate::error::TransportError;
use crate::transport::Transport;

pub struct GradeSheetsApi<'a> {
    resource: Resource<'a>,
}

impl<'a> GradeSheetsApi<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            resource: Resource::new(transport, "grade-sheets"),
        }
    }

    pub async fn get_all(&self, course_id: Option<i64>) -> Result<Vec<GradeSheet>, TransportError> {
        self.resource.list(course_id).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<GradeSheet, TransportError> {
        self.resource.get(id).await
    }

    pub async fn create(&self, input: &GradeSheetInput) -> Result<GradeSheet, TransportError> {
        self.resource.create(input).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &GradeSheetInput,
    ) -> Result<ApiMessage, TransportError> {
        self.resource.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<ApiMessage, TransportError> {
        self.resource.delete(id).await
    }
}
