//! Exam question bindings
//!
//! Besides the usual CRUD calls, admins can import a whole question list for
//! a course in one request.

use crate::catalog::Resource;
use crate::catalog::models::{
    ApiMessage, BulkCreated, BulkQuestionsInput, ExamQuestion, ExamQuestionInput,
    ExamQuestionUpdate,
};
use crate::error::TransportError;
use crate::transport::{ApiRequest, Transport, fetch_json};

const BULK_PATH: &str = "/admin/exam-questions/bulk";

pub struct ExamQuestionsApi<'a> {
    transport: &'a dyn Transport,
    resource: Resource<'a>,
}

impl<'a> ExamQuestionsApi<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            transport,
            resource: Resource::new(transport, "exam-questions"),
        }
    }

    pub async fn get_all(&self, course_id: Option<i64>) -> Result<Vec<ExamQuestion>, TransportError> {
        self.resource.list(course_id).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ExamQuestion, TransportError> {
        self.resource.get(id).await
    }

    pub async fn create(&self, input: &ExamQuestionInput) -> Result<ExamQuestion, TransportError> {
        self.resource.create(input).await
    }

    /// Import several questions for one course
    pub async fn bulk_create(&self, input: &BulkQuestionsInput) -> Result<BulkCreated, TransportError> {
        let request = ApiRequest::post(BULK_PATH).with_json(input)?;
        fetch_json(self.transport, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &ExamQuestionUpdate,
    ) -> Result<ApiMessage, TransportError> {
        self.resource.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<ApiMessage, TransportError> {
        self.resource.delete(id).await
    }
}
