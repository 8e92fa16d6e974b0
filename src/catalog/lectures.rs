//! Lecture bindings

use crate::catalog::Resource;
use crate::catalog::models::{ApiMessage, Lecture, LectureInput};
use crate::error::TransportError;
use crate::transport::Transport;

pub struct LecturesApi<'a> {
    resource: Resource<'a>,
}

impl<'a> LecturesApi<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            resource: Resource::new(transport, "lectures"),
        }
    }

    /// All lectures, or only those of `course_id`
    pub async fn get_all(&self, course_id: Option<i64>) -> Result<Vec<Lecture>, TransportError> {
        self.resource.list(course_id).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Lecture, TransportError> {
        self.resource.get(id).await
    }

    pub async fn create(&self, input: &LectureInput) -> Result<Lecture, TransportError> {
        self.resource.create(input).await
    }

    pub async fn update(&self, id: i64, input: &LectureInput) -> Result<ApiMessage, TransportError> {
        self.resource.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<ApiMessage, TransportError> {
        self.resource.delete(id).await
    }
}
