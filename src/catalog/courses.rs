//! Course bindings

use crate::catalog::Resource;
use crate::catalog::models::{ApiMessage, Course, CourseInput};
use crate::error::TransportError;
use crate::transport::Transport;

pub struct CoursesApi<'a> {
    resource: Resource<'a>,
}

impl<'a> CoursesApi<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            resource: Resource::new(transport, "courses"),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Course>, TransportError> {
        self.resource.list(None).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Course, TransportError> {
        self.resource.get(id).await
    }

    pub async fn create(&self, input: &CourseInput) -> Result<Course, TransportError> {
        self.resource.create(input).await
    }

    pub async fn update(&self, id: i64, input: &CourseInput) -> Result<ApiMessage, TransportError> {
        self.resource.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<ApiMessage, TransportError> {
        self.resource.delete(id).await
    }
}
