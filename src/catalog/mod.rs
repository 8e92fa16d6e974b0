//! Course catalogue
//!
//! Typed bindings for courses, lectures, labs, exam questions and grade
//! sheets. Reads are public; writes go through the `/admin` routes and need an
//! admin session.

pub mod courses;
pub mod exam_questions;
pub mod grade_sheets;
pub mod labs;
pub mod lectures;
pub mod models;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::TransportError;
use crate::transport::{ApiRequest, Transport, fetch_json};

pub use courses::CoursesApi;
pub use exam_questions::ExamQuestionsApi;
pub use grade_sheets::GradeSheetsApi;
pub use labs::LabsApi;
pub use lectures::LecturesApi;
pub use models::*;

/// Common shape of the catalogue resources: a public collection and an admin
/// collection under `/admin`
pub(crate) struct Resource<'a> {
    transport: &'a dyn Transport,
    collection: &'static str,
}

impl<'a> Resource<'a> {
    pub(crate) fn new(transport: &'a dyn Transport, collection: &'static str) -> Self {
        Self {
            transport,
            collection,
        }
    }

    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        course_id: Option<i64>,
    ) -> Result<Vec<T>, TransportError> {
        let request = ApiRequest::get(format!("/{}", self.collection))
            .with_optional_query("course_id", course_id);
        fetch_json(self.transport, request).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, id: i64) -> Result<T, TransportError> {
        fetch_json(
            self.transport,
            ApiRequest::get(format!("/{}/{}", self.collection, id)),
        )
        .await
    }

    pub(crate) async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        body: &B,
    ) -> Result<T, TransportError> {
        let request = ApiRequest::post(format!("/admin/{}", self.collection)).with_json(body)?;
        fetch_json(self.transport, request).await
    }

    pub(crate) async fn update<B: Serialize>(
        &self,
        id: i64,
        body: &B,
    ) -> Result<ApiMessage, TransportError> {
        let request =
            ApiRequest::put(format!("/admin/{}/{}", self.collection, id)).with_json(body)?;
        fetch_json(self.transport, request).await
    }

    pub(crate) async fn delete(&self, id: i64) -> Result<ApiMessage, TransportError> {
        fetch_json(
            self.transport,
            ApiRequest::delete(format!("/admin/{}/{}", self.collection, id)),
        )
        .await
    }
}
