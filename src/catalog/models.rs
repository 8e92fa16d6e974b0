//! Catalogue data types
//!
//! Read models as returned by the API, and the payloads accepted by its
//! admin endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub semester: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseInput {
    pub name: String,
    pub semester: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: i64,
    pub course_id: i64,
    pub week: i32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub github_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LectureInput {
    pub course_id: i64,
    pub week: i32,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub id: i64,
    pub course_id: i64,
    pub number: i32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    pub max_score: i32,
    #[serde(default)]
    pub github_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabInput {
    pub course_id: i64,
    pub number: i32,
    pub title: String,
    pub description: String,
    pub max_score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub id: i64,
    pub course_id: i64,
    pub number: i32,
    pub section: String,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamQuestionInput {
    pub course_id: i64,
    pub number: i32,
    pub section: String,
    pub question: String,
}

/// Update payload; the owning course cannot change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamQuestionUpdate {
    pub number: i32,
    pub section: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkQuestion {
    pub number: i32,
    pub section: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkQuestionsInput {
    pub course_id: i64,
    pub questions: Vec<BulkQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSheet {
    pub id: i64,
    pub course_id: i64,
    pub sheet_url: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSheetInput {
    pub course_id: i64,
    pub sheet_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `{"message": "..."}` acknowledgement of update/delete calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Acknowledgement of a bulk question import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkCreated {
    pub message: String,
    pub count: usize,
}
