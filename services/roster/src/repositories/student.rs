//! Student repository for the `students` document
//!
//! Each mutation reads the whole list, changes it in memory and writes the
//! whole list back.

use anyhow::{Result, anyhow};
use common::Documents;
use tracing::info;

use crate::models::{NewStudent, Student};

/// Name of the document holding students
pub const STUDENTS_DOCUMENT: &str = "students";

/// One more than the highest id present, or 1 for an empty list
///
/// `None` once the highest id is `i64::MAX`.
pub fn next_id(students: &[Student]) -> Option<i64> {
    students.iter().map(|s| s.id).max().unwrap_or(0).checked_add(1)
}

/// First student with a matching id
pub fn find_in(students: &[Student], id: i64) -> Option<&Student> {
    students.iter().find(|s| s.id == id)
}

/// Student repository
#[derive(Clone)]
pub struct StudentRepository {
    documents: Documents,
}

impl StudentRepository {
    /// Create a new student repository
    pub fn new(documents: Documents) -> Self {
        Self { documents }
    }

    /// Get all students in stored order
    pub async fn list(&self) -> Vec<Student> {
        self.documents.read_records(STUDENTS_DOCUMENT).await
    }

    /// Find a student by ID
    pub async fn find(&self, id: i64) -> Option<Student> {
        find_in(&self.list().await, id).cloned()
    }

    /// Create the document empty if it does not exist yet
    pub async fn ensure_seeded(&self) -> Result<()> {
        self.documents
            .seed_if_absent::<Student>(STUDENTS_DOCUMENT, &[])
            .await?;
        Ok(())
    }

    /// Append a new student with the next free id
    ///
    /// Fails without writing when no id above the current maximum exists.
    pub async fn add(&self, fields: NewStudent) -> Result<Student> {
        let mut students = self.list().await;
        let id = next_id(&students)
            .ok_or_else(|| anyhow!("no student id left above i64::MAX"))?;
        let student = Student::from_fields(id, fields);
        students.push(student.clone());
        self.documents
            .write_records(STUDENTS_DOCUMENT, &students)
            .await?;

        info!("Added student with ID: {}", student.id);
        Ok(student)
    }

    /// Update the first student with a matching id
    ///
    /// Returns `false` when no student has that id. The document is
    /// rewritten either way.
    pub async fn update(&self, id: i64, fields: NewStudent) -> Result<bool> {
        let mut students = self.list().await;
        let found = match students.iter_mut().find(|s| s.id == id) {
            Some(student) => {
                student.apply(fields);
                true
            }
            None => false,
        };
        self.documents
            .write_records(STUDENTS_DOCUMENT, &students)
            .await?;

        info!("Updated student with ID: {} (found: {})", id, found);
        Ok(found)
    }

    /// Remove every student with a matching id, keeping the others in order
    ///
    /// Returns the number of removed records.
    pub async fn delete(&self, id: i64) -> Result<usize> {
        let mut students = self.list().await;
        let before = students.len();
        students.retain(|s| s.id != id);
        let removed = before - students.len();
        self.documents
            .write_records(STUDENTS_DOCUMENT, &students)
            .await?;

        info!("Deleted student with ID: {} (removed: {})", id, removed);
        Ok(removed)
    }
}
