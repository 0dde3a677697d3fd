//! Student model and related functionality

use serde::{Deserialize, Serialize};

/// Student record as stored in the `students` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
    pub course: String,
}

/// Student fields supplied by an add or update submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub course: String,
}

impl Student {
    /// Build a student from submitted fields and an assigned id
    pub fn from_fields(id: i64, fields: NewStudent) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            email: fields.email,
            course: fields.course,
        }
    }

    /// Replace every mutable field, keeping the id
    pub fn apply(&mut self, fields: NewStudent) {
        self.name = fields.name;
        self.age = fields.age;
        self.email = fields.email;
        self.course = fields.course;
    }
}
