//! Roster models for persisted records and submitted forms

pub mod credential;
pub mod student;

pub use credential::Credential;
pub use student::{NewStudent, Student};

/// Query string accepted on the base page
///
/// `?logout` arrives as `logout=""`, so presence is what matters.
#[derive(Debug, Default)]
pub struct PageQuery {
    pub logout: Option<String>,
    pub action: Option<String>,
    pub id: Option<String>,
}

impl PageQuery {
    /// Build from decoded key/value pairs; a repeated key keeps its last value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "logout" => query.logout = Some(value),
                "action" => query.action = Some(value),
                "id" => query.id = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Requested edit target, if the query asks for edit mode
    pub fn edit_id(&self) -> Option<i64> {
        match self.action.as_deref() {
            Some("edit") => self.id.as_deref().map(parse_int),
            _ => None,
        }
    }
}

/// Every field any form on the base page may post
#[derive(Debug, Default)]
pub struct SubmitForm {
    pub login: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub action: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub age: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
}

impl SubmitForm {
    /// Build from decoded key/value pairs; a repeated key keeps its last value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "login" => &mut form.login,
                "username" => &mut form.username,
                "password" => &mut form.password,
                "action" => &mut form.action,
                "id" => &mut form.id,
                "name" => &mut form.name,
                "age" => &mut form.age,
                "email" => &mut form.email,
                "course" => &mut form.course,
                _ => continue,
            };
            *slot = Some(value);
        }
        form
    }

    /// Submitted record id, coerced like every other integer field
    pub fn record_id(&self) -> i64 {
        self.id.as_deref().map(parse_int).unwrap_or(0)
    }

    /// Student fields carried by an add or update submission
    pub fn student_fields(&self) -> NewStudent {
        NewStudent {
            name: self.name.clone().unwrap_or_default(),
            age: self.age.as_deref().map(parse_int).unwrap_or(0),
            email: self.email.clone().unwrap_or_default(),
            course: self.course.clone().unwrap_or_default(),
        }
    }
}

/// Parse a submitted integer; anything that is not one becomes 0
pub fn parse_int(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_coerces_garbage_to_zero() {
        assert_eq!(parse_int("21"), 21);
        assert_eq!(parse_int(" 7 "), 7);
        assert_eq!(parse_int("-3"), -3);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("12abc"), 0);
    }

    #[test]
    fn test_edit_id_requires_edit_action() {
        let query = PageQuery {
            action: Some("edit".into()),
            id: Some("4".into()),
            ..Default::default()
        };
        assert_eq!(query.edit_id(), Some(4));

        let query = PageQuery {
            action: Some("view".into()),
            id: Some("4".into()),
            ..Default::default()
        };
        assert_eq!(query.edit_id(), None);

        let query = PageQuery {
            action: Some("edit".into()),
            ..Default::default()
        };
        assert_eq!(query.edit_id(), None);
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_query_pairs_keep_last_value() {
        let query = PageQuery::from_pairs(pairs(&[
            ("action", "edit"),
            ("id", "1"),
            ("id", "2"),
            ("logout", ""),
            ("logout", ""),
            ("other", "x"),
        ]));
        assert_eq!(query.edit_id(), Some(2));
        assert_eq!(query.logout.as_deref(), Some(""));
    }

    #[test]
    fn test_form_pairs_keep_last_value() {
        let form = SubmitForm::from_pairs(pairs(&[
            ("login", "1"),
            ("username", "first"),
            ("username", "admin"),
            ("password", "password"),
            ("unexpected", "ignored"),
        ]));
        assert_eq!(form.login.as_deref(), Some("1"));
        assert_eq!(form.username.as_deref(), Some("admin"));
        assert_eq!(form.password.as_deref(), Some("password"));
        assert_eq!(form.action, None);
    }

    #[test]
    fn test_student_fields_defaults_missing_values() {
        let form = SubmitForm {
            action: Some("add".into()),
            name: Some("Ann".into()),
            age: Some("twenty".into()),
            ..Default::default()
        };
        let fields = form.student_fields();
        assert_eq!(fields.name, "Ann");
        assert_eq!(fields.age, 0);
        assert_eq!(fields.email, "");
        assert_eq!(fields.course, "");
        assert_eq!(form.record_id(), 0);
    }
}
