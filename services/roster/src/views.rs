//! HTML rendering for the login and management pages
//!
//! Every function here is pure: it takes plain data and returns markup.
//! Any text that came from a user or from the documents goes through
//! [`escape_html`] before it is embedded.

use std::fmt::Write;

use crate::models::Student;

/// Message shown after a failed login attempt
pub const LOGIN_FAILED: &str = "Invalid username or password.";

/// Data for the login page
#[derive(Debug, Default)]
pub struct LoginView<'a> {
    pub error: Option<&'a str>,
    pub username: &'a str,
}

/// Data for the student management page
#[derive(Debug)]
pub struct ManagementView<'a> {
    pub students: &'a [Student],
    /// Student being edited; the form is in add mode when `None`
    pub edit: Option<&'a Student>,
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    <title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

/// Render the login form
pub fn render_login(view: &LoginView<'_>) -> String {
    let mut body = String::from("    <h2>Login</h2>\n");
    if let Some(error) = view.error {
        let _ = writeln!(
            body,
            "    <p style=\"color: red;\">{}</p>",
            escape_html(error)
        );
    }
    let _ = write!(
        body,
        concat!(
            "    <form method=\"POST\">\n",
            "        <label>Username: <input type=\"text\" name=\"username\" value=\"{username}\"></label><br>\n",
            "        <label>Password: <input type=\"password\" name=\"password\"></label><br>\n",
            "        <button type=\"submit\" name=\"login\" value=\"1\">Log In</button>\n",
            "    </form>\n",
        ),
        username = escape_html(view.username),
    );

    page("Login", &body)
}

/// Render the add/edit form followed by the student table
pub fn render_management(view: &ManagementView<'_>) -> String {
    let mut body = String::from("    <p>Welcome! <a href=\"?logout\">Logout</a></p>\n\n");

    let (heading, action, button) = match view.edit {
        Some(_) => ("Edit Student", "update", "Update Student"),
        None => ("Add New Student", "add", "Add Student"),
    };
    let value = |field: fn(&Student) -> String| {
        view.edit
            .map(|student| escape_html(&field(student)))
            .unwrap_or_default()
    };

    let _ = writeln!(body, "    <h2>{heading}</h2>");
    body.push_str("    <form method=\"POST\">\n");
    let _ = writeln!(
        body,
        "        <input type=\"hidden\" name=\"action\" value=\"{action}\">"
    );
    if let Some(student) = view.edit {
        let _ = writeln!(
            body,
            "        <input type=\"hidden\" name=\"id\" value=\"{}\">",
            student.id
        );
    }
    let _ = write!(
        body,
        concat!(
            "        <label>Name: <input type=\"text\" name=\"name\" value=\"{name}\" required></label><br>\n",
            "        <label>Age: <input type=\"number\" name=\"age\" value=\"{age}\" required></label><br>\n",
            "        <label>Email: <input type=\"text\" name=\"email\" value=\"{email}\" required></label><br>\n",
            "        <label>Course: <input type=\"text\" name=\"course\" value=\"{course}\" required></label><br>\n",
            "        <button type=\"submit\">{button}</button>\n",
            "    </form>\n\n    <hr>\n\n    <h2>Student List</h2>\n",
        ),
        name = value(|s| s.name.clone()),
        age = value(|s| s.age.to_string()),
        email = value(|s| s.email.clone()),
        course = value(|s| s.course.clone()),
        button = button,
    );

    if view.students.is_empty() {
        body.push_str("    <p>No students found.</p>\n");
    } else {
        body.push_str(concat!(
            "    <table border=\"1\" cellpadding=\"5\" cellspacing=\"0\">\n",
            "        <thead>\n",
            "            <tr><th>ID</th><th>Name</th><th>Age</th><th>Email</th><th>Course</th><th>Actions</th></tr>\n",
            "        </thead>\n",
            "        <tbody>\n",
        ));
        for student in view.students {
            render_row(&mut body, student);
        }
        body.push_str("        </tbody>\n    </table>\n");
    }

    page("Student Management System", &body)
}

fn render_row(body: &mut String, student: &Student) {
    let _ = write!(
        body,
        concat!(
            "            <tr>\n",
            "                <td>{id}</td>\n",
            "                <td>{name}</td>\n",
            "                <td>{age}</td>\n",
            "                <td>{email}</td>\n",
            "                <td>{course}</td>\n",
            "                <td>\n",
            "                    <a href=\"?action=edit&amp;id={id}\">Edit</a>\n",
            "                    <form method=\"POST\" style=\"display:inline-block;\">\n",
            "                        <input type=\"hidden\" name=\"action\" value=\"delete\">\n",
            "                        <input type=\"hidden\" name=\"id\" value=\"{id}\">\n",
            "                        <button type=\"submit\" onclick=\"return confirm('Are you sure?');\">Delete</button>\n",
            "                    </form>\n",
            "                </td>\n",
            "            </tr>\n",
        ),
        id = student.id,
        name = escape_html(&student.name),
        age = student.age,
        email = escape_html(&student.email),
        course = escape_html(&student.course),
    );
}

/// Render a bare error page
pub fn render_error(message: &str) -> String {
    page(
        "Error",
        &format!("    <h2>Error</h2>\n    <p>{}</p>\n", escape_html(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Student {
        Student {
            id: 1,
            name: "Ann".into(),
            age: 20,
            email: "a@x.com".into(),
            course: "CS".into(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">O'Neil & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#039;Neil &amp; co&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_login_without_error() {
        let html = render_login(&LoginView::default());
        assert!(html.contains("<h2>Login</h2>"));
        assert!(html.contains("name=\"password\""));
        assert!(!html.contains(LOGIN_FAILED));
    }

    #[test]
    fn test_login_escapes_username() {
        let html = render_login(&LoginView {
            error: Some(LOGIN_FAILED),
            username: "<script>alert(1)</script>",
        });
        assert!(html.contains(LOGIN_FAILED));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_management_add_mode() {
        let students = [ann()];
        let html = render_management(&ManagementView {
            students: &students,
            edit: None,
        });
        assert!(html.contains("Add New Student"));
        assert!(html.contains("name=\"action\" value=\"add\""));
        assert_eq!(html.matches("name=\"id\"").count(), 1);
        assert!(html.contains("<td>Ann</td>"));
        assert!(html.contains("?action=edit&amp;id=1"));
        assert!(html.contains("return confirm('Are you sure?');"));
    }

    #[test]
    fn test_management_edit_mode_prefills() {
        let student = ann();
        let students = [student.clone()];
        let html = render_management(&ManagementView {
            students: &students,
            edit: Some(&student),
        });
        assert!(html.contains("Edit Student"));
        assert!(html.contains("name=\"action\" value=\"update\""));
        assert!(html.contains("name=\"name\" value=\"Ann\""));
        assert!(html.contains("name=\"age\" value=\"20\""));
        assert!(html.contains("Update Student"));
        assert_eq!(html.matches("name=\"id\" value=\"1\"").count(), 2);
    }

    #[test]
    fn test_management_empty_list() {
        let html = render_management(&ManagementView {
            students: &[],
            edit: None,
        });
        assert!(html.contains("No students found."));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_management_escapes_record_fields() {
        let students = [Student {
            name: "<b>Bold</b>".into(),
            course: "\"quoted\"".into(),
            ..ann()
        }];
        let html = render_management(&ManagementView {
            students: &students,
            edit: Some(&students[0]),
        });
        assert!(!html.contains("<b>Bold</b>"));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains("value=\"&quot;quoted&quot;\""));
    }
}
