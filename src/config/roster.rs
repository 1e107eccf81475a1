use crate::domain::model::{Classroom, Student};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::Deserialize;
use std::path::Path;

pub const MAX_AGE: u32 = 150;
pub const MIN_GRADE: i32 = 0;
pub const MAX_GRADE: i32 = 100;

/// Student list loaded from TOML:
///
/// ```toml
/// [[students]]
/// name = "Alice"
/// age = 20
/// grades = [90, 85, 88]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub students: Vec<StudentEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentEntry {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub grades: Vec<i32>,
}

impl Roster {
    /// 從 TOML 檔案載入名冊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(DemoError::IoError)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// 從 TOML 字串解析名冊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DemoError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn into_classroom(self) -> Classroom {
        self.students
            .into_iter()
            .map(|entry| Student::new(entry.name, entry.age).with_grades(entry.grades))
            .collect()
    }
}

impl Validate for Roster {
    fn validate(&self) -> Result<()> {
        for (i, entry) in self.students.iter().enumerate() {
            validate_non_empty_string(&format!("students[{}].name", i), &entry.name)?;
            validate_range(&format!("students[{}].age", i), entry.age, 0, MAX_AGE)?;
            for (j, &grade) in entry.grades.iter().enumerate() {
                validate_range(
                    &format!("students[{}].grades[{}]", i, j),
                    grade,
                    MIN_GRADE,
                    MAX_GRADE,
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_roster() {
        let toml_content = r#"
[[students]]
name = "Dana"
age = 19
grades = [70, 80]

[[students]]
name = "Eve"
age = 23
"#;

        let roster = Roster::from_toml_str(toml_content).unwrap();
        assert_eq!(roster.students.len(), 2);
        assert!(roster.validate().is_ok());

        let classroom = roster.into_classroom();
        assert_eq!(classroom.students()[0].average(), 75.0);
        assert_eq!(classroom.students()[1].average(), 0.0);
        assert_eq!(classroom.top_student().unwrap().name(), "Dana");
    }

    #[test]
    fn test_empty_roster_is_valid() {
        let roster = Roster::from_toml_str("").unwrap();
        assert!(roster.validate().is_ok());
        assert!(roster.into_classroom().is_empty());
    }

    #[test]
    fn test_roster_validation() {
        let bad_grade = r#"
[[students]]
name = "Frank"
age = 20
grades = [90, 101]
"#;
        let roster = Roster::from_toml_str(bad_grade).unwrap();
        match roster.validate() {
            Err(DemoError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "students[0].grades[1]")
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let blank_name = r#"
[[students]]
name = "  "
age = 20
"#;
        let roster = Roster::from_toml_str(blank_name).unwrap();
        assert!(roster.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = Roster::from_toml_str("[[students]]\nname = 5");
        assert!(matches!(result, Err(DemoError::ConfigParseError { .. })));
    }

    #[test]
    fn test_roster_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
[[students]]
name = "Grace"
age = 30
grades = [100]
"#;
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let roster = Roster::from_file(temp_file.path()).unwrap();
        assert_eq!(roster.students[0].name, "Grace");
    }

    #[test]
    fn test_missing_file() {
        let result = Roster::from_file("/definitely/not/here/roster.toml");
        assert!(matches!(result, Err(DemoError::IoError(_))));
    }
}
