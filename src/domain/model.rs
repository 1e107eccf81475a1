use crate::domain::services;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    age: u32,
    grades: Vec<i32>,
}

impl Student {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            grades: Vec::new(),
        }
    }

    pub fn with_grades(mut self, grades: impl IntoIterator<Item = i32>) -> Self {
        self.grades.extend(grades);
        self
    }

    pub fn add_grade(&mut self, grade: i32) {
        self.grades.push(grade);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn grades(&self) -> &[i32] {
        &self.grades
    }

    /// Mean grade, `0.0` when no grades were recorded.
    pub fn average(&self) -> f64 {
        services::mean(&self.grades)
    }

    /// True when this student's average is strictly greater than `other`'s.
    pub fn outranks(&self, other: &Student) -> bool {
        self.average() > other.average()
    }

    pub fn cmp_average(&self, other: &Student) -> Ordering {
        self.average().total_cmp(&other.average())
    }

    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            name: self.name.clone(),
            age: self.age,
            average: self.average(),
        }
    }
}

/// The "Name, Age, Average" triple reported for each student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub age: u32,
    pub average: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classroom {
    students: Vec<Student>,
}

impl Classroom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Student with the highest average; the earliest one wins a tie.
    pub fn top_student(&self) -> Option<&Student> {
        services::best_by(&self.students, Student::outranks)
    }
}

impl FromIterator<Student> for Classroom {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueHolder {
    value: i32,
}

impl ValueHolder {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn is_positive(&self) -> bool {
        self.value > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle spanned by two opposite corners, given in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    p1: Point,
    p2: Point,
}

impl Rectangle {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn corners(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }

    /// `(x2 - x1) * (y2 - y1)`. The sign is kept: inverted corners give a
    /// negative area and callers decide what that means. Exact for any
    /// `i32` corners.
    pub fn area(&self) -> i128 {
        let dx = i128::from(self.p2.x) - i128::from(self.p1.x);
        let dy = i128::from(self.p2.y) - i128::from(self.p1.y);
        dx * dy
    }

    pub fn is_valid(&self) -> bool {
        self.area() > 0
    }
}
