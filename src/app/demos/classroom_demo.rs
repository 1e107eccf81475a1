use crate::core::{Classroom, Demo, Result, Student};
use crate::domain::model::StudentSummary;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassroomReport {
    pub students: Vec<StudentSummary>,
    pub top_student: Option<StudentSummary>,
}

pub struct ClassroomDemo {
    classroom: Classroom,
}

impl ClassroomDemo {
    pub fn new(classroom: Classroom) -> Self {
        Self { classroom }
    }

    pub fn classroom(&self) -> &Classroom {
        &self.classroom
    }
}

impl Default for ClassroomDemo {
    fn default() -> Self {
        let mut alice = Student::new("Alice", 20);
        alice.add_grade(90);
        alice.add_grade(85);
        alice.add_grade(88);

        let mut bob = Student::new("Bob", 22);
        bob.add_grade(75);
        bob.add_grade(80);
        bob.add_grade(79);

        let mut charlie = Student::new("Charlie", 21);
        charlie.add_grade(92);
        charlie.add_grade(87);
        charlie.add_grade(90);

        let mut classroom = Classroom::new();
        classroom.add_student(alice);
        classroom.add_student(bob);
        classroom.add_student(charlie);

        Self::new(classroom)
    }
}

fn write_summary(out: &mut dyn Write, summary: &StudentSummary) -> Result<()> {
    writeln!(
        out,
        "Name: {}, Age: {}, Average: {:.2}",
        summary.name, summary.age, summary.average
    )?;
    Ok(())
}

impl Demo for ClassroomDemo {
    type Report = ClassroomReport;

    fn name(&self) -> &'static str {
        "classroom"
    }

    fn execute(&self) -> ClassroomReport {
        tracing::debug!("Ranking {} students", self.classroom.len());
        ClassroomReport {
            students: self.classroom.students().iter().map(Student::summary).collect(),
            top_student: self.classroom.top_student().map(Student::summary),
        }
    }

    fn render_text(
        &self,
        report: &ClassroomReport,
        out: &mut dyn Write,
        _err: &mut dyn Write,
    ) -> Result<()> {
        for summary in &report.students {
            write_summary(out, summary)?;
        }

        match &report.top_student {
            Some(top) => {
                write!(out, "Top student: ")?;
                write_summary(out, top)?;
            }
            None => writeln!(out, "No students.")?,
        }
        Ok(())
    }
}
