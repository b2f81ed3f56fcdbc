//! Class roster
//!
//! In-memory student grades shown to, and edited by, an authenticated operator.
//! Edits are never persisted.

/// One student and their letter grade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub grade: char,
}

impl Student {
    pub fn new(name: &str, grade: char) -> Self {
        Self {
            name: name.to_string(),
            grade,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            students: vec![
                Student::new("Julia", 'A'),
                Student::new("Tom", 'B'),
                Student::new("Ben", 'C'),
                Student::new("Alice", 'D'),
                Student::new("Ruby", 'F'),
            ],
        }
    }
}

impl Roster {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
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

    /// Renders one `name  grade` line per student.
    pub fn lines(&self) -> Vec<String> {
        self.students
            .iter()
            .map(|s| format!("{}  {}", s.name, s.grade))
            .collect()
    }

    /// Returns false when the index is out of range.
    pub fn set_grade(&mut self, index: usize, grade: char) -> bool {
        match self.students.get_mut(index) {
            Some(student) => {
                student.grade = grade;
                true
            }
            None => false,
        }
    }

    /// First non-whitespace character of the input, if any.
    pub fn parse_grade(input: &str) -> Option<char> {
        input.chars().find(|c| !c.is_whitespace())
    }
}
