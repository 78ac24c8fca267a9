/// The in-memory employee table for one pipeline run.
///
/// Six parallel columns, index-aligned by row. The columns come from
/// independent range reads, so a column with fewer populated rows than the
/// others is not padded; callers must access rows with `.get(i)` rather
/// than indexing.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub employee_id: Vec<String>,
    pub full_name: Vec<String>,
    pub email: Vec<String>,
    pub date_of_birth: Vec<String>,
    pub date_of_joining: Vec<String>,
    pub title: Vec<String>,
}

impl Roster {
    pub fn new(
        employee_id: Vec<String>,
        full_name: Vec<String>,
        email: Vec<String>,
        date_of_birth: Vec<String>,
        date_of_joining: Vec<String>,
        title: Vec<String>,
    ) -> Self {
        Self {
            employee_id,
            full_name,
            email,
            date_of_birth,
            date_of_joining,
            title,
        }
    }

    pub fn len(&self) -> usize {
        self.full_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
    }
}
