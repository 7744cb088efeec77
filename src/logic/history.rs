/// Every line the user has entered this session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: &str) {
        self.entries.push(line.to_string());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
