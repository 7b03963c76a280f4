use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a task
pub type TaskId = u64;

/// How hard a task is; drives the XP it awards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Study category, each with its own icon and chunking suggestions
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    NoteTaking,
    Memorization,
    MathScience,
    Writing,
    Languages,
    Creative,
    Presentation,
    Coding,
    Research,
    #[default]
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NoteTaking => "note-taking",
            Category::Memorization => "memorization",
            Category::MathScience => "math-science",
            Category::Writing => "writing",
            Category::Languages => "languages",
            Category::Creative => "creative",
            Category::Presentation => "presentation",
            Category::Coding => "coding",
            Category::Research => "research",
            Category::General => "general",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::NoteTaking => "Note Taking & Reading",
            Category::Memorization => "Memorization & Flashcards",
            Category::MathScience => "Math & Science",
            Category::Writing => "Writing & Essays",
            Category::Languages => "Language Learning",
            Category::Creative => "Creative & Arts",
            Category::Presentation => "Presentations & Public Speaking",
            Category::Coding => "Programming & Technology",
            Category::Research => "Research & Analysis",
            Category::General => "General Study",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::NoteTaking => "📝",
            Category::Memorization => "🧠",
            Category::MathScience => "🔬",
            Category::Writing => "✍️",
            Category::Languages => "🌍",
            Category::Creative => "🎨",
            Category::Presentation => "🎤",
            Category::Coding => "💻",
            Category::Research => "🔍",
            Category::General => "📚",
        }
    }

    /// Suggested steps for breaking a task of this category into chunks
    pub fn chunk_suggestions(&self) -> &'static [&'static str] {
        match self {
            Category::Memorization => &[
                "Create initial flashcards or notes",
                "First review session (active recall)",
                "Second review session (spaced repetition)",
                "Practice test or quiz yourself",
                "Final review and weak areas focus",
            ],
            Category::Writing => &[
                "Research topic and gather sources",
                "Create outline and structure",
                "Write introduction paragraph",
                "Write main body paragraphs",
                "Write conclusion",
                "Review and edit",
            ],
            Category::MathScience => &[
                "Review relevant formulas and concepts",
                "Work through example problems",
                "Practice similar problems",
                "Check answers and understand mistakes",
                "Apply to more complex scenarios",
            ],
            Category::Coding => &[
                "Plan the algorithm or approach",
                "Write pseudocode or outline",
                "Implement basic functionality",
                "Test and debug code",
                "Optimize and refactor",
            ],
            Category::Presentation => &[
                "Research and gather content",
                "Create presentation outline",
                "Design slides and visuals",
                "Practice delivery and timing",
                "Prepare for questions and feedback",
            ],
            Category::Languages => &[
                "Learn new vocabulary words",
                "Practice grammar rules",
                "Complete listening exercises",
                "Practice speaking or writing",
                "Review and reinforce learning",
            ],
            Category::NoteTaking
            | Category::Creative
            | Category::Research
            | Category::General => &[
                "Break down the main topic",
                "Gather necessary materials",
                "Study core concepts",
                "Practice or apply knowledge",
                "Review and test understanding",
            ],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A study task. Tasks are soft-deleted, never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Unix timestamp in milliseconds
    #[serde(default)]
    pub completed_at: Option<i64>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub deleted: bool,
    /// Set on chunked subtasks
    #[serde(default)]
    pub parent_id: Option<TaskId>,
}

impl Task {
    pub fn new(id: TaskId, title: &str, created_at: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: None,
            completed: false,
            completed_at: None,
            priority: Priority::default(),
            category: Category::default(),
            difficulty: None,
            created_at,
            due_date: None,
            deleted: false,
            parent_id: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.completed && !self.deleted
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.due_date.is_some_and(|due| due < today)
    }
}

/// Input for creating a task
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: Category,
    pub difficulty: Option<Difficulty>,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

/// Partial edit of a task; `None` leaves the field as it is
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub due_date: Option<NaiveDate>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.difficulty.is_none()
            && self.due_date.is_none()
    }

    pub(crate) fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(difficulty) = self.difficulty {
            task.difficulty = Some(difficulty);
        }
        if let Some(due_date) = self.due_date {
            task.due_date = Some(due_date);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::MathScience).unwrap();
        assert_eq!(json, "\"math-science\"");
        let parsed: Category = serde_json::from_str("\"note-taking\"").unwrap();
        assert_eq!(parsed, Category::NoteTaking);
    }

    #[test]
    fn test_task_defaults_when_fields_missing() {
        let task: Task = serde_json::from_str(r#"{"id": 7, "title": "Read ch. 3", "createdAt": 1}"#)
            .unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category, Category::General);
        assert!(task.is_pending());
        assert!(task.difficulty.is_none());
    }

    #[test]
    fn test_overdue() {
        let mut task = Task::new(1, "Essay", 0);
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert!(!task.is_overdue(today));

        task.due_date = NaiveDate::from_ymd_opt(2026, 3, 9);
        assert!(task.is_overdue(today));

        task.completed = true;
        assert!(!task.is_overdue(today));
    }

    #[test]
    fn test_update_applies_only_given_fields() {
        let mut task = Task::new(1, "Essay", 0);
        task.priority = Priority::High;

        let update = TaskUpdate {
            title: Some("Essay draft".to_string()),
            difficulty: Some(Difficulty::Hard),
            ..TaskUpdate::default()
        };
        assert!(!update.is_empty());
        update.apply_to(&mut task);

        assert_eq!(task.title, "Essay draft");
        assert_eq!(task.difficulty, Some(Difficulty::Hard));
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_every_category_has_suggestions() {
        use clap::ValueEnum;
        for category in Category::value_variants() {
            assert!(category.chunk_suggestions().len() >= 5, "{category}");
        }
    }
}
