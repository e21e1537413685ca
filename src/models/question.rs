use crate::collection::Searchable;
use crate::dto::CreateQuestionRequest;
use crate::models::Profile;
use crate::store::{Draft, Engagement, Record, StoreError};
use serde::Serialize;
use uuid::Uuid;

string_enum! {
    QuestionCategory {
        Academic => "academic",
        Events => "events",
        Services => "services",
        Technical => "technical",
        General => "general",
        Campus => "campus",
    }
}

impl Default for QuestionCategory {
    fn default() -> Self {
        QuestionCategory::General
    }
}

string_enum! {
    QuestionStatus {
        Open => "open",
        Answered => "answered",
        Closed => "closed",
    }
}

string_enum! {
    QuestionFlag {
        Like => "like",
    }
}

/// A post on the Q&A board.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub category: QuestionCategory,
    pub status: QuestionStatus,
    pub created_at: i64,
    pub likes: Engagement,
    pub replies: u32,
    pub tags: Vec<String>,
}

impl Searchable for Question {
    type Category = QuestionCategory;
    type Status = QuestionStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.author.as_str(),
        ]
    }

    fn in_category(&self, category: &QuestionCategory) -> bool {
        self.category == *category
    }

    fn has_status(&self, status: &QuestionStatus) -> bool {
        self.status == *status
    }

    fn owner(&self) -> Option<&str> {
        self.created_by.as_deref()
    }
}

impl Record for Question {
    type Flag = QuestionFlag;

    fn id(&self) -> Uuid {
        self.id
    }

    fn toggle(&mut self, flag: QuestionFlag) -> Result<(), StoreError> {
        match flag {
            QuestionFlag::Like => self.likes.toggle(),
        }
        Ok(())
    }
}

impl Draft for CreateQuestionRequest {
    type Record = Question;

    fn into_record(self, id: Uuid, author: &Profile, created_at: i64) -> Question {
        Question {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            author: author.name.clone(),
            created_by: Some(author.email.clone()),
            category: self.category,
            status: QuestionStatus::Open,
            created_at,
            likes: Engagement::new(false, 0),
            replies: 0,
            tags: self.tags,
        }
    }
}
