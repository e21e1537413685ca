use crate::collection::{Searchable, Unfiltered};
use crate::dto::CreateServiceRequest;
use crate::models::Profile;
use crate::store::{Draft, Record, StoreError};
use serde::Serialize;
use uuid::Uuid;

string_enum! {
    ServiceCategory {
        Tutoring => "tutoring",
        Design => "design",
        Programming => "programming",
        Photography => "photography",
        Music => "music",
        Language => "language",
    }
}

string_enum! {
    RateType {
        Hour => "hour",
        Project => "project",
        Session => "session",
    }
}

string_enum! {
    ServiceFlag {
        Save => "save",
    }
}

/// A skill offered by a student in the services directory.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub category: ServiceCategory,
    pub rate: u32,
    pub rate_type: RateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub review_count: u32,
    pub experience: String,
    pub skills: Vec<String>,
    pub availability: String,
    pub verified: bool,
    pub response_time: String,
    pub saved: bool,
    pub created_at: i64,
}

impl Searchable for Service {
    type Category = ServiceCategory;
    type Status = Unfiltered;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.provider.as_str(),
        ];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }

    fn in_category(&self, category: &ServiceCategory) -> bool {
        self.category == *category
    }

    fn has_status(&self, status: &Unfiltered) -> bool {
        match *status {}
    }

    fn owner(&self) -> Option<&str> {
        self.created_by.as_deref()
    }
}

impl Record for Service {
    type Flag = ServiceFlag;

    fn id(&self) -> Uuid {
        self.id
    }

    fn toggle(&mut self, flag: ServiceFlag) -> Result<(), StoreError> {
        match flag {
            ServiceFlag::Save => self.saved = !self.saved,
        }
        Ok(())
    }
}

impl Draft for CreateServiceRequest {
    type Record = Service;

    fn into_record(self, id: Uuid, author: &Profile, created_at: i64) -> Service {
        Service {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            provider: author.name.clone(),
            created_by: Some(author.email.clone()),
            category: self.category,
            rate: self.rate,
            rate_type: self.rate_type,
            rating: None,
            review_count: 0,
            experience: self.experience.trim().to_string(),
            skills: self
                .skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            availability: self.availability.trim().to_string(),
            verified: false,
            response_time: String::new(),
            saved: false,
            created_at,
        }
    }
}
