use crate::collection::{Filter, Searchable, Selection};
use crate::models::{
    EventCategory, ListingCategory, QuestionCategory, RateType, ServiceCategory,
    profile::ProfileEdit,
};
use crate::store::{StoreError, not_blank};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Validate, Deserialize)]
pub struct SigninRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Query string of every collection listing:
/// `?q=fest&category=academic&status=open&mine=true&registered=true`
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub mine: Option<bool>,
    pub registered: Option<bool>,
}

impl ListParams {
    pub fn into_filter<T: Searchable>(self, identity: &str) -> Result<Filter<T>, StoreError> {
        let mut filter = Filter::new()
            .query(self.q.as_deref().unwrap_or_default())
            .category(Selection::parse(self.category.as_deref(), "category")?)
            .status(Selection::parse(self.status.as_deref(), "status")?);
        if self.mine.unwrap_or(false) {
            filter = filter.owned_by(identity);
        }
        if self.registered.unwrap_or(false) {
            filter = filter.registered_only();
        }
        Ok(filter)
    }
}

#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(custom(function = "not_blank"), length(max = 5000))]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct CreateListingRequest {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    #[validate(custom(function = "not_blank"), length(max = 5000))]
    pub description: String,
    pub price: u32,
    pub category: ListingCategory,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub condition: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct CreateEventRequest {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    #[validate(custom(function = "not_blank"), length(max = 5000))]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[validate(custom(function = "not_blank"))]
    pub venue: String,
    pub category: EventCategory,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: u32,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct CreateServiceRequest {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    #[validate(custom(function = "not_blank"), length(max = 5000))]
    pub description: String,
    pub category: ServiceCategory,
    pub rate: u32,
    pub rate_type: RateType,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub experience: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct CreateQuestionRequest {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    #[validate(custom(function = "not_blank"), length(max = 5000))]
    pub description: String,
    #[serde(default)]
    pub category: QuestionCategory,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 80))]
    pub name: Option<String>,
    #[validate(length(max = 40))]
    pub year: Option<String>,
    #[validate(length(max = 120))]
    pub department: Option<String>,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileEdit {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            year: req.year,
            department: req.department,
            bio: req.bio,
            location: req.location,
        }
    }
}

#[derive(Debug, Validate, Deserialize)]
pub struct AddInterestRequest {
    #[validate(custom(function = "not_blank"), length(max = 40))]
    pub interest: String,
}
