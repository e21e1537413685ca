use crate::models::Profile;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub token: String,
    pub profile: ProfileResponse,
}

/// Counts of what a user has created across the dashboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub posts: usize,
    pub listings: usize,
    pub events_hosted: usize,
    pub services_offered: usize,
    pub questions_asked: usize,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub stats: ProfileStats,
}

/// What the view shows in place of an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Filtered collection wrapper
#[derive(Debug, Serialize)]
pub struct ListingPage<T> {
    pub data: Vec<T>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

impl<T> ListingPage<T> {
    pub fn new(data: Vec<T>, empty: EmptyState) -> Self {
        let total = data.len();
        let empty_state = data.is_empty().then_some(empty);
        Self {
            data,
            total,
            empty_state,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardTab {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub identity: String,
    pub landing: &'static str,
    pub tabs: Vec<DashboardTab>,
}
