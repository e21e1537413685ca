use crate::collection::{Searchable, Unfiltered};
use crate::dto::CreateListingRequest;
use crate::models::Profile;
use crate::store::{Draft, Record, StoreError};
use serde::Serialize;
use uuid::Uuid;

string_enum! {
    ListingCategory {
        Books => "books",
        Food => "food",
        Electronics => "electronics",
    }
}

string_enum! {
    ListingFlag {
        Save => "save",
    }
}

/// Something offered on the campus marketplace.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub price: u32,
    pub category: ListingCategory,
    pub condition: String,
    pub description: String,
    pub seller: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub created_at: i64,
    pub tags: Vec<String>,
    pub saved: bool,
}

impl Searchable for Listing {
    type Category = ListingCategory;
    type Status = Unfiltered;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.seller.as_str(),
        ]
    }

    fn in_category(&self, category: &ListingCategory) -> bool {
        self.category == *category
    }

    fn has_status(&self, status: &Unfiltered) -> bool {
        match *status {}
    }

    fn owner(&self) -> Option<&str> {
        self.created_by.as_deref()
    }
}

impl Record for Listing {
    type Flag = ListingFlag;

    fn id(&self) -> Uuid {
        self.id
    }

    fn toggle(&mut self, flag: ListingFlag) -> Result<(), StoreError> {
        match flag {
            ListingFlag::Save => self.saved = !self.saved,
        }
        Ok(())
    }
}

impl Draft for CreateListingRequest {
    type Record = Listing;

    fn into_record(self, id: Uuid, author: &Profile, created_at: i64) -> Listing {
        Listing {
            id,
            title: self.title.trim().to_string(),
            price: self.price,
            category: self.category,
            condition: self.condition.trim().to_string(),
            description: self.description.trim().to_string(),
            seller: author.name.clone(),
            created_by: Some(author.email.clone()),
            location: self.location.trim().to_string(),
            rating: None,
            created_at,
            tags: self.tags,
            saved: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Filter, Selection};
    use crate::store::ItemStore;

    fn draft(title: &str, category: ListingCategory) -> CreateListingRequest {
        CreateListingRequest {
            title: title.into(),
            description: "Barely used".into(),
            price: 45,
            category,
            condition: "Like New".into(),
            location: "Dorm Block A".into(),
            tags: vec!["textbook".into()],
        }
    }

    #[test]
    fn my_listings_view_only_shows_own_items() {
        let me = Profile::for_identity("maya@college.edu");
        let other = Profile::for_identity("sam@college.edu");
        let mut store = ItemStore::<Listing>::new();

        store.append(draft("DSA textbook", ListingCategory::Books), &me).unwrap();
        store.append(draft("Meal coupons", ListingCategory::Food), &other).unwrap();
        store.append(draft("Calculus textbook", ListingCategory::Books), &me).unwrap();

        let mine = Filter::new().owned_by("maya@college.edu");
        let titles: Vec<_> = mine.apply(store.all()).map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Calculus textbook", "DSA textbook"]);

        let mine_food = Filter::new()
            .owned_by("maya@college.edu")
            .category(Selection::Only(ListingCategory::Food));
        assert_eq!(mine_food.apply(store.all()).count(), 0);
    }

    #[test]
    fn search_hits_seller() {
        let me = Profile::for_identity("maya.patel@college.edu");
        let mut store = ItemStore::<Listing>::new();
        store.append(draft("MacBook Pro", ListingCategory::Electronics), &me).unwrap();

        assert_eq!(Filter::new().query("patel").apply(store.all()).count(), 1);
        assert_eq!(Filter::new().query("BARELY").apply(store.all()).count(), 1);
    }

    #[test]
    fn blank_title_is_rejected() {
        let me = Profile::for_identity("maya@college.edu");
        let mut store = ItemStore::<Listing>::new();
        let result = store.append(draft(" ", ListingCategory::Books), &me);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }
}
