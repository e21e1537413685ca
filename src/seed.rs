// ============================================================================
// SEED DATA - Mock dataset loaded at start-up
// ============================================================================

use crate::models::{
    Event, EventCategory, Listing, ListingCategory, Post, PostAuthor, Question,
    QuestionCategory, QuestionStatus, RateType, Service, ServiceCategory,
};
use crate::store::Engagement;
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

fn hours_ago(hours: i64) -> i64 {
    (Utc::now() - Duration::hours(hours)).timestamp()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn author(name: &str, year: &str, department: &str) -> PostAuthor {
    PostAuthor {
        name: name.into(),
        year: year.into(),
        department: department.into(),
    }
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: Uuid::new_v4(),
            author: author("Sarah Chen", "3rd Year", "Computer Science"),
            created_by: None,
            content: "Just finished my machine learning project! Anyone interested in collaborative coding sessions? Let's build something amazing together! #MachineLearning #Coding #Collaboration".into(),
            image: Some("/api/placeholder/600/300".into()),
            created_at: hours_ago(2),
            likes: Engagement::new(false, 24),
            comments: 8,
            shares: 3,
            saved: false,
            tags: strings(&["academic", "technology"]),
        },
        Post {
            id: Uuid::new_v4(),
            author: author("Alex Rodriguez", "2nd Year", "Business Administration"),
            created_by: None,
            content: "Organizing a study group for Economics 201! We meet every Tuesday at 7 PM in the library. Join us for collaborative learning and exam prep. DM me for details!".into(),
            image: None,
            created_at: hours_ago(4),
            likes: Engagement::new(true, 16),
            comments: 12,
            shares: 7,
            saved: true,
            tags: strings(&["academic", "study-group"]),
        },
        Post {
            id: Uuid::new_v4(),
            author: author("Maya Patel", "4th Year", "Art & Design"),
            created_by: None,
            content: "Selling my Design Fundamentals textbooks! Perfect condition, barely used. Great for first and second-year students. Reasonable prices! #TextbookSale #DesignStudents".into(),
            image: None,
            created_at: hours_ago(6),
            likes: Engagement::new(false, 9),
            comments: 5,
            shares: 2,
            saved: false,
            tags: strings(&["marketplace", "textbooks"]),
        },
    ]
}

pub fn listings() -> Vec<Listing> {
    vec![
        Listing {
            id: Uuid::new_v4(),
            title: "Data Structures & Algorithms Textbook".into(),
            price: 45,
            category: ListingCategory::Books,
            condition: "Like New".into(),
            description: "Comprehensive DSA textbook with practice problems. Perfect for CS students!".into(),
            seller: "Sarah Chen".into(),
            created_by: None,
            location: "Dorm Block A".into(),
            rating: Some(4.9),
            created_at: hours_ago(2),
            tags: strings(&["computer-science", "textbook", "algorithms"]),
            saved: false,
        },
        Listing {
            id: Uuid::new_v4(),
            title: "Campus Cafeteria Food Coupons (5x)".into(),
            price: 25,
            category: ListingCategory::Food,
            condition: "Unused".into(),
            description: "5 meal coupons for main cafeteria. Valid for 2 months. Great value!".into(),
            seller: "Alex Rodriguez".into(),
            created_by: None,
            location: "Student Center".into(),
            rating: Some(4.7),
            created_at: hours_ago(4),
            tags: strings(&["food", "cafeteria", "meal-plan"]),
            saved: false,
        },
        Listing {
            id: Uuid::new_v4(),
            title: "MacBook Pro 13\" (2021)".into(),
            price: 800,
            category: ListingCategory::Electronics,
            condition: "Excellent".into(),
            description: "Barely used MacBook Pro with M1 chip. Perfect for coding and design work.".into(),
            seller: "Maya Patel".into(),
            created_by: None,
            location: "Engineering Building".into(),
            rating: Some(5.0),
            created_at: hours_ago(24),
            tags: strings(&["laptop", "apple", "programming"]),
            saved: false,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: Uuid::new_v4(),
            title: "Web Development Workshop".into(),
            description: "Learn React, Node.js, and full-stack development with hands-on projects.".into(),
            date: date(2024, 1, 20),
            time: "2:00 PM - 5:00 PM".into(),
            venue: "Computer Lab B".into(),
            organizer: "Tech Society".into(),
            created_by: None,
            category: EventCategory::Workshop,
            capacity: 50,
            registered: Engagement::new(false, 23),
            price: 0,
            tags: strings(&["programming", "react", "web-dev"]),
            favorite: false,
            created_at: hours_ago(48),
        },
        Event {
            id: Uuid::new_v4(),
            title: "Annual Cultural Festival".into(),
            description: "Celebrate diversity with music, dance, food, and art from around the world.".into(),
            date: date(2024, 1, 25),
            time: "6:00 PM - 11:00 PM".into(),
            venue: "Main Auditorium".into(),
            organizer: "Cultural Committee".into(),
            created_by: None,
            category: EventCategory::Cultural,
            capacity: 500,
            registered: Engagement::new(true, 387),
            price: 15,
            tags: strings(&["festival", "cultural", "music", "dance"]),
            favorite: true,
            created_at: hours_ago(72),
        },
        Event {
            id: Uuid::new_v4(),
            title: "Entrepreneurship Pitch Competition".into(),
            description: "Present your startup ideas to industry experts and win funding opportunities.".into(),
            date: date(2024, 1, 22),
            time: "10:00 AM - 4:00 PM".into(),
            venue: "Business Center".into(),
            organizer: "Entrepreneur Club".into(),
            created_by: None,
            category: EventCategory::Academic,
            capacity: 100,
            registered: Engagement::new(false, 67),
            price: 5,
            tags: strings(&["entrepreneurship", "startup", "competition"]),
            favorite: false,
            created_at: hours_ago(96),
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: Uuid::new_v4(),
            title: "Calculus & Linear Algebra Tutoring".into(),
            description: "Experienced math tutor offering personalized sessions for calculus and linear algebra. Proven track record of helping students improve grades.".into(),
            provider: "Sarah Chen".into(),
            created_by: None,
            category: ServiceCategory::Tutoring,
            rate: 25,
            rate_type: RateType::Hour,
            rating: Some(4.9),
            review_count: 34,
            experience: "3 years".into(),
            skills: strings(&["Calculus", "Linear Algebra", "Statistics", "Differential Equations"]),
            availability: "Mon-Fri 2-8 PM".into(),
            verified: true,
            response_time: "< 2 hours".into(),
            saved: false,
            created_at: hours_ago(24),
        },
        Service {
            id: Uuid::new_v4(),
            title: "Logo & Brand Design Services".into(),
            description: "Professional graphic designer specializing in logos, branding, and marketing materials for student projects and startups.".into(),
            provider: "Alex Rodriguez".into(),
            created_by: None,
            category: ServiceCategory::Design,
            rate: 150,
            rate_type: RateType::Project,
            rating: Some(4.8),
            review_count: 28,
            experience: "2 years".into(),
            skills: strings(&["Adobe Creative Suite", "Figma", "Branding", "UI/UX"]),
            availability: "Flexible".into(),
            verified: true,
            response_time: "< 4 hours".into(),
            saved: false,
            created_at: hours_ago(48),
        },
        Service {
            id: Uuid::new_v4(),
            title: "Web Development & React Training".into(),
            description: "Full-stack developer offering coding lessons and project assistance. From basics to advanced React concepts.".into(),
            provider: "Maya Patel".into(),
            created_by: None,
            category: ServiceCategory::Programming,
            rate: 30,
            rate_type: RateType::Hour,
            rating: Some(5.0),
            review_count: 22,
            experience: "4 years".into(),
            skills: strings(&["React", "Node.js", "JavaScript", "Python", "MongoDB"]),
            availability: "Weekends & Evenings".into(),
            verified: true,
            response_time: "< 1 hour".into(),
            saved: false,
            created_at: hours_ago(72),
        },
        Service {
            id: Uuid::new_v4(),
            title: "Event Photography & Portraits".into(),
            description: "Professional photographer for campus events, graduation photos, and portfolio shoots. High-quality images at student-friendly rates.".into(),
            provider: "David Kim".into(),
            created_by: None,
            category: ServiceCategory::Photography,
            rate: 75,
            rate_type: RateType::Session,
            rating: Some(4.7),
            review_count: 41,
            experience: "3 years".into(),
            skills: strings(&["Portrait Photography", "Event Photography", "Photo Editing", "Adobe Lightroom"]),
            availability: "Weekends".into(),
            verified: false,
            response_time: "< 6 hours".into(),
            saved: false,
            created_at: hours_ago(96),
        },
    ]
}

pub fn questions() -> Vec<Question> {
    vec![
        Question {
            id: Uuid::new_v4(),
            title: "Where can I find study rooms for group projects?".into(),
            description: "I'm looking for quiet study spaces that can accommodate 4-5 students for our semester project. Preferably with whiteboards and power outlets.".into(),
            author: "Emma Wilson".into(),
            created_by: None,
            category: QuestionCategory::Campus,
            status: QuestionStatus::Answered,
            created_at: hours_ago(2),
            likes: Engagement::new(false, 8),
            replies: 3,
            tags: strings(&["study-rooms", "group-study", "campus"]),
        },
        Question {
            id: Uuid::new_v4(),
            title: "Best places to get affordable textbooks?".into(),
            description: "Need recommendations for buying used textbooks for Computer Science courses. Looking for both online and local options.".into(),
            author: "James Chen".into(),
            created_by: None,
            category: QuestionCategory::Academic,
            status: QuestionStatus::Open,
            created_at: hours_ago(4),
            likes: Engagement::new(true, 12),
            replies: 7,
            tags: strings(&["textbooks", "computer-science", "budget"]),
        },
        Question {
            id: Uuid::new_v4(),
            title: "How to connect laptop to campus WiFi?".into(),
            description: "Having trouble connecting my new laptop to the campus network. The IT website instructions aren't working for me.".into(),
            author: "Sofia Rodriguez".into(),
            created_by: None,
            category: QuestionCategory::Technical,
            status: QuestionStatus::Answered,
            created_at: hours_ago(6),
            likes: Engagement::new(false, 5),
            replies: 2,
            tags: strings(&["wifi", "technical-support", "laptop"]),
        },
        Question {
            id: Uuid::new_v4(),
            title: "Anyone interested in forming a photography club?".into(),
            description: "I'm passionate about photography and would love to start a club. Looking for fellow photography enthusiasts to join!".into(),
            author: "Alex Thompson".into(),
            created_by: None,
            category: QuestionCategory::Events,
            status: QuestionStatus::Open,
            created_at: hours_ago(24),
            likes: Engagement::new(false, 15),
            replies: 9,
            tags: strings(&["photography", "club", "hobby"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Filter, Selection};
    use crate::store::{ItemStore, Record};
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let ids: HashSet<Uuid> = posts()
            .iter()
            .map(Record::id)
            .chain(listings().iter().map(Record::id))
            .chain(events().iter().map(Record::id))
            .chain(services().iter().map(Record::id))
            .chain(questions().iter().map(Record::id))
            .collect();
        assert_eq!(ids.len(), 17);
    }

    #[test]
    fn seeded_feed_filters() {
        let store = ItemStore::seeded(posts());

        let academic = Filter::new().category(Selection::Only(crate::models::FeedTopic::Academic));
        let authors: Vec<_> = academic
            .apply(store.all())
            .map(|p| p.author.name.as_str())
            .collect();
        assert_eq!(authors, vec!["Sarah Chen", "Alex Rodriguez"]);

        assert_eq!(Filter::new().query("zzz-no-match").apply(store.all()).count(), 0);
    }

    #[test]
    fn seeded_questions_by_status() {
        let store = ItemStore::seeded(questions());
        let open = Filter::new().status(Selection::Only(QuestionStatus::Open));
        let titles: Vec<_> = open.apply(store.all()).map(|q| q.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Best places to get affordable textbooks?",
                "Anyone interested in forming a photography club?"
            ]
        );
    }
}
