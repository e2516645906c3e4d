//! In-memory consultant directory seeded with the platform's profiles.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::directory::{Consultant, ContactDetails, Review};
use crate::domain::foundation::{ConsultantId, DomainError, StarRating, ValidationError};
use crate::ports::ConsultantReader;

/// Read-only directory backed by an in-memory list.
pub struct InMemoryDirectory {
    consultants: Vec<Consultant>,
}

impl InMemoryDirectory {
    /// Creates a directory over the given profiles.
    pub fn new(consultants: Vec<Consultant>) -> Self {
        Self { consultants }
    }

    /// Creates a directory seeded with the platform's two profiles.
    pub fn seeded() -> Self {
        // Static data: constructors cannot fail on these literals.
        Self::new(seed_profiles().unwrap_or_else(|e| panic!("seed profiles are invalid: {}", e)))
    }
}

#[async_trait]
impl ConsultantReader for InMemoryDirectory {
    async fn list(&self) -> Result<Vec<Consultant>, DomainError> {
        Ok(self.consultants.clone())
    }

    async fn find_by_id(&self, id: &ConsultantId) -> Result<Option<Consultant>, DomainError> {
        Ok(self.consultants.iter().find(|c| c.id() == id).cloned())
    }
}

fn review(
    id: &str,
    author: &str,
    (year, month, day): (i32, u32, u32),
    rating: u8,
    text: &str,
) -> Result<Review, ValidationError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ValidationError::invalid_format("review_date", "invalid calendar date"))?;
    Review::new(id, author, date, StarRating::try_new(rating)?, text)
}

fn seed_profiles() -> Result<Vec<Consultant>, ValidationError> {
    Ok(vec![
        Consultant::new(
            ConsultantId::new("1")?,
            "Anna Smirnova",
            "Senior Consultant",
            vec![
                "Finance".to_string(),
                "Accounting".to_string(),
                "Taxes".to_string(),
            ],
            8,
            "Anna specializes in financial consulting for small and medium businesses. \
             She has worked across industries, helping companies streamline financial \
             processes, improve reporting, and reduce tax risks.",
            ContactDetails {
                email: "anna.smirnova@consult.example".to_string(),
                phone: "+7 (999) 123-45-67".to_string(),
            },
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=800&auto=format&fit=crop",
            vec![
                review(
                    "f1",
                    "Ivan Sokolov",
                    (2025, 3, 15),
                    5,
                    "Anna helped us optimize our tax burden and bring order to our \
                     bookkeeping. A very professional approach and great attention to detail.",
                )?,
                review(
                    "f2",
                    "Maria Kotova",
                    (2025, 2, 2),
                    5,
                    "An excellent specialist! Thanks to Anna's recommendations we cut \
                     costs and improved the company's cash flow. Highly recommended!",
                )?,
                review(
                    "f3",
                    "Alexey Petrov",
                    (2025, 1, 20),
                    4,
                    "A quality consultation on financial matters. The only downside was \
                     waiting a while for answers to some questions, but overall I am \
                     happy with the result.",
                )?,
            ],
        )?,
        Consultant::new(
            ConsultantId::new("2")?,
            "Mikhail Petrov",
            "Business Consultant",
            vec![
                "Strategy".to_string(),
                "Growth".to_string(),
                "Marketing".to_string(),
            ],
            10,
            "Mikhail helps companies design and roll out growth strategies, optimize \
             business processes, and enter new markets. He specializes in innovative \
             solutions and digital transformation.",
            ContactDetails {
                email: "mikhail.petrov@consult.example".to_string(),
                phone: "+7 (999) 765-43-21".to_string(),
            },
            "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=800&auto=format&fit=crop",
            vec![
                review(
                    "f1",
                    "Sergey Ivanov",
                    (2025, 4, 5),
                    5,
                    "Mikhail built us a great market-entry strategy. We saw the first \
                     results within three months!",
                )?,
                review(
                    "f2",
                    "Anna Kuznetsova",
                    (2025, 3, 18),
                    4,
                    "A professional approach. Mikhail helped us find the weak spots in \
                     our processes and proposed solutions that actually work.",
                )?,
            ],
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_directory_lists_both_profiles() {
        let directory = InMemoryDirectory::seeded();
        let consultants = directory.list().await.unwrap();
        assert_eq!(consultants.len(), 2);
        assert_eq!(consultants[0].name(), "Anna Smirnova");
        assert_eq!(consultants[1].name(), "Mikhail Petrov");
    }

    #[tokio::test]
    async fn find_by_id_returns_matching_profile() {
        let directory = InMemoryDirectory::seeded();
        let id = ConsultantId::new("2").unwrap();
        let consultant = directory.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(consultant.position(), "Business Consultant");
        assert_eq!(consultant.review_count(), 2);
    }

    #[tokio::test]
    async fn find_by_id_unknown_is_none() {
        let directory = InMemoryDirectory::seeded();
        let id = ConsultantId::new("99").unwrap();
        assert!(directory.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn seeded_ratings_are_derived_from_reviews() {
        let directory = InMemoryDirectory::seeded();
        let id = ConsultantId::new("1").unwrap();
        let anna = directory.find_by_id(&id).await.unwrap().unwrap();
        let avg = anna.average_rating().unwrap();
        assert!((avg - 14.0 / 3.0).abs() < 1e-9);
    }
}
