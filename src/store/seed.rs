use super::types::{Author, Post, User};
use chrono::{DateTime, NaiveDate, Utc};

/// Creation date of both seeded posts, day-month-year
pub const SEED_CREATED_AT: &str = "22-10-2021";

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: None,
            email: Some("nahidath@gmail.com".to_string()),
        },
        User {
            id: 2,
            name: None,
            email: Some("loïc@gmail.com".to_string()),
        },
    ]
}

pub fn seed_posts() -> Vec<Post> {
    let created_at = seed_created_at();

    vec![
        Post {
            id: 1,
            author: Author {
                id: Some(1),
                name: Some("nahi".to_string()),
                email: Some("nahidath@gmail.com".to_string()),
            },
            content: "first post".to_string(),
            created_at,
            updated_at: None,
        },
        Post {
            id: 2,
            author: Author {
                id: Some(2),
                name: Some("le L".to_string()),
                email: Some("loïc@gmail.com".to_string()),
            },
            content: "second post".to_string(),
            created_at,
            updated_at: None,
        },
    ]
}

fn seed_created_at() -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(SEED_CREATED_AT, "%d-%m-%Y")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_date_is_midnight_utc() {
        let created_at = seed_created_at().unwrap();
        assert_eq!(created_at.timestamp_millis(), 1_634_860_800_000);
    }

    #[test]
    fn test_seed_authors_match_seed_users() {
        let users = seed_users();
        for (user, post) in users.iter().zip(seed_posts()) {
            assert_eq!(post.author.id, Some(user.id));
            assert_eq!(post.author.email, user.email);
        }
    }
}
