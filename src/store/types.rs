use chrono::{DateTime, Utc};

/// A registered user
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Author data copied into a post at creation time.
///
/// This is not a reference into the user collection: editing or removing a
/// user never touches the authors embedded in posts.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Fields supplied by `UserInput` when creating a post
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub name: String,
    pub email: String,
}

impl From<NewAuthor> for Author {
    fn from(input: NewAuthor) -> Self {
        Self {
            id: None,
            name: Some(input.name),
            email: Some(input.email),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub author: Author,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Source of "now" for creation and update timestamps
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
        }
    }
}
