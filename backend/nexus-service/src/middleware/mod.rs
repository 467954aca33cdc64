mod auth;

pub use auth::UserId;
