pub mod auth;
pub mod chat;
pub mod communities;
pub mod feed;
pub mod health;
pub mod media;
pub mod posts;
pub mod relationships;
pub mod stories;
pub mod users;

use serde::Deserialize;

/// Shared pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

impl PageQuery {
    /// Clamp to sane bounds before hitting the database
    pub fn clamped(&self) -> (i64, i64) {
        (self.limit.clamp(1, 100), self.offset.max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_clamps_out_of_range_values() {
        let q = PageQuery {
            limit: 10_000,
            offset: -5,
        };
        assert_eq!(q.clamped(), (100, 0));

        let q = PageQuery {
            limit: 0,
            offset: 40,
        };
        assert_eq!(q.clamped(), (1, 40));
    }
}
