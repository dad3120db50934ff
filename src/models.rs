use serde::{Deserialize, Serialize};

/// A repository as returned by the GitHub search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub owner: Owner,
    pub open_issues_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// One page of `/search/repositories` results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<Repository>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_search_page_with_null_fields() {
        let body = json!({
            "total_count": 2,
            "incomplete_results": false,
            "items": [{
                "id": 1,
                "name": "test-repo",
                "full_name": "user/test-repo",
                "description": null,
                "html_url": "https://github.com/user/test-repo",
                "stargazers_count": 1500,
                "forks_count": 50,
                "language": null,
                "created_at": "2026-10-12T08:00:00Z",
                "updated_at": "2026-10-16T08:00:00Z",
                "owner": {
                    "login": "user",
                    "avatar_url": "https://avatars.githubusercontent.com/u/1",
                    "html_url": "https://github.com/user",
                    "type": "User"
                },
                "open_issues_count": 3
            }]
        });

        let page: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(page.total_count, 2);
        assert!(!page.incomplete_results);
        assert_eq!(page.items.len(), 1);

        let repo = &page.items[0];
        assert_eq!(repo.full_name, "user/test-repo");
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
        assert_eq!(repo.stargazers_count, 1500);
        assert_eq!(repo.owner.login, "user");
    }

    #[test]
    fn missing_items_decode_as_empty() {
        let page: SearchResponse = serde_json::from_str(r#"{"total_count": 0}"#).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.incomplete_results);
    }

    #[test]
    fn missing_total_count_decodes_as_zero() {
        let page: SearchResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());
    }
}
