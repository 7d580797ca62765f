use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub created_at: String,
    pub num_comments: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub video_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: String,
}

// Requests

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateVideoRequest {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EditVideoRequest {
    pub video_id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateCommentRequest {
    pub video_id: String,
    pub content: String,
    pub user_id: String,
}

// Responses

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListVideosResponse {
    pub videos: Vec<Video>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GetVideoResponse {
    pub video: Video,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListCommentsResponse {
    pub comments: Vec<Comment>,
}

/// Write endpoints answer with a bare success message.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct SuccessResponse {
    #[serde(default)]
    pub success: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_videos_response_decodes_backend_payload() {
        let body = r#"{
            "videos": [{
                "id": "v1",
                "user_id": "jane_doe",
                "title": "Intro to Rust",
                "description": "Ownership basics",
                "video_url": "https://cdn.example.com/intro.mp4",
                "created_at": "2024-01-02T10:00:00Z",
                "num_comments": 3
            }]
        }"#;

        let parsed: ListVideosResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.videos.len(), 1);
        assert_eq!(parsed.videos[0].id, "v1");
        assert_eq!(parsed.videos[0].num_comments, 3);
    }

    #[test]
    fn success_response_tolerates_missing_message() {
        let parsed: SuccessResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.success, "");
    }

    #[test]
    fn create_comment_request_uses_backend_field_names() {
        let body = CreateCommentRequest {
            video_id: "v1".to_string(),
            content: "Great lecture".to_string(),
            user_id: "jane_doe".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["video_id"], "v1");
        assert_eq!(json["content"], "Great lecture");
        assert_eq!(json["user_id"], "jane_doe");
    }
}
