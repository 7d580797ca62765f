//! Thin REST client for the video backend.
//!
//! Every call is JSON in, JSON out. Any non-2xx status is reported as a single
//! [`ApiError::Status`]; callers are not expected to tell 4xx from 5xx.

use crate::env_variable_utils::API_BASE_URL;
use crate::models::{
    Comment, CreateCommentRequest, CreateVideoRequest, EditVideoRequest, GetVideoResponse,
    ListCommentsResponse, ListVideosResponse, SuccessResponse, Video,
};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request error: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("JSON parse error: {0}")]
    Decode(String),
}

pub fn list_videos_path(user_id: &str) -> String {
    format!("/videos?user_id={}", urlencoding::encode(user_id))
}

pub fn single_video_path(video_id: &str) -> String {
    format!("/videos/single?video_id={}", urlencoding::encode(video_id))
}

pub fn list_comments_path(video_id: &str) -> String {
    format!("/videos/comments?video_id={}", urlencoding::encode(video_id))
}

fn endpoint(path: &str) -> String {
    format!("{}{}", &*API_BASE_URL, path)
}

fn with_json_headers(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let url = request.url();
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        log::warn!("{} answered with HTTP {}", url, response.status());
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = with_json_headers(Request::get(&endpoint(path)))
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))?;
    send(request).await
}

pub async fn list_videos_by_user(user_id: &str) -> Result<Vec<Video>, ApiError> {
    let response: ListVideosResponse = get(&list_videos_path(user_id)).await?;
    Ok(response.videos)
}

pub async fn get_video(video_id: &str) -> Result<Video, ApiError> {
    let response: GetVideoResponse = get(&single_video_path(video_id)).await?;
    Ok(response.video)
}

pub async fn list_comments(video_id: &str) -> Result<Vec<Comment>, ApiError> {
    let response: ListCommentsResponse = get(&list_comments_path(video_id)).await?;
    Ok(response.comments)
}

pub async fn create_video(body: CreateVideoRequest) -> Result<SuccessResponse, ApiError> {
    let request = with_json_headers(Request::post(&endpoint("/videos")))
        .json(&body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    send(request).await
}

pub async fn edit_video(body: EditVideoRequest) -> Result<SuccessResponse, ApiError> {
    let request = with_json_headers(Request::put(&endpoint("/videos")))
        .json(&body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    send(request).await
}

pub async fn create_comment(body: CreateCommentRequest) -> Result<SuccessResponse, ApiError> {
    let request = with_json_headers(Request::post(&endpoint("/videos/comments")))
        .json(&body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    send(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_paths_encode_identifiers() {
        assert_eq!(list_videos_path("john_smith"), "/videos?user_id=john_smith");
        assert_eq!(
            single_video_path("a b&c"),
            "/videos/single?video_id=a%20b%26c"
        );
        assert_eq!(
            list_comments_path("v/1"),
            "/videos/comments?video_id=v%2F1"
        );
    }

    #[test]
    fn errors_render_a_single_line() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP error: 404");
        assert_eq!(ApiError::Status(503).to_string(), "HTTP error: 503");
        assert!(ApiError::Network("offline".into())
            .to_string()
            .starts_with("Network error"));
    }
}
