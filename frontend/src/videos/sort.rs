use crate::models::Video;
use crate::utils::parse_timestamp;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Date,
    Comments,
}

impl SortOption {
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Date => "Date",
            SortOption::Comments => "Comments",
        }
    }

    pub fn compare(self, a: &Video, b: &Video) -> Ordering {
        match self {
            SortOption::Date => newest_first(a, b),
            SortOption::Comments => b
                .num_comments
                .cmp(&a.num_comments)
                .then_with(|| newest_first(a, b)),
        }
    }
}

fn created_at(video: &Video) -> Option<DateTime<Utc>> {
    parse_timestamp(&video.created_at)
}

/// Descending by creation time. `None` orders below every real timestamp, so
/// unparseable dates sink to the end.
fn newest_first(a: &Video, b: &Video) -> Ordering {
    created_at(b).cmp(&created_at(a))
}

/// Stable sort of a copy; equal elements keep their input order.
pub fn sort_videos(videos: &[Video], option: SortOption) -> Vec<Video> {
    let mut sorted = videos.to_vec();
    sorted.sort_by(|a, b| option.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_video(id: &str, created_at: &str, num_comments: i64) -> Video {
        Video {
            id: id.to_string(),
            user_id: "john_smith".to_string(),
            title: format!("video_{}", id),
            description: String::new(),
            video_url: format!("https://example.com/{}.mp4", id),
            created_at: created_at.to_string(),
            num_comments,
        }
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_newer_video_wins_on_equal_comments() {
        let videos = vec![
            create_test_video("v2", "2024-01-01", 3),
            create_test_video("v1", "2024-01-02", 3),
        ];

        assert_eq!(ids(&sort_videos(&videos, SortOption::Date)), ["v1", "v2"]);
        assert_eq!(ids(&sort_videos(&videos, SortOption::Comments)), ["v1", "v2"]);
    }

    #[test]
    fn test_sort_by_date() {
        let videos = vec![
            create_test_video("1", "2024-03-01T10:00:00Z", 9),
            create_test_video("2", "2024-05-01T10:00:00Z", 0),
            create_test_video("3", "2024-04-01T10:00:00.123456", 4),
        ];

        let sorted = sort_videos(&videos, SortOption::Date);

        assert_eq!(ids(&sorted), ["2", "3", "1"]);
    }

    #[test]
    fn test_sort_by_comments_then_date() {
        let videos = vec![
            create_test_video("a", "2024-01-01", 1),
            create_test_video("b", "2024-01-03", 5),
            create_test_video("c", "2024-01-02", 5),
            create_test_video("d", "2024-01-04", 0),
        ];

        let sorted = sort_videos(&videos, SortOption::Comments);

        assert_eq!(ids(&sorted), ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let videos = vec![
            create_test_video("broken", "not a date", 0),
            create_test_video("old", "2001-01-01", 0),
        ];

        assert_eq!(ids(&sort_videos(&videos, SortOption::Date)), ["old", "broken"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let videos = vec![
            create_test_video("x", "2024-01-01", 2),
            create_test_video("y", "2024-01-01", 2),
            create_test_video("z", "2024-01-01", 2),
        ];

        for option in [SortOption::Date, SortOption::Comments] {
            assert_eq!(ids(&sort_videos(&videos, option)), ["x", "y", "z"]);
        }
    }

    #[test]
    fn test_sorting_sorted_input_is_a_no_op() {
        let videos = vec![
            create_test_video("1", "2024-02-01", 7),
            create_test_video("2", "2024-03-01", 7),
            create_test_video("3", "2024-01-01", 2),
        ];

        let once = sort_videos(&videos, SortOption::Comments);
        let twice = sort_videos(&once, SortOption::Comments);

        assert_eq!(once, twice);
    }
}
