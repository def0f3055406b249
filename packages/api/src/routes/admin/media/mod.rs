//! Media library routes.

use crate::entity::sea_orm_active_enums::MediaType;

pub mod create_media;
pub mod list_media;

const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mov", "avi"];
const VIDEO_HOSTS: [&str; 2] = ["youtube", "vimeo"];
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Best-effort media type inference for a pasted URL.
///
/// Unmatched URLs default to `Document` rather than failing.
pub fn infer_media_type(url: &str) -> MediaType {
    let lower = url.to_ascii_lowercase();
    let path = lower.split(['?', '#']).next().unwrap_or(&lower);
    let extension = path.rsplit('.').next().unwrap_or_default();

    if VIDEO_EXTENSIONS.contains(&extension) || VIDEO_HOSTS.iter().any(|h| lower.contains(h)) {
        return MediaType::Video;
    }
    if IMAGE_EXTENSIONS.contains(&extension) {
        return MediaType::Image;
    }
    MediaType::Document
}

/// File name fallback for bare URLs: the last path segment, or the host.
pub(crate) fn file_name_from_url(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains("://"))
        .unwrap_or("untitled")
        .split(['?', '#'])
        .next()
        .unwrap_or("untitled")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_extensions_and_hosts() {
        assert_eq!(infer_media_type("https://cdn.example.com/intro.mp4"), MediaType::Video);
        assert_eq!(infer_media_type("https://files.example.com/clip.WEBM"), MediaType::Video);
        assert_eq!(infer_media_type("https://example.com/a.mov"), MediaType::Video);
        assert_eq!(infer_media_type("https://example.com/a.avi"), MediaType::Video);
        assert_eq!(
            infer_media_type("https://www.youtube.com/watch?v=abc123"),
            MediaType::Video
        );
        assert_eq!(infer_media_type("https://vimeo.com/998877"), MediaType::Video);
    }

    #[test]
    fn image_extensions() {
        for ext in ["jpg", "jpeg", "png", "gif", "webp", "svg"] {
            assert_eq!(
                infer_media_type(&format!("https://cdn.example.com/pic.{}", ext)),
                MediaType::Image
            );
        }
    }

    #[test]
    fn everything_else_is_a_document() {
        assert_eq!(infer_media_type("https://example.com/syllabus.pdf"), MediaType::Document);
        assert_eq!(infer_media_type("https://example.com/no-extension"), MediaType::Document);
        assert_eq!(infer_media_type(""), MediaType::Document);
    }

    #[test]
    fn query_strings_do_not_fool_extension_match() {
        assert_eq!(
            infer_media_type("https://cdn.example.com/photo.png?size=large"),
            MediaType::Image
        );
    }

    #[test]
    fn file_name_falls_back_to_last_segment() {
        assert_eq!(
            file_name_from_url("https://cdn.example.com/docs/handbook.pdf?v=2"),
            "handbook.pdf"
        );
        assert_eq!(file_name_from_url("https://example.com/"), "example.com");
    }
}
