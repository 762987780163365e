//! Placeholder images for project screenshots that fail to load.

use std::collections::HashSet;

use url::Url;

use crate::carousel::ProjectId;
use crate::content::ProjectEntry;
use crate::theme::Theme;

const PLACEHOLDER_SIZE: &str = "600x400";

/// Builds `<base>/600x400/<bg>/<fg>?text=<title>` with theme-specific colours.
pub fn placeholder_url(base: &Url, theme: Theme, title: &str) -> String {
    let (background, foreground) = theme.palette().placeholder_colors;
    let mut url = base.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .push(PLACEHOLDER_SIZE)
            .push(background)
            .push(foreground);
    }
    url.query_pairs_mut().clear().append_pair("text", title);

    url.into()
}

/// Images that reported a load error during this page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageFallbacks {
    failed: HashSet<(ProjectId, usize)>,
}

impl ImageFallbacks {
    /// Returns `false` when the image was already marked, so a failing
    /// placeholder does not trigger another state update.
    pub fn mark_failed(&mut self, project: ProjectId, index: usize) -> bool {
        self.failed.insert((project, index))
    }

    pub fn is_failed(&self, project: ProjectId, index: usize) -> bool {
        self.failed.contains(&(project, index))
    }

    /// Source to render for one screenshot: the configured reference, or the
    /// placeholder once it has failed.
    pub fn image_src(
        &self,
        base: &Url,
        theme: Theme,
        id: ProjectId,
        project: &ProjectEntry,
        index: usize,
    ) -> String {
        match project.images.get(index) {
            Some(src) if !self.is_failed(id, index) => src.clone(),
            _ => placeholder_url(base, theme, &project.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    fn base() -> Url {
        Url::parse("https://via.placeholder.com").expect("valid URL")
    }

    fn text_param(url: &str) -> Option<String> {
        Url::parse(url)
            .expect("placeholder is a URL")
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
    }

    #[test]
    fn placeholder_carries_title_and_theme_colours() {
        let dark = placeholder_url(&base(), Theme::Dark, "Salati Mobile App");
        assert!(dark.starts_with("https://via.placeholder.com/600x400/1e293b/64748b?"));
        assert_eq!(text_param(&dark).as_deref(), Some("Salati Mobile App"));

        let light = placeholder_url(&base(), Theme::Light, "Salati Mobile App");
        assert!(light.starts_with("https://via.placeholder.com/600x400/f1f5f9/94a3b8?"));
    }

    #[test]
    fn title_is_escaped() {
        let url = placeholder_url(&base(), Theme::Dark, "BMI Tracker & Profile Manager");
        assert!(!url.contains("& "));
        assert_eq!(text_param(&url).as_deref(), Some("BMI Tracker & Profile Manager"));
    }

    #[test]
    fn base_path_is_preserved() {
        let base = Url::parse("https://cdn.example.com/img/").expect("valid URL");
        let url = placeholder_url(&base, Theme::Dark, "X");
        assert!(url.starts_with("https://cdn.example.com/img/600x400/"));
    }

    #[test]
    fn failed_image_renders_placeholder_with_title() {
        let content = SiteContent::bundled().expect("bundled content");
        let (id, project) = content.projects().nth(1).expect("second project");
        let mut fallbacks = ImageFallbacks::default();

        assert_eq!(fallbacks.image_src(&base(), Theme::Dark, id, project, 0), "/salati1.png");

        assert!(fallbacks.mark_failed(id, 0));
        let src = fallbacks.image_src(&base(), Theme::Dark, id, project, 0);
        assert_eq!(text_param(&src).as_deref(), Some(project.title.as_str()));

        assert_eq!(fallbacks.image_src(&base(), Theme::Dark, id, project, 1), "/salati2.png");
    }

    #[test]
    fn marking_twice_is_reported_once() {
        let mut fallbacks = ImageFallbacks::default();
        assert!(fallbacks.mark_failed(ProjectId(0), 2));
        assert!(!fallbacks.mark_failed(ProjectId(0), 2));
        assert!(!fallbacks.is_failed(ProjectId(1), 2));
    }
}
