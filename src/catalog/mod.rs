// SPDX-License-Identifier: MPL-2.0
//! Static project catalog.
//!
//! All portfolio content is compiled into the binary: the slides of the
//! home slideshow and the per-project gallery records. Nothing here is
//! fetched or mutated at runtime; every accessor returns `'static` data
//! and is total.

/// One entry of the home slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    /// Stable identifier of the underlying project.
    pub id: u32,
    /// Project wordmark, e.g. "HAUS G".
    pub display_name: &'static str,
    /// City and country caption, e.g. "GIESSEN, DEUTSCHLAND".
    pub location_label: &'static str,
    /// Image path relative to the assets root.
    pub image_path: &'static str,
    /// Position caption shown over the slide, e.g. "1/4".
    pub ordinal_label: &'static str,
    /// Slug addressing the project detail view, if the slide links to one.
    pub route_slug: Option<&'static str>,
}

/// Fixed facts shown in the about-project panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetails {
    /// Completion year ("Jahr" row).
    pub year: &'static str,
    /// Floor area ("Fläche" row).
    pub area: &'static str,
    /// Building type ("Typ" row).
    pub kind: &'static str,
}

/// One project with its full gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Slug used to address this project.
    pub slug: &'static str,
    /// Project wordmark.
    pub name: &'static str,
    /// City and country caption.
    pub location: &'static str,
    /// Ordered gallery image paths relative to the assets root.
    pub images: &'static [&'static str],
    /// Description paragraph for the about-project panel.
    pub description: &'static str,
    /// Fixed detail rows for the about-project panel.
    pub details: ProjectDetails,
}

static HAUS_G_IMAGES: [&str; 20] = [
    "images/haus-01/01.jpg",
    "images/haus-01/02.jpg",
    "images/haus-01/03.jpg",
    "images/haus-01/04.jpg",
    "images/haus-01/05.jpg",
    "images/haus-01/06.jpg",
    "images/haus-01/07.jpg",
    "images/haus-01/08.jpg",
    "images/haus-01/09.jpg",
    "images/haus-01/10.jpg",
    "images/haus-01/11.jpg",
    "images/haus-01/12.jpg",
    "images/haus-01/13.jpg",
    "images/haus-01/14.jpg",
    "images/haus-01/15.jpg",
    "images/haus-01/16.jpg",
    "images/haus-01/17.jpg",
    "images/haus-01/18.jpg",
    "images/haus-01/19.jpg",
    "images/haus-01/20.jpg",
];

static HAUS_M_IMAGES: [&str; 14] = [
    "images/haus-02/01.jpg",
    "images/haus-02/02.jpg",
    "images/haus-02/03.jpg",
    "images/haus-02/04.jpg",
    "images/haus-02/05.jpg",
    "images/haus-02/06.jpg",
    "images/haus-02/07.jpg",
    "images/haus-02/08.jpg",
    "images/haus-02/09.jpg",
    "images/haus-02/10.jpg",
    "images/haus-02/11.jpg",
    "images/haus-02/12.jpg",
    "images/haus-02/13.jpg",
    "images/haus-02/14.jpg",
];

// The first entry doubles as the fallback for unrecognized slugs.
static PROJECTS: [Project; 2] = [
    Project {
        slug: "haus-g",
        name: "HAUS G",
        location: "GIESSEN, DEUTSCHLAND",
        images: &HAUS_G_IMAGES,
        description: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                      Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
        details: ProjectDetails {
            year: "2023",
            area: "450 m\u{b2}",
            kind: "Wohnung",
        },
    },
    Project {
        slug: "haus-m",
        name: "HAUS M",
        location: "MÜNCHEN, DEUTSCHLAND",
        images: &HAUS_M_IMAGES,
        description: "Ut enim ad minim veniam, quis nostrud exercitation ullamco \
                      laboris nisi ut aliquip ex ea commodo consequat.",
        details: ProjectDetails {
            year: "2023",
            area: "450 m\u{b2}",
            kind: "Wohnung",
        },
    },
];

static HOME_SLIDES: [MediaItem; 4] = [
    MediaItem {
        id: 1,
        display_name: "HAUS G",
        location_label: "GIESSEN, DEUTSCHLAND",
        image_path: "images/haus-01/01.jpg",
        ordinal_label: "1/4",
        route_slug: Some("haus-g"),
    },
    MediaItem {
        id: 2,
        display_name: "HAUS M",
        location_label: "MÜNCHEN, DEUTSCHLAND",
        image_path: "images/haus-02/01.jpg",
        ordinal_label: "2/4",
        route_slug: Some("haus-m"),
    },
    MediaItem {
        id: 1,
        display_name: "HAUS G",
        location_label: "GIESSEN, DEUTSCHLAND",
        image_path: "images/haus-01/02.jpg",
        ordinal_label: "3/4",
        route_slug: Some("haus-g"),
    },
    MediaItem {
        id: 2,
        display_name: "HAUS M",
        location_label: "MÜNCHEN, DEUTSCHLAND",
        image_path: "images/haus-02/02.jpg",
        ordinal_label: "4/4",
        route_slug: Some("haus-m"),
    },
];

/// Slug of the project shown when a requested slug is unrecognized.
pub const DEFAULT_SLUG: &str = "haus-g";

/// Returns all projects in display order.
#[must_use]
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Returns the slides of the home slideshow in display order.
#[must_use]
pub fn home_slides() -> &'static [MediaItem] {
    &HOME_SLIDES
}

/// Returns the project shown for unrecognized slugs.
#[must_use]
pub fn default_project() -> &'static Project {
    &PROJECTS[0]
}

/// Looks up a project by slug, falling back to the default entry.
///
/// An unrecognized slug is not an error: the detail view must always
/// have a valid record to display, so unknown slugs silently resolve
/// to [`default_project`].
#[must_use]
pub fn find(slug: &str) -> &'static Project {
    find_strict(slug).unwrap_or_else(default_project)
}

/// Looks up a project by slug without the fallback.
#[must_use]
pub fn find_strict(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slugs_resolve_to_their_records() {
        assert_eq!(find("haus-g").name, "HAUS G");
        assert_eq!(find("haus-m").name, "HAUS M");
        assert_eq!(find("haus-m").location, "MÜNCHEN, DEUTSCHLAND");
    }

    #[test]
    fn unrecognized_slug_falls_back_to_default_entry() {
        let fallback = find("does-not-exist");
        assert_eq!(fallback.slug, DEFAULT_SLUG);
        assert_eq!(fallback.name, default_project().name);
    }

    #[test]
    fn empty_slug_falls_back_to_default_entry() {
        assert_eq!(find("").slug, DEFAULT_SLUG);
    }

    #[test]
    fn find_strict_returns_none_for_unknown_slug() {
        assert!(find_strict("does-not-exist").is_none());
        assert!(find_strict("haus-g").is_some());
    }

    #[test]
    fn gallery_sizes_match_published_portfolios() {
        assert_eq!(find("haus-g").images.len(), 20);
        assert_eq!(find("haus-m").images.len(), 14);
    }

    #[test]
    fn home_slides_cover_all_ordinals() {
        let slides = home_slides();
        assert_eq!(slides.len(), 4);
        for (index, slide) in slides.iter().enumerate() {
            assert_eq!(slide.ordinal_label, format!("{}/4", index + 1));
        }
    }

    #[test]
    fn every_slide_slug_resolves_without_fallback() {
        for slide in home_slides() {
            let slug = slide.route_slug.expect("home slides link to projects");
            assert!(find_strict(slug).is_some(), "unknown slug {slug}");
        }
    }

    #[test]
    fn slides_of_one_project_share_an_id() {
        let slides = home_slides();
        assert_eq!(slides[0].id, slides[2].id);
        assert_eq!(slides[1].id, slides[3].id);
        assert_ne!(slides[0].id, slides[1].id);
    }

    #[test]
    fn detail_rows_are_populated() {
        for project in projects() {
            assert!(!project.details.year.is_empty());
            assert!(!project.details.area.is_empty());
            assert!(!project.details.kind.is_empty());
            assert!(!project.description.is_empty());
        }
    }
}
