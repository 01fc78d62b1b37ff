const DEFAULT_PAGE: &str = "index.html";

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Filename of the page being shown, "index.html" for a bare directory.
pub fn current_page(pathname: &str) -> &str {
    match last_segment(pathname) {
        "" => DEFAULT_PAGE,
        page => page,
    }
}

pub fn is_active(href: &str, pathname: &str) -> bool {
    last_segment(href) == current_page(pathname)
}
