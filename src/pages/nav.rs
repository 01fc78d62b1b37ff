use crate::dom;
use crate::nav;

pub fn highlight_nav() {
    let path = dom::pathname();
    for link in dom::query_all(".nav-item") {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let classes = link.class_list();
        let toggled = if nav::is_active(&href, &path) {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
        if toggled.is_err() {
            log::warn!("could not update nav link {}", href);
        }
    }
}
