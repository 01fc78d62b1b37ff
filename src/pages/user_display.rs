//! Name and points slots. A page may repeat a slot id (a header badge and
//! a hero banner both using `#user-name`), so slots are found with one
//! selector query rather than by id, and every copy is kept in step.

use leptos::*;

use crate::app::Controller;
use crate::dom;
use crate::stats;

const NAME_SLOTS: [&str; 7] = [
    "user-name",
    "user-name-2",
    "user-name-3",
    "user-name-4",
    "user-name-5",
    "user-name-6",
    "hero-user",
];

const POINTS_SLOTS: [&str; 6] = [
    "user-points",
    "user-points-2",
    "user-points-3",
    "user-points-4",
    "user-points-5",
    "user-points-6",
];

/// `["a", "b"]` -> `"#a,#b"`
fn id_selector(ids: &[&str]) -> String {
    ids.iter()
        .map(|id| format!("#{}", id))
        .collect::<Vec<_>>()
        .join(",")
}

/// Keeps every name and points slot on the page in step with the user.
pub fn sync_user_displays(ctrl: &Controller) {
    let names = dom::query_all(&id_selector(&NAME_SLOTS));
    let points = dom::query_all(&id_selector(&POINTS_SLOTS));
    if names.is_empty() && points.is_empty() {
        return;
    }

    let user = ctrl.user;
    create_effect(move |_| {
        let user = user.get();
        for el in &names {
            el.set_text_content(Some(&user.name));
        }
        let label = stats::points_label(&user);
        for el in &points {
            el.set_text_content(Some(&label));
        }
    });
}
