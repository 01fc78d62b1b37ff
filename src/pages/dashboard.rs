use leptos::*;
use web_sys::HtmlElement;

use crate::app::Controller;
use crate::dom;
use crate::stats;

/// Home page summary: community counter and a short plant preview.
pub fn init_dashboard(ctrl: &Controller) {
    let plants = ctrl.plants;

    if dom::exists("community-plants") {
        create_effect(move |_| {
            let count = stats::community_plants(plants.with(Vec::len));
            dom::set_text("community-plants", &count.to_string());
        });
    }

    if let Some(mini) = dom::by_id::<HtmlElement>("plants-mini") {
        mini.set_inner_html("");
        mount_to(mini, move || {
            move || {
                plants.with(|all| {
                    stats::preview(all)
                        .iter()
                        .map(|p| view! { <div>{stats::preview_line(p)}</div> })
                        .collect_view()
                })
            }
        });
    }
}
