use leptos::*;
use web_sys::HtmlElement;

use crate::app::Controller;
use crate::dom;
use crate::leaderboard;

pub fn init_leaderboard(ctrl: &Controller) {
    let Some(list) = dom::by_id::<HtmlElement>("rank-list") else {
        return;
    };
    log::debug!("rendering leaderboard");
    list.set_inner_html("");

    let user = ctrl.user;
    mount_to(list, move || {
        move || {
            leaderboard::build_leaderboard(&user.get())
                .into_iter()
                .map(|entry| view! { <li>{entry.to_string()}</li> })
                .collect_view()
        }
    });
}
