use leptos::*;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::app::Controller;
use crate::dom;
use crate::error::PlantError;
use crate::plants::{self, SaveOutcome};
use crate::types::Plant;

/// Form state that lives only as long as the page.
#[derive(Clone, Copy)]
struct PlantForm {
    /// Position of the plant loaded by Edit, if any. `Some(0)` is a selection.
    editing: RwSignal<Option<usize>>,
    /// Image the next save or update will store.
    image: RwSignal<String>,
}

impl PlantForm {
    fn read(&self) -> Plant {
        Plant {
            kind: dom::field_value("plant-type"),
            name: dom::field_value("plant-name"),
            week: dom::field_value("plant-week"),
            image: self.image.get_untracked(),
        }
    }

    fn fill(&self, plant: &Plant) {
        dom::set_field_value("plant-type", &plant.kind);
        dom::set_field_value("plant-name", &plant.name);
        dom::set_field_value("plant-week", &plant.week);
        dom::set_image_src("plant-img", plants::display_image(plant));
        self.image.set(plant.image.clone());
    }
}

pub fn init_my_plants(ctrl: &Controller) {
    if !dom::exists("save-plant") {
        return;
    }
    log::debug!("wiring plant manager");

    let form = PlantForm {
        editing: create_rw_signal(None),
        image: create_rw_signal(dom::image_src("plant-img")),
    };

    watch_image_input(form);

    if let Some(list) = dom::by_id::<HtmlElement>("plants-list") {
        list.set_inner_html("");
        let ctrl = ctrl.clone();
        mount_to(list, move || plant_list(ctrl, form));
    }

    let save_ctrl = ctrl.clone();
    dom::on_click_id("save-plant", move |_| save(&save_ctrl, form));

    let update_ctrl = ctrl.clone();
    dom::on_click_id("update-plant", move |_| update(&update_ctrl, form));
}

fn watch_image_input(form: PlantForm) {
    let Some(input) = dom::by_id::<HtmlInputElement>("plant-image-input") else {
        return;
    };
    let el = input.clone();
    dom::listen(&input, "change", move |_| {
        let Some(file) = el.files().and_then(|files| files.item(0)) else {
            return;
        };
        let file = gloo_file::File::from(file);
        spawn_local(async move {
            match gloo_file::futures::read_as_data_url(&file).await {
                Ok(data_url) => {
                    dom::set_image_src("plant-img", &data_url);
                    form.image.set(data_url);
                }
                Err(e) => log::warn!("could not read {}: {}", file.name(), e),
            }
        });
    });
}

fn plant_list(ctrl: Controller, form: PlantForm) -> impl IntoView {
    let stored = ctrl.plants;
    move || {
        let list = stored.get();
        if list.is_empty() {
            return view! { <p class="muted">"No plants logged yet."</p> }.into_view();
        }
        list.into_iter()
            .enumerate()
            .map(|(idx, plant)| {
                let edit_ctrl = ctrl.clone();
                let delete_ctrl = ctrl.clone();
                let image = plants::display_image(&plant).to_string();
                let subtitle = format!("{} • {}", plant.kind, plant.week);
                view! {
                    <div class="plant-card">
                        <img src=image alt=""/>
                        <div style="flex:1">
                            <div style="font-weight:700">{plant.name}</div>
                            <div style="color:#666">{subtitle}</div>
                        </div>
                        <div style="display:flex;flex-direction:column;gap:6px">
                            <button class="btn small" on:click=move |_| edit(&edit_ctrl, form, idx)>
                                "Edit"
                            </button>
                            <button class="btn small ghost" on:click=move |_| delete(&delete_ctrl, form, idx)>
                                "Delete"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    }
}

fn edit(ctrl: &Controller, form: PlantForm, idx: usize) {
    match plants::plant_at(ctrl.store(), idx) {
        Ok(plant) => {
            form.fill(&plant);
            form.editing.set(Some(idx));
            dom::alert("Edit the values, then click UPDATE to apply changes.");
        }
        Err(e) => report(ctrl, form, &e),
    }
}

fn delete(ctrl: &Controller, form: PlantForm, idx: usize) {
    if !dom::confirm("Delete this plant?") {
        return;
    }
    match plants::delete_plant(ctrl.store(), idx) {
        Ok(removed) => {
            log::info!("deleted plant #{} ({})", idx, removed.name);
            form.editing
                .update(|editing| *editing = plants::selection_after_delete(*editing, idx));
            ctrl.reload();
        }
        Err(e) => report(ctrl, form, &e),
    }
}

fn save(ctrl: &Controller, form: PlantForm) {
    match plants::save_plant(ctrl.store(), form.read(), form.editing.get_untracked()) {
        Ok(SaveOutcome::Added { user }) => {
            log::info!("plant saved, {} now has {} points", user.name, user.points);
            form.editing.set(None);
            ctrl.reload();
            dom::alert(&format!("Plant saved! +{} points", plants::SAVE_REWARD));
        }
        Ok(SaveOutcome::Replaced { index }) => {
            log::info!("plant #{} replaced from the form", index);
            form.editing.set(None);
            ctrl.reload();
            dom::alert("Plant updated.");
        }
        Err(e) => report(ctrl, form, &e),
    }
}

fn update(ctrl: &Controller, form: PlantForm) {
    match plants::update_plant(ctrl.store(), form.read(), form.editing.get_untracked()) {
        Ok(index) => {
            log::info!("plant #{} updated", index);
            form.editing.set(None);
            ctrl.reload();
            dom::alert("Plant updated.");
        }
        Err(e) => report(ctrl, form, &e),
    }
}

fn report(ctrl: &Controller, form: PlantForm, err: &PlantError) {
    match err {
        PlantError::NoSelection => dom::alert(&err.to_string()),
        PlantError::StaleIndex { .. } => {
            log::warn!("{}", err);
            form.editing.set(None);
            ctrl.reload();
            dom::alert("That plant is no longer in your list.");
        }
        PlantError::Storage(e) => {
            log::warn!("{}", e);
            dom::alert("Could not save your plants. Browser storage may be full.");
        }
    }
}
