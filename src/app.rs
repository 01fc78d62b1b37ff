use std::rc::Rc;

use leptos::*;

use crate::dom;
use crate::pages;
use crate::storage::{self, PageStore};
use crate::types::{Plant, User};

/// State shared by every feature on the page. The signals mirror the two
/// stored records; pages write through `store()` and then call `reload()`.
#[derive(Clone)]
pub struct Controller {
    store: Rc<PageStore>,
    pub user: RwSignal<User>,
    pub plants: RwSignal<Vec<Plant>>,
}

impl Controller {
    pub fn new(store: PageStore) -> Self {
        let user = create_rw_signal(storage::load_user(&store));
        let plants = create_rw_signal(storage::load_plants(&store));
        Self {
            store: Rc::new(store),
            user,
            plants,
        }
    }

    pub fn store(&self) -> &PageStore {
        &self.store
    }

    pub fn reload(&self) {
        self.user.set(storage::load_user(self.store()));
        self.plants.set(storage::load_plants(self.store()));
    }
}

/// Wire up whatever features the current page has. Safe on every page.
pub fn start() {
    dom::on_ready(|| {
        let ctrl = Controller::new(PageStore::open());
        log::debug!(
            "page controller starting on {} ({} plants stored)",
            dom::pathname(),
            ctrl.plants.get_untracked().len()
        );

        pages::highlight_nav();
        pages::sync_user_displays(&ctrl);
        pages::init_my_plants(&ctrl);
        pages::init_auth(&ctrl);
        pages::init_leaderboard(&ctrl);
        pages::init_dashboard(&ctrl);
    });
}
