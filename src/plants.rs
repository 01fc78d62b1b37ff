//! Plant list operations.
//!
//! Every operation reads the list fresh from the store, changes it and writes
//! it back. Entries are addressed by position, so an index is only valid
//! against the list it was taken from.

use crate::error::{PlantError, StorageError};
use crate::storage::{self, KeyValueStore};
use crate::types::{Plant, User};

/// Points awarded for logging a new plant.
pub const SAVE_REWARD: u32 = 5;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/160x120?text=Plant";

const UNNAMED: &str = "Unnamed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Added { user: User },
    Replaced { index: usize },
}

/// Image to display for a plant, falling back to the placeholder.
pub fn display_image(plant: &Plant) -> &str {
    if plant.image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        &plant.image
    }
}

/// Save button: replace the plant being edited, or append a new one and award
/// points. An empty name is stored as "Unnamed".
pub fn save_plant(
    store: &impl KeyValueStore,
    mut plant: Plant,
    editing: Option<usize>,
) -> Result<SaveOutcome, PlantError> {
    if plant.name.is_empty() {
        plant.name = UNNAMED.to_string();
    }

    if let Some(index) = editing {
        replace_at(store, index, plant)?;
        return Ok(SaveOutcome::Replaced { index });
    }

    let mut plants = storage::load_plants(store);
    plants.push(plant);
    storage::save_plants(store, &plants)?;
    let user = award_points(store, SAVE_REWARD)?;
    Ok(SaveOutcome::Added { user })
}

/// Update button: only valid while a plant is selected for editing.
pub fn update_plant(
    store: &impl KeyValueStore,
    plant: Plant,
    editing: Option<usize>,
) -> Result<usize, PlantError> {
    let index = editing.ok_or(PlantError::NoSelection)?;
    replace_at(store, index, plant)?;
    Ok(index)
}

pub fn delete_plant(store: &impl KeyValueStore, index: usize) -> Result<Plant, PlantError> {
    let mut plants = storage::load_plants(store);
    if index >= plants.len() {
        return Err(PlantError::StaleIndex {
            index,
            len: plants.len(),
        });
    }
    let removed = plants.remove(index);
    storage::save_plants(store, &plants)?;
    Ok(removed)
}

/// Plant to load into the edit form.
pub fn plant_at(store: &impl KeyValueStore, index: usize) -> Result<Plant, PlantError> {
    let plants = storage::load_plants(store);
    let len = plants.len();
    plants
        .into_iter()
        .nth(index)
        .ok_or(PlantError::StaleIndex { index, len })
}

/// Keeps an edit selection pointing at the same plant after `removed` is
/// deleted. Selecting the deleted plant itself clears the selection.
pub fn selection_after_delete(editing: Option<usize>, removed: usize) -> Option<usize> {
    match editing? {
        i if i == removed => None,
        i if i > removed => Some(i - 1),
        i => Some(i),
    }
}

pub fn award_points(store: &impl KeyValueStore, amount: u32) -> Result<User, StorageError> {
    let user = storage::load_user(store).with_bonus(amount);
    storage::save_user(store, &user)?;
    Ok(user)
}

fn replace_at(store: &impl KeyValueStore, index: usize, plant: Plant) -> Result<(), PlantError> {
    let mut plants = storage::load_plants(store);
    let len = plants.len();
    let slot = plants
        .get_mut(index)
        .ok_or(PlantError::StaleIndex { index, len })?;
    *slot = plant;
    storage::save_plants(store, &plants)?;
    Ok(())
}
