mod atomic_write;
mod despawn;
mod exclusive_load;
mod exclusive_new_game;
mod exclusive_save;
mod save_error;
mod save_plugin;
pub mod save_types;
pub mod serialization;
mod spawn_entities;


pub use save_error::SaveError;
pub use save_plugin::{LoadGameEvent, NewGameEvent, SaveDirectory, SaveGameEvent, SavePlugin};
