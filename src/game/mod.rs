pub mod types;
pub mod state;
pub mod game_loop;
pub mod template;

pub mod grid;
pub mod systems;
