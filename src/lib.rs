// Library exports for the Snakes and Ladders engine
// The game binary, the replay tool, and the simulator all build on these modules

pub mod bot;
pub mod config;
pub mod controller;
pub mod debug_logger;
pub mod eval;
pub mod game;
pub mod geometry;
pub mod layout;
pub mod replay;
pub mod resolver;
pub mod search;
pub mod session;
pub mod state;
pub mod successors;
pub mod types;
