// Reusable library API — the solver core plus the loaders and rendering
// the binaries drive it with
pub mod assignment;
pub mod errors;
pub mod grid;
pub mod log;
pub mod render;
pub mod solver;
pub mod word_list;
