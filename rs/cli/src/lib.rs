pub mod io;
pub mod runner;
