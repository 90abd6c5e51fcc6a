pub mod preprocess;
pub mod state;
