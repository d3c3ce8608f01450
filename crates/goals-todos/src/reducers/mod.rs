pub mod app_reducer;
pub mod goals_reducer;
pub mod loading_reducer;
pub mod todos_reducer;
