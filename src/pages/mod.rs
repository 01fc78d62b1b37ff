mod auth;
mod dashboard;
mod leaderboard;
mod my_plants;
mod nav;
mod user_display;

pub use auth::init_auth;
pub use dashboard::init_dashboard;
pub use leaderboard::init_leaderboard;
pub use my_plants::init_my_plants;
pub use nav::highlight_nav;
pub use user_display::sync_user_displays;
