//! Screen and dialog components
//!
//! A component owns its cursor and filter state and answers key events
//! with actions; cross-component effects go through `App::update`.

pub mod builds;
pub mod compare;
pub mod configurator;
pub mod detail;
pub mod help_dialog;
pub mod layout;
pub mod parts;
pub mod profile;
pub mod purpose_filter_dialog;
pub mod quit_dialog;
pub mod splash;
pub mod table;

pub use builds::{draw_builds_screen, BuildsComponent};
pub use compare::{draw_compare_screen, CompareComponent};
pub use configurator::{draw_configurator_screen, ConfiguratorComponent};
pub use detail::DetailComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup, split_list_detail, MainLayout};
pub use parts::{draw_parts_screen, PartsComponent};
pub use profile::{draw_profile_screen, ProfileComponent};
pub use purpose_filter_dialog::PurposeFilterDialog;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
pub use table::TableComponent;
