pub mod camera;
pub mod circle_sorter;
pub mod menu;
pub mod photo_card;
pub mod private_public;
pub mod quiz;
pub mod safety_scenarios;
pub mod settings_panel;
pub mod space_bubble;
pub mod what_would_you_do;
