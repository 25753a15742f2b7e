//! UI module - HUD and screen fades.

mod fade;
pub mod hud;
mod plugin;

pub use fade::{fade_alpha, ScreenFade};
pub use hud::coin_label;
pub use plugin::UiPlugin;
