use std::path::PathBuf;

use cubix_engine::coords::ColorRgba;

/// Assets shipped next to this crate.
const DEFAULT_ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Environment variable overriding [`GameConfig::asset_dir`].
pub const ASSETS_ENV: &str = "CUBIX_ASSETS";

/// Game-level settings.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Directory holding the textures.
    pub asset_dir: PathBuf,
    /// Button texture file name inside `asset_dir`.
    pub button_texture: String,

    /// Menu entries, top to bottom.
    pub menu_options: Vec<String>,
    /// Background per menu entry, same order as `menu_options`.
    pub option_colors: Vec<ColorRgba>,
    /// Background before the first update and for entries without a color.
    pub default_clear: ColorRgba,

    /// Button width, and the wider width of the highlighted one.
    pub button_width: f32,
    pub selected_button_width: f32,
    /// Top of the first button and vertical distance between buttons.
    pub first_button_y: f32,
    pub button_spacing: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            button_texture: "button.png".to_string(),
            menu_options: vec!["Start Game".into(), "Settings".into(), "Exit".into()],
            option_colors: vec![
                ColorRgba::rgb(0.2, 0.6, 0.2),
                ColorRgba::rgb(0.6, 0.6, 0.2),
                ColorRgba::rgb(0.6, 0.2, 0.2),
            ],
            default_clear: ColorRgba::cornflower_blue(),
            button_width: 240.0,
            selected_button_width: 320.0,
            first_button_y: 280.0,
            button_spacing: 56.0,
        }
    }
}

impl GameConfig {
    /// Defaults, with the asset directory taken from `CUBIX_ASSETS` when set.
    pub fn from_env() -> Self {
        Self::default().with_asset_override(std::env::var_os(ASSETS_ENV).map(PathBuf::from))
    }

    fn with_asset_override(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
            self.asset_dir = dir;
        }
        self
    }

    pub fn button_path(&self) -> PathBuf {
        self.asset_dir.join(&self.button_texture)
    }

    /// Background color while menu entry `index` is highlighted.
    pub fn clear_color_for(&self, index: usize) -> ColorRgba {
        self.option_colors
            .get(index)
            .copied()
            .unwrap_or(self.default_clear)
    }
}
