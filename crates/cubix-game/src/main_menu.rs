use std::sync::Arc;

use anyhow::{Context, Result};

use cubix_engine::audio::AudioEngine;
use cubix_engine::coords::{ColorRgba, Viewport};
use cubix_engine::core::{App, AppControl, FrameCtx, UpdateCtx};
use cubix_engine::input::{ButtonEdges, GamepadButtons};
use cubix_engine::render::{RenderCtx, SpritePipeline, SpriteSink, Texture, TextureExtent};
use cubix_ui::prelude::*;

use crate::config::GameConfig;

/// Menu position whose selection quits the game.
const EXIT_INDEX: usize = 2;

/// What the controller asked the menu to do this frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuAction {
    MoveDown,
    MoveUp,
    Select,
}

impl MenuAction {
    /// At most one action per frame, checked in order: D-pad down, D-pad up, A.
    pub fn from_pad(pad: &ButtonEdges) -> Option<Self> {
        if pad.pressed(GamepadButtons::DPAD_DOWN) {
            Some(Self::MoveDown)
        } else if pad.pressed(GamepadButtons::DPAD_UP) {
            Some(Self::MoveUp)
        } else if pad.pressed(GamepadButtons::A) {
            Some(Self::Select)
        } else {
            None
        }
    }
}

/// Menu state plus the background color it drives.
#[derive(Debug)]
pub struct MenuScene {
    config: GameConfig,
    menu: Menu,
    clear: ColorRgba,
}

impl MenuScene {
    pub fn new(config: GameConfig) -> Result<Self> {
        let menu = Menu::new(config.menu_options.iter().cloned())
            .context("main menu needs at least one option")?;
        let clear = config.default_clear;
        Ok(Self { config, menu, clear })
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn clear_color(&self) -> ColorRgba {
        self.clear
    }

    /// Applies this frame's controller presses, then picks the background
    /// for the highlighted entry.
    pub fn update(&mut self, pad: &ButtonEdges) -> AppControl {
        let mut control = AppControl::Continue;

        match MenuAction::from_pad(pad) {
            Some(MenuAction::MoveDown) => self.menu.move_down(),
            Some(MenuAction::MoveUp) => self.menu.move_up(),
            Some(MenuAction::Select) => {
                if self.menu.select().index == EXIT_INDEX {
                    control = AppControl::Exit;
                }
            }
            None => {}
        }

        self.clear = self.config.clear_color_for(self.menu.selected_index());
        control
    }

    /// One button per entry, centered horizontally; the highlighted one wider.
    pub fn draw_buttons<T, S>(&self, button: &Button<T>, sink: &mut S, viewport: Viewport)
    where
        T: TextureExtent,
        S: SpriteSink<T> + ?Sized,
    {
        let config = &self.config;
        for index in 0..self.menu.options().len() {
            let width = if index == self.menu.selected_index() {
                config.selected_button_width
            } else {
                config.button_width
            };
            let x = ((viewport.width - width) * 0.5).max(0.0);
            let y = config.first_button_y + index as f32 * config.button_spacing;
            button.draw(sink, x, y, width, viewport);
        }
    }
}

/// The game: main menu over a colored background.
pub struct MainMenuApp {
    scene: MenuScene,
    sprites: SpritePipeline,
    button: Button,
    // Held for its lifetime; dropped on shutdown.
    _audio: Option<AudioEngine>,
}

impl MainMenuApp {
    /// Builds the pipeline, loads the button texture, then starts audio.
    pub fn new(ctx: &RenderCtx<'_>, config: GameConfig) -> Result<Self> {
        let sprites = SpritePipeline::new(ctx).context("failed to build sprite pipeline")?;

        let path = config.button_path();
        let texture = Texture::from_file(ctx, &path)
            .with_context(|| format!("failed to load button texture {}", path.display()))?;
        let button = Button::new(Arc::new(texture));

        let scene = MenuScene::new(config)?;
        let audio = AudioEngine::try_start();

        log::info!("Cubix engine initialized");
        log::info!("Use D-pad Up/Down (arrows or W/S) to change the menu entry. Press A (Enter) to select.");

        Ok(Self {
            scene,
            sprites,
            button,
            _audio: audio,
        })
    }
}

impl App for MainMenuApp {
    fn update(&mut self, ctx: &UpdateCtx<'_>) -> AppControl {
        self.scene.update(ctx.pad)
    }

    fn render(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl {
        let (scene, sprites, button) = (&self.scene, &self.sprites, &self.button);

        frame.render(scene.clear_color(), |ctx, target, viewport| {
            let mut pass = sprites.begin(ctx, target);
            scene.draw_buttons(button, &mut pass, viewport);
        })
    }
}
