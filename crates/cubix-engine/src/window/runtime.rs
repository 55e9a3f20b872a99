use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, UpdateCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{ButtonEdges, ControllerSource, InputEvent, InputState, Key, KeyState};
use crate::render::RenderCtx;

/// Controller slot the runtime samples every frame.
const CONTROLLER_SLOT: u32 = 0;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Cubix - wgpu Engine".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            resizable: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, builds the app with `factory` once the GPU is ready,
    /// and drives frames until the app exits or the window closes.
    ///
    /// Startup failures (window, GPU, app factory) stop the loop and are
    /// returned here.
    pub fn run<A, C, F>(config: RuntimeConfig, gpu_init: GpuInit, controller: C, factory: F) -> Result<()>
    where
        A: App + 'static,
        C: ControllerSource + 'static,
        F: FnOnce(&RenderCtx<'_>) -> Result<A> + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, controller, factory);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A, C, F> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    factory: Option<F>,

    app: Option<A>,
    window: Option<WindowEntry>,

    controller: C,
    pad: ButtonEdges,
    input_state: InputState,
    frame_index: u64,

    startup_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A, C, F> AppState<A, C, F>
where
    A: App + 'static,
    C: ControllerSource + 'static,
    F: FnOnce(&RenderCtx<'_>) -> Result<A> + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, controller: C, factory: F) -> Self {
        Self {
            config,
            gpu_init,
            factory: Some(factory),
            app: None,
            window: None,
            controller,
            pad: ButtonEdges::default(),
            input_state: InputState::default(),
            frame_index: 0,
            startup_error: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn startup(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("graphics initialization failed")?;

        let factory = self
            .factory
            .take()
            .context("app factory already consumed")?;
        let app = entry.with_gpu(|gpu| factory(&gpu.render_ctx()))?;

        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);
        self.app = Some(app);

        log::info!("runtime started");
        Ok(())
    }

    /// One lockstep frame: controller → update → render.
    fn frame(&mut self) -> AppControl {
        let (Some(app), Some(entry)) = (self.app.as_mut(), self.window.as_mut()) else {
            return AppControl::Continue;
        };

        let sample = self.controller.poll(CONTROLLER_SLOT, &self.input_state);
        self.pad.update(sample);

        let update = UpdateCtx {
            pad: &self.pad,
            input: &self.input_state,
            frame_index: self.frame_index,
        };
        let mut control = app.update(&update);

        if control == AppControl::Continue {
            control = entry.with_mut(|fields| {
                let mut frame = FrameCtx {
                    window: fields.window,
                    gpu: fields.gpu,
                };
                app.render(&mut frame)
            });
        }

        self.frame_index = self.frame_index.wrapping_add(1);
        control
    }
}

impl<A, C, F> ApplicationHandler for AppState<A, C, F>
where
    A: App + 'static,
    C: ControllerSource + 'static,
    F: FnOnce(&RenderCtx<'_>) -> Result<A> + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.startup(event_loop) {
            log::error!("startup failed: {e:#}");
            self.startup_error = Some(e);
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous redraw; FIFO present paces the loop.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = &self.window {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if let Some(ev) = translate_input_event(&event) {
            self.input_state.apply_event(ev);
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => {
                if self.frame() == AppControl::Exit {
                    log::info!("exit requested");
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // App resources go before the device and window they were created from.
        self.app = None;
        self.window = None;
        log::debug!("runtime shut down after {} frames", self.frame_index);
    }
}

fn translate_input_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };
            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => map_key_code(code),
        // NativeKeyCode has no stable numeric form in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Space => Key::Space,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyE => Key::E,

        other => Key::Unknown(other as u32),
    }
}
