//! Player application implementing winit ApplicationHandler
//!
//! Paces ticks to the configured rate, feeds window input to the simulation
//! and presents each frame.

use crate::painter::Presenter;
use crate::render::RenderContext;
use lucioles_audio::AudioEngine;
use lucioles_core::{LuciolesConfig, LuciolesError, Result};
use lucioles_runtime::{DrawList, GameClock, InputState, MouseButton};
use lucioles_swarm::{LoopControl, Simulation};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

/// Pixels per wheel notch for touchpads reporting pixel deltas
const PIXELS_PER_WHEEL_STEP: f64 = 100.0;

pub struct PlayerApp {
    config: LuciolesConfig,

    // Simulation
    sim: Simulation,
    audio: AudioEngine,
    clock: GameClock,
    input: InputState,
    draw_list: DrawList,

    // Rendering
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    presenter: Option<Presenter>,

    /// Startup failure, reported once the event loop returns
    error: Option<LuciolesError>,
}

impl PlayerApp {
    pub fn new(config: LuciolesConfig, sim: Simulation, audio: AudioEngine) -> Self {
        let clock = GameClock::with_tick_rate(config.simulation.tick_rate);
        Self {
            config,
            sim,
            audio,
            clock,
            input: InputState::new(),
            draw_list: DrawList::new(),
            window: None,
            render_context: None,
            presenter: None,
            error: None,
        }
    }

    /// The error that stopped the player before its first frame, if any
    pub fn take_error(&mut self) -> Option<LuciolesError> {
        self.error.take()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| LuciolesError::RenderError(format!("failed to create window: {e}")))?,
        );

        let render_context = pollster::block_on(RenderContext::new(window.clone()))?;
        let presenter = Presenter::new(
            &window,
            &render_context,
            self.config.message.font.as_deref(),
            self.config.message.font_size,
        )?;

        self.window = Some(window);
        self.render_context = Some(render_context);
        self.presenter = Some(presenter);
        Ok(())
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();
        let frame = self.input.begin_tick();

        let control = self.sim.update(&frame, dt, &mut self.audio);

        self.draw_list.clear();
        self.sim.draw(&mut self.draw_list, self.clock.fps());

        if let (Some(window), Some(context), Some(presenter)) =
            (&self.window, &self.render_context, &mut self.presenter)
        {
            if let Err(e) = presenter.present(window, context, &self.draw_list) {
                tracing::error!("{e}");
            }
        }

        if control == LoopControl::Exit {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.initialize(event_loop) {
                tracing::error!("startup failed: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if let Some(presenter) = &mut self.presenter {
            presenter.on_window_event(&window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                // Handled by the next tick, like any other input
                self.input.request_quit();
                window.request_redraw();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(context) = &mut self.render_context {
                    context.resize(new_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.input.process_key_down(key_code),
                        ElementState::Released => self.input.process_key_up(key_code),
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = MouseButton::from_winit(button) else {
                    return;
                };
                match state {
                    ElementState::Pressed => self.input.process_mouse_button_down(button),
                    ElementState::Released => self.input.process_mouse_button_up(button),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(window.scale_factor());
                self.input.process_mouse_move(logical.x, logical.y);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_WHEEL_STEP) as f32,
                };
                self.input.process_wheel(steps);
            }

            WindowEvent::RedrawRequested => {
                self.tick(event_loop);
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.audio.stop_music();
        tracing::info!(ticks = self.sim.tick_count(), "player exiting");
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        if self.clock.is_tick_due(Instant::now()) {
            window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
        }
    }
}
