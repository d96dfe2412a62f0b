//! Main application handler for the game

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use super::input::InputCollector;
use super::renderer::Renderer;
use super::window::window_attributes_from_config;
use crate::sim::World;

/// Game loop state
///
/// The only legal transition is `Running -> Stopped`; repeated stops are
/// no-ops and nothing restarts a stopped loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

impl RunState {
    /// Returns true while the loop may start another iteration
    pub fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }

    /// Transition to Stopped; only valid from Running
    pub fn stop(&mut self) {
        if self.is_running() {
            *self = RunState::Stopped;
        }
    }
}

/// Main game application
///
/// One loop iteration: advance the clock, poll the held-key snapshot
/// (Escape stops the loop), apply one movement step to the player, redraw.
/// A window-close event or Escape stops the loop without aborting the
/// iteration in flight, so the final frame is always drawn before the event
/// loop exits.
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    world: World,
    run_state: RunState,
    /// Run state observed at the start of the current iteration
    iteration_running: bool,
    last_update: Option<Instant>,
    input_collector: InputCollector,
}

impl App {
    /// Creates a new game application with the provided configuration and
    /// world
    pub fn new(config: AppConfig, world: World) -> Self {
        info!(profile = %config.profile, "Starting game");
        info!(?config.window, "Window configuration");

        Self {
            config,
            window: None,
            renderer: None,
            world,
            run_state: RunState::Running,
            iteration_running: true,
            last_update: None,
            input_collector: InputCollector::new(),
        }
    }

    /// Returns the current run state
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    fn stop(&mut self) {
        if self.run_state.is_running() {
            self.run_state.stop();
            info!("Game stopped");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = window_attributes_from_config(&self.config.window);

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    let size = window.inner_size();
                    info!(
                        window.width = size.width,
                        window.height = size.height,
                        "Window created successfully"
                    );

                    let window = Arc::new(window);

                    // Initialize renderer using a tokio runtime
                    // We create a runtime here because winit's event loop is synchronous
                    let renderer = tokio::runtime::Runtime::new()
                        .expect("Failed to create tokio runtime")
                        .block_on(async {
                            Renderer::new(window.clone(), self.config.window.vsync).await
                        });

                    match renderer {
                        Ok(renderer) => {
                            info!("Renderer initialized successfully");
                            self.renderer = Some(renderer);
                            self.window = Some(window);
                            self.last_update = Some(Instant::now());
                        }
                        Err(e) => {
                            error!(error = %e, "Failed to initialize renderer");
                        }
                    }
                }
                Err(e) => {
                    error!(error = %e, "Failed to create window");
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(last_update) = self.last_update {
            let now = Instant::now();
            let delta_time = (now - last_update).as_secs_f32();
            self.last_update = Some(now);

            // An iteration that began in Running completes normally even if a
            // close event arrived mid-iteration; the stop only prevents the
            // next iteration from starting.
            if self.iteration_running {
                // Poll currently-held keys: Escape stops the loop
                if self.input_collector.state().keyboard.escape.is_down() {
                    self.stop();
                }

                // Apply one movement step from the held-key snapshot
                let held = self.input_collector.state().keyboard.held();
                self.world.step_player(&held);
                self.world.tick(delta_time);
            }

            // Advance input edge states for the next frame
            self.input_collector.advance_frame();

            // Redraw runs even for the stopping iteration (last frame)
            if let Some(window) = &self.window {
                window.request_redraw();
            }

            // State at the start of the next iteration
            self.iteration_running = self.run_state.is_running();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Feed events to the input collector first
        self.input_collector.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested");
                self.stop();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.draw(&self.world) {
                        Ok(_) => {
                            // Rendering successful
                        }
                        Err(wgpu::SurfaceError::Lost) => {
                            warn!("Surface lost, reconfiguring");
                            let size = window.inner_size();
                            renderer.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("Out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => {
                            error!(error = %e, "Render error");
                        }
                    }

                    // The frame for the stopping iteration has been presented;
                    // release the event loop
                    if !self.run_state.is_running() {
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_one_way() {
        let mut state = RunState::Running;
        assert!(state.is_running());

        state.stop();
        assert!(!state.is_running());

        // Stopping again stays stopped
        state.stop();
        assert_eq!(state, RunState::Stopped);
    }
}
