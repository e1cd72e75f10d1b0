use winit::event::WindowEvent;
use winit::window::WindowId;

use prism_engine::core::{App, AppControl, FrameCtx, LoopState};
use prism_engine::input::{InputState, Key};
use prism_engine::paint::Color;
use prism_engine::render::TriangleRenderer;

use crate::config::{AppConfig, ShaderFailurePolicy};
use crate::scene;

/// Closes the loop while Escape is held. The only input rule.
pub fn process_input(input: &InputState, state: &mut LoopState) {
    if state.is_running() && input.key_down(Key::Escape) {
        log::info!("escape pressed");
        state.request_close();
    }
}

pub struct TriangleApp {
    clear_color: Color,
    shader_failure: ShaderFailurePolicy,
    state: LoopState,
    renderer: Option<TriangleRenderer>,
    exit_code: i32,
}

impl TriangleApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            clear_color: config.clear_color,
            shader_failure: config.shader_failure,
            state: LoopState::default(),
            renderer: None,
            exit_code: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Process exit status once the loop has stopped.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Applies the failure policy after the one-time setup.
    fn after_setup(&mut self, failures: usize) {
        if failures == 0 {
            return;
        }

        match self.shader_failure {
            ShaderFailurePolicy::Continue => {
                log::warn!(
                    "shader program unusable ({failures} failures); rendering clear color only"
                );
            }
            ShaderFailurePolicy::Abort => {
                log::error!("shader program unusable ({failures} failures); aborting");
                self.exit_code = -1;
                self.state.request_close();
            }
        }
    }
}

impl App for TriangleApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        // The runtime tears the window down itself; just track the transition.
        if matches!(event, WindowEvent::CloseRequested) {
            self.state.request_close();
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        process_input(ctx.input, &mut self.state);

        if self.renderer.is_none() {
            let renderer = TriangleRenderer::new(
                ctx.gpu.device(),
                ctx.gpu.surface_format(),
                scene::SOURCES,
                &scene::TRIANGLE,
            );
            // An unusable program always carries at least one diagnostic.
            let failures = if renderer.is_usable() {
                0
            } else {
                renderer.diagnostics().len().max(1)
            };
            self.renderer = Some(renderer);
            self.after_setup(failures);

            if self.exit_code != 0 {
                return self.state.control();
            }
        }

        let clear = self.clear_color;
        let renderer = self.renderer.as_ref();
        let control = ctx.render(clear, |rctx, target| {
            if let Some(r) = renderer {
                r.draw(rctx, target);
            }
        });

        if ctx.time.frame_index == 0 {
            // The first tick spans window creation and the one-time setup (clamped).
            log::debug!("first frame presented (dt {:.1} ms)", ctx.time.dt * 1000.0);
        }

        self.state.apply(control);
        self.state.control()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::input::{InputEvent, KeyState};

    fn pressed(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    fn app(policy: ShaderFailurePolicy) -> TriangleApp {
        TriangleApp::new(&AppConfig {
            shader_failure: policy,
            ..Default::default()
        })
    }

    // ── escape rule ───────────────────────────────────────────────────────

    #[test]
    fn escape_closes_within_the_frame() {
        let mut input = InputState::default();
        let mut state = LoopState::Running;

        process_input(&input, &mut state);
        assert_eq!(state, LoopState::Running);

        input.apply_event(&pressed(Key::Escape));
        process_input(&input, &mut state);
        assert_eq!(state, LoopState::Closing);
        assert_eq!(state.control(), AppControl::Exit);
    }

    #[test]
    fn other_keys_keep_running() {
        let mut input = InputState::default();
        input.apply_event(&pressed(Key::Other(42)));

        let mut state = LoopState::Running;
        process_input(&input, &mut state);
        assert!(state.is_running());
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn close_request_moves_to_closing_and_exits_zero() {
        let mut app = app(ShaderFailurePolicy::Continue);
        let id = WindowId::from(1u64);
        assert_eq!(app.on_window_event(id, &WindowEvent::CloseRequested), AppControl::Continue);
        assert_eq!(app.state(), LoopState::Closing);
        assert_eq!(app.exit_code(), 0);
    }

    // ── shader failure policy ─────────────────────────────────────────────

    #[test]
    fn unusable_program_keeps_running_by_default() {
        let mut app = app(ShaderFailurePolicy::Continue);
        app.after_setup(2);
        assert!(app.state().is_running());
        assert_eq!(app.exit_code(), 0);
    }

    #[test]
    fn unusable_program_aborts_when_configured() {
        let mut app = app(ShaderFailurePolicy::Abort);
        app.after_setup(1);
        assert_eq!(app.state(), LoopState::Closing);
        assert_eq!(app.exit_code(), -1);
    }

    #[test]
    fn usable_program_changes_nothing() {
        let mut app = app(ShaderFailurePolicy::Abort);
        app.after_setup(0);
        assert!(app.state().is_running());
        assert_eq!(app.exit_code(), 0);
    }
}
