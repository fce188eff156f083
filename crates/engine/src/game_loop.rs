//! Fixed-tick game loop.
//!
//! One tick, in order: sample input, step the simulation, dispatch effect
//! cues, render, flush. `run` sleeps a fixed interval between ticks and does
//! not compensate for render time.

use std::io::{self, Write};
use std::thread;

use anyhow::Result;
use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::{GameEvent, GameState};
use crate::effects::Effects;
use crate::input::InputSource;
use crate::term::{FrameBuffer, GameView, TerminalRenderer};
use crate::types::{EffectKind, GameAction, Side, SCORE_MILESTONE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Effect cues for one simulation event.
pub fn effects_for(event: GameEvent) -> ArrayVec<EffectKind, 2> {
    let mut out = ArrayVec::new();
    match event {
        GameEvent::WallBounce => out.push(EffectKind::WallHit),
        GameEvent::PaddleBounce(_) => out.push(EffectKind::PaddleHit),
        GameEvent::Scored { total, .. } => {
            out.push(EffectKind::Score);
            if total > 0 && total % SCORE_MILESTONE == 0 {
                out.push(EffectKind::ScoreSequence);
            }
        }
    }
    out
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
    }
}

pub struct GameLoop<I, E, W: Write = io::Stdout> {
    config: GameConfig,
    state: GameState,
    view: GameView,
    fb: FrameBuffer,
    renderer: TerminalRenderer<W>,
    input: I,
    effects: E,
    status: LoopState,
}

impl<I: InputSource, E: Effects, W: Write> GameLoop<I, E, W> {
    pub fn new(config: GameConfig, input: I, effects: E, renderer: TerminalRenderer<W>) -> Self {
        let playfield = config.playfield;
        Self {
            state: GameState::new(playfield, config.seed),
            view: GameView::new(playfield),
            fb: FrameBuffer::new(playfield.width, playfield.height),
            renderer,
            input,
            effects,
            status: LoopState::Running,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> LoopState {
        self.status
    }

    /// The frame produced by the most recent tick.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// Announce the start of play.
    pub fn start(&mut self) {
        info!(
            width = self.config.playfield.width,
            height = self.config.playfield.height,
            tick_ms = self.config.tick.as_millis() as u64,
            seed = self.config.seed,
            diff_render = self.config.diff_render,
            "game started"
        );
        self.effects.trigger(EffectKind::GameStart);
    }

    /// Run one tick. Returns `Stopped` once quit has been requested; later
    /// calls are no-ops.
    pub fn tick(&mut self) -> Result<LoopState> {
        if self.status == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        for action in self.input.poll_actions() {
            match action {
                GameAction::Quit => {
                    info!(
                        left_score = self.state.left_score(),
                        right_score = self.state.right_score(),
                        "quit requested"
                    );
                    self.status = LoopState::Stopped;
                    return Ok(LoopState::Stopped);
                }
                GameAction::Reset => {
                    self.state.reset();
                    info!("game reset");
                    self.effects.trigger(EffectKind::GameStart);
                }
                _ => self.state.apply_action(action),
            }
        }

        for event in self.state.step() {
            if let GameEvent::Scored { scorer, total } = event {
                debug!(
                    scorer = side_name(scorer),
                    total,
                    left_score = self.state.left_score(),
                    right_score = self.state.right_score(),
                    "point scored"
                );
            }
            for kind in effects_for(event) {
                self.effects.trigger(kind);
            }
        }

        let snap = self.state.snapshot();
        self.view.render_into(&snap, &mut self.fb);
        self.renderer.display(&self.fb)?;

        Ok(LoopState::Running)
    }

    /// `start`, then tick and sleep until quit. Terminal write failures end
    /// the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        self.start();
        while self.tick()? == LoopState::Running {
            thread::sleep(self.config.tick);
        }
        Ok(())
    }
}
