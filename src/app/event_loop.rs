use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{self, MissedTickBehavior};

use crate::command::{ActionId, CommandOutcome};
use crate::error::AppResult;
use crate::event::DomainEvent;

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::TerminalSession;

struct LoopRuntime {
    session: TerminalSession,
    redraw_tick: time::Interval,
    needs_redraw: bool,
    loop_event_tx: UnboundedSender<DomainEvent>,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;
        if let Some(ticket) = self.start() {
            runtime
                .loop_event_runtime
                .schedule_commit(ticket, self.transition_delay());
        }

        let result = self.drive(&mut runtime).await;

        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        result
    }

    async fn drive(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        loop {
            if self.sync_effects() {
                runtime.needs_redraw = true;
            }
            if runtime.needs_redraw {
                self.render_frame(&mut runtime.session)?;
                runtime.needs_redraw = false;
            }

            let waited = wait_next_event(&mut runtime.loop_event_rx, &mut runtime.redraw_tick).await;
            if matches!(
                self.handle_waited_event(waited, runtime),
                LoopControl::Break
            ) {
                return Ok(());
            }
        }
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;
        let redraw_interval = Duration::from_millis(self.config.ui.redraw_interval_ms);
        let mut redraw_tick = time::interval(redraw_interval);
        redraw_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let (loop_event_tx, loop_event_rx, loop_event_runtime) = EventBusRuntime::spawn();
        tracing::debug!(
            delay_ms = self.config.transition.delay_ms,
            "event loop started"
        );

        Ok(LoopRuntime {
            session,
            redraw_tick,
            needs_redraw: true,
            loop_event_tx,
            loop_event_rx,
            loop_event_runtime,
        })
    }

    fn handle_waited_event(&mut self, waited: WaitEvent, runtime: &mut LoopRuntime) -> LoopControl {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let outcome = self.handle_input_event(event);
                if outcome.quit_requested {
                    return LoopControl::Break;
                }
                if outcome.redraw {
                    runtime.needs_redraw = true;
                }
                if let Some(command) = outcome.command {
                    let _ = runtime.loop_event_tx.send(DomainEvent::Command(command));
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                tracing::warn!(%message, "terminal input error");
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                runtime.needs_redraw = true;
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                let dispatch = self.apply_command(command);
                if let Some(ticket) = dispatch.started {
                    runtime
                        .loop_event_runtime
                        .schedule_commit(ticket, self.transition_delay());
                }
                match dispatch.outcome {
                    CommandOutcome::QuitRequested => return LoopControl::Break,
                    CommandOutcome::Applied => runtime.needs_redraw = true,
                    CommandOutcome::Noop => {}
                }
            }
            WaitEvent::Event(DomainEvent::TransitionElapsed(ticket)) => {
                if self.commit_transition(ticket) {
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Event(DomainEvent::RedrawTick) => {
                let scrolled = self.nav.surface_mut().advance_scroll();
                if scrolled || self.nav.is_transitioning() {
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Closed => return LoopControl::Break,
        }
        LoopControl::Continue
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    redraw_tick: &mut time::Interval,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = redraw_tick.tick() => {
            WaitEvent::Event(DomainEvent::RedrawTick)
        }
    }
}
