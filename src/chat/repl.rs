//! Interactive chat loop.
//!
//! Terminal input arrives on a channel so an interrupt can end the session
//! while the loop is blocked on stdin or pausing to "type". A reply still
//! pending when the interrupt lands is dropped.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::session::{ChatSession, QUICK_REPLIES};

/// One event from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Line(String),
    Interrupt,
    Eof,
}

/// Why [`ChatLoop::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Interrupted,
    EndOfInput,
    Quit,
}

pub struct ChatLoop<W: Write> {
    session: ChatSession,
    delay: Duration,
    out: W,
    /// Lines typed while a reply was pending.
    backlog: VecDeque<String>,
    eof: bool,
}

impl<W: Write> ChatLoop<W> {
    pub fn new(delay: Duration, out: W) -> Self {
        Self {
            session: ChatSession::new(),
            delay,
            out,
            backlog: VecDeque::new(),
            eof: false,
        }
    }

    /// Print the welcome message and, on a fresh session, the quick replies.
    pub fn greet(&mut self) -> io::Result<()> {
        if let Some(welcome) = self.session.messages().first() {
            writeln!(self.out, "BrainyBot: {}", welcome.content)?;
        }
        if self.session.shows_quick_replies() {
            writeln!(self.out, "Try:")?;
            for prompt in QUICK_REPLIES {
                writeln!(self.out, "  - {prompt}")?;
            }
        }
        Ok(())
    }

    /// Answer lines until the user quits, input ends or an interrupt arrives.
    pub fn run(&mut self, inputs: &Receiver<ChatInput>) -> io::Result<ExitReason> {
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let line = match self.next_input(inputs) {
                ChatInput::Line(line) => line,
                ChatInput::Interrupt => return Ok(ExitReason::Interrupted),
                ChatInput::Eof => return Ok(ExitReason::EndOfInput),
            };
            if matches!(line.trim(), "exit" | "quit") {
                return Ok(ExitReason::Quit);
            }
            if !self.session.send(&line) {
                continue;
            }

            writeln!(self.out, "BrainyBot is typing...")?;
            if let Some(reason) = self.wait_for_reply(inputs) {
                debug!(pending = self.session.pending_turns(), "reply dropped");
                return Ok(reason);
            }
            if let Some(reply) = self.session.resolve_next() {
                writeln!(self.out, "BrainyBot: {}", reply.content)?;
            }
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn into_session(self) -> ChatSession {
        self.session
    }

    fn next_input(&mut self, inputs: &Receiver<ChatInput>) -> ChatInput {
        if let Some(line) = self.backlog.pop_front() {
            return ChatInput::Line(line);
        }
        if self.eof {
            return ChatInput::Eof;
        }
        inputs.recv().unwrap_or(ChatInput::Eof)
    }

    /// Sit out the typing delay while still listening for input. Returns an
    /// exit reason if the session must end before the reply is shown.
    fn wait_for_reply(&mut self, inputs: &Receiver<ChatInput>) -> Option<ExitReason> {
        let deadline = Instant::now() + self.delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match inputs.recv_timeout(remaining) {
                Ok(ChatInput::Line(line)) => self.backlog.push_back(line),
                Ok(ChatInput::Interrupt) => return Some(ExitReason::Interrupted),
                Ok(ChatInput::Eof) => self.eof = true,
                Err(RecvTimeoutError::Timeout) => return None,
                Err(RecvTimeoutError::Disconnected) => {
                    self.eof = true;
                    thread::sleep(remaining);
                    return None;
                }
            }
        }
    }
}
