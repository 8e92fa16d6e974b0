//! Shell commands
//!
//! Typed commands parsed from shell input, and the result of running one.

use crate::preferences::ThemePreference;
use crate::tickets::TicketGenerationRequest;

/// Questions per random ticket when none is given
pub const DEFAULT_TICKET_QUESTIONS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(ThemePreference),
    Toggle,
}

/// A command entered at the shell prompt.
#[derive(Clone, PartialEq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    WhoAmI,
    Courses,
    Course(i64),
    Lectures(Option<i64>),
    Labs(Option<i64>),
    Questions(Option<i64>),
    Sheets(Option<i64>),
    Ticket {
        course_id: i64,
        questions: u32,
    },
    Tickets {
        course_id: i64,
        request: TicketGenerationRequest,
        filename: Option<String>,
    },
    Theme(ThemeAction),
    Help,
    Quit,
    /// A known command with bad arguments; holds its usage line
    Invalid(&'static str),
    Unknown(String),
}

impl Command {
    /// Command word, safe to log (never includes arguments)
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::WhoAmI => "whoami",
            Command::Courses => "courses",
            Command::Course(_) => "course",
            Command::Lectures(_) => "lectures",
            Command::Labs(_) => "labs",
            Command::Questions(_) => "questions",
            Command::Sheets(_) => "sheets",
            Command::Ticket { .. } => "ticket",
            Command::Tickets { .. } => "tickets",
            Command::Theme(_) => "theme",
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Invalid(_) => "invalid",
            Command::Unknown(_) => "unknown",
        }
    }
}

// Hand-written so passwords never reach logs or test output.
impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Command::Course(id) => f.debug_tuple("Course").field(id).finish(),
            Command::Lectures(c) => f.debug_tuple("Lectures").field(c).finish(),
            Command::Labs(c) => f.debug_tuple("Labs").field(c).finish(),
            Command::Questions(c) => f.debug_tuple("Questions").field(c).finish(),
            Command::Sheets(c) => f.debug_tuple("Sheets").field(c).finish(),
            Command::Ticket {
                course_id,
                questions,
            } => f
                .debug_struct("Ticket")
                .field("course_id", course_id)
                .field("questions", questions)
                .finish(),
            Command::Tickets {
                course_id,
                request,
                filename,
            } => f
                .debug_struct("Tickets")
                .field("course_id", course_id)
                .field("request", request)
                .field("filename", filename)
                .finish(),
            Command::Theme(action) => f.debug_tuple("Theme").field(action).finish(),
            Command::Invalid(usage) => f.debug_tuple("Invalid").field(usage).finish(),
            Command::Unknown(raw) => f.debug_tuple("Unknown").field(raw).finish(),
            other => f.write_str(match other {
                Command::Logout => "Logout",
                Command::WhoAmI => "WhoAmI",
                Command::Courses => "Courses",
                Command::Help => "Help",
                _ => "Quit",
            }),
        }
    }
}

/// Represents the outcome status of executing a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Quit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            status: CommandStatus::Failure(reason.clone()),
            message: Some(format!("error: {}", reason)),
        }
    }

    pub fn quit() -> Self {
        Self {
            status: CommandStatus::Quit,
            message: Some("Goodbye".into()),
        }
    }
}
