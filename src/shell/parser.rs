//! Shell input parsing
//!
//! Turns one input line into a typed `Command`.

use crate::preferences::ThemePreference;
use crate::shell::commands::{Command, DEFAULT_TICKET_QUESTIONS, ThemeAction};
use crate::tickets::TicketGenerationRequest;

pub const LOGIN_USAGE: &str = "login <username> <password>";
pub const COURSE_USAGE: &str = "course <id>";
pub const LECTURES_USAGE: &str = "lectures [course]";
pub const LABS_USAGE: &str = "labs [course]";
pub const QUESTIONS_USAGE: &str = "questions [course]";
pub const SHEETS_USAGE: &str = "sheets [course]";
pub const TICKET_USAGE: &str = "ticket <course> [questions]";
pub const TICKETS_USAGE: &str = "tickets <course> <per-ticket> <count> [filename]";
pub const THEME_USAGE: &str = "theme [light|dark|system|toggle]";

// Parse raw input line into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    match cmd.as_str() {
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "logout" => Command::Logout,
        "whoami" => Command::WhoAmI,
        "courses" => Command::Courses,
        "login" => match args.as_slice() {
            [username, password] => Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            },
            _ => Command::Invalid(LOGIN_USAGE),
        },
        "course" => match args.as_slice() {
            [id] => id
                .parse()
                .map(Command::Course)
                .unwrap_or(Command::Invalid(COURSE_USAGE)),
            _ => Command::Invalid(COURSE_USAGE),
        },
        "lectures" => course_filter(&args, LECTURES_USAGE, Command::Lectures),
        "labs" => course_filter(&args, LABS_USAGE, Command::Labs),
        "questions" => course_filter(&args, QUESTIONS_USAGE, Command::Questions),
        "sheets" => course_filter(&args, SHEETS_USAGE, Command::Sheets),
        "ticket" => parse_ticket(&args),
        "tickets" => parse_tickets(&args),
        "theme" => match args.as_slice() {
            [] => Command::Theme(ThemeAction::Show),
            [arg] if arg.eq_ignore_ascii_case("toggle") => Command::Theme(ThemeAction::Toggle),
            [arg] => arg
                .parse::<ThemePreference>()
                .map(|theme| Command::Theme(ThemeAction::Set(theme)))
                .unwrap_or(Command::Invalid(THEME_USAGE)),
            _ => Command::Invalid(THEME_USAGE),
        },
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn course_filter(
    args: &[&str],
    usage: &'static str,
    build: fn(Option<i64>) -> Command,
) -> Command {
    match args {
        [] => build(None),
        [id] => id
            .parse()
            .map(|id| build(Some(id)))
            .unwrap_or(Command::Invalid(usage)),
        _ => Command::Invalid(usage),
    }
}

fn parse_ticket(args: &[&str]) -> Command {
    let parsed: Option<(i64, u32)> = match args {
        [course] => course.parse().ok().map(|c| (c, DEFAULT_TICKET_QUESTIONS)),
        [course, questions] => course.parse().ok().zip(questions.parse().ok()),
        _ => None,
    };
    match parsed {
        Some((course_id, questions)) if questions > 0 => Command::Ticket {
            course_id,
            questions,
        },
        _ => Command::Invalid(TICKET_USAGE),
    }
}

fn parse_tickets(args: &[&str]) -> Command {
    let (numbers, filename) = match args {
        [course, per, count] => ((course, per, count), None),
        [course, per, count, name] => ((course, per, count), Some(name.to_string())),
        _ => return Command::Invalid(TICKETS_USAGE),
    };
    let (course, per, count) = numbers;
    match (course.parse(), per.parse::<u32>(), count.parse::<u32>()) {
        (Ok(course_id), Ok(questions_per_ticket), Ok(ticket_count))
            if questions_per_ticket > 0 && ticket_count > 0 =>
        {
            Command::Tickets {
                course_id,
                request: TicketGenerationRequest {
                    questions_per_ticket,
                    ticket_count,
                },
                filename,
            }
        }
        _ => Command::Invalid(TICKETS_USAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("Q"), Command::Quit);
        assert_eq!(parse_command("HELP"), Command::Help);
        assert_eq!(parse_command("logout"), Command::Logout);
        assert_eq!(parse_command("whoami"), Command::WhoAmI);
        assert_eq!(parse_command("  courses  "), Command::Courses);
    }

    #[test]
    fn test_parse_login() {
        assert_eq!(
            parse_command("login alice s3cret"),
            Command::Login {
                username: "alice".into(),
                password: "s3cret".into()
            }
        );
        assert_eq!(parse_command("login alice"), Command::Invalid(LOGIN_USAGE));
    }

    #[test]
    fn test_parse_course_filters() {
        assert_eq!(parse_command("course 3"), Command::Course(3));
        assert_eq!(parse_command("course x"), Command::Invalid(COURSE_USAGE));
        assert_eq!(parse_command("lectures"), Command::Lectures(None));
        assert_eq!(parse_command("labs 2"), Command::Labs(Some(2)));
        assert_eq!(parse_command("questions 7"), Command::Questions(Some(7)));
        assert_eq!(parse_command("sheets one"), Command::Invalid(SHEETS_USAGE));
    }

    #[test]
    fn test_parse_ticket() {
        assert_eq!(
            parse_command("ticket 4"),
            Command::Ticket {
                course_id: 4,
                questions: DEFAULT_TICKET_QUESTIONS
            }
        );
        assert_eq!(
            parse_command("ticket 4 3"),
            Command::Ticket {
                course_id: 4,
                questions: 3
            }
        );
        assert_eq!(parse_command("ticket 4 0"), Command::Invalid(TICKET_USAGE));
    }

    #[test]
    fn test_parse_tickets() {
        assert_eq!(
            parse_command("tickets 1 5 20 exam.txt"),
            Command::Tickets {
                course_id: 1,
                request: TicketGenerationRequest {
                    questions_per_ticket: 5,
                    ticket_count: 20
                },
                filename: Some("exam.txt".into()),
            }
        );
        assert_eq!(parse_command("tickets 1 5"), Command::Invalid(TICKETS_USAGE));
        assert_eq!(parse_command("tickets 1 0 2"), Command::Invalid(TICKETS_USAGE));
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse_command("theme"), Command::Theme(ThemeAction::Show));
        assert_eq!(
            parse_command("theme Toggle"),
            Command::Theme(ThemeAction::Toggle)
        );
        assert_eq!(
            parse_command("theme dark"),
            Command::Theme(ThemeAction::Set(ThemePreference::Dark))
        );
        assert_eq!(parse_command("theme sepia"), Command::Invalid(THEME_USAGE));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("frobnicate now"),
            Command::Unknown("frobnicate now".into())
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let cmd = parse_command("login alice hunter2");
        assert!(!format!("{:?}", cmd).contains("hunter2"));
        assert_eq!(cmd.name(), "login");
    }
}
