//! Shell command handlers
//!
//! One handler per command; errors are logged and turned into a failure
//! result by `handle_command`.

use log::info;

use crate::catalog::{CoursesApi, ExamQuestionsApi, GradeSheetsApi, LabsApi, LecturesApi};
use crate::error::handlers::handle_error;
use crate::error::{ClientError, ShellError};
use crate::preferences::{load_theme, set_theme, toggle_theme};
use crate::shell::Shell;
use crate::shell::commands::{Command, CommandResult, ThemeAction};
use crate::storage::KeyValueStore;
use crate::tickets::{TicketGenerationRequest, generate_random_ticket, generate_tickets_document, save_blob};

pub const HELP_TEXT: &str = "\
Commands:
  login <username> <password>   sign in
  logout                        sign out
  whoami                        show the current user
  courses                       list courses
  course <id>                   show one course
  lectures [course]             list lectures
  labs [course]                 list labs
  questions [course]            list exam questions
  sheets [course]               list grade sheets
  ticket <course> [questions]   draw a random exam ticket
  tickets <course> <per-ticket> <count> [filename]
                                generate a ticket document (admin)
  theme [light|dark|system|toggle]
  help                          show this help
  quit                          leave the shell";

type HandlerResult = Result<String, ClientError>;

/// Header line followed by one row per line
fn listing(header: String, rows: impl Iterator<Item = String>) -> String {
    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

/// Run one parsed command against the shell state.
pub async fn handle_command<S: KeyValueStore>(shell: &mut Shell<S>, command: Command) -> CommandResult {
    let outcome: HandlerResult = match command {
        Command::Quit => return CommandResult::quit(),
        Command::Help => Ok(HELP_TEXT.to_string()),
        Command::Invalid(usage) => Err(ShellError::Usage(usage.to_string()).into()),
        Command::Unknown(raw) => Ok(format!("Unknown command `{}`. Type `help`.", raw)),
        Command::Login { username, password } => handle_login(shell, &username, &password).await,
        Command::Logout => Ok(handle_logout(shell)),
        Command::WhoAmI => Ok(handle_whoami(shell)),
        Command::Courses => handle_courses(shell).await,
        Command::Course(id) => handle_course(shell, id).await,
        Command::Lectures(course) => handle_lectures(shell, course).await,
        Command::Labs(course) => handle_labs(shell, course).await,
        Command::Questions(course) => handle_questions(shell, course).await,
        Command::Sheets(course) => handle_sheets(shell, course).await,
        Command::Ticket {
            course_id,
            questions,
        } => handle_ticket(shell, course_id, questions).await,
        Command::Tickets {
            course_id,
            request,
            filename,
        } => handle_tickets(shell, course_id, request, filename.as_deref()).await,
        Command::Theme(action) => Ok(handle_theme(shell, action)),
    };

    match outcome {
        Ok(message) => CommandResult::success(message),
        Err(err) => {
            handle_error(&err);
            CommandResult::failure(err.to_string())
        }
    }
}

async fn handle_login<S: KeyValueStore>(shell: &mut Shell<S>, username: &str, password: &str) -> HandlerResult {
    shell.session.login(username, password).await?;
    match shell.session.user() {
        Some(user) => Ok(format!("Logged in as {} ({})", user.username, user.role)),
        None => Ok("Logged in".to_string()),
    }
}

fn handle_logout<S: KeyValueStore>(shell: &mut Shell<S>) -> String {
    if shell.session.token().is_none() {
        return "Not logged in".to_string();
    }
    shell.session.logout();
    "Logged out".to_string()
}

fn handle_whoami<S: KeyValueStore>(shell: &Shell<S>) -> String {
    match shell.session.user() {
        Some(user) if shell.session.is_authenticated() => {
            format!("{} <{}> role={} id={}", user.username, user.email, user.role, user.id)
        }
        _ => "Not logged in".to_string(),
    }
}

async fn handle_courses<S: KeyValueStore>(shell: &Shell<S>) -> HandlerResult {
    let transport = shell.session.transport();
    let courses = CoursesApi::new(transport.as_ref()).get_all().await?;
    let rows = courses
        .iter()
        .map(|course| format!("  [{}] {} ({})", course.id, course.name, course.semester));
    Ok(listing(format!("{} course(s)", courses.len()), rows))
}

async fn handle_course<S: KeyValueStore>(shell: &Shell<S>, id: i64) -> HandlerResult {
    let transport = shell.session.transport();
    let course = CoursesApi::new(transport.as_ref()).get_by_id(id).await?;
    Ok(format!(
        "[{}] {} ({})\n{}",
        course.id, course.name, course.semester, course.description
    ))
}

async fn handle_lectures<S: KeyValueStore>(shell: &Shell<S>, course: Option<i64>) -> HandlerResult {
    let transport = shell.session.transport();
    let lectures = LecturesApi::new(transport.as_ref()).get_all(course).await?;
    let rows = lectures
        .iter()
        .map(|lecture| format!("  [{}] week {}: {}", lecture.id, lecture.week, lecture.title));
    Ok(listing(format!("{} lecture(s)", lectures.len()), rows))
}

async fn handle_labs<S: KeyValueStore>(shell: &Shell<S>, course: Option<i64>) -> HandlerResult {
    let transport = shell.session.transport();
    let labs = LabsApi::new(transport.as_ref()).get_all(course).await?;
    let rows = labs.iter().map(|lab| {
        let row = format!("  [{}] lab {}: {} (max {})", lab.id, lab.number, lab.title, lab.max_score);
        match lab.deadline {
            Some(deadline) => format!("{} due {}", row, deadline.format("%Y-%m-%d %H:%M UTC")),
            None => row,
        }
    });
    Ok(listing(format!("{} lab(s)", labs.len()), rows))
}

async fn handle_questions<S: KeyValueStore>(shell: &Shell<S>, course: Option<i64>) -> HandlerResult {
    let transport = shell.session.transport();
    let questions = ExamQuestionsApi::new(transport.as_ref()).get_all(course).await?;
    let rows = questions
        .iter()
        .map(|q| format!("  {}. [{}] {}", q.number, q.section, q.question));
    Ok(listing(format!("{} question(s)", questions.len()), rows))
}

async fn handle_sheets<S: KeyValueStore>(shell: &Shell<S>, course: Option<i64>) -> HandlerResult {
    let transport = shell.session.transport();
    let sheets = GradeSheetsApi::new(transport.as_ref()).get_all(course).await?;
    let rows = sheets.iter().map(|sheet| match &sheet.description {
        Some(description) => format!("  [{}] {} - {}", sheet.id, sheet.sheet_url, description),
        None => format!("  [{}] {}", sheet.id, sheet.sheet_url),
    });
    Ok(listing(format!("{} grade sheet(s)", sheets.len()), rows))
}

async fn handle_ticket<S: KeyValueStore>(shell: &Shell<S>, course_id: i64, questions: u32) -> HandlerResult {
    let transport = shell.session.transport();
    let ticket = generate_random_ticket(transport.as_ref(), course_id, questions).await?;
    let rows = ticket
        .questions
        .iter()
        .map(|q| format!("  {}. [{}] {}", q.number, q.section, q.question));
    Ok(listing(format!("Ticket #{}", ticket.number), rows))
}

async fn handle_tickets<S: KeyValueStore>(
    shell: &Shell<S>,
    course_id: i64,
    request: TicketGenerationRequest,
    filename: Option<&str>,
) -> HandlerResult {
    if !shell.session.is_authenticated() {
        return Err(ShellError::NotLoggedIn.into());
    }
    if !shell.session.is_admin() {
        return Err(ShellError::AdminRequired.into());
    }

    let transport = shell.session.transport();
    let blob = generate_tickets_document(transport.as_ref(), course_id, &request).await?;
    let path = save_blob(&blob, &shell.downloads_dir, filename).await?;
    info!("Ticket document for course {} written to {}", course_id, path.display());
    Ok(format!(
        "Saved {} tickets ({} bytes) to {}",
        request.ticket_count,
        blob.len(),
        path.display()
    ))
}

fn handle_theme<S: KeyValueStore>(shell: &mut Shell<S>, action: ThemeAction) -> String {
    let prefer_dark = shell.prefer_dark;
    let store = shell.session.store_mut();
    match action {
        ThemeAction::Show => {
            let preference = load_theme(&*store);
            format!("Theme: {} ({})", preference, preference.effective(prefer_dark))
        }
        ThemeAction::Set(preference) => {
            let effective = set_theme(store, preference, prefer_dark);
            format!("Theme: {} ({})", preference, effective)
        }
        ThemeAction::Toggle => format!("Theme: {}", toggle_theme(store, prefer_dark)),
    }
}
