use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use jot::api::{CmdMessage, MessageLevel, NotesApi};
use jot::backend::http::HttpBackend;
use jot::config::JotConfig;
use jot::editor::edit_content;
use jot::error::{JotError, Result};
use jot::model::{format_filename, Note};
use jot::screen::{HomeScreen, NotesView, Panel, ScreenView};
use jot::session::Session;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: NotesApi<HttpBackend>,
    session: Session,
    config: JotConfig,
    config_dir: PathBuf,
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List { search }) => handle_home(&ctx, search, None, None).await,
        Some(Commands::Search { term }) => handle_home(&ctx, Some(term), None, None).await,
        Some(Commands::Replace { find, replace }) => {
            handle_home(&ctx, None, Some(find), Some(replace)).await
        }
        Some(Commands::Create {
            content,
            attach,
            no_editor,
        }) => handle_create(&ctx, content, attach, no_editor).await,
        Some(Commands::View { id }) => handle_view(&ctx, &id).await,
        Some(Commands::Edit { id }) => handle_edit(&ctx, &id).await,
        Some(Commands::Delete { id, force }) => handle_delete(&ctx, &id, force).await,
        Some(Commands::Attach { id, file }) => handle_attach(&ctx, &id, &file).await,
        Some(Commands::Login { token }) => handle_login(&mut ctx, token),
        Some(Commands::Logout) => handle_logout(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_home(&ctx, None, None, None).await,
    }
}

fn init_context() -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "jot", "jot").ok_or_else(|| {
            JotError::Api("Could not determine config directory".to_string())
        })?;
    let config_dir = proj_dirs.config_dir().to_path_buf();

    let config = JotConfig::load(&config_dir)?;
    let session = Session::from_config(&config);

    let backend = HttpBackend::new(&config.api_url, session.token().unwrap_or_default());
    let api = NotesApi::new(backend);

    Ok(AppContext {
        api,
        session,
        config,
        config_dir,
    })
}

fn require_auth(ctx: &AppContext) -> Result<()> {
    if !ctx.session.is_authenticated() {
        return Err(JotError::NotAuthenticated);
    }
    Ok(())
}

/// The home-screen flow behind `jot`, `jot list`, `jot search`, and
/// `jot replace`: load the snapshot, apply the requested panel state, run
/// the batch if asked to, render whatever the screen composes.
async fn handle_home(
    ctx: &AppContext,
    search: Option<String>,
    find: Option<String>,
    replace: Option<String>,
) -> Result<()> {
    let mut screen = HomeScreen::new(&ctx.session);
    let cancel = CancellationToken::new();

    let mut messages = screen.load(ctx.api.backend(), &cancel).await;

    if let Some(term) = search {
        screen.open_panel(Panel::Search);
        screen.set_search_term(term);
    }

    if let (Some(find), Some(replace)) = (find, replace) {
        screen.open_panel(Panel::FindReplace);
        screen.set_find_term(find);
        screen.set_replace_term(replace);
        messages.extend(screen.find_replace(ctx.api.backend(), &cancel).await);
    }

    render_view(&screen.view());
    print_messages(&messages);
    Ok(())
}

async fn handle_create(
    ctx: &AppContext,
    content: Option<String>,
    attach: Option<PathBuf>,
    no_editor: bool,
) -> Result<()> {
    require_auth(ctx)?;

    let final_content = if no_editor || content.is_some() {
        content.unwrap_or_default()
    } else {
        edit_content("")?
    };

    let attachment = match attach {
        Some(path) => Some(
            ctx.api
                .upload_attachment(&path, ctx.config.max_attachment_size)
                .await?,
        ),
        None => None,
    };

    let result = ctx.api.create_note(final_content, attachment).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    require_auth(ctx)?;
    let result = ctx.api.get_note(id).await?;
    let note = &result.affected_notes[0];

    println!("{} {}", note.note_id.yellow(), note.title().bold());
    println!("--------------------------------");
    println!("{}", note.content);
    if let Some(key) = &note.attachment {
        match &result.attachment_url {
            Some(url) => println!("\nAttachment: {} ({})", format_filename(key), url),
            None => println!("\nAttachment: {}", format_filename(key)),
        }
    }
    print_messages(&result.messages);
    Ok(())
}

async fn handle_edit(ctx: &AppContext, id: &str) -> Result<()> {
    require_auth(ctx)?;
    let result = ctx.api.get_note(id).await?;
    let note = &result.affected_notes[0];

    let edited = edit_content(&note.content)?;
    if edited == note.content {
        println!("No changes.");
        return Ok(());
    }

    let result = ctx.api.update_note(&note.note_id, edited, None).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_delete(ctx: &AppContext, id: &str, force: bool) -> Result<()> {
    require_auth(ctx)?;

    if !force {
        let result = ctx.api.get_note(id).await?;
        let note = &result.affected_notes[0];
        println!("This will permanently delete:");
        println!("  {} {}", note.note_id, note.title());
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(JotError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(JotError::Io)?;

        if input.trim() != "Y" {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_note(id).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_attach(ctx: &AppContext, id: &str, file: &std::path::Path) -> Result<()> {
    require_auth(ctx)?;

    let result = ctx.api.get_note(id).await?;
    let note = result.affected_notes[0].clone();

    let key = ctx
        .api
        .upload_attachment(file, ctx.config.max_attachment_size)
        .await?;
    let result = ctx
        .api
        .update_note(&note.note_id, note.content, Some(key.clone()))
        .await?;

    println!("Attached {} to {}", format_filename(&key), note.note_id);
    print_messages(&result.messages);
    Ok(())
}

fn handle_login(ctx: &mut AppContext, token: String) -> Result<()> {
    ctx.config.token = Some(token);
    ctx.config.save(&ctx.config_dir)?;
    println!("{}", "Token stored. You are signed in.".green());
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    ctx.config.token = None;
    ctx.config.save(&ctx.config_dir)?;
    println!("Token cleared.");
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("api-url = {}", ctx.config.api_url);
            println!("max-attachment-size = {}", ctx.config.max_attachment_size);
        }
        (Some("api-url"), None) => println!("api-url = {}", ctx.config.api_url),
        (Some("api-url"), Some(v)) => {
            ctx.config.api_url = v;
            ctx.config.save(&ctx.config_dir)?;
        }
        (Some("max-attachment-size"), None) => {
            println!("max-attachment-size = {}", ctx.config.max_attachment_size)
        }
        (Some("max-attachment-size"), Some(v)) => {
            ctx.config.max_attachment_size = v
                .parse()
                .map_err(|_| JotError::Api(format!("Invalid size: {}", v)))?;
            ctx.config.save(&ctx.config_dir)?;
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

// --- Rendering ---

fn render_view(view: &ScreenView) {
    match view {
        ScreenView::Lander => {
            println!("{}", "Scratch".bold());
            println!("{}", "A simple note taking app".dimmed());
            println!();
            println!("Sign in with `jot login --token <TOKEN>` to see your notes.");
        }
        ScreenView::Loading => println!("{}", "Loading…".dimmed()),
        ScreenView::Notes(NotesView::List(notes)) => print_notes(notes),
        ScreenView::Notes(NotesView::NoSearchMatches) => {
            println!("{}", "No notes found by search!".dimmed())
        }
        ScreenView::Notes(NotesView::NoReplaceMatches) => {
            println!("{}", "No notes to replace!".dimmed())
        }
        ScreenView::Notes(NotesView::Empty) => {
            println!("{}", "You don't have any notes yet!".dimmed());
            println!("{}", "Get started with `jot create`.".dimmed());
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 8;
const ATTACHMENT_MARKER: &str = "◳";

fn print_notes(notes: &[Note]) {
    for note in notes {
        let short_id: String = note.note_id.chars().take(ID_WIDTH).collect();
        let id_str = format!("{}  ", short_id);

        let marker = if note.attachment.is_some() {
            format!("{} ", ATTACHMENT_MARKER)
        } else {
            "  ".to_string()
        };

        let time_ago = format_time_ago(note.created_at);

        let preview: String = note
            .content
            .trim()
            .chars()
            .take(80)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let fixed_width = id_str.width() + marker.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let preview_display = truncate_to_width(&preview, available);
        let padding = available.saturating_sub(preview_display.width());

        println!(
            "{}{}{}{}{}",
            id_str.yellow(),
            preview_display,
            " ".repeat(padding),
            marker,
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
