use super::command::{Command, HELP};
use crate::export::Theme;
use crate::render::{View, Views};
use crate::session::{Session, Toggle};
use std::io::{self, BufRead, Write};

/// Print the requested views, separated by a blank line when there are several
pub fn write_views<W: Write>(out: &mut W, views: &Views, which: &[View]) -> io::Result<()> {
    for (i, view) in which.iter().enumerate() {
        if which.len() > 1 {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "## {}", view.label())?;
        }
        let text = views.get(*view);
        if !text.is_empty() {
            writeln!(out, "{}", text)?;
        }
    }
    Ok(())
}

/// Read commands line by line until EOF or `quit`.
///
/// Command failures are reported on `err` and the loop carries on; only I/O
/// errors on the streams themselves end it.
pub fn run<R, W, E>(
    session: &mut Session,
    input: R,
    out: &mut W,
    err: &mut E,
    prompt: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "ziptree> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        execute(session, command, out, err)?;
    }
    Ok(())
}

fn execute<W: Write, E: Write>(
    session: &mut Session,
    command: Command,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    match command {
        Command::Load(path) => match session.load(&path) {
            Ok(tree) => writeln!(
                out,
                "loaded {} ({} files)",
                tree.name,
                tree.count_files()
            ),
            Err(e) => writeln!(err, "Error: {}", e),
        },
        Command::Toggle(path) => {
            let result = session.toggle(&path);
            report_toggle(out, err, &path, result)
        }
        Command::ToggleRow(row) => {
            let result = session.toggle_row(row);
            report_toggle(out, err, &format!("#{}", row), result)
        }
        Command::Collapse(path) => {
            let result = session.collapse(&path);
            report_toggle(out, err, &path, result)
        }
        Command::Expand(path) => {
            let result = session.expand(&path);
            report_toggle(out, err, &path, result)
        }
        Command::ExpandAll => match session.expand_all() {
            Ok(views) => write_views(out, &views, &View::ALL),
            Err(e) => writeln!(err, "Error: {}", e),
        },
        Command::CollapseAll => match session.collapse_all() {
            Ok(views) => write_views(out, &views, &View::ALL),
            Err(e) => writeln!(err, "Error: {}", e),
        },
        Command::Show(which) => match session.views() {
            Ok(views) => write_views(out, &views, &which.views()),
            Err(e) => writeln!(err, "Error: {}", e),
        },
        Command::Export(target) => match session.export(target) {
            Ok(path) => writeln!(out, "exported {}", path.display()),
            Err(e) => writeln!(err, "Error: {}", e),
        },
        Command::Theme(name) => {
            let theme = Theme::parse(&name);
            session.set_theme(theme);
            writeln!(out, "theme {}", theme.name())
        }
        Command::Status => write_status(session, out),
        Command::Help => writeln!(out, "{}", HELP),
        Command::Quit => Ok(()),
    }
}

fn report_toggle<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    requested: &str,
    result: crate::errors::Result<Toggle>,
) -> io::Result<()> {
    match result {
        Ok(Toggle::Changed {
            path,
            collapsed,
            views,
        }) => {
            let state = if collapsed { "collapsed" } else { "expanded" };
            writeln!(out, "{} {}", state, display_path(&path))?;
            write_views(out, &views, &View::ALL)
        }
        Ok(Toggle::Ignored) => writeln!(
            err,
            "Warning: '{}' is not a directory; nothing to toggle",
            requested
        ),
        Err(e) => writeln!(err, "Error: {}", e),
    }
}

fn write_status<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    match session.tree() {
        Some(tree) => writeln!(out, "tree: {} ({} files)", tree.name, tree.count_files())?,
        None => writeln!(out, "tree: none")?,
    }

    let settings = session.settings();
    writeln!(out, "theme: {}", settings.theme.name())?;
    writeln!(out, "excluding: {}", settings.exclusions.names().join(", "))?;

    let collapse = session.collapse_state();
    if collapse.is_empty() {
        writeln!(out, "collapsed: none")
    } else {
        let paths: Vec<&str> = collapse.iter().map(display_path).collect();
        writeln!(out, "collapsed ({}): {}", collapse.len(), paths.join(", "))
    }
}

fn display_path(path: &str) -> &str {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "(root)"
    } else {
        trimmed
    }
}
