//! Line-oriented driver for the stores.
//!
//! Plays the presentation layer: validates form input, calls one action per
//! line, awaits it, then renders from the store snapshot and its error field.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::BoopApp;
use crate::country;
use crate::reward::{qr_payload, HistoryFilter, RewardState};
use crate::session::{Platform, SessionState};
use crate::validation;

use super::command::{ImageRef, ShellCommand, HELP};

/// Read commands from `input` until EOF or `quit`, writing results to `output`.
pub async fn run_shell<R, W>(app: &BoopApp, input: R, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let reply = match ShellCommand::parse(line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => execute(app, command).await,
            Err(err) => format!("error: {}", err),
        };
        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}

/// Run one command and render its outcome.
pub async fn execute(app: &BoopApp, command: ShellCommand) -> String {
    let session = app.session();
    let rewards = app.rewards();

    match command {
        ShellCommand::SignIn { phone, password } => {
            if let Err(errors) = validation::sign_in(&phone, &password) {
                return format!("error: {}", errors);
            }
            match session.sign_in(&phone, &password).await {
                Ok(user) => format!("signed in as {}", user.username),
                Err(_) => failure(session.error()),
            }
        }
        ShellCommand::SignUp {
            country: code,
            local_number,
            username,
            password,
            confirm,
        } => {
            let Some(country) = country::by_code(&code) else {
                return format!("error: unknown country '{}'", code);
            };
            if let Err(errors) = validation::sign_up(&local_number, &username, &password, &confirm)
            {
                return format!("error: {}", errors);
            }
            let phone = country::format_phone(&country, &local_number);
            match session.sign_up(&phone, &username, &password).await {
                Ok(user) => format!(
                    "account {} created for {}, enter the verification code",
                    user.username, user.phone_number
                ),
                Err(_) => failure(session.error()),
            }
        }
        ShellCommand::Verify { code } => {
            if let Err(err) = validation::verification_code(&code) {
                return format!("error: {}", err);
            }
            match session.verify_code(&code).await {
                Ok(()) => "verified".to_string(),
                Err(_) => failure(session.error()),
            }
        }
        ShellCommand::SignOut => {
            session.sign_out();
            "signed out".to_string()
        }
        ShellCommand::Whoami => describe_session(&session.state()),
        ShellCommand::Connect(platform) => match session.connect_social(platform).await {
            Ok(()) => format!("{} connected", platform),
            Err(_) => failure(session.error()),
        },
        ShellCommand::Disconnect(platform) => match session.disconnect_social(platform).await {
            Ok(()) => format!("{} disconnected", platform),
            Err(_) => failure(session.error()),
        },
        ShellCommand::Username(name) => {
            if let Err(err) = validation::username(&name) {
                return format!("error: {}", err);
            }
            match session.update_username(&name).await {
                Ok(()) => format!("username is now {}", name),
                Err(_) => failure(session.error()),
            }
        }
        ShellCommand::Password {
            current,
            new,
            confirm,
        } => {
            if let Err(errors) = validation::change_password(&current, &new, &confirm) {
                return format!("error: {}", errors);
            }
            match session.update_password(&current, &new).await {
                Ok(()) => "password updated".to_string(),
                Err(_) => failure(session.error()),
            }
        }
        ShellCommand::Photo(uri) => match session.update_profile_photo(&uri).await {
            Ok(()) => "profile photo updated".to_string(),
            Err(_) => failure(session.error()),
        },
        ShellCommand::Scan(target) => {
            let payload = if target.contains(':') {
                target
            } else {
                qr_payload(&target)
            };
            match rewards.scan_qr_code(&payload).await {
                Ok(current) => {
                    let mut reply = format!("{}: {}", current.retailer, current.discount);
                    for (i, image) in current.images.iter().enumerate() {
                        let marker = if current.selected_image.as_ref() == Some(image) {
                            "*"
                        } else {
                            " "
                        };
                        reply.push_str(&format!("\n {}{} {}", marker, i + 1, image));
                    }
                    reply
                }
                Err(_) => failure(rewards.error()),
            }
        }
        ShellCommand::Select(image) => {
            let Some(current) = rewards.current_boop() else {
                return "nothing to select: scan a code first".to_string();
            };
            let uri = match image {
                ImageRef::Index(index) => {
                    match index.checked_sub(1).and_then(|i| current.images.get(i)) {
                        Some(uri) => uri.clone(),
                        None => return format!("error: no image #{}", index),
                    }
                }
                ImageRef::Uri(uri) => uri,
            };
            rewards.select_image(&uri);
            format!("selected {}", uri)
        }
        ShellCommand::Share => match app.share_and_credit().await {
            Ok(boop) => {
                let balance = session
                    .user()
                    .map(|u| format!(", balance {}", u.points))
                    .unwrap_or_default();
                rewards.clear_current_boop();
                format!("shared {} for {} points{}", boop.retailer, boop.points, balance)
            }
            Err(_) => failure(rewards.error()),
        },
        ShellCommand::History(filter) => describe_history(&rewards.state(), filter),
        ShellCommand::Delete(id) => match rewards.delete_boop(&id).await {
            Ok(()) => format!("{} deleted", id),
            Err(_) => failure(rewards.error()),
        },
        ShellCommand::Clear => {
            rewards.clear_current_boop();
            "redemption cleared".to_string()
        }
        ShellCommand::ClearErrors => {
            session.clear_error();
            rewards.clear_error();
            "errors cleared".to_string()
        }
        ShellCommand::Retailers => rewards
            .catalog()
            .names()
            .iter()
            .map(|name| qr_payload(name))
            .collect::<Vec<_>>()
            .join("\n"),
        ShellCommand::Countries(query) => country::search(query.as_deref().unwrap_or(""))
            .iter()
            .map(|c| format!("{} {} {}", c.code, c.dial_code, c.name))
            .collect::<Vec<_>>()
            .join("\n"),
        ShellCommand::Help => HELP.to_string(),
        ShellCommand::Quit => String::new(),
    }
}

fn failure(message: Option<String>) -> String {
    format!(
        "error: {}",
        message.unwrap_or_else(|| "unknown error".to_string())
    )
}

/// One-line profile summary.
pub fn describe_session(state: &SessionState) -> String {
    let Some(user) = &state.user else {
        return "signed out".to_string();
    };
    let socials: Vec<&str> = Platform::all()
        .iter()
        .filter(|p| user.connected_socials.get(**p))
        .map(|p| p.as_str())
        .collect();
    let status = if state.is_authenticated {
        "verified"
    } else {
        "pending verification"
    };
    format!(
        "{} [{}] {} ({}) {} points, socials: {}, photo: {}",
        user.username,
        user.initial().unwrap_or('?'),
        user.phone_number,
        status,
        user.points,
        if socials.is_empty() {
            "none".to_string()
        } else {
            socials.join(",")
        },
        user.profile_photo.as_deref().unwrap_or("none"),
    )
}

/// One line per boop matching `filter`, newest first.
pub fn describe_history(state: &RewardState, filter: HistoryFilter) -> String {
    let boops = state.filtered(filter);
    if boops.is_empty() {
        return "no boops".to_string();
    }
    boops
        .iter()
        .map(|b| {
            format!(
                "{} {} {} {} {}",
                b.id, b.date, b.retailer, b.points, b.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
