use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::error::ClientError;
use crate::protocol::events::InboundEvent;
use crate::render::Painter;
use crate::session::context::{Button, ClickTarget, Notice, SessionContext};
use crate::session::input::{Command, HELP};
use crate::session::overlay::Point;

/// Drive one session until the user quits, stdin closes, or the server
/// hangs up. Every handled event or command is followed by a repaint.
pub async fn run<P: Painter + ?Sized>(
    mut ctx: SessionContext,
    mut inbound: UnboundedReceiver<InboundEvent>,
    mut lines: UnboundedReceiver<String>,
    painter: &mut P,
) -> Result<(), ClientError> {
    painter.paint(&ctx.frame())?;

    loop {
        tokio::select! {
            event = inbound.recv() => {
                let event = match event {
                    None | Some(InboundEvent::Disconnect) => {
                        info!(game_id = %ctx.game_id(), "[SESSION] server connection closed");
                        painter.info("Disconnected from server.")?;
                        return Ok(());
                    }
                    Some(event) => event,
                };
                debug!(event = event.name(), "[SESSION] inbound");
                let notice = ctx.handle_inbound(event);
                show(painter, notice)?;
                painter.paint(&ctx.frame())?;
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    info!("[SESSION] input closed");
                    return Ok(());
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(Command::Quit) => {
                        info!("[SESSION] quit requested");
                        return Ok(());
                    }
                    Ok(command) => {
                        apply(&mut ctx, command, painter)?;
                        painter.paint(&ctx.frame())?;
                    }
                    Err(err) => painter.info(&err.to_string())?,
                }
            }
        }
    }
}

fn apply<P: Painter + ?Sized>(
    ctx: &mut SessionContext,
    command: Command,
    painter: &mut P,
) -> Result<(), ClientError> {
    let notice = match command {
        Command::Card(prefix) => match ctx.find_card(&prefix) {
            Ok(card_id) => ctx.click(ClickTarget::Card {
                card_id,
                at: Point::default(),
            }),
            Err(err) => return painter.info(&err.to_string()),
        },
        Command::Pick(n) => ctx.click(ClickTarget::MenuItem(n - 1)),
        Command::Pile(pile) => ctx.click(ClickTarget::Pile(pile)),
        Command::Draw => ctx.click(ClickTarget::Button(Button::Draw)),
        Command::Shuffle => ctx.click(ClickTarget::Button(Button::Shuffle)),
        Command::EndTurn => ctx.click(ClickTarget::Button(Button::EndTurn)),
        Command::Yes => {
            ctx.answer_confirm(true);
            None
        }
        Command::No => {
            ctx.answer_confirm(false);
            None
        }
        Command::Close => ctx.click(ClickTarget::ModalClose),
        Command::Click => ctx.click(ClickTarget::Background),
        Command::Help => return painter.info(HELP),
        Command::Quit => None,
    };
    show(painter, notice)
}

fn show<P: Painter + ?Sized>(painter: &mut P, notice: Option<Notice>) -> Result<(), ClientError> {
    match notice {
        Some(Notice::Alert(message)) => painter.alert(&message),
        Some(Notice::Confirm(question)) => painter.confirm_prompt(&question),
        None => Ok(()),
    }
}
