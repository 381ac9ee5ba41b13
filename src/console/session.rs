use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::domain::order::{Order, OrderError};
use crate::store::OrderStore;
use super::command::Command;
use super::view;

// ============================================================================
// Console Session
// ============================================================================
//
// Orchestrates: input line → Command → Order / OrderStore → printed reply
//
// One session owns the in-progress order. The store handle is borrowed so
// the caller can close it once the session ends.
//
// ============================================================================

const PROMPT: &[u8] = b"> ";
const GOODBYE: &str = "Goodbye.";

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue(String),
    Exit(String),
}

pub struct Session<'a> {
    order: Order,
    store: &'a OrderStore,
}

impl<'a> Session<'a> {
    pub fn new(order: Order, store: &'a OrderStore) -> Self {
        Self { order, store }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Read commands until `exit` or end of input, writing each reply.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and then handled
    /// like any other input, so bad bytes never end the session.
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        writer.write_all(view::menu_listing(self.order.menu()).as_bytes()).await?;
        writer.write_all(b"\nType `help` for the list of commands.\n").await?;

        loop {
            writer.write_all(PROMPT).await?;
            writer.flush().await?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                tracing::debug!("Input closed, ending session");
                break;
            }

            let line = String::from_utf8_lossy(&buf);

            if line.trim().is_empty() {
                continue;
            }

            let outcome = match line.parse::<Command>() {
                Ok(command) => self.execute(command).await,
                Err(err) => Outcome::Continue(format!(
                    "{err}\nType `help` for the list of commands."
                )),
            };

            let (reply, exit) = match outcome {
                Outcome::Continue(reply) => (reply, false),
                Outcome::Exit(reply) => (reply, true),
            };

            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;

            if exit {
                break;
            }
        }

        writer.flush().await?;
        Ok(())
    }

    /// Apply one command. Failures are reported in the reply, never returned.
    pub async fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Add { dish, quantity } => {
                let summary = match self.order.add(&dish, quantity) {
                    Ok(()) => view::order_summary(&self.order),
                    Err(OrderError::InvalidDish(dish)) => {
                        tracing::debug!(dish = %dish, "Add rejected");
                        format!("{}\n{}", view::NOT_ON_MENU, view::order_summary(&self.order))
                    }
                };
                Outcome::Continue(summary)
            }

            Command::Remove { dish } => {
                if self.order.remove(&dish).is_none() {
                    tracing::debug!(dish = %dish, "Nothing to remove");
                }
                Outcome::Continue(view::order_summary(&self.order))
            }

            Command::Clear => {
                self.order.clear();
                Outcome::Continue(view::order_summary(&self.order))
            }

            Command::Save => match self.store.save(&self.order).await {
                Ok(rows) => {
                    tracing::debug!(rows, line_items = self.order.len(), "Order saved from console");
                    Outcome::Continue(view::ORDER_SAVED.to_string())
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to save order");
                    Outcome::Continue(format!("Failed to save order: {err}"))
                }
            },

            Command::View => match self.store.list_all().await {
                Ok(rows) => Outcome::Continue(view::saved_orders_report(&rows)),
                Err(err) => {
                    tracing::error!(error = %err, "Failed to load saved orders");
                    Outcome::Continue(format!("Failed to load saved orders: {err}"))
                }
            },

            Command::Menu => Outcome::Continue(view::menu_listing(self.order.menu())),

            Command::Help => Outcome::Continue(view::HELP.to_string()),

            Command::Exit => Outcome::Exit(GOODBYE.to_string()),
        }
    }
}
