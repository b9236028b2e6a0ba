//! services/desk/src/adapters/terminal.rs
//!
//! Terminal implementations of the presentation ports: `PageView` prints the
//! rendered view models, `DialogService` asks questions on stdin.

use async_trait::async_trait;
use std::io::Write;
use study_desk_core::chat::{ChatEntry, ChatRole};
use study_desk_core::ports::{Confirmation, DialogService, PageView, PromptResponse};
use study_desk_core::view::{MaterialsPanel, StatsView, DELETE_LABEL};
use study_desk_core::{Notice, NoticeKind, Profile, RequestTicket};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

//=========================================================================================
// Console Input (shared by the command loop and the dialogs)
//=========================================================================================

pub struct TerminalConsole {
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Reads one line. `None` means stdin was closed.
    pub async fn read_line(&self) -> std::io::Result<Option<String>> {
        self.input.lock().await.next_line().await
    }

    async fn ask_line(&self, question: &str) -> Option<String> {
        print!("{} ", question);
        if let Err(e) = std::io::stdout().flush() {
            warn!("Failed to flush stdout: {}", e);
        }
        match self.read_line().await {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read from stdin: {}", e);
                None
            }
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DialogService for TerminalConsole {
    async fn alert(&self, message: &str) {
        println!("(!) {}", message);
    }

    async fn confirm(&self, message: &str) -> Confirmation {
        match self.ask_line(&format!("{} [y/N]", message)).await {
            Some(reply) if matches!(reply.trim(), "y" | "Y" | "yes") => Confirmation::Accepted,
            _ => Confirmation::Declined,
        }
    }

    /// An empty reply accepts the pre-filled value; closed input cancels.
    async fn prompt(&self, message: &str, current: &str) -> PromptResponse {
        match self.ask_line(&format!("{} [{}]:", message, current)).await {
            Some(reply) if reply.is_empty() => PromptResponse::Submitted(current.to_string()),
            Some(reply) => PromptResponse::Submitted(reply),
            None => PromptResponse::Cancelled,
        }
    }
}

//=========================================================================================
// Page Output
//=========================================================================================

#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

fn notice_tag(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
        NoticeKind::Info => "info",
    }
}

impl PageView for TerminalView {
    fn render_materials(&self, panel: &MaterialsPanel) {
        match panel {
            MaterialsPanel::Empty { headline, hint } => {
                println!("{}", headline);
                println!("{}", hint);
            }
            MaterialsPanel::Cards(cards) => {
                for card in cards {
                    println!("#{} {} [{}]", card.id, card.title, card.subject);
                    println!("    {}", card.content);
                    println!(
                        "    {} • {}    ({}: `delete {}`)",
                        card.type_label, card.date, DELETE_LABEL, card.delete.material_id
                    );
                }
            }
        }
    }

    fn append_chat_entry(&self, entry: &ChatEntry) {
        match entry.role {
            ChatRole::Error => println!("{}: (!) {}", entry.role.speaker(), entry.text),
            _ => println!("{}: {}", entry.role.speaker(), entry.text),
        }
    }

    fn remove_chat_entry(&self, marker: RequestTicket) {
        // Printed lines cannot be taken back.
        debug!("Pending entry {} resolved", marker.generation());
    }

    fn scroll_chat_to_bottom(&self) {}

    fn render_stats(&self, stats: &StatsView) {
        println!(
            "Materials: {} | Total materials: {} | Questions asked: {}",
            stats.materials_count, stats.total_materials, stats.total_questions
        );
    }

    fn set_add_form_visible(&self, visible: bool) {
        if visible {
            println!("Add-material form opened.");
        } else {
            println!("Add-material form closed.");
        }
    }

    fn render_profile(&self, profile: &Profile) {
        println!(
            "Profile: {} | {} | {}",
            profile.name, profile.school, profile.course
        );
    }

    fn show_notice(&self, notice: &Notice) {
        println!(
            "[{} {}] {}",
            notice.time_label(),
            notice_tag(notice.kind),
            notice.message
        );
    }

    fn dismiss_notice(&self, id: Uuid) {
        debug!("Notice {} expired", id);
    }
}
