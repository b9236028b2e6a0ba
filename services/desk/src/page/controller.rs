//! services/desk/src/page/controller.rs
//!
//! The page controller: turns user actions into gateway calls and keeps the
//! store, the chat log, and the rendered page in step.
//!
//! The page lock is never held across a gateway call or a dialog, so several
//! actions may be in flight at once. Create and delete results are applied in
//! completion order. A list load is discarded when a newer load has already
//! been applied. Every question gets its own pending entry, and its answer
//! replaces that entry whenever it arrives.

use crate::page::notifications::Notifier;
use crate::page::state::{AppState, PageState};
use std::sync::Arc;
use study_desk_core::chat::APOLOGY_TEXT;
use study_desk_core::ports::{Confirmation, PortError, PromptResponse};
use study_desk_core::{
    compute_stats, render_materials, ChatEntry, Material, MaterialKind, NoticeKind, Profile,
    ProfileEdits, StatsView,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

pub const MATERIAL_SAVED: &str = "Material saved!";
pub const MATERIAL_SAVE_FAILED: &str = "Failed to save the material";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this material?";
pub const MATERIAL_DELETED: &str = "Material deleted";
pub const MATERIAL_DELETE_FAILED: &str = "Failed to delete the material";
pub const PROFILE_UPDATED: &str = "Profile updated";

/// How a user action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// Stopped before any request: invalid input or a declined confirmation.
    Aborted,
    /// The request failed; the user has been told where applicable.
    Failed,
    /// A newer result of the same kind was already applied; this one was dropped.
    Superseded,
}

pub struct PageController {
    app: Arc<AppState>,
    page: Mutex<PageState>,
    notifier: Notifier,
}

impl PageController {
    pub fn new(app: Arc<AppState>) -> Self {
        let notifier = Notifier::new(app.view.clone(), app.config.notice_ttl);
        let page = PageState::new(app.config.initial_profile.clone());
        Self {
            app,
            page: Mutex::new(page),
            notifier,
        }
    }

    /// Initial wiring: shows the profile and stats, then loads the materials.
    pub async fn start(&self) -> ActionOutcome {
        {
            let page = self.page.lock().await;
            self.app.view.render_profile(&page.profile);
            self.refresh_stats(&page);
        }
        self.load_materials().await
    }

    //=====================================================================================
    // Materials
    //=====================================================================================

    /// Replaces the store with the server's list. Failures are only logged.
    pub async fn load_materials(&self) -> ActionOutcome {
        let ticket = self.page.lock().await.list_requests.begin();

        let listing = match self.app.gateway.list_materials().await {
            Ok(listing) => listing,
            Err(e) => {
                error!("Failed to load materials: {}", e);
                return ActionOutcome::Failed;
            }
        };

        let mut page = self.page.lock().await;
        if !page.list_requests.accept(ticket) {
            debug!(
                "Discarding materials list {}: a newer list was already applied",
                ticket.generation()
            );
            return ActionOutcome::Superseded;
        }
        page.store.replace_all(listing.materials);
        page.subjects = listing.subjects;
        self.refresh_materials(&page);
        self.refresh_stats(&page);
        info!("Loaded {} materials.", page.store.len());
        ActionOutcome::Completed
    }

    pub async fn show_add_form(&self) {
        self.page.lock().await.add_form.show();
        self.app.view.set_add_form_visible(true);
    }

    pub async fn hide_add_form(&self) {
        self.page.lock().await.add_form.hide();
        self.app.view.set_add_form_visible(false);
    }

    /// Sets the add form's input fields.
    pub async fn fill_add_form(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        subject: impl Into<String>,
        kind: MaterialKind,
    ) {
        let mut page = self.page.lock().await;
        page.add_form.title = title.into();
        page.add_form.content = content.into();
        page.add_form.subject = subject.into();
        page.add_form.kind = kind;
    }

    /// Opens the add form and fills it through dialogs, one field at a time.
    pub async fn prompt_add_form(&self) {
        self.show_add_form().await;
        let (form, subjects) = {
            let page = self.page.lock().await;
            (page.add_form.clone(), page.subjects.clone())
        };

        let subject_question = if subjects.is_empty() {
            "Subject:".to_string()
        } else {
            format!("Subject ({}):", subjects.join(", "))
        };
        let dialogs = &self.app.dialogs;
        let title = dialogs.prompt("Title:", &form.title).await;
        let content = dialogs.prompt("Content:", &form.content).await;
        let subject = dialogs.prompt(&subject_question, &form.subject).await;
        let kind = dialogs
            .prompt("Type (lecture, book, homework, note):", form.kind.code())
            .await;

        let mut page = self.page.lock().await;
        if let PromptResponse::Submitted(title) = title {
            page.add_form.title = title;
        }
        if let PromptResponse::Submitted(content) = content {
            page.add_form.content = content;
        }
        if let PromptResponse::Submitted(subject) = subject {
            page.add_form.subject = subject;
        }
        if let PromptResponse::Submitted(code) = kind {
            page.add_form.kind = MaterialKind::from_code(code.trim());
        }
    }

    /// Validates the add form and creates the material.
    pub async fn submit_add_form(&self) -> ActionOutcome {
        let submission = self.page.lock().await.add_form.submission();
        let new_material = match submission {
            Ok(material) => material,
            Err(e) => {
                self.app.dialogs.alert(&e.to_string()).await;
                return ActionOutcome::Aborted;
            }
        };

        match self.app.gateway.create_material(&new_material).await {
            Ok(material) => {
                info!("Material {} saved.", material.id);
                {
                    let mut page = self.page.lock().await;
                    page.add_form.clear();
                    page.add_form.hide();
                    self.app.view.set_add_form_visible(false);
                    page.store.append(material);
                    self.refresh_materials(&page);
                    self.refresh_stats(&page);
                }
                self.notifier.notify(MATERIAL_SAVED, NoticeKind::Success);
                ActionOutcome::Completed
            }
            Err(e) => {
                log_failure("save material", &e);
                self.notifier.notify(MATERIAL_SAVE_FAILED, NoticeKind::Error);
                ActionOutcome::Failed
            }
        }
    }

    /// Deletes a material after the user confirms.
    pub async fn delete_material(&self, id: i64) -> ActionOutcome {
        if self.app.dialogs.confirm(DELETE_CONFIRMATION).await == Confirmation::Declined {
            debug!("Deletion of material {} declined.", id);
            return ActionOutcome::Aborted;
        }

        match self.app.gateway.delete_material(id).await {
            Ok(()) => {
                {
                    let mut page = self.page.lock().await;
                    if !page.store.remove_by_id(id) {
                        debug!("Material {} was not in the store.", id);
                    }
                    self.refresh_materials(&page);
                    self.refresh_stats(&page);
                }
                info!("Material {} deleted.", id);
                self.notifier.notify(MATERIAL_DELETED, NoticeKind::Success);
                ActionOutcome::Completed
            }
            Err(e) => {
                log_failure("delete material", &e);
                self.notifier.notify(MATERIAL_DELETE_FAILED, NoticeKind::Error);
                ActionOutcome::Failed
            }
        }
    }

    //=====================================================================================
    // Chat
    //=====================================================================================

    /// Puts an example question into the question input.
    pub async fn set_example(&self, question: &str) {
        self.set_question(question).await;
    }

    pub async fn set_question(&self, text: &str) {
        self.page.lock().await.question.set(text);
    }

    /// Submits the question input to the assistant.
    ///
    /// The user entry and a pending entry are shown right away. When the answer
    /// arrives the pending entry is replaced by the answer, or by an apology if
    /// the request failed. Answers to overlapping questions are appended in
    /// arrival order.
    pub async fn ask(&self) -> ActionOutcome {
        let taken = self.page.lock().await.question.take_question();
        let question = match taken {
            Ok(question) => question,
            Err(e) => {
                self.app.dialogs.alert(&e.to_string()).await;
                return ActionOutcome::Aborted;
            }
        };

        let ticket = {
            let mut page = self.page.lock().await;
            let user_entry = page.chat.push_user(question.clone()).clone();
            self.app.view.append_chat_entry(&user_entry);

            let ticket = page.chat_requests.begin();
            let pending = page.chat.push_pending(ticket).clone();
            self.app.view.append_chat_entry(&pending);
            self.scroll_chat(&mut page);
            ticket
        };

        let result = self.app.gateway.ask(&question).await;

        let mut page = self.page.lock().await;
        if !page.chat.remove_pending(ticket) {
            debug!(
                "Discarding answer {}: its pending entry is gone",
                ticket.generation()
            );
            return ActionOutcome::Superseded;
        }
        self.app.view.remove_chat_entry(ticket);

        let (entry, outcome) = match result {
            Ok(answer) => (
                page.chat.push_assistant(answer).clone(),
                ActionOutcome::Completed,
            ),
            Err(e) => {
                warn!("AI request failed: {}", e);
                (page.chat.push_error(APOLOGY_TEXT).clone(), ActionOutcome::Failed)
            }
        };
        self.app.view.append_chat_entry(&entry);
        self.scroll_chat(&mut page);
        self.refresh_stats(&page);
        outcome
    }

    //=====================================================================================
    // Profile and Statistics
    //=====================================================================================

    /// Asks for name, school and course in turn. Empty or cancelled replies keep
    /// the current value.
    pub async fn edit_profile(&self) -> ActionOutcome {
        let current = self.page.lock().await.profile.clone();
        let dialogs = &self.app.dialogs;
        let name = dialogs.prompt("Enter your name:", &current.name).await;
        let school = dialogs.prompt("Enter your school:", &current.school).await;
        let course = dialogs.prompt("Enter your course/grade:", &current.course).await;

        {
            let mut page = self.page.lock().await;
            page.profile.apply(ProfileEdits {
                name: name.into_option(),
                school: school.into_option(),
                course: course.into_option(),
            });
            self.app.view.render_profile(&page.profile);
        }
        self.notifier.notify(PROFILE_UPDATED, NoticeKind::Success);
        ActionOutcome::Completed
    }

    /// Recomputes and renders the statistics.
    pub async fn update_stats(&self) -> StatsView {
        let page = self.page.lock().await;
        self.refresh_stats(&page)
    }

    //=====================================================================================
    // Read Access
    //=====================================================================================

    pub async fn materials(&self) -> Vec<Material> {
        self.page.lock().await.store.to_vec()
    }

    pub async fn subjects(&self) -> Vec<String> {
        self.page.lock().await.subjects.clone()
    }

    pub async fn chat_entries(&self) -> Vec<ChatEntry> {
        self.page.lock().await.chat.entries().to_vec()
    }

    pub async fn chat_is_at_bottom(&self) -> bool {
        self.page.lock().await.chat.is_at_bottom()
    }

    pub async fn profile(&self) -> Profile {
        self.page.lock().await.profile.clone()
    }

    pub async fn add_form_visible(&self) -> bool {
        self.page.lock().await.add_form.is_visible()
    }

    pub async fn question_draft(&self) -> String {
        self.page.lock().await.question.draft().to_string()
    }

    //=====================================================================================
    // Rendering Helpers
    //=====================================================================================

    fn refresh_materials(&self, page: &PageState) {
        self.app.view.render_materials(&render_materials(&page.store));
    }

    fn refresh_stats(&self, page: &PageState) -> StatsView {
        let stats = compute_stats(&page.store, &page.chat);
        self.app.view.render_stats(&stats);
        stats
    }

    fn scroll_chat(&self, page: &mut PageState) {
        page.chat.scroll_to_bottom();
        self.app.view.scroll_chat_to_bottom();
    }
}

fn log_failure(action: &str, e: &PortError) {
    match e {
        PortError::Rejected(status) => warn!("Failed to {}: server answered '{}'", action, status),
        other => error!("Failed to {}: {}", action, other),
    }
}
