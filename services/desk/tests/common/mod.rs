//! In-memory fakes for the controller ports.

#![allow(dead_code)]

use async_trait::async_trait;
use desk_lib::config::Config;
use desk_lib::page::{AppState, PageController};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use study_desk_core::ports::{
    Confirmation, DialogService, MaterialsGateway, PageView, PortError, PortResult, PromptResponse,
};
use study_desk_core::{
    ChatEntry, ChatRole, Material, MaterialKind, MaterialsListing, MaterialsPanel, NewMaterial,
    Notice, NoticeKind, Profile, RequestTicket, StatsView,
};
use tokio::sync::oneshot;
use uuid::Uuid;

pub fn material(id: i64, title: &str) -> Material {
    Material {
        id,
        title: title.to_string(),
        content: format!("Notes about {title}"),
        subject: "Physics".to_string(),
        kind: MaterialKind::Lecture,
        date: "03.10.2024 12:00".to_string(),
    }
}

pub fn listing(materials: Vec<Material>) -> MaterialsListing {
    MaterialsListing {
        materials,
        subjects: vec!["Physics".to_string(), "History".to_string()],
    }
}

//=========================================================================================
// Gateway
//=========================================================================================

type Replies<T> = Mutex<VecDeque<oneshot::Receiver<PortResult<T>>>>;

fn push_ready<T>(queue: &Replies<T>, result: PortResult<T>) {
    let (tx, rx) = oneshot::channel();
    let _ = tx.send(result);
    queue.lock().unwrap().push_back(rx);
}

fn push_deferred<T>(queue: &Replies<T>) -> oneshot::Sender<PortResult<T>> {
    let (tx, rx) = oneshot::channel();
    queue.lock().unwrap().push_back(rx);
    tx
}

async fn next_reply<T>(queue: &Replies<T>) -> PortResult<T> {
    let reply = queue.lock().unwrap().pop_front();
    match reply {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(PortError::Unexpected("reply dropped".to_string()))),
        None => Err(PortError::Unexpected("no scripted reply".to_string())),
    }
}

/// A gateway whose replies are scripted in advance, either ready or held back
/// until the test releases them.
#[derive(Default)]
pub struct FakeGateway {
    lists: Replies<MaterialsListing>,
    creates: Replies<Material>,
    deletes: Replies<()>,
    answers: Replies<String>,
    list_calls: AtomicUsize,
    created: Mutex<Vec<NewMaterial>>,
    deleted: Mutex<Vec<i64>>,
    questions: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn reply_list(&self, result: PortResult<MaterialsListing>) {
        push_ready(&self.lists, result);
    }

    pub fn defer_list(&self) -> oneshot::Sender<PortResult<MaterialsListing>> {
        push_deferred(&self.lists)
    }

    pub fn reply_create(&self, result: PortResult<Material>) {
        push_ready(&self.creates, result);
    }

    pub fn defer_create(&self) -> oneshot::Sender<PortResult<Material>> {
        push_deferred(&self.creates)
    }

    pub fn reply_delete(&self, result: PortResult<()>) {
        push_ready(&self.deletes, result);
    }

    pub fn defer_delete(&self) -> oneshot::Sender<PortResult<()>> {
        push_deferred(&self.deletes)
    }

    pub fn reply_answer(&self, result: PortResult<String>) {
        push_ready(&self.answers, result);
    }

    pub fn defer_answer(&self) -> oneshot::Sender<PortResult<String>> {
        push_deferred(&self.answers)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<NewMaterial> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<i64> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl MaterialsGateway for FakeGateway {
    async fn list_materials(&self) -> PortResult<MaterialsListing> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        next_reply(&self.lists).await
    }

    async fn create_material(&self, material: &NewMaterial) -> PortResult<Material> {
        self.created.lock().unwrap().push(material.clone());
        next_reply(&self.creates).await
    }

    async fn delete_material(&self, id: i64) -> PortResult<()> {
        self.deleted.lock().unwrap().push(id);
        next_reply(&self.deletes).await
    }

    async fn ask(&self, question: &str) -> PortResult<String> {
        self.questions.lock().unwrap().push(question.to_string());
        next_reply(&self.answers).await
    }
}

//=========================================================================================
// Dialogs
//=========================================================================================

/// Answers dialogs from queues. An empty queue declines or cancels.
#[derive(Default)]
pub struct ScriptedDialogs {
    confirmations: Mutex<VecDeque<Confirmation>>,
    prompts: Mutex<VecDeque<PromptResponse>>,
    alerts: Mutex<Vec<String>>,
    confirm_messages: Mutex<Vec<String>>,
    prompt_messages: Mutex<Vec<(String, String)>>,
}

impl ScriptedDialogs {
    pub fn confirm_with(&self, answer: Confirmation) {
        self.confirmations.lock().unwrap().push_back(answer);
    }

    pub fn prompt_with(&self, answer: PromptResponse) {
        self.prompts.lock().unwrap().push_back(answer);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn confirm_messages(&self) -> Vec<String> {
        self.confirm_messages.lock().unwrap().clone()
    }

    /// `(message, pre-filled value)` for every prompt shown.
    pub fn prompt_messages(&self) -> Vec<(String, String)> {
        self.prompt_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl DialogService for ScriptedDialogs {
    async fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    async fn confirm(&self, message: &str) -> Confirmation {
        self.confirm_messages
            .lock()
            .unwrap()
            .push(message.to_string());
        self.confirmations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Confirmation::Declined)
    }

    async fn prompt(&self, message: &str, current: &str) -> PromptResponse {
        self.prompt_messages
            .lock()
            .unwrap()
            .push((message.to_string(), current.to_string()));
        self.prompts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PromptResponse::Cancelled)
    }
}

//=========================================================================================
// View
//=========================================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Materials(MaterialsPanel),
    ChatAppended(ChatEntry),
    ChatRemoved(RequestTicket),
    ChatScrolled,
    Stats(StatsView),
    AddForm(bool),
    Profile(Profile),
    NoticeShown(Uuid, String, NoticeKind),
    NoticeDismissed(Uuid),
}

impl ViewEvent {
    pub fn is_chat(&self) -> bool {
        matches!(
            self,
            Self::ChatAppended(_) | Self::ChatRemoved(_) | Self::ChatScrolled
        )
    }
}

/// Records every call the controller makes on the page.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn chat_events(&self) -> Vec<ViewEvent> {
        self.events().into_iter().filter(ViewEvent::is_chat).collect()
    }

    pub fn last_panel(&self) -> Option<MaterialsPanel> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Materials(panel) => Some(panel),
            _ => None,
        })
    }

    pub fn last_stats(&self) -> Option<StatsView> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Stats(stats) => Some(stats),
            _ => None,
        })
    }

    /// Replays the chat calls to rebuild what the chat panel shows.
    pub fn chat_markup(&self) -> Vec<ChatEntry> {
        let mut shown: Vec<ChatEntry> = Vec::new();
        for event in self.events() {
            match event {
                ViewEvent::ChatAppended(entry) => shown.push(entry),
                ViewEvent::ChatRemoved(ticket) => shown.retain(|e| e.marker != Some(ticket)),
                _ => {}
            }
        }
        shown
    }

    pub fn rendered_user_entries(&self) -> usize {
        self.chat_markup()
            .iter()
            .filter(|e| e.role == ChatRole::User)
            .count()
    }

    /// Notices that were shown and not yet dismissed.
    pub fn visible_notices(&self) -> Vec<(String, NoticeKind)> {
        let mut visible: Vec<(Uuid, String, NoticeKind)> = Vec::new();
        for event in self.events() {
            match event {
                ViewEvent::NoticeShown(id, message, kind) => visible.push((id, message, kind)),
                ViewEvent::NoticeDismissed(id) => visible.retain(|(shown, _, _)| *shown != id),
                _ => {}
            }
        }
        visible.into_iter().map(|(_, m, k)| (m, k)).collect()
    }

    pub fn notices_shown(&self) -> Vec<(String, NoticeKind)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::NoticeShown(_, message, kind) => Some((message, kind)),
                _ => None,
            })
            .collect()
    }
}

impl PageView for RecordingView {
    fn render_materials(&self, panel: &MaterialsPanel) {
        self.record(ViewEvent::Materials(panel.clone()));
    }

    fn append_chat_entry(&self, entry: &ChatEntry) {
        self.record(ViewEvent::ChatAppended(entry.clone()));
    }

    fn remove_chat_entry(&self, marker: RequestTicket) {
        self.record(ViewEvent::ChatRemoved(marker));
    }

    fn scroll_chat_to_bottom(&self) {
        self.record(ViewEvent::ChatScrolled);
    }

    fn render_stats(&self, stats: &StatsView) {
        self.record(ViewEvent::Stats(*stats));
    }

    fn set_add_form_visible(&self, visible: bool) {
        self.record(ViewEvent::AddForm(visible));
    }

    fn render_profile(&self, profile: &Profile) {
        self.record(ViewEvent::Profile(profile.clone()));
    }

    fn show_notice(&self, notice: &Notice) {
        self.record(ViewEvent::NoticeShown(
            notice.id,
            notice.message.clone(),
            notice.kind,
        ));
    }

    fn dismiss_notice(&self, id: Uuid) {
        self.record(ViewEvent::NoticeDismissed(id));
    }
}

//=========================================================================================
// Harness
//=========================================================================================

pub struct Harness {
    pub controller: Arc<PageController>,
    pub gateway: Arc<FakeGateway>,
    pub dialogs: Arc<ScriptedDialogs>,
    pub view: Arc<RecordingView>,
}

pub fn harness() -> Harness {
    let gateway = Arc::new(FakeGateway::default());
    let dialogs = Arc::new(ScriptedDialogs::default());
    let view = Arc::new(RecordingView::default());
    let app_state = Arc::new(AppState {
        gateway: gateway.clone(),
        dialogs: dialogs.clone(),
        view: view.clone(),
        config: Arc::new(Config::default()),
    });
    Harness {
        controller: Arc::new(PageController::new(app_state)),
        gateway,
        dialogs,
        view,
    }
}

/// Yields to other tasks until `condition` holds.
pub async fn wait_until<F: Fn() -> bool>(condition: F) {
    for _ in 0..1_000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition was not reached");
}
