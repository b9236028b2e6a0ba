pub mod chat;
pub mod domain;
pub mod forms;
pub mod labels;
pub mod ports;
pub mod requests;
pub mod store;
pub mod view;

pub use chat::{ChatEntry, ChatLog, ChatRole};
pub use domain::{Material, MaterialKind, MaterialsListing, NewMaterial, Notice, NoticeKind, Profile};
pub use forms::{AddMaterialForm, FormError, ProfileEdits, QuestionInput};
pub use labels::type_label;
pub use ports::{
    Confirmation, DialogService, MaterialsGateway, PageView, PortError, PortResult,
    PromptResponse,
};
pub use requests::{RequestSlot, RequestTicket, SlotKind};
pub use store::MaterialsStore;
pub use view::{compute_stats, render_materials, MaterialCard, MaterialsPanel, StatsView};
