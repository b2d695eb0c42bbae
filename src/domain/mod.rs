mod approve_request;
mod header_info;
mod participant_id;
mod template_payload;

pub use approve_request::ApproveRequest;
pub use header_info::HeaderInfo;
pub use participant_id::ParticipantId;
pub use template_payload::{TemplateId, TemplatePayload, TemplateType};
